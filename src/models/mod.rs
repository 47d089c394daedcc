use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn unknown_food() -> String {
    "Unknown Food".to_string()
}

fn not_available() -> String {
    "NA".to_string()
}

/// One row of the nutrition dataset. Nutrient fields keep whatever the CSV
/// held ("250", "3.5", "NA"); missing columns fall back to sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(rename = "Food Name", alias = "Food", default = "unknown_food")]
    pub name: String,
    #[serde(rename = "Calories", default = "not_available")]
    pub calories: String,
    #[serde(rename = "Protein", default = "not_available")]
    pub protein: String,
    #[serde(rename = "Carbs", default = "not_available")]
    pub carbs: String,
    #[serde(rename = "Fat", default = "not_available")]
    pub fat: String,
}

impl FoodRecord {
    /// JSON object embedded in the prompt. Numeric-looking nutrient values
    /// become JSON numbers so the model sees them the way the dataset
    /// meant them.
    pub fn as_prompt_item(&self) -> Value {
        json!({
            "Food Name": self.name,
            "Calories": nutrient_value(&self.calories),
            "Protein": nutrient_value(&self.protein),
            "Carbs": nutrient_value(&self.carbs),
            "Fat": nutrient_value(&self.fat),
        })
    }
}

fn nutrient_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(n) {
            return Value::Number(number);
        }
    }
    Value::from(raw)
}

/// One advice entry as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    #[serde(rename = "Food Name")]
    pub food_name: String,
    #[serde(rename = "Advice")]
    pub advice: String,
}

/// Terminal state of one batch.
#[derive(Debug, Clone, Serialize)]
pub enum BatchStatus {
    Succeeded { items: usize },
    Exhausted { attempts: u32, last_error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub index: usize,
    /// First dataset row covered by this batch.
    pub start: usize,
    /// Last dataset row covered by this batch, inclusive.
    pub end: usize,
    pub status: BatchStatus,
}

/// Final output of a run: every parsed advice entry in input batch order,
/// plus what happened to each batch.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub results: Vec<AdviceResult>,
    pub batches: Vec<BatchReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_nutrients_become_numbers() {
        let record = FoodRecord {
            name: "Oats".to_string(),
            calories: "389".to_string(),
            protein: "16.9".to_string(),
            carbs: "66".to_string(),
            fat: "NA".to_string(),
        };

        let item = record.as_prompt_item();
        assert_eq!(item["Food Name"], "Oats");
        assert_eq!(item["Calories"], Value::from(389));
        assert_eq!(item["Protein"], Value::from(16.9));
        assert_eq!(item["Fat"], "NA");
    }

    #[test]
    fn advice_result_round_trips_with_service_keys() {
        let result = AdviceResult {
            food_name: "Oats".to_string(),
            advice: "A solid breakfast choice.".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Food Name"], "Oats");
        assert_eq!(value["Advice"], "A solid breakfast choice.");

        let back: AdviceResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
