use serde_json::Value;

use crate::error::AdviceError;
use crate::models::AdviceResult;

/// Pull a JSON array of advice objects out of the raw model reply. Tries a
/// direct parse first, then falls back to the substring between the first
/// `[` and the last `]`, which tolerates prose and markdown fences around
/// the array.
pub fn parse_advice(text: &str) -> Result<Vec<AdviceResult>, AdviceError> {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => parse_bracket_slice(text)?,
    };

    let items = value.as_array().ok_or(AdviceError::MissingArray)?;
    items.iter().map(parse_item).collect()
}

fn parse_bracket_slice(text: &str) -> Result<Value, AdviceError> {
    let start = text.find('[').ok_or(AdviceError::MissingArray)?;
    let end = text.rfind(']').ok_or(AdviceError::MissingArray)?;
    if end < start {
        return Err(AdviceError::MissingArray);
    }
    serde_json::from_str(&text[start..=end]).map_err(|e| AdviceError::InvalidJson(e.to_string()))
}

fn parse_item(item: &Value) -> Result<AdviceResult, AdviceError> {
    let food_name = expect_str(item, "Food Name")?;
    let advice = expect_str(item, "Advice")?;
    Ok(AdviceResult { food_name, advice })
}

fn expect_str(item: &Value, key: &'static str) -> Result<String, AdviceError> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(AdviceError::MissingKey(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_ARRAY: &str = r#"[
        {"Food Name": "Oats", "Advice": "A fine breakfast."},
        {"Food Name": "Bacon", "Advice": "Keep portions small."}
    ]"#;

    #[test]
    fn parses_a_plain_json_array() {
        let results = parse_advice(PLAIN_ARRAY).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].food_name, "Oats");
        assert_eq!(results[0].advice, "A fine breakfast.");
        assert_eq!(results[1].food_name, "Bacon");
    }

    #[test]
    fn preserves_service_order() {
        let results = parse_advice(PLAIN_ARRAY).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.food_name.as_str()).collect();
        assert_eq!(names, vec!["Oats", "Bacon"]);
    }

    #[test]
    fn tolerates_markdown_fences() {
        let text = format!("Here you go:\n```json\n{}\n```\nEnjoy!", PLAIN_ARRAY);
        let results = parse_advice(&text).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn tolerates_surrounding_prose() {
        let text = format!("Sure! The analysis:\n{}\nLet me know if you need more.", PLAIN_ARRAY);
        let results = parse_advice(&text).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn fails_when_no_brackets_present() {
        assert!(matches!(
            parse_advice("I cannot help with that."),
            Err(AdviceError::MissingArray)
        ));
    }

    #[test]
    fn fails_on_unbalanced_brackets() {
        assert!(matches!(
            parse_advice("[{\"Food Name\": \"Oats\""),
            Err(AdviceError::MissingArray)
        ));
    }

    #[test]
    fn fails_when_brackets_are_inverted() {
        assert!(matches!(
            parse_advice("] nothing useful ["),
            Err(AdviceError::MissingArray)
        ));
    }

    #[test]
    fn fails_on_garbage_between_brackets() {
        assert!(matches!(
            parse_advice("[not json at all]"),
            Err(AdviceError::InvalidJson(_))
        ));
    }

    #[test]
    fn a_top_level_object_is_not_an_array() {
        assert!(matches!(
            parse_advice(r#"{"Food Name": "Oats", "Advice": "Fine."}"#),
            Err(AdviceError::MissingArray)
        ));
    }

    #[test]
    fn fails_on_missing_advice_key() {
        let text = r#"[{"Food Name": "Oats"}]"#;
        assert!(matches!(
            parse_advice(text),
            Err(AdviceError::MissingKey("Advice"))
        ));
    }

    #[test]
    fn fails_on_non_string_name() {
        let text = r#"[{"Food Name": 42, "Advice": "Fine."}]"#;
        assert!(matches!(
            parse_advice(text),
            Err(AdviceError::MissingKey("Food Name"))
        ));
    }
}
