use serde_json::Value;

use crate::models::FoodRecord;

/// Build the single request text for a batch. The model is asked for one
/// JSON object per item, under the exact keys the parser looks up later,
/// with the batch embedded as a pretty-printed JSON array so it can echo
/// the names back.
pub fn build_prompt(batch: &[FoodRecord]) -> String {
    let items: Vec<Value> = batch.iter().map(FoodRecord::as_prompt_item).collect();
    let list = Value::Array(items);

    format!(
        "You are a nutrition expert.\n\
         Analyze the following list of foods.\n\
         \n\
         For EACH item return JSON in this format:\n\
         {{\n\
             \"Food Name\": \"<name>\",\n\
             \"Advice\": \"<2-3 sentence health suggestion>\"\n\
         }}\n\
         \n\
         Return all items together as one JSON array.\n\
         \n\
         Here is the list:\n\
         {:#}",
        list
    )
}
