use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{AdviceResult, FoodRecord};

/// Load the nutrition dataset, one `FoodRecord` per row. Extra columns are
/// ignored; missing columns and empty cells fall back to sentinel values.
pub fn load_records(path: &Path) -> Result<Vec<FoodRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open dataset {}", path.display()))?;
    read_records(file).with_context(|| format!("cannot parse dataset {}", path.display()))
}

fn read_records<R: io::Read>(reader: R) -> Result<Vec<FoodRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let mut record: FoodRecord = row?;
        normalize(&mut record);
        records.push(record);
    }
    Ok(records)
}

// Empty cells come out of csv as "", not as an absent field, so the serde
// defaults never see them.
fn normalize(record: &mut FoodRecord) {
    if record.name.trim().is_empty() {
        record.name = "Unknown Food".to_string();
    }
    for field in [
        &mut record.calories,
        &mut record.protein,
        &mut record.carbs,
        &mut record.fat,
    ] {
        if field.trim().is_empty() {
            *field = "NA".to_string();
        }
    }
}

/// Write the accumulated advice entries under the same "Food Name" /
/// "Advice" headers the service speaks.
pub fn write_results(path: &Path, results: &[AdviceResult]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create output file {}", path.display()))?;
    write_to(file, results)
}

fn write_to<W: io::Write>(writer: W, results: &[AdviceResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}
