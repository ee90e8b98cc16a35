use besttimes_core::error::{ScoreError, ScoreResult};
use besttimes_core::SchemaValidator;

pub fn run(validator: &SchemaValidator) -> ScoreResult<()> {
    let schema = serde_json::to_string_pretty(&validator.json_schema())
        .map_err(|e| ScoreError::MalformedData(e.to_string()))?;
    println!("{}", schema);
    Ok(())
}
