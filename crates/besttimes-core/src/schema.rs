use crate::config::Config;
use crate::consts::{BUCKET_FIELDS, COUNTER_FIELDS, SCHEMA_VERSION};
use crate::level::Level;
use serde_json::{json, Map, Value};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

const ROOT_FIELDS: [&str; 3] = ["Credentials", "Server", "Local"];
const REGION_FIELDS: [&str; 2] = ["Server", "Local"];
const CREDENTIAL_FIELDS: [&str; 5] = ["Version", "UserID", "UserName", "Token", "Hash"];

/// First place a document departs from the score schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

impl SchemaViolation {
    fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: if path.is_empty() {
                "<root>".to_string()
            } else {
                path.to_string()
            },
            reason: reason.into(),
        }
    }
}

type Check<T> = Result<T, SchemaViolation>;

/// Structural validator for score documents.
///
/// The schema is closed: every object must carry exactly its known fields.
/// Counters are checked for type only (non-negative integers); numeric
/// invariants between them are left to [`crate::audit`].
///
/// Build one per process and pass it by reference.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    version: u64,
    levels: Vec<Level>,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self {
            version: u64::from(SCHEMA_VERSION),
            levels: Level::iter().collect(),
        }
    }
}

impl SchemaValidator {
    pub fn new(config: &Config) -> Self {
        debug!("Schema validator pinned to version {}", config.schema_version);
        Self {
            version: u64::from(config.schema_version),
            ..Self::default()
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn validate(&self, doc: &Value) -> Check<()> {
        let root = expect_object(doc, "", &ROOT_FIELDS)?;

        self.validate_credentials(&root["Credentials"], "Credentials")?;
        for region in REGION_FIELDS {
            self.validate_region(&root[region], region)?;
        }
        Ok(())
    }

    pub fn is_valid(&self, doc: &Value) -> bool {
        self.validate(doc).is_ok()
    }

    fn validate_credentials(&self, value: &Value, path: &str) -> Check<()> {
        let creds = expect_object(value, path, &CREDENTIAL_FIELDS)?;

        let version_path = join(path, "Version");
        let version = expect_uint(&creds["Version"], &version_path)?;
        if version != self.version {
            return Err(SchemaViolation::new(
                &version_path,
                format!("unsupported version {}, expected {}", version, self.version),
            ));
        }

        expect_uint(&creds["UserID"], &join(path, "UserID"))?;
        for field in ["UserName", "Token", "Hash"] {
            expect_string(&creds[field], &join(path, field))?;
        }
        Ok(())
    }

    fn validate_region(&self, value: &Value, path: &str) -> Check<()> {
        let names: Vec<&str> = self.levels.iter().map(|l| l.name()).collect();
        let region = expect_object(value, path, &names)?;

        for name in names {
            self.validate_level(&region[name], &join(path, name), name)?;
        }
        Ok(())
    }

    fn validate_level(&self, value: &Value, path: &str, name: &str) -> Check<()> {
        let level = expect_object(value, path, &["Level", "Hint", "Clean"])?;

        let tag_path = join(path, "Level");
        let tag = expect_string(&level["Level"], &tag_path)?;
        if tag != name {
            return Err(SchemaViolation::new(
                &tag_path,
                format!("level tag {:?} stored under {:?}", tag, name),
            ));
        }

        for bucket in BUCKET_FIELDS {
            let bucket_path = join(path, bucket);
            let counters = expect_object(&level[bucket], &bucket_path, &COUNTER_FIELDS)?;
            for field in COUNTER_FIELDS {
                expect_uint(&counters[field], &join(&bucket_path, field))?;
            }
        }
        Ok(())
    }

    /// The same contract as a draft-07 JSON Schema, for clients that
    /// validate with a schema library.
    pub fn json_schema(&self) -> Value {
        let level_props: Map<String, Value> = self
            .levels
            .iter()
            .map(|l| (l.name().to_string(), json!({ "$ref": "#/definitions/Level" })))
            .collect();
        let level_names: Vec<&str> = self.levels.iter().map(|l| l.name()).collect();
        let counter = json!({ "type": "integer", "minimum": 0 });

        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "SudokuScores",
            "type": "object",
            "required": ROOT_FIELDS,
            "properties": {
                "Credentials": {
                    "type": "object",
                    "required": CREDENTIAL_FIELDS,
                    "properties": {
                        "Version": { "type": "integer", "enum": [self.version] },
                        "UserID": { "type": "integer", "minimum": 0 },
                        "UserName": { "type": "string" },
                        "Token": { "type": "string" },
                        "Hash": { "type": "string" }
                    },
                    "additionalProperties": false
                },
                "Server": { "$ref": "#/definitions/Region" },
                "Local": { "$ref": "#/definitions/Region" }
            },
            "additionalProperties": false,
            "definitions": {
                "Region": {
                    "type": "object",
                    "required": level_names,
                    "properties": level_props,
                    "additionalProperties": false
                },
                "Level": {
                    "type": "object",
                    "required": ["Level", "Hint", "Clean"],
                    "properties": {
                        "Level": { "type": "string", "enum": level_names },
                        "Hint": { "$ref": "#/definitions/Times" },
                        "Clean": { "$ref": "#/definitions/Times" }
                    },
                    "additionalProperties": false
                },
                "Times": {
                    "type": "object",
                    "required": COUNTER_FIELDS,
                    "properties": {
                        "Games": counter,
                        "Fastest": counter,
                        "TotalTime": counter,
                        "TimedOut": counter
                    },
                    "additionalProperties": false
                }
            }
        })
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

/// Checks `value` is an object holding exactly `fields`.
fn expect_object<'a>(value: &'a Value, path: &str, fields: &[&str]) -> Check<&'a Map<String, Value>> {
    let map = value
        .as_object()
        .ok_or_else(|| SchemaViolation::new(path, format!("expected object, found {}", kind(value))))?;

    if let Some(missing) = fields.iter().find(|f| !map.contains_key(**f)) {
        return Err(SchemaViolation::new(
            &join(path, missing),
            "missing required field",
        ));
    }
    if let Some(extra) = map.keys().find(|k| !fields.contains(&k.as_str())) {
        return Err(SchemaViolation::new(&join(path, extra), "unexpected field"));
    }
    Ok(map)
}

fn expect_uint(value: &Value, path: &str) -> Check<u64> {
    value.as_u64().ok_or_else(|| {
        SchemaViolation::new(
            path,
            format!("expected non-negative integer, found {}", kind(value)),
        )
    })
}

fn expect_string<'a>(value: &'a Value, path: &str) -> Check<&'a str> {
    value
        .as_str()
        .ok_or_else(|| SchemaViolation::new(path, format!("expected string, found {}", kind(value))))
}

fn kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
