//! Turn the process input into a [ScoreRecord].
//!
//! Two forms are accepted: exactly [POSITIONAL_ARITY] command line arguments, or a JSON object on
//! stdin. Both are lowered to a JSON object keyed by wire name and then go through the same
//! validation.
use std::io::Read;

use serde_json::{Map, Value};

use prdscore_payloads::{ScoreRecord, ValidationError};

pub const POSITIONAL_ARITY: usize = 11;

/// Wire names in positional order.
const FIELD_ORDER: [&str; POSITIONAL_ARITY] = [
    "prdDocName",
    "prdLink",
    "submitter",
    "businessLine",
    "productScore",
    "backendScore",
    "frontendScore",
    "qaScore",
    "designScore",
    "globalScore",
    "globalLevel",
];

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unable to read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error("stdin is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("{0} must be a string")]
    NotAString(&'static str),

    #[error("{field} is not a number: {value}")]
    NotANumber { field: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, PartialEq)]
pub enum InputSource {
    Positional(Vec<String>),
    Json(String),
}

impl InputSource {
    /// Pick the input form. Stdin is only read when the argument count doesn't match the
    /// positional form.
    pub fn from_args<R: Read>(args: Vec<String>, mut stdin: R) -> Result<InputSource, InputError> {
        if args.len() == POSITIONAL_ARITY {
            return Ok(InputSource::Positional(args));
        }

        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        Ok(InputSource::Json(text))
    }

    pub fn resolve(&self) -> Result<ScoreRecord, InputError> {
        let fields = match self {
            InputSource::Positional(args) => positional_fields(args),
            InputSource::Json(text) => json_fields(text)?,
        };

        let record = record_from_fields(&fields)?;
        record.validate()?;
        Ok(record)
    }
}

fn positional_fields(args: &[String]) -> Map<String, Value> {
    FIELD_ORDER
        .iter()
        .zip(args.iter())
        .map(|(name, arg)| (name.to_string(), Value::String(arg.clone())))
        .collect()
}

fn json_fields(text: &str) -> Result<Map<String, Value>, InputError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(InputError::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Null counts as absent.
fn lookup<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Option<&'a Value> {
    fields.get(field).filter(|v| !v.is_null())
}

fn text(value: &Value, field: &'static str) -> Result<String, InputError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(InputError::NotAString(field)),
    }
}

/// Numbers pass through; strings are parsed. Anything else, booleans included, is rejected.
fn number(value: &Value, field: &'static str) -> Result<f64, InputError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| InputError::NotANumber {
        field,
        value: value.to_string(),
    })
}

fn required_text(fields: &Map<String, Value>, field: &'static str) -> Result<String, InputError> {
    let value = lookup(fields, field).ok_or(InputError::MissingField(field))?;
    text(value, field)
}

fn required_number(fields: &Map<String, Value>, field: &'static str) -> Result<f64, InputError> {
    let value = lookup(fields, field).ok_or(InputError::MissingField(field))?;
    number(value, field)
}

fn record_from_fields(fields: &Map<String, Value>) -> Result<ScoreRecord, InputError> {
    let global_score = match lookup(fields, "globalScore") {
        Some(v) => number(v, "globalScore")?,
        None => 0.0,
    };
    let global_level = match lookup(fields, "globalLevel") {
        Some(v) => text(v, "globalLevel")?,
        None => String::new(),
    };

    Ok(ScoreRecord {
        document_name: required_text(fields, "prdDocName")?,
        document_link: required_text(fields, "prdLink")?,
        submitter: required_text(fields, "submitter")?,
        business_line: required_text(fields, "businessLine")?,
        product_score: required_number(fields, "productScore")?,
        backend_score: required_number(fields, "backendScore")?,
        frontend_score: required_number(fields, "frontendScore")?,
        qa_score: required_number(fields, "qaScore")?,
        design_score: required_number(fields, "designScore")?,
        global_score,
        global_level,
    })
}
