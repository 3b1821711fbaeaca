//! crates/dash_io/src/schema.rs
//!
//! JSON Schema (draft-07) check of the report body before the typed decode.
//! The schema pins types and non-negative counts; value ranges (shares in
//! [0,1], ordering of `daily`) are reported by `validate`, not rejected here.

use serde_json::Value;

use crate::LoadError;

/// Embedded copy of `schemas/analysis.schema.json`.
pub const ANALYSIS_SCHEMA: &str = include_str!("../../../schemas/analysis.schema.json");

/// Validate `instance` against the report schema; first violation wins.
#[cfg(feature = "schemaval")]
pub fn validate_value(instance: &Value) -> Result<(), LoadError> {
    use jsonschema::JSONSchema;

    let schema: Value = serde_json::from_str(ANALYSIS_SCHEMA).map_err(|e| LoadError::Schema {
        pointer: "/".into(),
        msg: format!("embedded schema is not JSON: {e}"),
    })?;
    let compiled = JSONSchema::compile(&schema).map_err(|e| LoadError::Schema {
        pointer: "/".into(),
        msg: format!("embedded schema does not compile: {e}"),
    })?;

    if let Err(mut errors) = compiled.validate(instance) {
        if let Some(first) = errors.next() {
            let pointer = first.instance_path.to_string();
            return Err(LoadError::Schema {
                pointer: if pointer.is_empty() { "/".into() } else { pointer },
                msg: first.to_string(),
            });
        }
    }
    Ok(())
}

/// Schema checks are compiled out; accept everything and let serde decide.
#[cfg(not(feature = "schemaval"))]
pub fn validate_value(_instance: &Value) -> Result<(), LoadError> {
    Ok(())
}

#[cfg(test)]
#[cfg(feature = "schemaval")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_report_passes() {
        let v = json!({ "scenarios": {}, "daily": [] });
        assert!(validate_value(&v).is_ok());
    }

    #[test]
    fn negative_votes_rejected_with_pointer() {
        let v = json!({
            "scenarios": { "A": { "total": 1, "top": [{ "name": "X", "votes": -1, "share": 0.1 }] } },
            "daily": []
        });
        match validate_value(&v) {
            Err(LoadError::Schema { pointer, .. }) => assert_eq!(pointer, "/scenarios/A/top/0/votes"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_daily_rejected() {
        let v = json!({ "scenarios": {} });
        assert!(matches!(validate_value(&v), Err(LoadError::Schema { .. })));
    }
}
