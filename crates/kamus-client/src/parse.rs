use kamus_types::LookupResult;
use serde_json::Value;

use crate::error::LookupError;

/// Turn a raw payload into a `LookupResult`. The only hard requirement on
/// the shape is an `entries` array; everything nested is optional-safe and
/// defaults to empty. No side effects.
pub fn parse(raw: &Value) -> Result<LookupResult, LookupError> {
    let Some(object) = raw.as_object() else {
        return Err(LookupError::InvalidFormat);
    };

    if !object.get("entries").is_some_and(Value::is_array) {
        return Err(LookupError::InvalidFormat);
    }

    serde_json::from_value(raw.clone()).map_err(|_| LookupError::InvalidFormat)
}
