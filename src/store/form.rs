//! Draft merge and diff helpers

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Overlay the fields of `patch` onto `draft`.
///
/// Keys the entity does not know are ignored; a value of the wrong type
/// rejects the whole patch.
pub fn merge_patch<E>(draft: &E, patch: &Value) -> AppResult<E>
where
    E: Serialize + DeserializeOwned,
{
    let Value::Object(fields) = patch else {
        return Err(AppError::Validation("Draft update must be an object of fields".to_string()));
    };

    let mut current = serde_json::to_value(draft)?;
    let Value::Object(target) = &mut current else {
        return Err(AppError::Internal("Draft does not serialize to an object".to_string()));
    };
    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }

    serde_json::from_value(current).map_err(|e| AppError::Validation(format!("Invalid field value: {}", e)))
}

/// Top-level wire field names whose values differ between `before` and `after`
pub fn diff_fields<E: Serialize>(before: &E, after: &E) -> Vec<String> {
    let (Ok(Value::Object(before)), Ok(Value::Object(after))) =
        (serde_json::to_value(before), serde_json::to_value(after))
    else {
        return Vec::new();
    };

    let mut changed: Vec<String> = after
        .iter()
        .filter(|(key, value)| before.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    changed.extend(
        before
            .keys()
            .filter(|key| !after.contains_key(key.as_str()))
            .cloned(),
    );
    changed.sort();
    changed
}
