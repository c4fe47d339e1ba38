use sea_orm::JsonValue;
use serde::de::DeserializeOwned;

use crate::{
    model::user::{BloodGroup, Role},
    server::error::AppError,
};

/// Decodes a JSON column into its typed form.
///
/// # Returns
/// - `Ok(T)` - Successfully decoded value
/// - `Err(AppError::JsonErr)` - Stored document does not match the expected shape
pub fn parse_json_column<T: DeserializeOwned>(value: JsonValue) -> Result<T, AppError> {
    Ok(serde_json::from_value(value)?)
}

/// Parses a role stored in the user table.
///
/// # Returns
/// - `Ok(Role)` - Known role
/// - `Err(AppError::InternalError)` - Stored value is not a known role
pub fn parse_stored_role(value: &str) -> Result<Role, AppError> {
    Role::parse(value)
        .ok_or_else(|| AppError::InternalError(format!("Unknown role '{}' in database", value)))
}

/// Parses an optional blood group stored in the user table.
pub fn parse_stored_blood_group(value: Option<&str>) -> Result<Option<BloodGroup>, AppError> {
    value
        .map(|v| {
            BloodGroup::parse(v).ok_or_else(|| {
                AppError::InternalError(format!("Unknown blood group '{}' in database", v))
            })
        })
        .transpose()
}
