//! Field validation for user and society input.
//!
//! Every failure is an `AppError::BadRequest` carrying the message returned to the
//! client.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    model::{
        society::{FlatStatus, OwnershipType, UnitType},
        user::{BloodGroup, Role},
    },
    server::error::AppError,
};

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static COUNTRY_CODE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^[0-9]{10}$")
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

fn country_code_re() -> &'static Regex {
    COUNTRY_CODE_RE.get_or_init(|| {
        Regex::new(r"^\+[0-9]{1,4}$")
            .unwrap_or_else(|error| panic!("country code regex failed to compile: {error}"))
    })
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Rejects empty or whitespace-only values, naming the field in the message.
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if !phone_re().is_match(phone) {
        return Err(AppError::BadRequest(
            "Phone number must be exactly 10 digits".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_country_code(code: &str) -> Result<(), AppError> {
    if !country_code_re().is_match(code) {
        return Err(AppError::BadRequest(
            "Country code must start with '+' and be up to 4 digits".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if !email_re().is_match(email) {
        return Err(AppError::BadRequest(
            "Email must be a valid email address".to_string(),
        ));
    }
    Ok(())
}

pub fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::parse(value)
        .ok_or_else(|| AppError::BadRequest(r#"Role must be either "admin" or "resident""#.into()))
}

pub fn parse_blood_group(value: &str) -> Result<BloodGroup, AppError> {
    BloodGroup::parse(value).ok_or_else(|| AppError::BadRequest("Invalid blood group".to_string()))
}

pub fn parse_unit_type(value: &str) -> Result<UnitType, AppError> {
    UnitType::parse(value).ok_or_else(|| {
        AppError::BadRequest(r#"Unit type must be either "Flat" or "Shop""#.to_string())
    })
}

pub fn parse_flat_status(value: &str) -> Result<FlatStatus, AppError> {
    FlatStatus::parse(value).ok_or_else(|| {
        AppError::BadRequest(r#"Status must be either "Available" or "Not Available""#.to_string())
    })
}

pub fn parse_ownership(value: &str) -> Result<OwnershipType, AppError> {
    OwnershipType::parse(value).ok_or_else(|| {
        AppError::BadRequest(r#"Type must be either "Owner" or "Rent""#.to_string())
    })
}
