//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{BloodGroup, RegisterUserDto, Role, UpdateUserDto, UserDto, UserFilterQuery},
    server::{
        error::AppError,
        util::{
            parse::{parse_json_column, parse_stored_blood_group, parse_stored_role},
            validation::{
                parse_blood_group, parse_role, require, validate_country_code, validate_email,
                validate_phone,
            },
        },
    },
};

const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Registered user.
///
/// The password hash is kept on the domain model for credential checks but never
/// leaves the server: `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub country_code: String,
    pub phone: String,
    pub role: Role,
    pub has_pet: bool,
    pub blood_group: Option<BloodGroup>,
    pub occupation: Option<String>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            country_code: self.country_code,
            phone: self.phone,
            role: self.role,
            has_pet: self.has_pet,
            blood_group: self.blood_group,
            occupation: self.occupation,
            interests: self.interests,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - Stored role or blood group is unknown
    /// - `Err(AppError::JsonErr)` - Stored interests are not a string array
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            role: parse_stored_role(&entity.role)?,
            blood_group: parse_stored_blood_group(entity.blood_group.as_deref())?,
            interests: parse_json_column(entity.interests)?,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            country_code: entity.country_code,
            phone: entity.phone,
            has_pet: entity.has_pet,
            occupation: entity.occupation,
            created_at: entity.created_at,
        })
    }
}

/// Validated registration input. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub password: String,
    pub country_code: String,
    pub phone: String,
    pub role: Role,
    pub has_pet: bool,
    pub blood_group: Option<BloodGroup>,
    pub occupation: Option<String>,
    pub interests: Vec<String>,
}

impl RegisterUserParam {
    /// Validates a registration request and fills in defaults.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Every field passed validation
    /// - `Err(AppError::BadRequest)` - First failing field, with its message
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        require("First name", &dto.first_name)?;
        require("Last name", &dto.last_name)?;
        require("Password", &dto.password)?;
        require("Phone number", &dto.phone)?;
        validate_phone(&dto.phone)?;

        let email = normalize_email(dto.email)?;
        let country_code = dto
            .country_code
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
        validate_country_code(&country_code)?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email,
            password: dto.password,
            country_code,
            phone: dto.phone,
            role: dto.role.as_deref().map(parse_role).transpose()?.unwrap_or_default(),
            has_pet: dto.has_pet.unwrap_or(false),
            blood_group: dto.blood_group.as_deref().map(parse_blood_group).transpose()?,
            occupation: normalize_occupation(dto.occupation),
            interests: dto.interests.unwrap_or_default(),
        })
    }
}

/// Validated fields for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub country_code: String,
    pub phone: String,
    pub role: Role,
    pub has_pet: bool,
    pub blood_group: Option<BloodGroup>,
    pub occupation: Option<String>,
    pub interests: Vec<String>,
}

/// Partial profile update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub role: Option<Role>,
    pub has_pet: Option<bool>,
    pub blood_group: Option<BloodGroup>,
    pub occupation: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl UpdateUserParam {
    /// Validates each field that is present in the update request.
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if let Some(first_name) = &dto.first_name {
            require("First name", first_name)?;
        }
        if let Some(last_name) = &dto.last_name {
            require("Last name", last_name)?;
        }
        if let Some(phone) = &dto.phone {
            validate_phone(phone)?;
        }
        if let Some(country_code) = &dto.country_code {
            validate_country_code(country_code)?;
        }

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: normalize_email(dto.email)?,
            phone: dto.phone,
            country_code: dto.country_code,
            role: dto.role.as_deref().map(parse_role).transpose()?,
            has_pet: dto.has_pet,
            blood_group: dto.blood_group.as_deref().map(parse_blood_group).transpose()?,
            occupation: normalize_occupation(dto.occupation),
            interests: dto.interests,
        })
    }
}

/// Optional filters for listing users; all present filters must match.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub has_pet: Option<bool>,
    pub blood_group: Option<BloodGroup>,
}

impl UserFilter {
    pub fn from_query(query: UserFilterQuery) -> Result<Self, AppError> {
        Ok(Self {
            role: query.role.as_deref().map(parse_role).transpose()?,
            has_pet: query.has_pet,
            blood_group: query.blood_group.as_deref().map(parse_blood_group).transpose()?,
        })
    }
}

/// Blank emails count as absent; anything else must match the email pattern.
fn normalize_email(email: Option<String>) -> Result<Option<String>, AppError> {
    match email.map(|e| e.trim().to_string()) {
        Some(email) if email.is_empty() => Ok(None),
        Some(email) => {
            validate_email(&email)?;
            Ok(Some(email))
        }
        None => Ok(None),
    }
}

fn normalize_occupation(occupation: Option<String>) -> Option<String> {
    occupation
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
}
