//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user first name.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default test user last name.
pub const DEFAULT_LAST_NAME: &str = "Resident";

/// Default test user phone number.
pub const DEFAULT_PHONE: &str = "9876543210";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Resident"`
/// - phone: `"9876543210"`, country code `"+91"`
/// - role: `"resident"`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: Option<String>,
    phone: String,
    role: String,
    blood_group: Option<String>,
    interests: serde_json::Value,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            email: None,
            phone: DEFAULT_PHONE.to_string(),
            role: "resident".to_string(),
            blood_group: None,
            interests: serde_json::json!([]),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the stored role string.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the stored blood group string.
    pub fn blood_group(mut self, blood_group: impl Into<String>) -> Self {
        self.blood_group = Some(blood_group.into());
        self
    }

    /// Sets the raw interests document.
    pub fn interests(mut self, interests: serde_json::Value) -> Self {
        self.interests = interests;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: self.email,
            password_hash: "not-a-real-hash".to_string(),
            country_code: "+91".to_string(),
            phone: self.phone,
            role: self.role,
            has_pet: false,
            blood_group: self.blood_group,
            occupation: None,
            interests: self.interests,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
