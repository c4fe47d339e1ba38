//! Society fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::society;

/// Default test society name.
pub const DEFAULT_NAME: &str = "Test Society";

/// Default test registration number.
pub const DEFAULT_REGISTRATION_NUMBER: &str = "REG-0001";

/// Creates a society entity model with default values and an empty wings tree.
pub fn entity() -> society::Model {
    entity_builder().build()
}

/// Creates a society entity builder for customization.
pub fn entity_builder() -> SocietyEntityBuilder {
    SocietyEntityBuilder::default()
}

/// Builder for creating customized society entity models.
pub struct SocietyEntityBuilder {
    id: i32,
    owner_id: i32,
    amenities: serde_json::Value,
    rules: serde_json::Value,
    wings: serde_json::Value,
    version: i32,
}

impl Default for SocietyEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            owner_id: 1,
            amenities: serde_json::json!([]),
            rules: serde_json::json!([]),
            wings: serde_json::json!([]),
            version: 0,
        }
    }
}

impl SocietyEntityBuilder {
    /// Sets the society ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owner ID.
    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Sets the raw amenities document.
    pub fn amenities(mut self, amenities: serde_json::Value) -> Self {
        self.amenities = amenities;
        self
    }

    /// Sets the raw rules document.
    pub fn rules(mut self, rules: serde_json::Value) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the raw wings document.
    pub fn wings(mut self, wings: serde_json::Value) -> Self {
        self.wings = wings;
        self
    }

    /// Sets the stored version counter.
    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and returns the society entity model.
    pub fn build(self) -> society::Model {
        let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        society::Model {
            id: self.id,
            name: DEFAULT_NAME.to_string(),
            address: "1 Test Street".to_string(),
            registration_number: DEFAULT_REGISTRATION_NUMBER.to_string(),
            owner_id: self.owner_id,
            amenities: self.amenities,
            maintenance_fee: 0.0,
            rules: self.rules,
            contact_phone: None,
            contact_email: None,
            logo: None,
            status: true,
            wings: self.wings,
            version: self.version,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
