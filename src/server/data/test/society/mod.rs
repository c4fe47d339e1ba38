use crate::server::{
    data::society::SocietyRepository,
    error::{society::SocietyError, AppError},
    model::society::{ContactDetails, CreateSocietyParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_first_with_flat;
mod find_first_with_wing_name;
mod save;

fn create_param(owner_id: i32, registration_number: &str) -> CreateSocietyParam {
    CreateSocietyParam {
        name: "Palm Grove".to_string(),
        address: "12 Ring Road".to_string(),
        registration_number: registration_number.to_string(),
        owner_id,
        amenities: vec!["Pool".to_string()],
        maintenance_fee: 1500.0,
        rules: vec!["No parking on lawns".to_string()],
        contact: ContactDetails {
            phone: Some("9000011111".to_string()),
            email: None,
        },
        logo: None,
    }
}

/// Wings document with wing `name` → floor 1 → flat `flat_number`.
fn single_flat_wings(name: &str, flat_id: uuid::Uuid, flat_number: &str) -> serde_json::Value {
    serde_json::json!([{
        "id": uuid::Uuid::new_v4(),
        "wingName": name,
        "floors": [{
            "id": uuid::Uuid::new_v4(),
            "floorNumber": 1,
            "flats": [{
                "id": flat_id,
                "flatNumber": flat_number,
                "unitType": "Flat",
                "status": "Available",
                "type": "Owner",
                "rentAmount": 0.0,
                "isOccupied": false,
                "amenities": [],
                "familyMembers": [],
                "joinRequests": []
            }]
        }]
    }])
}
