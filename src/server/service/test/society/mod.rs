use uuid::Uuid;

use crate::server::{
    error::{society::SocietyError, AppError},
    model::society::{tests::flat_param, ContactDetails, CreateSocietyParam},
    service::society::SocietyService,
};
use test_utils::{builder::TestBuilder, factory};

mod create_society;
mod tree;

fn create_param(owner_id: i32) -> CreateSocietyParam {
    CreateSocietyParam {
        name: "Palm Grove".to_string(),
        address: "12 Ring Road".to_string(),
        registration_number: format!("REG-SVC-{}", owner_id),
        owner_id,
        amenities: Vec::new(),
        maintenance_fee: 0.0,
        rules: Vec::new(),
        contact: ContactDetails::default(),
        logo: None,
    }
}
