use crate::{
    model::user::{BloodGroup, Role},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, UserFilter},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_all;
mod update;

fn create_param(phone: &str, email: Option<&str>) -> CreateUserParam {
    CreateUserParam {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: email.map(str::to_string),
        password_hash: "hash".to_string(),
        country_code: "+91".to_string(),
        phone: phone.to_string(),
        role: Role::Resident,
        has_pet: false,
        blood_group: None,
        occupation: None,
        interests: Vec::new(),
    }
}
