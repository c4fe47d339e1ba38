use crate::server::{
    error::AppError,
    model::user::{UpdateUserParam, UserFilter},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod update_user;
