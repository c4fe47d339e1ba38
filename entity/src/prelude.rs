pub use super::society::Entity as Society;
pub use super::user::Entity as User;
