use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub password_hash: String,
    pub country_code: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub role: String,
    pub has_pet: bool,
    pub blood_group: Option<String>,
    pub occupation: Option<String>,
    /// JSON array of interest labels.
    pub interests: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
