use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "society")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub owner_id: i32,
    /// JSON array of amenity labels.
    pub amenities: Json,
    pub maintenance_fee: f64,
    /// JSON array of society rules.
    pub rules: Json,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub logo: Option<String>,
    pub status: bool,
    /// Embedded wings → floors → flats document.
    pub wings: Json,
    /// Incremented on every save; saves are conditional on the loaded value.
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
