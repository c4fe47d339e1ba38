use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum UnitType {
    Flat,
    Shop,
}

impl UnitType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Flat" => Some(Self::Flat),
            "Shop" => Some(Self::Shop),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
pub enum FlatStatus {
    #[default]
    Available,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl FlatStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(Self::Available),
            "Not Available" => Some(Self::NotAvailable),
            _ => None,
        }
    }
}

/// How the unit is held.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum OwnershipType {
    Owner,
    Rent,
}

impl OwnershipType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Owner" => Some(Self::Owner),
            "Rent" => Some(Self::Rent),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum JoinRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Result of asking to join a flat.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JoinOutcome {
    /// The flat was vacant and the requester moved in.
    Joined,
    /// The flat is occupied and a pending request was recorded.
    Queued,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ContactDetailsDto {
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDto {
    pub user_id: i32,
    pub name: String,
    pub relation: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: Uuid,
    pub user_id: i32,
    pub status: JoinRequestStatus,
    pub request_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlatDto {
    pub id: Uuid,
    pub flat_number: String,
    pub unit_type: UnitType,
    pub status: FlatStatus,
    #[serde(rename = "type")]
    pub ownership: OwnershipType,
    pub rent_amount: f64,
    pub is_occupied: bool,
    pub amenities: Vec<String>,
    pub family_members: Vec<FamilyMemberDto>,
    pub join_requests: Vec<JoinRequestDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FloorDto {
    pub id: Uuid,
    pub floor_number: i32,
    pub flats: Vec<FlatDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WingDto {
    pub id: Uuid,
    pub wing_name: String,
    pub floors: Vec<FloorDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocietyDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub registration_number: String,
    pub owner: i32,
    pub amenities: Vec<String>,
    pub maintenance_fee: f64,
    pub rules: Vec<String>,
    pub contact_details: ContactDetailsDto,
    pub logo: Option<String>,
    pub status: bool,
    pub wings: Vec<WingDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocietyDto {
    pub name: String,
    pub address: String,
    pub registration_number: String,
    /// Owning user id; defaults to the caller.
    pub owner: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub maintenance_fee: Option<f64>,
    pub rules: Option<Vec<String>>,
    pub contact_details: Option<ContactDetailsDto>,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSocietyDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub registration_number: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub maintenance_fee: Option<f64>,
    pub rules: Option<Vec<String>>,
    pub contact_details: Option<ContactDetailsDto>,
    pub logo: Option<String>,
    pub status: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWingDto {
    pub wing_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFloorDto {
    pub floor_number: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFlatDto {
    pub flat_number: String,
    /// `Flat` or `Shop`.
    pub unit_type: String,
    /// `Available` or `Not Available`; defaults to `Available`.
    pub status: Option<String>,
    /// `Owner` or `Rent`.
    #[serde(rename = "type")]
    pub ownership: String,
    pub rent_amount: Option<f64>,
    pub amenities: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestToJoinDto {
    /// Requesting user id; defaults to the caller.
    pub user_id: Option<i32>,
    pub wing_name: String,
    pub floor_number: i32,
    pub flat_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespondToJoinRequestDto {
    pub flat_id: Uuid,
    pub user_id: i32,
    /// `accept` or `reject`.
    pub action: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PendingRequestsQuery {
    pub wing_name: String,
    pub floor_number: i32,
    pub flat_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct JoinResultDto {
    pub message: String,
    pub outcome: JoinOutcome,
    pub flat: FlatDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct JoinResponseDto {
    pub message: String,
    pub status: JoinRequestStatus,
    pub flat: FlatDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SocietyResultDto {
    pub message: String,
    pub society: SocietyDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WingResultDto {
    pub message: String,
    pub wing: WingDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FloorResultDto {
    pub message: String,
    pub floor: FloorDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlatResultDto {
    pub message: String,
    pub flat: FlatDto,
}
