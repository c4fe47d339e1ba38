//! Society aggregate: the society record plus its embedded wings → floors → flats
//! tree.
//!
//! The tree is persisted as a single JSON document on the society row, so every
//! type below `Society` derives serde with camelCase field names. Nested entities
//! have no persistence identity of their own; the UUIDs are only used to address
//! them. Lookups live in [`navigator`], occupancy transitions in [`occupancy`].

pub mod navigator;
pub mod occupancy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::society::{
        AddFlatDto, ContactDetailsDto, CreateSocietyDto, FamilyMemberDto, FlatDto, FlatStatus,
        FloorDto, JoinRequestDto, JoinRequestStatus, OwnershipType, SocietyDto, UnitType,
        UpdateSocietyDto, WingDto,
    },
    server::{
        error::AppError,
        util::{
            parse::parse_json_column,
            validation::{parse_flat_status, parse_ownership, parse_unit_type, require},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Society {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub registration_number: String,
    pub owner_id: i32,
    pub amenities: Vec<String>,
    pub maintenance_fee: f64,
    pub rules: Vec<String>,
    pub contact: ContactDetails,
    pub logo: Option<String>,
    /// Whether the society is active.
    pub status: bool,
    pub wings: Vec<Wing>,
    /// Version the aggregate was loaded at; saves are conditional on it.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wing {
    pub id: Uuid,
    pub wing_name: String,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: Uuid,
    pub floor_number: i32,
    #[serde(default)]
    pub flats: Vec<Flat>,
}

/// A unit on a floor.
///
/// Occupancy fields are private: `is_occupied` and `family_members` only change
/// together through the transitions in [`occupancy`], which keeps
/// `is_occupied == !family_members.is_empty()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    pub id: Uuid,
    pub flat_number: String,
    pub unit_type: UnitType,
    pub status: FlatStatus,
    #[serde(rename = "type")]
    pub ownership: OwnershipType,
    pub rent_amount: f64,
    is_occupied: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    family_members: Vec<FamilyMember>,
    #[serde(default)]
    join_requests: Vec<JoinRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub user_id: i32,
    pub name: String,
    pub relation: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: Uuid,
    pub user_id: i32,
    pub status: JoinRequestStatus,
    pub request_date: DateTime<Utc>,
}

impl Society {
    /// Appends a new, empty wing and returns a copy of it.
    pub fn add_wing(&mut self, wing_name: String) -> Wing {
        let wing = Wing {
            id: Uuid::new_v4(),
            wing_name,
            floors: Vec::new(),
        };
        self.wings.push(wing.clone());
        wing
    }

    /// Overwrites the top-level fields that are set in `param`.
    pub fn apply_update(&mut self, param: UpdateSocietyParam) {
        if let Some(name) = param.name {
            self.name = name;
        }
        if let Some(address) = param.address {
            self.address = address;
        }
        if let Some(registration_number) = param.registration_number {
            self.registration_number = registration_number;
        }
        if let Some(amenities) = param.amenities {
            self.amenities = amenities;
        }
        if let Some(maintenance_fee) = param.maintenance_fee {
            self.maintenance_fee = maintenance_fee;
        }
        if let Some(rules) = param.rules {
            self.rules = rules;
        }
        if let Some(contact) = param.contact {
            self.contact = contact;
        }
        if let Some(logo) = param.logo {
            self.logo = Some(logo);
        }
        if let Some(status) = param.status {
            self.status = status;
        }
    }

    pub fn into_dto(self) -> SocietyDto {
        SocietyDto {
            id: self.id,
            name: self.name,
            address: self.address,
            registration_number: self.registration_number,
            owner: self.owner_id,
            amenities: self.amenities,
            maintenance_fee: self.maintenance_fee,
            rules: self.rules,
            contact_details: ContactDetailsDto {
                phone: self.contact.phone,
                email: self.contact.email,
            },
            logo: self.logo,
            status: self.status,
            wings: self.wings.into_iter().map(Wing::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to the aggregate at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Society)` - Aggregate with its decoded wings tree
    /// - `Err(AppError::JsonErr)` - A stored JSON column does not match the expected shape
    pub fn from_entity(entity: entity::society::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            registration_number: entity.registration_number,
            owner_id: entity.owner_id,
            amenities: parse_json_column(entity.amenities)?,
            maintenance_fee: entity.maintenance_fee,
            rules: parse_json_column(entity.rules)?,
            contact: ContactDetails {
                phone: entity.contact_phone,
                email: entity.contact_email,
            },
            logo: entity.logo,
            status: entity.status,
            wings: parse_json_column(entity.wings)?,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl Wing {
    /// Appends a new, empty floor and returns a copy of it.
    ///
    /// Floor numbers are not required to be unique within a wing.
    pub fn add_floor(&mut self, floor_number: i32) -> Floor {
        let floor = Floor {
            id: Uuid::new_v4(),
            floor_number,
            flats: Vec::new(),
        };
        self.floors.push(floor.clone());
        floor
    }

    pub fn into_dto(self) -> WingDto {
        WingDto {
            id: self.id,
            wing_name: self.wing_name,
            floors: self.floors.into_iter().map(Floor::into_dto).collect(),
        }
    }
}

impl Floor {
    /// Appends a new vacant flat and returns a copy of it.
    pub fn add_flat(&mut self, param: AddFlatParam) -> Flat {
        let flat = Flat::new(param);
        self.flats.push(flat.clone());
        flat
    }

    pub fn into_dto(self) -> FloorDto {
        FloorDto {
            id: self.id,
            floor_number: self.floor_number,
            flats: self.flats.into_iter().map(Flat::into_dto).collect(),
        }
    }
}

impl Flat {
    /// Creates a vacant flat with no family members or join requests.
    pub fn new(param: AddFlatParam) -> Self {
        Self {
            id: Uuid::new_v4(),
            flat_number: param.flat_number,
            unit_type: param.unit_type,
            status: param.status,
            ownership: param.ownership,
            rent_amount: param.rent_amount,
            is_occupied: false,
            amenities: param.amenities,
            family_members: Vec::new(),
            join_requests: Vec::new(),
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    pub fn family_members(&self) -> &[FamilyMember] {
        &self.family_members
    }

    pub fn join_requests(&self) -> &[JoinRequest] {
        &self.join_requests
    }

    pub fn into_dto(self) -> FlatDto {
        FlatDto {
            id: self.id,
            flat_number: self.flat_number,
            unit_type: self.unit_type,
            status: self.status,
            ownership: self.ownership,
            rent_amount: self.rent_amount,
            is_occupied: self.is_occupied,
            amenities: self.amenities,
            family_members: self
                .family_members
                .into_iter()
                .map(FamilyMember::into_dto)
                .collect(),
            join_requests: self
                .join_requests
                .into_iter()
                .map(JoinRequest::into_dto)
                .collect(),
        }
    }
}

impl FamilyMember {
    pub fn into_dto(self) -> FamilyMemberDto {
        FamilyMemberDto {
            user_id: self.user_id,
            name: self.name,
            relation: self.relation,
            phone: self.phone,
            email: self.email,
        }
    }
}

impl JoinRequest {
    pub fn into_dto(self) -> JoinRequestDto {
        JoinRequestDto {
            id: self.id,
            user_id: self.user_id,
            status: self.status,
            request_date: self.request_date,
        }
    }
}

/// Validated fields for inserting a new society. The wings tree starts empty.
#[derive(Debug, Clone)]
pub struct CreateSocietyParam {
    pub name: String,
    pub address: String,
    pub registration_number: String,
    pub owner_id: i32,
    pub amenities: Vec<String>,
    pub maintenance_fee: f64,
    pub rules: Vec<String>,
    pub contact: ContactDetails,
    pub logo: Option<String>,
}

impl CreateSocietyParam {
    /// Validates a create request. The owner defaults to `caller_id`.
    pub fn from_dto(dto: CreateSocietyDto, caller_id: i32) -> Result<Self, AppError> {
        require("Name", &dto.name)?;
        require("Address", &dto.address)?;
        require("Registration number", &dto.registration_number)?;

        Ok(Self {
            name: dto.name,
            address: dto.address,
            registration_number: dto.registration_number,
            owner_id: dto.owner.unwrap_or(caller_id),
            amenities: dto.amenities.unwrap_or_default(),
            maintenance_fee: dto.maintenance_fee.unwrap_or(0.0),
            rules: dto.rules.unwrap_or_default(),
            contact: dto.contact_details.map(ContactDetails::from_dto).unwrap_or_default(),
            logo: dto.logo,
        })
    }
}

impl ContactDetails {
    pub fn from_dto(dto: ContactDetailsDto) -> Self {
        Self {
            phone: dto.phone,
            email: dto.email,
        }
    }
}

/// Partial update of top-level society fields. The wings tree is never touched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSocietyParam {
    pub name: Option<String>,
    pub address: Option<String>,
    pub registration_number: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub maintenance_fee: Option<f64>,
    pub rules: Option<Vec<String>>,
    pub contact: Option<ContactDetails>,
    pub logo: Option<String>,
    pub status: Option<bool>,
}

impl UpdateSocietyParam {
    pub fn from_dto(dto: UpdateSocietyDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            require("Name", name)?;
        }
        if let Some(address) = &dto.address {
            require("Address", address)?;
        }
        if let Some(registration_number) = &dto.registration_number {
            require("Registration number", registration_number)?;
        }

        Ok(Self {
            name: dto.name,
            address: dto.address,
            registration_number: dto.registration_number,
            amenities: dto.amenities,
            maintenance_fee: dto.maintenance_fee,
            rules: dto.rules,
            contact: dto.contact_details.map(ContactDetails::from_dto),
            logo: dto.logo,
            status: dto.status,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AddFlatParam {
    pub flat_number: String,
    pub unit_type: UnitType,
    pub status: FlatStatus,
    pub ownership: OwnershipType,
    pub rent_amount: f64,
    pub amenities: Vec<String>,
}

impl AddFlatParam {
    /// Validates a new flat; status defaults to `Available`, rent to 0.
    pub fn from_dto(dto: AddFlatDto) -> Result<Self, AppError> {
        require("Flat number", &dto.flat_number)?;

        Ok(Self {
            flat_number: dto.flat_number,
            unit_type: parse_unit_type(&dto.unit_type)?,
            status: dto
                .status
                .as_deref()
                .map(parse_flat_status)
                .transpose()?
                .unwrap_or_default(),
            ownership: parse_ownership(&dto.ownership)?,
            rent_amount: dto.rent_amount.unwrap_or(0.0),
            amenities: dto.amenities.unwrap_or_default(),
        })
    }
}
