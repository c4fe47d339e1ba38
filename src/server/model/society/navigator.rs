//! Path resolution through a society's wings → floors → flats tree.
//!
//! Every hop is a linear scan returning the first element that matches, in stored
//! order. A failed hop aborts the whole lookup with the `SocietyError` naming that
//! hop; there is no fallback to later siblings or other societies.

use uuid::Uuid;

use crate::server::{
    error::society::SocietyError,
    model::society::{Flat, Floor, Society, Wing},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingSelector<'a> {
    Id(Uuid),
    Name(&'a str),
}

impl WingSelector<'_> {
    fn matches(&self, wing: &Wing) -> bool {
        match self {
            Self::Id(id) => wing.id == *id,
            Self::Name(name) => wing.wing_name == *name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatSelector<'a> {
    Id(Uuid),
    Number(&'a str),
}

impl FlatSelector<'_> {
    fn matches(&self, flat: &Flat) -> bool {
        match self {
            Self::Id(id) => flat.id == *id,
            Self::Number(number) => flat.flat_number == *number,
        }
    }
}

/// Address of a flat inside one society.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatPath<'a> {
    pub wing: WingSelector<'a>,
    pub floor_number: i32,
    pub flat: FlatSelector<'a>,
}

impl<'a> FlatPath<'a> {
    /// Path addressed by wing name and flat number, as used by join requests.
    pub fn by_name(wing_name: &'a str, floor_number: i32, flat_number: &'a str) -> Self {
        Self {
            wing: WingSelector::Name(wing_name),
            floor_number,
            flat: FlatSelector::Number(flat_number),
        }
    }
}

impl Society {
    pub fn wing(&self, selector: WingSelector<'_>) -> Result<&Wing, SocietyError> {
        self.wings
            .iter()
            .find(|wing| selector.matches(wing))
            .ok_or(SocietyError::WingNotFound)
    }

    pub fn wing_mut(&mut self, selector: WingSelector<'_>) -> Result<&mut Wing, SocietyError> {
        self.wings
            .iter_mut()
            .find(|wing| selector.matches(wing))
            .ok_or(SocietyError::WingNotFound)
    }

    pub fn has_wing_named(&self, wing_name: &str) -> bool {
        self.wing(WingSelector::Name(wing_name)).is_ok()
    }

    /// Resolves wing, then first floor with the number, then flat.
    pub fn locate_flat(&self, path: &FlatPath<'_>) -> Result<&Flat, SocietyError> {
        self.wing(path.wing)?
            .floor(path.floor_number)?
            .flat(path.flat)
    }

    pub fn locate_flat_mut(&mut self, path: &FlatPath<'_>) -> Result<&mut Flat, SocietyError> {
        self.wing_mut(path.wing)?
            .floor_mut(path.floor_number)?
            .flat_mut(path.flat)
    }

    /// Finds a flat by id anywhere in the tree.
    pub fn flat_by_id(&self, flat_id: Uuid) -> Result<&Flat, SocietyError> {
        self.wings
            .iter()
            .flat_map(|wing| wing.floors.iter())
            .flat_map(|floor| floor.flats.iter())
            .find(|flat| flat.id == flat_id)
            .ok_or(SocietyError::FlatNotFound)
    }

    pub fn flat_by_id_mut(&mut self, flat_id: Uuid) -> Result<&mut Flat, SocietyError> {
        self.wings
            .iter_mut()
            .flat_map(|wing| wing.floors.iter_mut())
            .flat_map(|floor| floor.flats.iter_mut())
            .find(|flat| flat.id == flat_id)
            .ok_or(SocietyError::FlatNotFound)
    }
}

impl Wing {
    /// First floor with `floor_number`; later floors sharing the number are unreachable.
    pub fn floor(&self, floor_number: i32) -> Result<&Floor, SocietyError> {
        self.floors
            .iter()
            .find(|floor| floor.floor_number == floor_number)
            .ok_or(SocietyError::FloorNotFound)
    }

    pub fn floor_mut(&mut self, floor_number: i32) -> Result<&mut Floor, SocietyError> {
        self.floors
            .iter_mut()
            .find(|floor| floor.floor_number == floor_number)
            .ok_or(SocietyError::FloorNotFound)
    }
}

impl Floor {
    pub fn flat(&self, selector: FlatSelector<'_>) -> Result<&Flat, SocietyError> {
        self.flats
            .iter()
            .find(|flat| selector.matches(flat))
            .ok_or(SocietyError::FlatNotFound)
    }

    pub fn flat_mut(&mut self, selector: FlatSelector<'_>) -> Result<&mut Flat, SocietyError> {
        self.flats
            .iter_mut()
            .find(|flat| selector.matches(flat))
            .ok_or(SocietyError::FlatNotFound)
    }
}

/// Picks the first society, in the given order, that has a wing named `wing_name`.
pub fn first_with_wing_named(
    societies: Vec<Society>,
    wing_name: &str,
) -> Result<Society, SocietyError> {
    societies
        .into_iter()
        .find(|society| society.has_wing_named(wing_name))
        .ok_or(SocietyError::SocietyNotFound)
}

/// Picks the first society, in the given order, whose tree contains `flat_id`.
pub fn first_with_flat(societies: Vec<Society>, flat_id: Uuid) -> Result<Society, SocietyError> {
    societies
        .into_iter()
        .find(|society| society.flat_by_id(flat_id).is_ok())
        .ok_or(SocietyError::FlatNotFound)
}
