//! Occupancy and join-request transitions for a single flat.
//!
//! A flat is vacant until its first family member is admitted. While vacant, a
//! request to join admits the requester immediately; once occupied, requests are
//! queued as `Pending` and resolved one at a time by accept or reject. Accepting
//! a request never touches sibling requests.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::society::{JoinOutcome, JoinRequestStatus},
    server::{
        error::society::SocietyError,
        model::{
            society::{FamilyMember, Flat, JoinRequest},
            user::User,
        },
    },
};

/// Relation recorded for members admitted through the join flow.
pub const TENANT_RELATION: &str = "Tenant";

/// Response to a pending join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinAction {
    Accept,
    Reject,
}

impl JoinAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for JoinAction {
    type Err = SocietyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(SocietyError::InvalidAction(other.to_string())),
        }
    }
}

impl FamilyMember {
    /// Member record for `user` admitted as a tenant.
    pub fn tenant(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.full_name(),
            relation: TENANT_RELATION.to_string(),
            phone: user.phone.clone(),
            email: user.email.clone(),
        }
    }
}

impl Flat {
    /// Admits `member` if the flat is vacant, otherwise queues a pending request.
    ///
    /// The vacant branch records no join request.
    pub fn request_to_join(&mut self, member: FamilyMember, now: DateTime<Utc>) -> JoinOutcome {
        if self.is_occupied {
            self.join_requests.push(JoinRequest {
                id: Uuid::new_v4(),
                user_id: member.user_id,
                status: JoinRequestStatus::Pending,
                request_date: now,
            });
            JoinOutcome::Queued
        } else {
            self.admit(member);
            JoinOutcome::Joined
        }
    }

    /// First join request from `user_id`, regardless of its status.
    pub fn join_request(&self, user_id: i32) -> Result<&JoinRequest, SocietyError> {
        self.join_requests
            .iter()
            .find(|request| request.user_id == user_id)
            .ok_or(SocietyError::RequestNotFound)
    }

    fn join_request_mut(&mut self, user_id: i32) -> Result<&mut JoinRequest, SocietyError> {
        self.join_requests
            .iter_mut()
            .find(|request| request.user_id == user_id)
            .ok_or(SocietyError::RequestNotFound)
    }

    /// Marks the member's first request accepted and admits them.
    pub fn accept_join_request(&mut self, member: FamilyMember) -> Result<(), SocietyError> {
        self.join_request_mut(member.user_id)?.status = JoinRequestStatus::Accepted;
        self.admit(member);
        Ok(())
    }

    /// Marks the user's first request rejected. Occupancy is unchanged.
    pub fn reject_join_request(&mut self, user_id: i32) -> Result<(), SocietyError> {
        self.join_request_mut(user_id)?.status = JoinRequestStatus::Rejected;
        Ok(())
    }

    pub fn pending_join_requests(&self) -> Vec<&JoinRequest> {
        self.join_requests
            .iter()
            .filter(|request| request.status == JoinRequestStatus::Pending)
            .collect()
    }

    fn admit(&mut self, member: FamilyMember) {
        self.family_members.push(member);
        self.is_occupied = true;
    }
}
