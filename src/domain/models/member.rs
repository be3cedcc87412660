use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Billing/term category. Governs the default membership term length;
/// `Custom` means the end date is supplied by staff instead of derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    Monthly,
    Quarterly,
    Annual,
    Custom,
}

impl MembershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Monthly => "monthly",
            MembershipType::Quarterly => "quarterly",
            MembershipType::Annual => "annual",
            MembershipType::Custom => "custom",
        }
    }

    /// Strict decoding for values coming back out of the store.
    /// Loose user input goes through `services::membership::normalize_plan_type` instead.
    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        match value {
            "monthly" => Ok(MembershipType::Monthly),
            "quarterly" => Ok(MembershipType::Quarterly),
            "annual" => Ok(MembershipType::Annual),
            "custom" => Ok(MembershipType::Custom),
            other => Err(AppError::InternalWithMsg(format!(
                "unknown membership_type in store: {}",
                other
            ))),
        }
    }
}

/// The administratively set state. Independent of date math: the display
/// status combines this with the end date at read time, but this field only
/// changes when staff change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Suspended,
    Expired,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Suspended => "suspended",
            MemberStatus::Expired => "expired",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        match value {
            "active" => Ok(MemberStatus::Active),
            "suspended" => Ok(MemberStatus::Suspended),
            "expired" => Ok(MemberStatus::Expired),
            other => Err(AppError::InternalWithMsg(format!(
                "unknown status in store: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Member {
    pub id: i64,
    pub member_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A fully validated member ready for insertion. The store assigns `id`.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub member_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw row shape shared by the SQLite and Postgres repositories.
/// Enums are stored as lowercase text.
#[derive(Debug, FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub member_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MemberRow {
    pub fn into_member(self) -> Result<Member, AppError> {
        Ok(Member {
            id: self.id,
            member_id: self.member_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            membership_type: MembershipType::from_stored(&self.membership_type)?,
            status: MemberStatus::from_stored(&self.status)?,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}
