use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::models::member::{Member, MemberStatus, MembershipType};
use crate::domain::services::status::{resolve_display_status, DisplayStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
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
    pub display_status: DisplayStatus,
}

impl MemberResponse {
    pub fn from_member(member: Member, today: NaiveDate) -> Self {
        let display_status = resolve_display_status(member.status, member.end_date, today);
        Self {
            id: member.id,
            member_id: member.member_id,
            full_name: member.full_name,
            email: member.email,
            phone: member.phone,
            membership_type: member.membership_type,
            status: member.status,
            start_date: member.start_date,
            end_date: member.end_date,
            notes: member.notes,
            created_at: member.created_at,
            display_status,
        }
    }
}
