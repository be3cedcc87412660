use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::services::membership::{MemberDraft, MemberPatch};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub full_name: String,
    pub member_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: String,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateMemberRequest {
    pub fn into_draft(self) -> MemberDraft {
        MemberDraft {
            full_name: self.full_name,
            member_id: self.member_id,
            email: self.email,
            phone: self.phone,
            membership_type: self.membership_type,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub full_name: Option<String>,
    pub member_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl UpdateMemberRequest {
    pub fn into_patch(self) -> MemberPatch {
        MemberPatch {
            full_name: self.full_name,
            member_id: self.member_id,
            email: self.email,
            phone: self.phone,
            membership_type: self.membership_type,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
        }
    }
}

#[derive(Deserialize)]
pub struct ListMembersQuery {
    pub status: Option<String>,
}
