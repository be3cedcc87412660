use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::models::member::{Member, MemberStatus, MembershipType, NewMember};
use crate::domain::ports::MemberRepository;
use crate::domain::services::dates::compute_end_date;
use crate::error::AppError;

/// Raw create payload as submitted by a form or API client. Enum fields
/// arrive as loose strings and are normalized here, never downstream.
#[derive(Debug, Clone)]
pub struct MemberDraft {
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

/// Partial update payload. Absent fields are left untouched; an explicit
/// empty string clears optional email/phone/notes.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
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

/// Map a loose plan-type string to the closed enum. Accepts flexible inputs
/// like "Monthly", "month", "  ANNUAL ".
pub fn normalize_plan_type(raw: &str) -> Result<MembershipType, AppError> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return Err(AppError::Validation("membershipType is required".into()));
    }
    if s == "custom" {
        return Ok(MembershipType::Custom);
    }
    if s.contains("month") {
        return Ok(MembershipType::Monthly);
    }
    if s.contains("quarter") {
        return Ok(MembershipType::Quarterly);
    }
    if s.contains("year") || s.contains("ann") {
        return Ok(MembershipType::Annual);
    }
    Err(AppError::Validation(format!(
        "Invalid membershipType value: {}",
        raw
    )))
}

/// Map a loose status string to the closed enum. Absent or empty defaults
/// to active; "inactive" is accepted as a legacy alias for expired.
pub fn normalize_status(raw: Option<&str>) -> Result<MemberStatus, AppError> {
    let Some(raw) = raw else {
        return Ok(MemberStatus::Active);
    };
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "" | "active" => Ok(MemberStatus::Active),
        "expired" | "inactive" => Ok(MemberStatus::Expired),
        "suspended" => Ok(MemberStatus::Suspended),
        _ => Err(AppError::Validation(format!("Invalid status value: {}", raw))),
    }
}

// localpart@domain.tld shape: no whitespace, exactly one '@', domain
// containing a '.' that is neither first nor last.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_valid_phone(value: &str) -> bool {
    (8..=15).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

/// Validate optional contact fields. Empty or absent values pass; present
/// values must be well-formed. Failures name the offending field.
pub fn validate_contact(email: Option<&str>, phone: Option<&str>) -> Result<(), AppError> {
    if let Some(e) = email {
        let e = e.trim();
        if !e.is_empty() && !is_valid_email(e) {
            return Err(AppError::Validation("Invalid email format".into()));
        }
    }
    if let Some(p) = phone {
        let p = p.trim();
        if !p.is_empty() && !is_valid_phone(p) {
            return Err(AppError::Validation(
                "Invalid phone number (must be 8-15 digits)".into(),
            ));
        }
    }
    Ok(())
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim().to_string();
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    })
}

/// Validates and normalizes member input and owns the store handle. All
/// writes to the roster go through here.
pub struct MembershipService {
    repo: Arc<dyn MemberRepository>,
}

impl MembershipService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_member(&self, id: i64) -> Result<Member, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))
    }

    pub async fn create_member(&self, draft: MemberDraft) -> Result<Member, AppError> {
        let full_name = draft.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(AppError::Validation("fullName is required".into()));
        }

        let member_id = draft.member_id.trim().to_string();
        if member_id.is_empty() {
            return Err(AppError::Validation("memberId is required".into()));
        }

        validate_contact(draft.email.as_deref(), draft.phone.as_deref())?;
        let membership_type = normalize_plan_type(&draft.membership_type)?;
        let status = normalize_status(draft.status.as_deref())?;

        let now = Utc::now();
        let start_date = draft.start_date.unwrap_or_else(|| now.date_naive());

        let end_date = match draft.end_date {
            Some(end) => Some(end),
            None => compute_end_date(start_date, membership_type),
        };
        if membership_type == MembershipType::Custom && end_date.is_none() {
            return Err(AppError::Validation(
                "endDate is required for custom memberships".into(),
            ));
        }
        if let Some(end) = end_date {
            if end < start_date {
                return Err(AppError::Validation(
                    "endDate must not precede startDate".into(),
                ));
            }
        }

        if self.repo.find_by_member_id(&member_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "memberId '{}' already exists",
                member_id
            )));
        }

        let new_member = NewMember {
            member_id,
            full_name,
            email: clean_optional(draft.email),
            phone: clean_optional(draft.phone),
            membership_type,
            status,
            start_date,
            end_date,
            notes: clean_optional(draft.notes),
            created_at: now,
        };

        self.repo.insert(&new_member).await
    }

    pub async fn update_member(&self, id: i64, patch: MemberPatch) -> Result<Member, AppError> {
        let mut member = self.get_member(id).await?;

        if let Some(name) = patch.full_name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Validation("fullName is required".into()));
            }
            member.full_name = name;
        }

        if let Some(code) = patch.member_id {
            let code = code.trim().to_string();
            if code.is_empty() {
                return Err(AppError::Validation("memberId is required".into()));
            }
            if code != member.member_id {
                if self.repo.find_by_member_id(&code).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "memberId '{}' already exists",
                        code
                    )));
                }
                member.member_id = code;
            }
        }

        if let Some(email) = patch.email {
            validate_contact(Some(email.as_str()), None)?;
            member.email = clean_optional(Some(email));
        }

        if let Some(phone) = patch.phone {
            validate_contact(None, Some(phone.as_str()))?;
            member.phone = clean_optional(Some(phone));
        }

        if let Some(plan) = patch.membership_type {
            member.membership_type = normalize_plan_type(&plan)?;
        }

        if let Some(status) = patch.status {
            member.status = normalize_status(Some(&status))?;
        }

        if let Some(start) = patch.start_date {
            member.start_date = start;
        }

        if let Some(end) = patch.end_date {
            member.end_date = Some(end);
        }

        if let Some(notes) = patch.notes {
            member.notes = clean_optional(Some(notes));
        }

        if let Some(end) = member.end_date {
            if end < member.start_date {
                return Err(AppError::Validation(
                    "endDate must not precede startDate".into(),
                ));
            }
        }

        self.repo.update(&member).await
    }

    pub async fn delete_member(&self, id: i64) -> Result<Member, AppError> {
        let member = self.get_member(id).await?;
        self.repo.delete(id).await?;
        Ok(member)
    }

    /// Flip the administrative status: active becomes suspended, anything
    /// else becomes active.
    pub async fn toggle_status(&self, id: i64) -> Result<Member, AppError> {
        let mut member = self.get_member(id).await?;
        member.status = match member.status {
            MemberStatus::Active => MemberStatus::Suspended,
            _ => MemberStatus::Active,
        };
        self.repo.update(&member).await
    }
}
