use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::models::member::MemberStatus;

/// Days before expiry during which a membership is flagged "Expiring Soon".
pub const EXPIRY_LOOKAHEAD_DAYS: i64 = 7;

/// The status shown to staff. Derived on read from the stored status plus
/// the end date; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayStatus {
    Active,
    Suspended,
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Active => "Active",
            DisplayStatus::Suspended => "Suspended",
            DisplayStatus::Expired => "Expired",
            DisplayStatus::ExpiringSoon => "Expiring Soon",
        }
    }
}

/// Resolve the display status for one member.
///
/// `today` is injected by the caller at day granularity. Suspension takes
/// precedence over date math; a past end date overrides a stored `active`.
/// A member with no end date and no terminal stored status counts as active.
pub fn resolve_display_status(
    stored: MemberStatus,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> DisplayStatus {
    if stored == MemberStatus::Suspended {
        return DisplayStatus::Suspended;
    }

    if stored == MemberStatus::Expired {
        return DisplayStatus::Expired;
    }

    let Some(end) = end_date else {
        return DisplayStatus::Active;
    };

    if end < today {
        return DisplayStatus::Expired;
    }

    if end < today + Duration::days(EXPIRY_LOOKAHEAD_DAYS) {
        return DisplayStatus::ExpiringSoon;
    }

    DisplayStatus::Active
}
