use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::models::member::Member;
use crate::domain::services::status::{resolve_display_status, DisplayStatus};

/// Dashboard summary counts. Status counts are based on the display status,
/// so a stored-active member with a past end date counts as expired.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total_members: usize,
    pub active_members: usize,
    pub expiring_soon: usize,
    pub expired_members: usize,
    pub suspended_members: usize,
    pub new_this_month: usize,
    pub members_by_type: BTreeMap<String, usize>,
}

pub fn roster_stats(members: &[Member], today: NaiveDate) -> RosterStats {
    let mut stats = RosterStats {
        total_members: members.len(),
        active_members: 0,
        expiring_soon: 0,
        expired_members: 0,
        suspended_members: 0,
        new_this_month: 0,
        members_by_type: BTreeMap::new(),
    };

    for member in members {
        match resolve_display_status(member.status, member.end_date, today) {
            DisplayStatus::Active => stats.active_members += 1,
            DisplayStatus::ExpiringSoon => stats.expiring_soon += 1,
            DisplayStatus::Expired => stats.expired_members += 1,
            DisplayStatus::Suspended => stats.suspended_members += 1,
        }

        let created = member.created_at.date_naive();
        if created.year() == today.year() && created.month() == today.month() {
            stats.new_this_month += 1;
        }

        *stats
            .members_by_type
            .entry(member.membership_type.as_str().to_string())
            .or_insert(0) += 1;
    }

    stats
}
