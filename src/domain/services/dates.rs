use chrono::{Datelike, NaiveDate};

use crate::domain::models::member::MembershipType;

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month out of range"),
    }
}

/// Calendar-month addition. When the source day does not exist in the
/// target month the day is clamped to the last day of that month
/// (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Calendar-year addition with the same clamping rule (Feb 29 + 1 year = Feb 28).
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    add_months(date, years * 12)
}

/// Default end date for a membership starting on `start_date`. `Custom`
/// plans carry no derived term; the end date comes from staff input.
pub fn compute_end_date(start_date: NaiveDate, plan: MembershipType) -> Option<NaiveDate> {
    match plan {
        MembershipType::Monthly => Some(add_months(start_date, 1)),
        MembershipType::Quarterly => Some(add_months(start_date, 3)),
        MembershipType::Annual => Some(add_years(start_date, 1)),
        MembershipType::Custom => None,
    }
}
