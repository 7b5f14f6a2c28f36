use crate::domain::models::period::Period;
use crate::domain::models::timesheet::TimesheetEntry;
use crate::domain::services::money::round_half_up;

/// Sums worked minutes over the entries that fall inside the period.
/// Draft entries count: the product shows draft totals to users and
/// deliberately never undercounts pay by excluding them. The in-period
/// filter guards against callers handing in a wider fetch window.
pub fn total_minutes(entries: &[TimesheetEntry], period: Period) -> i64 {
    entries
        .iter()
        .filter(|e| period.contains(e.work_date))
        .map(|e| e.minutes)
        .sum()
}

/// Base pay from worked minutes: minutes * hourly_rate / 60, round half
/// up. Money math stays on minutes; hours are a display concept.
pub fn hours_amount(minutes: i64, hourly_rate_minor: i64) -> i64 {
    round_half_up(minutes as i128 * hourly_rate_minor as i128, 60)
}
