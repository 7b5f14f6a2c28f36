use crate::domain::models::position::PositionKind;
use crate::domain::services::money::round_half_up;

/// Applies a revenue-share percentage (basis points, 1 bps = 0.01%) to
/// the period's eligible revenue. Only SHIFTS_PLUS_REVENUE positions with
/// a configured share participate; everyone else gets 0. The revenue
/// figure itself comes from the finance collaborator, never from here.
pub fn revenue_share(kind: PositionKind, revenue_share_bps: Option<i32>, period_revenue_minor: i64) -> i64 {
    match (kind, revenue_share_bps) {
        (PositionKind::ShiftsPlusRevenue, Some(bps)) => {
            round_half_up(period_revenue_minor as i128 * bps as i128, 10_000)
        }
        _ => 0,
    }
}
