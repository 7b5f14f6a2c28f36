use crate::domain::models::adjustment::{Adjustment, AdjustmentKind};
use crate::domain::models::payroll::AdjustmentTotals;
use crate::domain::models::period::Period;

/// Groups a period's adjustments by kind and sums each side. No sign
/// flipping here; the compiler applies bonus-adds / fine-and-deduction-
/// subtract semantics when it combines components.
pub fn aggregate(adjustments: &[Adjustment], period: Period) -> AdjustmentTotals {
    let mut totals = AdjustmentTotals::default();
    for adjustment in adjustments.iter().filter(|a| period.contains(a.entry_date)) {
        match adjustment.kind {
            AdjustmentKind::Bonus => totals.bonus += adjustment.amount_minor,
            AdjustmentKind::Fine => totals.fine += adjustment.amount_minor,
            AdjustmentKind::Deduction => totals.deduction += adjustment.amount_minor,
        }
    }
    totals
}
