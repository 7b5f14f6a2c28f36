/// Integer division with round-half-up, the single rounding rule for
/// payroll money math (minutes against an hourly rate, basis points
/// against period revenue). Operands are non-negative; intermediates go
/// through i128 so a large revenue figure times a bps rate cannot
/// overflow.
pub fn round_half_up(numerator: i128, divisor: i128) -> i64 {
    debug_assert!(divisor > 0);
    debug_assert!(numerator >= 0);
    ((numerator + divisor / 2) / divisor) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_division() {
        assert_eq!(round_half_up(600, 60), 10);
        assert_eq!(round_half_up(0, 60), 0);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_half_up(30, 60), 1);
        assert_eq!(round_half_up(5000, 10_000), 1);
    }

    #[test]
    fn test_below_half_rounds_down() {
        assert_eq!(round_half_up(29, 60), 0);
        assert_eq!(round_half_up(4999, 10_000), 0);
    }

    #[test]
    fn test_large_operands() {
        // A month of revenue in minor units times a bps rate stays exact.
        let revenue: i128 = 9_999_999_999_999;
        assert_eq!(round_half_up(revenue * 150, 10_000), 150_000_000_000);
    }
}
