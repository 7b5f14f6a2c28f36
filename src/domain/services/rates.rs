use crate::domain::models::position::{Position, RateParams};
use crate::domain::models::position_rate::PositionRate;

/// Where the effective parameters came from. The payroll compiler treats
/// a missing parameter differently depending on the source: a month
/// override with null fields means "explicitly zero pay that month",
/// while null fields in the position defaults are a configuration error
/// for kinds that require them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    MonthOverride,
    PositionDefaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate {
    pub params: RateParams,
    pub source: RateSource,
}

/// Resolves the compensation parameters in effect for one month: the
/// month's override row verbatim when present (no field-level merge with
/// defaults), otherwise the position's current defaults.
pub fn resolve_rate(position: &Position, override_row: Option<&PositionRate>) -> ResolvedRate {
    match override_row {
        Some(rate) => ResolvedRate {
            params: rate.params(),
            source: RateSource::MonthOverride,
        },
        None => ResolvedRate {
            params: position.default_params(),
            source: RateSource::PositionDefaults,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::position::PositionKind;

    fn position(params: RateParams) -> Position {
        Position::new("t1".into(), "Waiter".into(), PositionKind::ShiftsPlusRevenue, params)
    }

    #[test]
    fn test_falls_back_to_defaults_without_override() {
        let defaults = RateParams { hourly_rate_minor: Some(20_000), revenue_share_bps: Some(150), salary_minor: None };
        let resolved = resolve_rate(&position(defaults), None);
        assert_eq!(resolved.source, RateSource::PositionDefaults);
        assert_eq!(resolved.params, defaults);
    }

    #[test]
    fn test_override_replaces_defaults_in_full() {
        let defaults = RateParams { hourly_rate_minor: Some(20_000), revenue_share_bps: Some(150), salary_minor: None };
        let pos = position(defaults);
        let rate = PositionRate::new(
            "t1".into(),
            pos.id.clone(),
            2025,
            6,
            RateParams { hourly_rate_minor: Some(25_000), revenue_share_bps: None, salary_minor: None },
        );
        let resolved = resolve_rate(&pos, Some(&rate));
        assert_eq!(resolved.source, RateSource::MonthOverride);
        assert_eq!(resolved.params.hourly_rate_minor, Some(25_000));
        // No merge: the override's null share wins over the default 150 bps.
        assert_eq!(resolved.params.revenue_share_bps, None);
    }

    #[test]
    fn test_all_null_override_is_not_treated_as_absent() {
        let defaults = RateParams { hourly_rate_minor: Some(20_000), revenue_share_bps: Some(150), salary_minor: None };
        let pos = position(defaults);
        let rate = PositionRate::new("t1".into(), pos.id.clone(), 2025, 6, RateParams::default());
        let resolved = resolve_rate(&pos, Some(&rate));
        assert_eq!(resolved.source, RateSource::MonthOverride);
        assert_eq!(resolved.params, RateParams::default());
    }
}
