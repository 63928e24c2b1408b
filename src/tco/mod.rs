//! The TCO computation engine.
//!
//! Each calculator is a pure function of already-deserialized inputs:
//!
//! - [`icb`]: Immediate Cost Burden from overdue, due-now and critical gaps
//! - [`eurc`]: Expected Unscheduled Repair Cost from forecast risks
//! - [`condition`]: 0-100 condition score from gaps and evaluation wording
//! - [`routine`]: projected routine maintenance spend
//! - [`depreciation`]: current value and expected sale price
//! - [`aggregate`]: combines the above into a [`TcoResult`]
//!
//! No calculator performs I/O or returns an error. Missing or malformed
//! inputs degrade to zero/`None` sub-results.

pub mod aggregate;
pub mod condition;
pub mod depreciation;
pub mod eurc;
pub mod icb;
pub mod routine;

pub use aggregate::{
    calculate_total_cost_of_ownership, TcoCalculator, TcoResult, TcoSummary, TotalCosts, C12,
};
pub use condition::{
    calculate_condition_score, calculate_condition_score_with_config, ConditionScore,
    FactorExplanation,
};
pub use depreciation::{resolve_current_value, resolve_depreciation, Depreciation};
pub use eurc::{
    calculate_eurc, calculate_eurc_with_thresholds, EurcBreakdown, EurcItem,
    ExpectedUnscheduledRepairs, RiskTier,
};
pub use icb::{calculate_icb, classify_gap_item, GapClassification, IcbBreakdown, IcbItem, ImmediateCostBurden};
pub use routine::{calculate_projected_routine_costs, ProjectedItem, ProjectedRoutine};

/// Miles driven over `horizon_months` at `miles_per_year`.
pub fn horizon_miles(horizon_months: f64, miles_per_year: f64) -> f64 {
    (horizon_months / 12.0) * miles_per_year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_miles() {
        assert_eq!(horizon_miles(12.0, 12000.0), 12000.0);
        assert_eq!(horizon_miles(18.0, 10000.0), 15000.0);
        assert_eq!(horizon_miles(0.0, 10000.0), 0.0);
    }
}
