pub const DEFAULT_HEADCOUNT: u32 = 50;
pub const DEFAULT_HOURLY_WAGE: f64 = 35.0;

pub const HOURS_SAVED_PER_EMPLOYEE: f64 = 1.5;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const REVENUE_UPLIFT: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatorInputs {
    pub headcount: u32,
    pub hourly_wage: f64,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            headcount: DEFAULT_HEADCOUNT,
            hourly_wage: DEFAULT_HOURLY_WAGE,
        }
    }
}

/// The four figures shown in the savings panel. Always replaced together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatorResult {
    pub weekly_hours_saved: f64,
    pub annual_savings: f64,
    pub additional_revenue: f64,
    pub total_annual_benefit: f64,
}

/// Local estimate used whenever the remote calculation is unavailable.
///
/// Weekly hours and annual savings are rounded before the remaining two
/// figures are derived from them, so the total is always the exact sum of
/// savings and revenue.
pub fn fallback_estimate(inputs: EstimatorInputs) -> EstimatorResult {
    let weekly_hours_saved = (f64::from(inputs.headcount) * HOURS_SAVED_PER_EMPLOYEE).round();
    let annual_savings = (weekly_hours_saved * WEEKS_PER_YEAR * inputs.hourly_wage).round();
    let additional_revenue = (annual_savings * REVENUE_UPLIFT).round();

    EstimatorResult {
        weekly_hours_saved,
        annual_savings,
        additional_revenue,
        total_annual_benefit: annual_savings + additional_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_inputs_match_reference_figures() {
        assert_eq!(
            fallback_estimate(EstimatorInputs::default()),
            EstimatorResult {
                weekly_hours_saved: 75.0,
                annual_savings: 136_500.0,
                additional_revenue: 27_300.0,
                total_annual_benefit: 163_800.0,
            }
        );
    }

    #[test]
    fn total_is_sum_of_savings_and_revenue() {
        for headcount in [0, 1, 3, 7, 49, 101, 999] {
            for hourly_wage in [0.0, 12.34, 17.5, 35.0, 99.99] {
                let result = fallback_estimate(EstimatorInputs { headcount, hourly_wage });
                assert_eq!(
                    result.total_annual_benefit,
                    result.annual_savings + result.additional_revenue
                );
            }
        }
    }

    #[test]
    fn same_inputs_give_same_result() {
        let inputs = EstimatorInputs { headcount: 17, hourly_wage: 28.75 };
        assert_eq!(fallback_estimate(inputs), fallback_estimate(inputs));
    }

    #[test]
    fn intermediate_values_are_rounded_first() {
        // 3 * 1.5 = 4.5 rounds up to 5 hours before the yearly figure is taken.
        let result = fallback_estimate(EstimatorInputs { headcount: 3, hourly_wage: 10.0 });
        assert_eq!(result.weekly_hours_saved, 5.0);
        assert_eq!(result.annual_savings, 2_600.0);
        assert_eq!(result.additional_revenue, 520.0);
        assert_eq!(result.total_annual_benefit, 3_120.0);
    }

    #[test]
    fn zero_inputs_give_zero_result() {
        let result = fallback_estimate(EstimatorInputs { headcount: 0, hourly_wage: 0.0 });
        assert_eq!(result.total_annual_benefit, 0.0);
        assert!(result.weekly_hours_saved >= 0.0);
    }
}
