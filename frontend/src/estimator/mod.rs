mod formula;
pub mod view;

use log::{debug, warn};

use crate::api::EstimationGateway;

pub use formula::{fallback_estimate, EstimatorInputs, EstimatorResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateSource {
    Remote,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub result: EstimatorResult,
    pub source: EstimateSource,
}

impl Estimate {
    pub fn local(inputs: EstimatorInputs) -> Self {
        Self {
            result: fallback_estimate(inputs),
            source: EstimateSource::Fallback,
        }
    }
}

/// An outbound calculation, tagged with the sequence number it was issued under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateRequest {
    pub seq: u64,
    pub inputs: EstimatorInputs,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateResolution {
    pub seq: u64,
    pub estimate: Estimate,
}

/// Inputs and the currently displayed estimate.
///
/// Every input change issues a new request with a higher sequence number.
/// Only the resolution for the most recently issued request is applied, so a
/// slow response for older inputs can never overwrite a newer result.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimator {
    inputs: EstimatorInputs,
    current: Estimate,
    latest_seq: u64,
}

impl Estimator {
    pub fn new(inputs: EstimatorInputs) -> Self {
        Self {
            inputs,
            current: Estimate::local(inputs),
            latest_seq: 0,
        }
    }

    pub fn inputs(&self) -> EstimatorInputs {
        self.inputs
    }

    pub fn estimate(&self) -> Estimate {
        self.current
    }

    /// Returns `None` when the headcount did not actually change.
    pub fn set_headcount(&mut self, headcount: u32) -> Option<EstimateRequest> {
        if self.inputs.headcount == headcount {
            return None;
        }
        self.inputs.headcount = headcount;
        Some(self.refresh())
    }

    /// Returns `None` when the wage did not actually change.
    pub fn set_hourly_wage(&mut self, hourly_wage: f64) -> Option<EstimateRequest> {
        if self.inputs.hourly_wage == hourly_wage {
            return None;
        }
        self.inputs.hourly_wage = hourly_wage;
        Some(self.refresh())
    }

    /// Issues a request for the current inputs without changing them.
    pub fn refresh(&mut self) -> EstimateRequest {
        self.latest_seq += 1;
        EstimateRequest {
            seq: self.latest_seq,
            inputs: self.inputs,
        }
    }

    /// Applies a resolution if it belongs to the latest request. Returns
    /// whether the displayed estimate changed hands.
    pub fn apply(&mut self, resolution: EstimateResolution) -> bool {
        if resolution.seq != self.latest_seq {
            debug!(
                "discarding stale estimate #{} (latest is #{})",
                resolution.seq, self.latest_seq
            );
            return false;
        }
        self.current = resolution.estimate;
        true
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(EstimatorInputs::default())
    }
}

/// Asks the remote service first and falls back to the local formula on any
/// failure. Always produces a complete estimate.
pub async fn resolve_estimate<G>(gateway: &G, request: EstimateRequest) -> EstimateResolution
where
    G: EstimationGateway + ?Sized,
{
    let estimate = match gateway.calculate(request.inputs).await {
        Ok(result) => Estimate {
            result,
            source: EstimateSource::Remote,
        },
        Err(e) => {
            warn!("ROI calculation failed, using local formula: {}", e);
            Estimate::local(request.inputs)
        }
    };
    EstimateResolution {
        seq: request.seq,
        estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GatewayError;
    use futures::executor::block_on;
    use super::formula::{DEFAULT_HEADCOUNT, DEFAULT_HOURLY_WAGE};
    use futures::future::{FutureExt, LocalBoxFuture};
    use pretty_assertions::assert_eq;

    struct FixedGateway(Result<EstimatorResult, GatewayError>);

    impl EstimationGateway for FixedGateway {
        fn calculate(
            &self,
            _inputs: EstimatorInputs,
        ) -> LocalBoxFuture<'static, Result<EstimatorResult, GatewayError>> {
            let outcome = self.0.clone();
            async move { outcome }.boxed_local()
        }
    }

    fn remote_result() -> EstimatorResult {
        EstimatorResult {
            weekly_hours_saved: 1.0,
            annual_savings: 2.0,
            additional_revenue: 3.0,
            total_annual_benefit: 4.0,
        }
    }

    #[test]
    fn starts_with_local_estimate_for_defaults() {
        let estimator = Estimator::default();
        assert_eq!(estimator.inputs(), EstimatorInputs::default());
        assert_eq!(estimator.estimate().source, EstimateSource::Fallback);
        assert_eq!(estimator.estimate().result.total_annual_benefit, 163_800.0);
    }

    #[test]
    fn remote_result_replaces_estimate_wholesale() {
        let mut estimator = Estimator::default();
        let request = estimator.set_headcount(10).unwrap();
        let resolution = block_on(resolve_estimate(&FixedGateway(Ok(remote_result())), request));

        assert!(estimator.apply(resolution));
        assert_eq!(
            estimator.estimate(),
            Estimate {
                result: remote_result(),
                source: EstimateSource::Remote,
            }
        );
    }

    #[test]
    fn gateway_failure_falls_back_to_formula() {
        let mut estimator = Estimator::default();
        let request = estimator.set_hourly_wage(40.0).unwrap();
        let failing = FixedGateway(Err(GatewayError::Network("offline".to_string())));
        let resolution = block_on(resolve_estimate(&failing, request));

        assert!(estimator.apply(resolution));
        assert_eq!(estimator.estimate().source, EstimateSource::Fallback);
        assert_eq!(
            estimator.estimate().result,
            fallback_estimate(EstimatorInputs {
                headcount: 50,
                hourly_wage: 40.0,
            })
        );
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut estimator = Estimator::default();
        let older = estimator.set_headcount(60).unwrap();
        let newer = estimator.set_headcount(70).unwrap();
        assert!(newer.seq > older.seq);

        let failing = FixedGateway(Err(GatewayError::Status(502)));
        let newer_resolution = block_on(resolve_estimate(&failing, newer));
        let older_resolution = block_on(resolve_estimate(&FixedGateway(Ok(remote_result())), older));

        // The newer request resolves first, the older one arrives late.
        assert!(estimator.apply(newer_resolution));
        assert!(!estimator.apply(older_resolution));
        assert_eq!(
            estimator.estimate().result,
            fallback_estimate(EstimatorInputs {
                headcount: 70,
                hourly_wage: 35.0,
            })
        );
    }

    #[test]
    fn unchanged_input_issues_no_request() {
        let mut estimator = Estimator::default();
        assert_eq!(estimator.set_headcount(DEFAULT_HEADCOUNT), None);
        assert_eq!(estimator.set_hourly_wage(DEFAULT_HOURLY_WAGE), None);
        assert_eq!(estimator.refresh().seq, 1);
    }
}
