use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::estimator::{EstimatorInputs, EstimatorResult};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("server reported failure")]
    Rejected,
}

/// Remote savings calculation.
pub trait EstimationGateway {
    fn calculate(
        &self,
        inputs: EstimatorInputs,
    ) -> LocalBoxFuture<'static, Result<EstimatorResult, GatewayError>>;
}

/// Remote lead intake. Resolves to the confirmation message to show.
pub trait SubmissionGateway {
    fn submit(
        &self,
        request: QuickAnalysisRequest,
    ) -> LocalBoxFuture<'static, Result<String, GatewayError>>;
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiRequest {
    employees: u32,
    hourly_rate: f64,
}

impl From<EstimatorInputs> for RoiRequest {
    fn from(inputs: EstimatorInputs) -> Self {
        Self {
            employees: inputs.headcount,
            hourly_rate: inputs.hourly_wage,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RoiResponse {
    #[serde(default)]
    success: bool,
    roi_data: Option<RoiData>,
}

#[derive(Deserialize, Debug)]
struct RoiData {
    weekly_hours_saved: f64,
    annual_savings: f64,
    additional_revenue: f64,
    total_annual_benefit: f64,
}

impl RoiResponse {
    pub fn into_result(self) -> Result<EstimatorResult, GatewayError> {
        if !self.success {
            return Err(GatewayError::Rejected);
        }
        let data = self
            .roi_data
            .ok_or_else(|| GatewayError::Malformed("missing roi_data".to_string()))?;
        let result = EstimatorResult {
            weekly_hours_saved: data.weekly_hours_saved,
            annual_savings: data.annual_savings,
            additional_revenue: data.additional_revenue,
            total_annual_benefit: data.total_annual_benefit,
        };
        let figures = [
            result.weekly_hours_saved,
            result.annual_savings,
            result.additional_revenue,
            result.total_annual_benefit,
        ];
        if figures.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(GatewayError::Malformed("negative figure in roi_data".to_string()));
        }
        Ok(result)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuickAnalysisRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub budget: String,
    pub employees: String,
    pub timeline: String,
    pub challenges: String,
    pub industry: String,
}

#[derive(Deserialize, Debug)]
pub struct QuickAnalysisResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

impl QuickAnalysisResponse {
    pub fn into_message(self) -> Result<String, GatewayError> {
        if !self.success {
            return Err(GatewayError::Rejected);
        }
        match self.message {
            Some(message) if !message.trim().is_empty() => Ok(message),
            _ => Err(GatewayError::Malformed("missing message".to_string())),
        }
    }
}

/// Both gateways talking to the backend over `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl EstimationGateway for HttpGateway {
    fn calculate(
        &self,
        inputs: EstimatorInputs,
    ) -> LocalBoxFuture<'static, Result<EstimatorResult, GatewayError>> {
        async move {
            let request = Request::post(&config::endpoint(config::ROI_CALCULATE_PATH))
                .json(&RoiRequest::from(inputs))
                .map_err(|e| GatewayError::Network(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                gloo_console::error!("ROI calculation failed:", e.to_string());
                GatewayError::Network(e.to_string())
            })?;

            if !response.ok() {
                return Err(GatewayError::Status(response.status()));
            }

            response
                .json::<RoiResponse>()
                .await
                .map_err(|e| GatewayError::Malformed(e.to_string()))?
                .into_result()
        }
        .boxed_local()
    }
}

impl SubmissionGateway for HttpGateway {
    fn submit(
        &self,
        body: QuickAnalysisRequest,
    ) -> LocalBoxFuture<'static, Result<String, GatewayError>> {
        async move {
            let request = Request::post(&config::endpoint(config::QUICK_ANALYSIS_PATH))
                .json(&body)
                .map_err(|e| GatewayError::Network(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                gloo_console::error!("Form submission failed:", e.to_string());
                GatewayError::Network(e.to_string())
            })?;

            if !response.ok() {
                return Err(GatewayError::Status(response.status()));
            }

            response
                .json::<QuickAnalysisResponse>()
                .await
                .map_err(|e| GatewayError::Malformed(e.to_string()))?
                .into_message()
        }
        .boxed_local()
    }
}

/// The gateway pair handed to the page components.
#[derive(Clone)]
pub struct Gateways {
    pub estimation: Rc<dyn EstimationGateway>,
    pub submission: Rc<dyn SubmissionGateway>,
}

impl Gateways {
    pub fn http() -> Self {
        Self {
            estimation: Rc::new(HttpGateway),
            submission: Rc::new(HttpGateway),
        }
    }
}

impl PartialEq for Gateways {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.estimation, &other.estimation)
            && Rc::ptr_eq(&self.submission, &other.submission)
    }
}
