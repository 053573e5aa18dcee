use log::{info, warn};

use crate::api::{QuickAnalysisRequest, SubmissionGateway};
use super::fields::LeadFields;

pub const FALLBACK_CONFIRMATION: &str = "Thank you! We will get back to you within 24 hours.";
pub const UNSPECIFIED_INDUSTRY: &str = "Not specified";

/// How a failed lead submission is presented.
///
/// With `degrade_gracefully` a transport failure still looks like a
/// successful submission: the form is cleared and the fallback confirmation
/// is shown. Without it the form is kept and the error is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub degrade_gracefully: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self { degrade_gracefully: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend took the lead and sent a message for the visitor.
    Accepted(String),
    /// The backend failed, the visitor sees the fallback confirmation anyway.
    Degraded(String),
    /// The backend failed and the policy says to tell the visitor.
    Failed(String),
}

impl From<&LeadFields> for QuickAnalysisRequest {
    fn from(fields: &LeadFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            company: fields.company.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            budget: fields.budget.clone(),
            employees: fields.employees.clone(),
            timeline: fields.timeline.clone(),
            challenges: fields
                .challenges
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            industry: UNSPECIFIED_INDUSTRY.to_string(),
        }
    }
}

pub async fn submit_lead<G>(
    gateway: &G,
    request: QuickAnalysisRequest,
    policy: SubmissionPolicy,
) -> SubmissionOutcome
where
    G: SubmissionGateway + ?Sized,
{
    match gateway.submit(request).await {
        Ok(message) => {
            info!("Lead submitted");
            SubmissionOutcome::Accepted(message)
        }
        Err(e) if policy.degrade_gracefully => {
            warn!("Lead submission failed, showing fallback confirmation: {}", e);
            SubmissionOutcome::Degraded(FALLBACK_CONFIRMATION.to_string())
        }
        Err(e) => {
            warn!("Lead submission failed: {}", e);
            SubmissionOutcome::Failed(format!("Your request could not be sent ({}). Please try again.", e))
        }
    }
}
