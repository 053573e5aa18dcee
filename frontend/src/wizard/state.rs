use log::{debug, info};

use crate::api::QuickAnalysisRequest;
use super::fields::{Field, LeadFields, Step};
use super::submit::SubmissionOutcome;
use super::validate::{validate, FieldErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Confirmed,
    Degraded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardAction {
    EditField(Field, String),
    ToggleChallenge(String),
    Advance,
    Back,
    SubmissionResolved(SubmissionOutcome),
    DismissNotice,
}

/// Work the reducer asks its owner to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Submit(QuickAnalysisRequest),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub fields: LeadFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub notice: Option<Notice>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// `(state, action) -> state`, plus whatever effect the action requires.
    pub fn reduce(mut self, action: WizardAction) -> (Self, Effect) {
        let effect = self.apply(action);
        (self, effect)
    }

    pub fn apply(&mut self, action: WizardAction) -> Effect {
        match action {
            WizardAction::EditField(field, value) => self.edit_field(field, value),
            WizardAction::ToggleChallenge(label) => self.toggle_challenge(&label),
            WizardAction::Advance => return self.advance(),
            WizardAction::Back => self.back(),
            WizardAction::SubmissionResolved(outcome) => self.resolve_submission(outcome),
            WizardAction::DismissNotice => self.notice = None,
        }
        Effect::None
    }

    fn edit_field(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        if self.fields.set_text(field, value) {
            self.clear_error_on_edit(field);
        }
    }

    fn toggle_challenge(&mut self, label: &str) {
        if self.is_submitting() || self.step != Step::Challenges {
            return;
        }
        self.fields.toggle_challenge(label);
        self.clear_error_on_edit(Field::Challenges);
    }

    /// An edited field loses its error right away, valid or not. It is only
    /// checked again on the next advance.
    fn clear_error_on_edit(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    fn advance(&mut self) -> Effect {
        if self.is_submitting() {
            debug!("advance ignored, submission already in flight");
            return Effect::None;
        }

        self.errors = validate(self.step, &self.fields);
        if !self.errors.is_empty() {
            debug!("step {} has {} invalid fields", self.step.number(), self.errors.len());
            return Effect::None;
        }

        match self.step.next() {
            Some(next) => {
                info!("advancing to step {}", next.number());
                self.step = next;
                Effect::None
            }
            None => {
                self.status = SubmissionStatus::InFlight;
                self.notice = None;
                Effect::Submit(QuickAnalysisRequest::from(&self.fields))
            }
        }
    }

    fn back(&mut self) {
        if self.is_submitting() {
            return;
        }
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.errors.clear();
        }
    }

    fn resolve_submission(&mut self, outcome: SubmissionOutcome) {
        if !self.is_submitting() {
            debug!("ignoring submission result with nothing in flight");
            return;
        }
        match outcome {
            SubmissionOutcome::Accepted(message) => {
                self.reset(SubmissionStatus::Succeeded, NoticeTone::Confirmed, message);
            }
            SubmissionOutcome::Degraded(message) => {
                self.reset(SubmissionStatus::Failed, NoticeTone::Degraded, message);
            }
            SubmissionOutcome::Failed(message) => {
                self.status = SubmissionStatus::Failed;
                self.notice = Some(Notice { tone: NoticeTone::Failed, message });
            }
        }
    }

    fn reset(&mut self, status: SubmissionStatus, tone: NoticeTone, message: String) {
        *self = Self {
            status,
            notice: Some(Notice { tone, message }),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GatewayError, SubmissionGateway};
    use crate::wizard::submit::{submit_lead, SubmissionPolicy, FALLBACK_CONFIRMATION};
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingGateway {
        calls: Cell<usize>,
        outcome: Result<String, GatewayError>,
    }

    impl CountingGateway {
        fn new(outcome: Result<String, GatewayError>) -> Self {
            Self { calls: Cell::new(0), outcome }
        }
    }

    impl SubmissionGateway for CountingGateway {
        fn submit(
            &self,
            _request: QuickAnalysisRequest,
        ) -> LocalBoxFuture<'static, Result<String, GatewayError>> {
            self.calls.set(self.calls.get() + 1);
            let outcome = self.outcome.clone();
            async move { outcome }.boxed_local()
        }
    }

    /// Runs an action and performs any submission it asks for.
    fn drive(state: &mut WizardState, action: WizardAction, gateway: &CountingGateway) {
        if let Effect::Submit(request) = state.apply(action) {
            let outcome = block_on(submit_lead(gateway, request, SubmissionPolicy::default()));
            state.apply(WizardAction::SubmissionResolved(outcome));
        }
    }

    fn edit(state: &mut WizardState, field: Field, value: &str) {
        state.apply(WizardAction::EditField(field, value.to_string()));
    }

    fn fill_to_step_three(state: &mut WizardState) {
        edit(state, Field::Budget, "25k-50k");
        edit(state, Field::Employees, "51-100");
        edit(state, Field::Timeline, "1-3months");
        assert_eq!(state.apply(WizardAction::Advance), Effect::None);
        edit(state, Field::Name, "Ada");
        edit(state, Field::Company, "ACME GmbH");
        edit(state, Field::Email, "ada@acme.de");
        edit(state, Field::Phone, "+49 89 123456");
        assert_eq!(state.apply(WizardAction::Advance), Effect::None);
        assert_eq!(state.step, Step::Challenges);
    }

    #[test]
    fn empty_first_step_stays_put_with_three_errors() {
        let mut state = WizardState::new();
        let effect = state.apply(WizardAction::Advance);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.step, Step::Qualification);
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn editing_clears_that_fields_error_even_if_still_invalid() {
        let mut state = WizardState::new();
        state.apply(WizardAction::Advance);
        assert!(state.error(Field::Budget).is_some());

        edit(&mut state, Field::Budget, "");
        assert_eq!(state.error(Field::Budget), None);
        assert!(state.error(Field::Employees).is_some());
        assert!(state.error(Field::Timeline).is_some());
    }

    #[test]
    fn reduce_returns_new_state_and_effect() {
        let (state, effect) = WizardState::new()
            .reduce(WizardAction::EditField(Field::Budget, "under-10k".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.fields.budget, "under-10k");
    }

    #[test]
    fn no_challenges_blocks_submission() {
        let gateway = CountingGateway::new(Ok("ok".to_string()));
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);

        drive(&mut state, WizardAction::Advance, &gateway);
        assert_eq!(gateway.calls.get(), 0);
        assert_eq!(state.step, Step::Challenges);
        assert!(state.error(Field::Challenges).is_some());
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn toggling_a_challenge_clears_its_error() {
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);
        state.apply(WizardAction::Advance);
        assert!(state.error(Field::Challenges).is_some());

        state.apply(WizardAction::ToggleChallenge("Lack of transparency and reporting".to_string()));
        assert_eq!(state.error(Field::Challenges), None);
        assert!(state.fields.has_challenge("Lack of transparency and reporting"));
    }

    #[test]
    fn toggling_outside_step_three_does_nothing() {
        let mut state = WizardState::new();
        state.apply(WizardAction::ToggleChallenge("Unclear digitalization strategy".to_string()));
        assert!(state.fields.challenges.is_empty());
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let gateway = CountingGateway::new(Ok("Thanks Ada, talk soon!".to_string()));
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);
        state.apply(WizardAction::ToggleChallenge("High IT costs and license fees".to_string()));

        drive(&mut state, WizardAction::Advance, &gateway);
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(state.step, Step::Qualification);
        assert_eq!(state.fields, LeadFields::default());
        assert!(state.errors.is_empty());
        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert_eq!(
            state.notice,
            Some(Notice {
                tone: NoticeTone::Confirmed,
                message: "Thanks Ada, talk soon!".to_string(),
            })
        );
    }

    #[test]
    fn failed_submission_still_resets_with_fallback_message() {
        let gateway = CountingGateway::new(Err(GatewayError::Network("timeout".to_string())));
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);
        state.apply(WizardAction::ToggleChallenge("Vendor lock-in with current providers".to_string()));

        drive(&mut state, WizardAction::Advance, &gateway);
        assert_eq!(state.step, Step::Qualification);
        assert_eq!(state.fields, LeadFields::default());
        assert_eq!(state.status, SubmissionStatus::Failed);
        let notice = state.notice.expect("a confirmation is shown");
        assert_eq!(notice.tone, NoticeTone::Degraded);
        assert_eq!(notice.message, FALLBACK_CONFIRMATION);
    }

    #[test]
    fn strict_failure_keeps_the_form() {
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);
        state.apply(WizardAction::ToggleChallenge("High IT costs and license fees".to_string()));
        assert!(matches!(state.apply(WizardAction::Advance), Effect::Submit(_)));

        state.apply(WizardAction::SubmissionResolved(SubmissionOutcome::Failed("nope".to_string())));
        assert_eq!(state.step, Step::Challenges);
        assert_eq!(state.fields.name, "Ada");
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert_eq!(state.notice.map(|n| n.tone), Some(NoticeTone::Failed));
    }

    #[test]
    fn advance_while_in_flight_is_a_no_op() {
        let mut state = WizardState::new();
        fill_to_step_three(&mut state);
        state.apply(WizardAction::ToggleChallenge("High IT costs and license fees".to_string()));

        assert!(matches!(state.apply(WizardAction::Advance), Effect::Submit(_)));
        assert!(state.is_submitting());
        let before = state.clone();

        assert_eq!(state.apply(WizardAction::Advance), Effect::None);
        state.apply(WizardAction::Back);
        edit(&mut state, Field::Name, "Eve");
        state.apply(WizardAction::ToggleChallenge("High IT costs and license fees".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn back_from_contact_clears_errors_and_keeps_qualification() {
        let mut state = WizardState::new();
        edit(&mut state, Field::Budget, "over-100k");
        edit(&mut state, Field::Employees, "250+");
        edit(&mut state, Field::Timeline, "planning");
        state.apply(WizardAction::Advance);
        state.apply(WizardAction::Advance);
        assert_eq!(state.errors.len(), 4);

        state.apply(WizardAction::Back);
        assert_eq!(state.step, Step::Qualification);
        assert!(state.errors.is_empty());
        assert_eq!(state.fields.budget, "over-100k");
        assert_eq!(state.fields.employees, "250+");
        assert_eq!(state.fields.timeline, "planning");
    }

    #[test]
    fn back_on_first_step_does_nothing() {
        let mut state = WizardState::new();
        state.apply(WizardAction::Advance);
        state.apply(WizardAction::Back);
        assert_eq!(state.step, Step::Qualification);
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn late_resolution_without_submission_is_ignored() {
        let mut state = WizardState::new();
        state.apply(WizardAction::SubmissionResolved(SubmissionOutcome::Accepted("x".to_string())));
        assert_eq!(state, WizardState::new());
    }
}
