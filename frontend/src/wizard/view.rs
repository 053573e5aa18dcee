use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use log::warn;

use crate::api::Gateways;
use crate::catalog::{Catalog, SelectOption};
use crate::wizard::{
    submit_lead, Effect, Field, NoticeTone, Step, WizardAction, WizardState, SubmissionPolicy,
};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub catalog: Rc<Catalog>,
    pub gateways: Gateways,
    #[prop_or_default]
    pub policy: SubmissionPolicy,
}

pub struct LeadForm {
    state: WizardState,
}

impl Component for LeadForm {
    type Message = WizardAction;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let WizardAction::ToggleChallenge(label) = &msg {
            if !ctx.props().catalog.is_known_challenge(label) {
                warn!("ignoring unknown challenge {:?}", label);
                return false;
            }
        }

        let (state, effect) = std::mem::take(&mut self.state).reduce(msg);
        self.state = state;
        if let Effect::Submit(request) = effect {
            let gateway = ctx.props().gateways.submission.clone();
            let policy = ctx.props().policy;
            ctx.link().send_future(async move {
                WizardAction::SubmissionResolved(submit_lead(gateway.as_ref(), request, policy).await)
            });
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.state.step;
        let submitting = self.state.is_submitting();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            WizardAction::Advance
        });
        let on_back = ctx.link().callback(|_: MouseEvent| WizardAction::Back);

        let submit_label = match (step.is_last(), submitting) {
            (true, true) => "Sending...",
            (true, false) => "Request free analysis",
            (false, true) => "Processing...",
            (false, false) => "Next",
        };

        html! {
            <section id="contact" class="lead-section">
                <div class="card lead-card">
                    <div class="section-heading">
                        <h2>{"Get started today"}</h2>
                        <p>{"Free analysis in 3 simple steps"}</p>
                    </div>

                    { self.view_notice(ctx) }

                    <div class="progress">
                        <div class="progress-labels">
                            <span>{format!("Step {} of {}", step.number(), Step::COUNT)}</span>
                            <span>{format!("{}% complete", step.progress_percent())}</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-bar" style={format!("width: {}%;", step.progress_percent())}></div>
                        </div>
                    </div>

                    <form {onsubmit}>
                        <h3>{step.title()}</h3>
                        {
                            match step {
                                Step::Qualification => self.view_qualification(ctx),
                                Step::Contact => self.view_contact(ctx),
                                Step::Challenges => self.view_challenges(ctx),
                            }
                        }
                        <div class="form-actions">
                            if step.previous().is_some() {
                                <button type="button" class="secondary-button" onclick={on_back} disabled={submitting}>
                                    {"Back"}
                                </button>
                            }
                            <button type="submit" class="cta-button" disabled={submitting}>
                                if submitting {
                                    <span class="loading-spinner"></span>
                                }
                                {submit_label}
                            </button>
                        </div>
                    </form>
                </div>
            </section>
        }
    }
}

impl LeadForm {
    fn view_notice(&self, ctx: &Context<Self>) -> Html {
        let Some(notice) = self.state.notice.as_ref() else {
            return html! {};
        };
        let class = match notice.tone {
            NoticeTone::Confirmed | NoticeTone::Degraded => "success-message",
            NoticeTone::Failed => "error-message",
        };
        html! {
            <div class={classes!("notice", class)}>
                {&notice.message}
                <button type="button" onclick={ctx.link().callback(|_| WizardAction::DismissNotice)}>
                    {"✕"}
                </button>
            </div>
        }
    }

    fn view_error(&self, field: Field) -> Html {
        match self.state.error(field) {
            Some(message) => html! { <div class="field-error">{"⚠ "}{message}</div> },
            None => html! {},
        }
    }

    fn view_select(&self, ctx: &Context<Self>, field: Field, label: &str, options: &[SelectOption]) -> Html {
        let current = self.state.fields.text(field).to_string();
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            WizardAction::EditField(field, select.value())
        });
        html! {
            <div class="form-field">
                <label for={field.as_str()}>{label}{" *"}</label>
                <select
                    id={field.as_str()}
                    class={classes!(self.state.error(field).map(|_| "invalid"))}
                    {onchange}
                >
                    <option value="" selected={current.is_empty()}>{"Please choose..."}</option>
                    { for options.iter().map(|option| html! {
                        <option value={option.value} selected={current == option.value}>{option.label}</option>
                    }) }
                </select>
                { self.view_error(field) }
            </div>
        }
    }

    fn view_input(&self, ctx: &Context<Self>, field: Field, label: &str, input_type: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WizardAction::EditField(field, input.value())
        });
        html! {
            <div class="form-field">
                <label for={field.as_str()}>{label}{" *"}</label>
                <input
                    id={field.as_str()}
                    type={input_type}
                    class={classes!(self.state.error(field).map(|_| "invalid"))}
                    value={self.state.fields.text(field).to_string()}
                    {placeholder}
                    {oninput}
                />
                { self.view_error(field) }
            </div>
        }
    }

    fn view_qualification(&self, ctx: &Context<Self>) -> Html {
        let catalog = &ctx.props().catalog;
        html! {
            <>
                { self.view_select(ctx, Field::Budget, "What is your annual IT budget?", &catalog.budget_options) }
                { self.view_select(ctx, Field::Employees, "How many employees does your company have?", &catalog.employee_options) }
                { self.view_select(ctx, Field::Timeline, "When would you like to start?", &catalog.timeline_options) }
            </>
        }
    }

    fn view_contact(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <div class="form-row">
                    { self.view_input(ctx, Field::Name, "First name", "text", "Your first name") }
                    { self.view_input(ctx, Field::Company, "Company", "text", "Your company") }
                </div>
                { self.view_input(ctx, Field::Email, "Email address", "email", "you@company.com") }
                { self.view_input(ctx, Field::Phone, "Phone number", "tel", "+49 123 456 789") }
            </>
        }
    }

    fn view_challenges(&self, ctx: &Context<Self>) -> Html {
        let catalog = &ctx.props().catalog;
        let has_error = self.state.error(Field::Challenges).is_some();
        html! {
            <>
                <p class="hint">{"Select everything that applies: *"}</p>
                <div class={classes!("challenge-list", has_error.then(|| "invalid"))}>
                    { for catalog.challenges.iter().map(|label| {
                        let label = *label;
                        let onchange = ctx.link().callback(move |_: Event| WizardAction::ToggleChallenge(label.to_string()));
                        html! {
                            <label class="challenge-option">
                                <input
                                    type="checkbox"
                                    checked={self.state.fields.has_challenge(label)}
                                    {onchange}
                                />
                                <span>{label}</span>
                            </label>
                        }
                    }) }
                </div>
                { self.view_error(Field::Challenges) }
            </>
        }
    }
}
