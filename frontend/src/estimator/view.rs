use yew::prelude::*;
use web_sys::HtmlInputElement;
use log::info;

use crate::api::Gateways;
use crate::estimator::{resolve_estimate, EstimateRequest, EstimateResolution, EstimateSource, Estimator};
use crate::utils::{format_euro, format_hours, parse_headcount, parse_hourly_wage};

#[derive(Properties, PartialEq)]
pub struct RoiCalculatorProps {
    pub gateways: Gateways,
    #[prop_or_default]
    pub on_request_analysis: Callback<()>,
}

pub enum RoiMsg {
    SetHeadcount(String),
    SetHourlyWage(String),
    Resolved(EstimateResolution),
}

pub struct RoiCalculator {
    estimator: Estimator,
}

impl RoiCalculator {
    fn dispatch(&self, ctx: &Context<Self>, request: EstimateRequest) {
        let gateway = ctx.props().gateways.estimation.clone();
        ctx.link().send_future(async move {
            RoiMsg::Resolved(resolve_estimate(gateway.as_ref(), request).await)
        });
    }
}

impl Component for RoiCalculator {
    type Message = RoiMsg;
    type Properties = RoiCalculatorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut estimator = Estimator::default();
        // The panel shows the local figures until the first remote answer lands.
        let request = estimator.refresh();
        let calculator = Self { estimator };
        calculator.dispatch(ctx, request);
        calculator
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RoiMsg::SetHeadcount(raw) => {
                if let Some(request) = self.estimator.set_headcount(parse_headcount(&raw)) {
                    self.dispatch(ctx, request);
                }
                true
            }
            RoiMsg::SetHourlyWage(raw) => {
                if let Some(request) = self.estimator.set_hourly_wage(parse_hourly_wage(&raw)) {
                    self.dispatch(ctx, request);
                }
                true
            }
            RoiMsg::Resolved(resolution) => {
                let applied = self.estimator.apply(resolution);
                if applied && resolution.estimate.source == EstimateSource::Fallback {
                    info!("Showing locally calculated estimate #{}", resolution.seq);
                }
                applied
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let inputs = self.estimator.inputs();
        let estimate = self.estimator.estimate();
        let result = estimate.result;

        let on_headcount = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RoiMsg::SetHeadcount(input.value())
        });
        let on_wage = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RoiMsg::SetHourlyWage(input.value())
        });
        let on_request = {
            let cb = ctx.props().on_request_analysis.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };

        html! {
            <section id="roi" class="roi-section">
                <div class="section-heading">
                    <h2>{"Your personal savings potential"}</h2>
                    <p>{"Calculate what you could save in 30 seconds"}</p>
                </div>
                <div class="card roi-card">
                    <div class="roi-grid">
                        <div class="roi-inputs">
                            <h3>{"Your numbers"}</h3>
                            <label>
                                {"Number of employees"}
                                <input
                                    type="number"
                                    min="0"
                                    value={inputs.headcount.to_string()}
                                    oninput={on_headcount}
                                />
                            </label>
                            <label>
                                {"Average hourly wage (€)"}
                                <input
                                    type="number"
                                    min="0"
                                    value={inputs.hourly_wage.to_string()}
                                    oninput={on_wage}
                                />
                            </label>
                        </div>
                        <div class="roi-results">
                            <h3>{"Your savings potential"}</h3>
                            <div class="roi-row">
                                <span>{"Hours saved per week:"}</span>
                                <span class="roi-value positive">{format_hours(result.weekly_hours_saved)}</span>
                            </div>
                            <div class="roi-row">
                                <span>{"Annual cost savings:"}</span>
                                <span class="roi-value positive">{format_euro(result.annual_savings)}</span>
                            </div>
                            <div class="roi-row">
                                <span>{"Additional revenue:"}</span>
                                <span class="roi-value revenue">{format_euro(result.additional_revenue)}</span>
                            </div>
                            <hr />
                            <div class="roi-row total">
                                <span>{"Total benefit per year:"}</span>
                                <span class="roi-value total">{format_euro(result.total_annual_benefit)}</span>
                            </div>
                            if estimate.source == EstimateSource::Fallback {
                                <p class="roi-note">{"Estimate calculated locally"}</p>
                            }
                        </div>
                    </div>
                    <div class="roi-cta">
                        <button class="cta-button" onclick={on_request}>
                            {"Request a free detailed analysis"}
                        </button>
                        <p class="disclaimer">{"No obligation • Free • Answer within 24h"}</p>
                    </div>
                </div>
            </section>
        }
    }
}
