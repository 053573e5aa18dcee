use std::rc::Rc;

use yew::prelude::*;
use web_sys::window;

use crate::api::Gateways;
use crate::catalog::{Catalog, PricingTier, SuccessStory};
use crate::estimator::view::RoiCalculator;
use crate::pages::countdown::OfferCountdown;
use crate::pages::faq::Faq;
use crate::wizard::view::LeadForm;

pub const LEAD_FORM_ANCHOR: &str = "contact";

fn scroll_to(anchor: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    {
        element.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub catalog: Rc<Catalog>,
    pub gateways: Gateways,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let catalog = props.catalog.clone();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let to_form = Callback::from(|_: ()| scroll_to(LEAD_FORM_ANCHOR));
    let to_form_click = {
        let to_form = to_form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            to_form.emit(());
        })
    };

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Digitalize your business. Without the software chaos."}</h1>
                <p class="hero-subtitle">
                    {"One integrated system instead of five separate tools, set up by consultants who stay until it works."}
                </p>
                <button class="cta-button hero-cta" onclick={to_form_click.clone()}>
                    {"Get your free analysis"}
                </button>
            </section>

            <OfferCountdown start={catalog.offer_countdown} />

            <RoiCalculator gateways={props.gateways.clone()} on_request_analysis={to_form} />

            <section id="success" class="stories-section">
                <h2>{"How a 15-person contractor reached six-figure profits"}</h2>
                { for catalog.stories.iter().map(story_card) }
            </section>

            <section id="pricing" class="pricing-section">
                <h2>{"Transparent packages"}</h2>
                <div class="pricing-grid">
                    { for catalog.pricing.iter().map(|tier| pricing_card(tier, to_form_click.clone())) }
                </div>
            </section>

            <LeadForm catalog={catalog.clone()} gateways={props.gateways.clone()} />

            <Faq entries={catalog.faqs.clone()} />

            <footer class="footer">
                <p>{"Free analysis • No obligation • Answer within 24 hours"}</p>
            </footer>
        </div>
    }
}

fn story_card(story: &SuccessStory) -> Html {
    html! {
        <div class="card story-card">
            <div class="story-company">
                <h3>{story.company}</h3>
                <p>{story.industry}</p>
                <p>{format!("{} employees", story.employees)}</p>
            </div>
            <div class="story-details">
                <h4>{"Challenge"}</h4>
                <p>{story.challenge}</p>
                <h4>{"Solution"}</h4>
                <p>{story.solution}</p>
                <div class="story-results">
                    <span class="badge">{story.result}</span>
                    <span class="badge">{story.savings}</span>
                </div>
                <blockquote>
                    {format!("\"{}\"", story.quote)}
                    <footer>{format!("{}, {}", story.name, story.role)}</footer>
                </blockquote>
            </div>
        </div>
    }
}

fn pricing_card(tier: &PricingTier, on_choose: Callback<MouseEvent>) -> Html {
    html! {
        <div class={classes!("card", "pricing-card", tier.popular.then(|| "popular"))}>
            if tier.popular {
                <span class="popular-badge">{"Most popular"}</span>
            }
            <h3>{tier.name}</h3>
            <p class="tier-description">{tier.description}</p>
            <div class="tier-price">
                <span class="price">{tier.price}</span>
                <span class="period">{tier.period}</span>
            </div>
            <p class="tier-justification">{tier.justification}</p>
            <ul>
                { for tier.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <p class="tier-guarantee">{tier.guarantee}</p>
            if let Some(savings) = tier.savings {
                <p class="tier-savings">{savings}</p>
            }
            <button class="cta-button" onclick={on_choose}>{"Request free consultation"}</button>
        </div>
    }
}
