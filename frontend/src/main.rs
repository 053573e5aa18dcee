use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod api;
mod catalog;
mod config;
mod estimator;
mod utils;
mod wizard;
mod pages {
    pub mod countdown;
    pub mod faq;
    pub mod landing;
}

use api::Gateways;
use catalog::Catalog;
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">{"PISTA. Consulting"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#roi" class="nav-link" onclick={close_menu.clone()}>{"Savings"}</a>
                    <a href="#success" class="nav-link" onclick={close_menu.clone()}>{"Success story"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <a href="#contact" class="nav-login-button" onclick={close_menu}>{"Free analysis"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| Catalog::standard(), ());
    let gateways = use_memo(|_| Gateways::http(), ());

    html! {
        <>
            <style>{STYLES}</style>
            <Nav />
            <Landing catalog={catalog} gateways={(*gateways).clone()} />
        </>
    }
}

const STYLES: &str = r#"
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #0f172a; background: #fff; }
    .top-nav { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.95); border-bottom: 1px solid #e2e8f0; }
    .nav-content { max-width: 1100px; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; height: 56px; padding: 0 1rem; }
    .nav-logo { font-weight: 700; font-size: 1.1rem; color: #0f172a; text-decoration: none; }
    .nav-right { display: flex; gap: 1.25rem; align-items: center; }
    .nav-link { color: #475569; text-decoration: none; }
    .nav-login-button, .cta-button { background: #dc2626; color: #fff; border: none; border-radius: 6px; padding: 0.6rem 1.2rem; font-weight: 600; cursor: pointer; text-decoration: none; }
    .cta-button:disabled, .secondary-button:disabled { opacity: 0.5; pointer-events: none; }
    .secondary-button { background: #fff; color: #334155; border: 1px solid #cbd5e1; border-radius: 6px; padding: 0.6rem 1.2rem; cursor: pointer; }
    .burger-menu { display: none; background: none; border: none; }
    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: #0f172a; }
    section { max-width: 1100px; margin: 0 auto; padding: 3rem 1rem; }
    .hero { text-align: center; padding: 5rem 1rem; }
    .hero h1 { font-size: 2.5rem; margin-bottom: 1rem; }
    .hero-subtitle { font-size: 1.2rem; color: #475569; }
    .section-heading { text-align: center; margin-bottom: 2rem; }
    .card { border: 1px solid #e2e8f0; border-radius: 8px; padding: 2rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); background: #fff; }
    .countdown-banner { background: #dc2626; color: #fff; display: flex; justify-content: center; align-items: center; gap: 1rem; padding: 0.75rem; flex-wrap: wrap; }
    .countdown { display: flex; gap: 0.75rem; }
    .countdown-unit { display: flex; flex-direction: column; align-items: center; }
    .countdown-value { font-weight: 700; font-size: 1.25rem; font-variant-numeric: tabular-nums; }
    .countdown-label { font-size: 0.7rem; text-transform: uppercase; }
    .roi-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    .roi-inputs label { display: block; margin-bottom: 1rem; font-size: 0.9rem; color: #334155; }
    .roi-inputs input { display: block; width: 100%; margin-top: 0.4rem; padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 6px; }
    .roi-results { background: linear-gradient(135deg, #f0fdf4, #eff6ff); border-radius: 8px; padding: 1.5rem; }
    .roi-row { display: flex; justify-content: space-between; margin: 0.75rem 0; }
    .roi-value { font-weight: 700; }
    .roi-value.positive { color: #16a34a; }
    .roi-value.revenue { color: #2563eb; }
    .roi-value.total { color: #dc2626; font-size: 1.5rem; }
    .roi-note { font-size: 0.75rem; color: #64748b; }
    .roi-cta, .disclaimer { text-align: center; margin-top: 1.5rem; color: #64748b; font-size: 0.85rem; }
    .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
    .pricing-card.popular { border: 2px solid #dc2626; }
    .popular-badge, .badge { background: #fee2e2; color: #b91c1c; border-radius: 999px; padding: 0.2rem 0.7rem; font-size: 0.75rem; font-weight: 600; }
    .price { font-size: 2rem; font-weight: 700; margin-right: 0.5rem; }
    .pricing-card ul { list-style: none; padding: 0; }
    .lead-card { max-width: 640px; margin: 0 auto; }
    .progress-labels { display: flex; justify-content: space-between; font-size: 0.85rem; color: #475569; margin-bottom: 0.5rem; }
    .progress-track { background: #e2e8f0; border-radius: 999px; height: 8px; }
    .progress-bar { background: #dc2626; border-radius: 999px; height: 8px; transition: width 0.3s; }
    .form-field { margin-bottom: 1rem; }
    .form-field label { display: block; font-size: 0.9rem; font-weight: 500; margin-bottom: 0.4rem; }
    .form-field input, .form-field select { width: 100%; padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 6px; box-sizing: border-box; }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .invalid { border-color: #ef4444 !important; background: #fef2f2; }
    .field-error { color: #dc2626; font-size: 0.85rem; margin-top: 0.25rem; }
    .challenge-list { border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem; }
    .challenge-option { display: flex; gap: 0.75rem; align-items: center; padding: 0.4rem; cursor: pointer; }
    .form-actions { display: flex; justify-content: space-between; margin-top: 2rem; }
    .form-actions .cta-button:only-child { margin-left: auto; }
    .notice { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1.5rem; }
    .notice button { background: none; border: none; cursor: pointer; }
    .success-message { background: #f0fdf4; color: #166534; }
    .error-message { background: #fef2f2; color: #991b1b; }
    .loading-spinner { display: inline-block; width: 14px; height: 14px; margin-right: 0.5rem; border: 2px solid rgba(255,255,255,.3); border-radius: 50%; border-top-color: #fff; animation: spin 1s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }
    .faq-item { border-bottom: 1px solid #e2e8f0; }
    .faq-question { width: 100%; display: flex; justify-content: space-between; background: none; border: none; padding: 1rem 0; font-size: 1rem; font-weight: 600; cursor: pointer; text-align: left; }
    .faq-answer { color: #475569; padding-bottom: 1rem; }
    .footer { text-align: center; padding: 2rem; color: #64748b; border-top: 1px solid #e2e8f0; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 56px; left: 0; right: 0; background: #fff; padding: 1rem; }
        .roi-grid, .pricing-grid, .form-row { grid-template-columns: 1fr; }
        .hero h1 { font-size: 1.8rem; }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
