use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { days, hours, minutes, seconds }
    }

    /// One second later. Stays at zero once it gets there.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self { seconds: self.seconds - 1, ..self }
        } else if self.minutes > 0 {
            Self { minutes: self.minutes - 1, seconds: 59, ..self }
        } else if self.hours > 0 {
            Self { hours: self.hours - 1, minutes: 59, seconds: 59, ..self }
        } else if self.days > 0 {
            Self { days: self.days - 1, hours: 23, minutes: 59, seconds: 59 }
        } else {
            self
        }
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::new(0, 0, 0, 0)
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OfferCountdownProps {
    pub start: Countdown,
}

#[function_component(OfferCountdown)]
pub fn offer_countdown(props: &OfferCountdownProps) -> Html {
    let start = props.start;
    let remaining = use_reducer(move || start);

    {
        let dispatcher = remaining.dispatcher();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(1_000, move || dispatcher.dispatch(CountdownAction::Tick));
            // Dropping the interval on unmount stops it.
            move || drop(interval)
        }, ());
    }

    let unit = |value: u32, label: &'static str| html! {
        <div class="countdown-unit">
            <span class="countdown-value">{format!("{:02}", value)}</span>
            <span class="countdown-label">{label}</span>
        </div>
    };

    html! {
        <div class="countdown-banner">
            if remaining.is_expired() {
                <span>{"This offer has ended."}</span>
            } else {
                <span class="countdown-title">{"Free analysis offer ends in:"}</span>
                <div class="countdown">
                    { unit(remaining.days, "Days") }
                    { unit(remaining.hours, "Hours") }
                    { unit(remaining.minutes, "Min") }
                    { unit(remaining.seconds, "Sec") }
                </div>
            }
        </div>
    }
}
