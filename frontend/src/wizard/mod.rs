//! The three-step lead qualification form.

mod fields;
mod state;
mod submit;
mod validate;
pub mod view;

pub use fields::{Field, Step};
pub use state::{Effect, NoticeTone, WizardAction, WizardState};
pub use submit::{submit_lead, SubmissionPolicy};
