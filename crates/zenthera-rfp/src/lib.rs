//! Request for Proposal form: the draft, its edit/refine/submit lifecycle and
//! the confirmation shown after submission.

mod config;
mod confirmation;
mod controller;

pub use config::{FormConfig, ResetPolicy};
pub use confirmation::Confirmation;
pub use controller::{DragEvent, FormController, Phase, RefineTicket};
