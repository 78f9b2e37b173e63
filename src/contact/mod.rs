//! Contact submission subsystem
//!
//! This module contains the contact form state, keyboard input routing,
//! and the HTTP relay client plus the mailbox glue between the submit
//! task and the draw loop.

pub mod form;
pub mod input;
pub mod relay;

pub use form::{ContactForm, FormField, SubmitStatus};
pub use input::apply_edit_key;
pub use relay::{
    spawn_submit, OutboundMessage, RelayClient, SubmitMailbox, SubmitResult,
    NOT_CONFIGURED_MESSAGE,
};
