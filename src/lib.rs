#![forbid(unsafe_code)]
//! mailguess — client for the `/validate` email-guessing endpoint
//!
//! [`FormState`] → [`ValidationRequest`] → `POST /validate` →
//! [`ValidationResponse`] → [`ResultsView`].

pub mod client;
pub mod controller;
pub mod form;
pub mod view;

pub use client::{
    ClientError, ClientOptions, DEFAULT_ENDPOINT, HttpReply, HttpTransport, Transport,
    ValidationClient, ValidationResponse,
};
pub use controller::{FormController, ResultsPanel, SubmitOutcome};
pub use form::{FormError, FormState, ValidationRequest, looks_like_domain, tokenize_extras};
pub use view::{Phase, ResultLine, ResultsView, render, render_error};
