//! Newsletter signup: form state, subscription client and the view.

mod client;
pub use client::{SubscribeClient, SubscribeError, SubscribeOutcome, SubscribeRequest};

mod form;
pub use form::{NewsletterForm, StatusMessage};

mod view;
pub use view::Newsletter;
