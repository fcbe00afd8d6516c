//! Command handlers.
//!
//! Each handler takes the shared context (and the session state when it
//! needs it) and produces one [`Output`](crate::Output).

pub(crate) mod inspect;
pub(crate) mod navigation;
