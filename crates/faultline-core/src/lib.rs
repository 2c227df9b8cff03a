//! Error classification for HTTP APIs
//!
//! Maps internal failures to a [`ClassifiedError`] carrying a [`Category`],
//! a stable code, a message, optional detail and an HTTP status derived from
//! the category.

#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod category;
mod classify;
mod error;
mod wire;
mod wrap;

pub use category::Category;
pub use classify::*;
pub use error::{Cause, ClassifiedError, HttpError};
pub use wrap::*;
