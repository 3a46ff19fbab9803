//! Administrator sessions.

pub mod models;
mod service;

pub use models::{Credentials, Session};
pub use service::*;
