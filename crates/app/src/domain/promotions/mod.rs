//! Promotions

mod editor;
pub mod models;
mod service;

pub use editor::*;
pub use service::*;
