//! Products

pub mod models;
mod service;

pub use service::*;
