//! Category Models

use serde::Serialize;

pub use backoffice::catalog::{Category, CategoryId};

/// Category fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    pub name: String,
}
