//! Backoffice prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    analytics::{SalesPoint, SalesSummary},
    catalog::{Catalog, Category, CategoryId, Product, ProductId, ProductLookup},
    ids::TypedId,
    wheel::{WheelConfig, WheelConfigError, WheelSegment},
};

pub use crate::promotions::prelude::*;
