//! Back-office Domain Concerns

pub mod analytics;
pub mod categories;
pub mod products;
pub mod promotions;
pub mod reels;
pub mod wheel;
