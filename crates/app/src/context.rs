//! App Context

use std::sync::Arc;

use crate::{
    client::ApiClient,
    domain::{
        analytics::{AnalyticsService, HttpAnalyticsService},
        categories::{CategoriesService, HttpCategoriesService},
        products::{HttpProductsService, ProductsService},
        promotions::{HttpPromotionsService, PromotionsService},
        reels::{HttpReelsService, ReelsService},
        wheel::{HttpWheelService, WheelService},
    },
    session::{HttpSessionService, SessionService},
};

#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<dyn SessionService>,
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub wheel: Arc<dyn WheelService>,
    pub reels: Arc<dyn ReelsService>,
    pub analytics: Arc<dyn AnalyticsService>,
}

impl AppContext {
    /// Build the HTTP-backed services for one API base URL.
    #[must_use]
    pub fn from_api_url(base_url: impl Into<String>) -> Self {
        let client = ApiClient::new(base_url);

        Self {
            session: Arc::new(HttpSessionService::new(client.clone())),
            categories: Arc::new(HttpCategoriesService::new(client.clone())),
            products: Arc::new(HttpProductsService::new(client.clone())),
            promotions: Arc::new(HttpPromotionsService::new(client.clone())),
            wheel: Arc::new(HttpWheelService::new(client.clone())),
            reels: Arc::new(HttpReelsService::new(client.clone())),
            analytics: Arc::new(HttpAnalyticsService::new(client)),
        }
    }
}
