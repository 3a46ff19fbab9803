//! Reel Models

use backoffice::{catalog::ProductId, ids::TypedId};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend identifier of a reel.
pub type ReelId = TypedId<Reel>;

/// Problems with a reel before upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReelError {
    #[error("The reel needs a title.")]
    MissingTitle,

    #[error("The video URL must be an http or https address: {0}")]
    InvalidVideoUrl(String),
}

/// Short promotional video shown in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    #[serde(rename = "reelId")]
    pub id: ReelId,

    pub title: String,

    pub video_url: String,

    #[serde(default)]
    pub product_id: Option<ProductId>,

    #[serde(default)]
    pub published: bool,
}

/// Reel fields sent on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReel {
    pub title: String,

    pub video_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,

    pub published: bool,
}

impl NewReel {
    /// Check the reel before upload.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank title or a video URL that is not an
    /// absolute `http`/`https` address.
    pub fn validate(&self) -> Result<(), ReelError> {
        if self.title.trim().is_empty() {
            return Err(ReelError::MissingTitle);
        }

        let url = self.video_url.trim();

        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
            _ => Err(ReelError::InvalidVideoUrl(url.to_string())),
        }
    }
}
