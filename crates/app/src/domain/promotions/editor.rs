//! Promotion Editor
//!
//! Holds the promotion being authored between form interactions. Lines are
//! validated on entry, so a submitted payload never carries a rejected line.
//! While a submission is in flight the editor refuses further changes.

use backoffice::{
    catalog::ProductLookup,
    promotions::{
        Rejection,
        codec::{ActionInput, RuleInput},
        display::{LabelFormatter, PairLabels},
        draft::{PayloadError, PromotionDraft, PromotionPayload},
        registry::{RegistryError, RuleActionPair},
    },
};
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    client::ApiError,
    domain::promotions::{
        PromotionsService,
        models::{PromotionId, PromotionImage, PromotionRecord},
    },
    session::Session,
};

/// Errors surfaced by the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A submission is already in flight.
    #[error("a save is already in progress")]
    Busy,

    /// No line at the given position.
    #[error("no line at position {0}")]
    NoSuchLine(usize),

    /// A line failed validation.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The draft is not ready to submit.
    #[error(transparent)]
    Draft(#[from] PayloadError),

    /// The stored promotion could not be loaded for editing.
    #[error("stored promotion is not editable: {0}")]
    Stored(#[from] RegistryError),

    /// The backend refused the submission.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl EditorError {
    /// Short alert title for the error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Busy => "Please wait",
            Self::NoSuchLine(_) | Self::Stored(_) => "Invalid value",
            Self::Rejected(rejection) => rejection.title(),
            Self::Draft(error) => error.title(),
            Self::Api(_) => "Save failed",
        }
    }
}

/// Promotion authoring state.
#[derive(Debug)]
pub struct PromotionEditor {
    draft: PromotionDraft,
    promotion_id: Option<PromotionId>,
    image: Option<PromotionImage>,
    busy: bool,
}

impl PromotionEditor {
    /// Editor for a new promotion.
    #[must_use]
    pub const fn new(draft: PromotionDraft) -> Self {
        Self {
            draft,
            promotion_id: None,
            image: None,
            busy: false,
        }
    }

    /// Editor whose submission replaces promotion `id` with `draft`.
    #[must_use]
    pub const fn replacing(id: PromotionId, draft: PromotionDraft) -> Self {
        Self {
            draft,
            promotion_id: Some(id),
            image: None,
            busy: false,
        }
    }

    /// Editor for a stored promotion; submitting replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Stored`] when the stored lines do not form a
    /// valid registry.
    pub fn editing(record: PromotionRecord) -> Result<Self, EditorError> {
        Ok(Self {
            draft: PromotionDraft::try_from(record.promotion)?,
            promotion_id: Some(record.id),
            image: None,
            busy: false,
        })
    }

    #[must_use]
    pub const fn draft(&self) -> &PromotionDraft {
        &self.draft
    }

    /// Header fields (name, code, dates, active flag) are edited in place.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Busy`] while a submission is in flight.
    pub fn draft_mut(&mut self) -> Result<&mut PromotionDraft, EditorError> {
        self.ensure_idle()?;

        Ok(&mut self.draft)
    }

    #[must_use]
    pub const fn promotion_id(&self) -> Option<PromotionId> {
        self.promotion_id
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Replace the banner image sent with the next submission.
    pub fn set_image(&mut self, image: Option<PromotionImage>) {
        self.image = image;
    }

    /// Validate and append a line, returning its position.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Rejected`] with the first failed check, or
    /// [`EditorError::Busy`] during a submission.
    pub fn add_pair(&mut self, rule: &RuleInput, action: &ActionInput) -> Result<usize, EditorError> {
        self.ensure_idle()?;

        Ok(self.draft.pairs.try_add(rule, action)?)
    }

    /// Remove the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSuchLine`] for an out-of-range index.
    pub fn remove_pair(&mut self, index: usize) -> Result<RuleActionPair, EditorError> {
        self.ensure_idle()?;

        self.draft
            .pairs
            .remove(index)
            .ok_or(EditorError::NoSuchLine(index))
    }

    /// Take the line at `index` back into the form.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSuchLine`] for an out-of-range index.
    pub fn edit_pair(&mut self, index: usize) -> Result<(RuleInput, ActionInput), EditorError> {
        self.ensure_idle()?;

        self.draft
            .pairs
            .edit_in_place(index)
            .ok_or(EditorError::NoSuchLine(index))
    }

    /// Labels for every line, in order.
    pub fn labels<L: ProductLookup + ?Sized>(
        &self,
        products: &L,
        currency: &'static Currency,
    ) -> Vec<PairLabels> {
        let formatter = LabelFormatter::new(products, currency);

        self.draft
            .pairs
            .iter()
            .map(|pair| formatter.pair_labels(pair))
            .collect()
    }

    /// Mark a submission as started and build its payload.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Busy`] if one is already running, or
    /// [`EditorError::Draft`] when the draft is incomplete. The busy flag is
    /// only set on success.
    pub fn begin_submit(&mut self) -> Result<PromotionPayload, EditorError> {
        self.ensure_idle()?;

        let payload = self.draft.to_payload()?;

        self.busy = true;

        Ok(payload)
    }

    /// Mark the running submission as finished.
    ///
    /// `saved` is the id returned by the backend on success; later
    /// submissions update that promotion.
    pub fn finish_submit(&mut self, saved: Option<PromotionId>) {
        self.busy = false;

        if let Some(id) = saved {
            self.promotion_id = Some(id);
        }
    }

    /// Create or replace the promotion on the backend.
    ///
    /// # Errors
    ///
    /// Returns the draft, busy or backend error. The lines are left as they
    /// were and the editor is idle again afterwards.
    pub async fn submit(
        &mut self,
        service: &dyn PromotionsService,
        session: &Session,
    ) -> Result<PromotionRecord, EditorError> {
        let payload = self.begin_submit()?;
        let image = self.image.clone();

        debug!(
            promotion_id = ?self.promotion_id,
            line_count = payload.rules.len(),
            "submitting promotion"
        );

        let result = match self.promotion_id {
            Some(id) => service.update_promotion(session, id, payload, image).await,
            None => service.create_promotion(session, payload, image).await,
        };

        self.finish_submit(result.as_ref().ok().map(|record| record.id));

        Ok(result?)
    }

    fn ensure_idle(&self) -> Result<(), EditorError> {
        if self.busy {
            return Err(EditorError::Busy);
        }

        Ok(())
    }
}
