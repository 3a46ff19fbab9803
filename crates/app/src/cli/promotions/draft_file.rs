//! YAML promotion drafts.
//!
//! ```yaml
//! name: Summer
//! code: SUMMER10
//! start_date: 2026-06-01T00:00:00Z
//! end_date: 2026-09-01T00:00:00Z
//! image: banner.png
//! lines:
//!   - rule: { type: PRODUCT, product_id: 42 }
//!     action: { type: FIXED_OFF, amount: 5 }
//!   - rule: { type: CATEGORY, categories: [Drinks, Snacks] }
//!     action: { type: PERCENT_OFF, percentage: '12.5' }
//! ```
//!
//! Decimal values must be quoted so their text survives as entered.

use std::{fs, path::Path};

use backoffice::promotions::{
    codec::{ActionInput, RuleInput},
    draft::PromotionDraft,
};
use backoffice_app::domain::promotions::models::PromotionImage;
use jiff::Timestamp;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DraftFile {
    name: String,
    code: String,
    start_date: Timestamp,
    end_date: Timestamp,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    pub(crate) lines: Vec<DraftLine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DraftLine {
    pub(crate) rule: RuleInput,
    pub(crate) action: ActionInput,
}

const fn default_active() -> bool {
    true
}

impl DraftFile {
    pub(crate) fn read(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

        Self::parse(&contents).map_err(|error| format!("invalid draft {}: {error}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(contents)
    }

    /// Draft with the header fields and no lines.
    pub(crate) fn header(&self) -> PromotionDraft {
        let mut draft = PromotionDraft::new(
            self.name.clone(),
            self.code.clone(),
            self.start_date,
            self.end_date,
        );

        draft.is_active = self.is_active;

        draft
    }

    /// Read the banner image, resolved relative to the draft file.
    pub(crate) fn load_image(&self, draft_path: &Path) -> Result<Option<PromotionImage>, String> {
        let Some(image) = &self.image else {
            return Ok(None);
        };

        let path = draft_path
            .parent()
            .map_or_else(|| Path::new(image).to_path_buf(), |dir| dir.join(image));

        let content_type = image_content_type(&path)
            .ok_or_else(|| format!("unsupported image type: {}", path.display()))?;

        let bytes = fs::read(&path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

        let file_name = path
            .file_name()
            .map_or_else(|| image.clone(), |name| name.to_string_lossy().into_owned());

        Ok(Some(PromotionImage {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        }))
    }
}

fn image_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use backoffice::promotions::{actions::ActionType, rules::RuleType};
    use testresult::TestResult;

    use super::*;

    const DRAFT: &str = r"
name: Summer
code: SUMMER10
start_date: 2026-06-01T00:00:00Z
end_date: 2026-09-01T00:00:00Z
lines:
  - rule: { type: PRODUCT, product_id: 42 }
    action: { type: FIXED_OFF, amount: '5.5' }
  - rule: { type: CART_VALUE, min_cart_value: '50.0' }
    action: { type: FREE_ITEM, product_id: 7, quantity: 1 }
";

    #[test]
    fn parses_header_and_raw_lines() -> TestResult {
        let file = DraftFile::parse(DRAFT)?;
        let draft = file.header();

        assert_eq!(draft.name, "Summer");
        assert!(draft.is_active);
        assert!(draft.pairs.is_empty());
        assert_eq!(file.lines.len(), 2);

        let first = file.lines.first().ok_or("missing line")?;

        assert_eq!(first.rule.rule_type, Some(RuleType::Product));
        assert_eq!(first.rule.product_id, "42");
        assert_eq!(first.action.action_type, Some(ActionType::FixedOff));
        assert_eq!(first.action.amount, "5.5");

        Ok(())
    }

    #[test]
    fn parsed_lines_validate_through_the_registry() -> TestResult {
        let file = DraftFile::parse(DRAFT)?;
        let mut draft = file.header();

        for line in &file.lines {
            draft.pairs.try_add(&line.rule, &line.action)?;
        }

        assert_eq!(draft.to_payload()?.actions.len(), 2);

        Ok(())
    }

    #[test]
    fn line_without_type_is_kept_for_validation() -> TestResult {
        let file = DraftFile::parse(
            r"
name: Broken
code: BROKEN
start_date: 2026-06-01T00:00:00Z
end_date: 2026-09-01T00:00:00Z
lines:
  - rule: { product_id: 42 }
    action: { type: PERCENT_OFF, percentage: 10 }
",
        )?;

        let line = file.lines.first().ok_or("missing line")?;

        assert_eq!(line.rule.rule_type, None);

        Ok(())
    }

    #[test]
    fn quoted_cart_value_keeps_its_text() -> TestResult {
        let file = DraftFile::parse(DRAFT)?;
        let line = file.lines.get(1).ok_or("missing line")?;

        assert_eq!(line.rule.min_cart_value, "50.0");

        Ok(())
    }

    #[test]
    fn unquoted_decimal_is_refused() {
        let result = DraftFile::parse(
            r"
name: Loose
code: LOOSE
start_date: 2026-06-01T00:00:00Z
end_date: 2026-09-01T00:00:00Z
lines:
  - rule: { type: CART_VALUE, min_cart_value: 50.0 }
    action: { type: FIXED_OFF, amount: 5 }
",
        );

        assert!(result.is_err_and(|error| error.to_string().contains("must be quoted")));
    }

    #[test]
    fn image_types_follow_extension() {
        assert_eq!(image_content_type(Path::new("a/banner.PNG")), Some("image/png"));
        assert_eq!(image_content_type(Path::new("banner.jpeg")), Some("image/jpeg"));
        assert_eq!(image_content_type(Path::new("banner.bmp")), None);
        assert_eq!(image_content_type(Path::new("banner")), None);
    }
}
