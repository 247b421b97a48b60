//! Page-level settings and the markup contract.
//!
//! Defaults cover the stock page. A page may override any field with an
//! inline `<script type="application/json" id="site-config">` block; missing
//! fields keep their defaults.

use serde::Deserialize;

use crate::upload::MAX_UPLOAD_BYTES;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Widths at or below this are treated as mobile (CSS px).
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    /// How long the signup button stays disabled after a submission settles.
    pub signup_cooldown_ms: u32,
    pub max_upload_bytes: u64,
    /// Used when the signup form has no `data-endpoint`.
    pub signup_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 250,
            signup_cooldown_ms: 2500,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            signup_endpoint: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// `data-endpoint` on the form wins over the configured fallback. Blank
    /// values count as absent.
    pub fn signup_endpoint_for(&self, form_endpoint: Option<&str>) -> Option<String> {
        form_endpoint
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .or_else(|| {
                self.signup_endpoint
                    .as_deref()
                    .map(str::trim)
                    .filter(|endpoint| !endpoint.is_empty())
            })
            .map(str::to_string)
    }
}

/// Class names, selectors and data attributes the script binds to.
pub mod selectors {
    pub const HEADER: &str = ".header";
    pub const MOBILE_TOGGLE: &str = ".header__mobile-toggle";
    pub const MOBILE_NAV: &str = ".header__mobile-nav";
    pub const MOBILE_NAV_OPEN: &str = "header__mobile-nav--open";
    pub const MOBILE_LINK: &str = ".header__mobile-link";
    pub const HAMBURGER: &str = ".header__hamburger";
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

    pub const GALLERY: &str = ".project-gallery";
    pub const GALLERY_MAIN_IMAGE: &str = ".project-gallery__main-image";
    pub const GALLERY_THUMBNAILS: &str = ".project-gallery__thumbnails";
    pub const THUMBNAIL_CLASS: &str = "project-gallery__thumbnail";
    pub const THUMBNAIL: &str = ".project-gallery__thumbnail";
    pub const THUMBNAIL_ACTIVE: &str = "project-gallery__thumbnail--active";

    pub const FEATURED_TITLE: &str = ".project-card--featured .project-card__title";
    pub const FEATURED_DESCRIPTION: &str = ".project-card--featured .project-card__description";
    pub const CARD_TITLE: &str = ".project-card__title";
    pub const CLICKABLE_CARD: &str = ".project-card--clickable";
    pub const CLICKABLE_CARD_CLASS: &str = "project-card--clickable";
    pub const SMALL_CARD: &str = ".project-card--small";
    pub const CARD_SELECTED: &str = "project-card--selected";
    pub const CARD_EXPANDED: &str = "expanded";

    pub const FAQ_ITEM: &str = ".faq__item";
    pub const FAQ_QUESTION: &str = ".faq__question";
    pub const FAQ_EXPANDED: &str = "faq__item--expanded";

    pub const FILTER_BUTTON: &str = "[data-filter]";
    pub const FILTER_ACTIVE: &str = "portfolio__filter--active";
    pub const FILTER_ITEM: &str = "[data-category]";
    pub const FILTER_ALL: &str = "all";

    pub const QUOTE_FORM: &str = ".quote-form";
    pub const REQUIRED_FIELD: &str = "[required]";

    pub const UPLOAD_ZONE: &str = ".quote-upload";
    pub const UPLOAD_DRAGOVER: &str = "quote-upload--dragover";
    pub const UPLOAD_INPUT: &str = ".quote-upload__input";
    pub const UPLOAD_FILE_NAME: &str = ".quote-upload__file-name";
    pub const UPLOAD_FILE_SIZE: &str = ".quote-upload__file-size";
    pub const UPLOAD_FILE_INFO: &str = ".quote-upload__file-info";
    pub const MATERIAL_SELECT: &str = ".quote-calculator__material";
    pub const QUALITY_SELECT: &str = ".quote-calculator__quality";
    pub const QUANTITY_INPUT: &str = ".quote-calculator__quantity";
    pub const RUSH_INPUT: &str = ".quote-calculator__rush";
    pub const ESTIMATE_PANEL: &str = ".quote-estimate";
    pub const ESTIMATE_WEIGHT: &str = ".quote-estimate__weight";
    pub const ESTIMATE_BASE: &str = ".quote-estimate__base";
    pub const ESTIMATE_QUALITY: &str = ".quote-estimate__quality";
    pub const ESTIMATE_RUSH: &str = ".quote-estimate__rush";
    pub const ESTIMATE_RUSH_ROW: &str = ".quote-estimate__rush-row";
    pub const ESTIMATE_TOTAL: &str = ".quote-estimate__total";

    pub const SIGNUP_FORM: &str = ".signup-form";
    pub const SIGNUP_EMAIL: &str = "input[type=\"email\"]";
    pub const SIGNUP_SUBMIT: &str = "button[type=\"submit\"]";
    pub const SIGNUP_MESSAGE: &str = ".signup-form__message";
    pub const SIGNUP_MESSAGE_ERROR: &str = "signup-form__message--error";
    pub const SIGNUP_MESSAGE_SUCCESS: &str = "signup-form__message--success";

    pub const DATA_PROJECT_ID: &str = "data-project-id";
    pub const DATA_FILTER: &str = "data-filter";
    pub const DATA_CATEGORY: &str = "data-category";
    pub const DATA_IMAGE: &str = "data-image";
    pub const DATA_ALT: &str = "data-alt";
    pub const DATA_PRICE: &str = "data-price";
    pub const DATA_MULTIPLIER: &str = "data-multiplier";
    pub const DATA_ENDPOINT: &str = "data-endpoint";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_page() {
        let config = SiteConfig::default();
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.signup_cooldown_ms, 2500);
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.signup_endpoint, None);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"signup_endpoint": "https://hooks.example/signup", "resize_debounce_ms": 100}"#,
        )
        .unwrap();
        assert_eq!(config.signup_endpoint.as_deref(), Some("https://hooks.example/signup"));
        assert_eq!(config.resize_debounce_ms, 100);
        assert_eq!(config.signup_cooldown_ms, 2500);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ nope").is_err());
        assert!(SiteConfig::from_json(r#"{"resize_debounce_ms": "soon"}"#).is_err());
    }

    #[test]
    fn form_endpoint_takes_precedence() {
        let config = SiteConfig {
            signup_endpoint: Some("https://fallback.example".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.signup_endpoint_for(Some("https://form.example")).as_deref(),
            Some("https://form.example")
        );
        assert_eq!(
            config.signup_endpoint_for(Some("  ")).as_deref(),
            Some("https://fallback.example")
        );
        assert_eq!(
            config.signup_endpoint_for(None).as_deref(),
            Some("https://fallback.example")
        );
        assert_eq!(SiteConfig::default().signup_endpoint_for(None), None);
    }
}
