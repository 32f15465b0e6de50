//! Mount Configuration
//!
//! Read from `data-*` attributes of the `#app` element, e.g.
//! `<div id="app" data-api-base="/tasks/" data-locale="en" data-sort="off">`.

use crate::i18n::Locale;

pub const MOUNT_ID: &str = "app";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/tasks/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Collection endpoint, always ending with `/`
    pub api_base: String,
    pub locale: Locale,
    pub search: bool,
    pub filter_completed: bool,
    pub filter_due: bool,
    pub sort: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            locale: Locale::default(),
            search: true,
            filter_completed: true,
            filter_due: false,
            sort: false,
        }
    }
}

/// `"off"`, `"false"` and `"0"` disable a control, anything else enables it
fn flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        None => default,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "off" | "false" | "0"),
    }
}

impl AppConfig {
    /// Build from an attribute lookup (`name` without the `data-` prefix)
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();

        let api_base = attr("api-base")
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty())
            .map(|base| {
                if base.ends_with('/') {
                    base
                } else {
                    format!("{}/", base)
                }
            })
            .unwrap_or(defaults.api_base);

        Self {
            api_base,
            locale: attr("locale")
                .map(|tag| Locale::from_tag(&tag))
                .unwrap_or(defaults.locale),
            search: flag(attr("search"), defaults.search),
            filter_completed: flag(attr("filter-completed"), defaults.filter_completed),
            filter_due: flag(attr("filter-due"), defaults.filter_due),
            sort: flag(attr("sort"), defaults.sort),
        }
    }

    pub fn from_element(el: &web_sys::Element) -> Self {
        Self::from_attrs(|name| el.get_attribute(&format!("data-{}", name)))
    }
}
