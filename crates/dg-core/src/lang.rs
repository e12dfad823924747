//! Language selection rules for the bilingual site (Spanish / English).
//!
//! Only the decisions live here; applying a language to the DOM is the web
//! front-end's job.

use std::fmt;
use std::str::FromStr;

/// `localStorage` key holding the saved preference.
pub const PREFERENCE_KEY: &str = "dg_lang";
/// Query parameter carrying the language on page URLs.
pub const QUERY_PARAM: &str = "lang";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    Es,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct LangError(pub String);

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Es, Lang::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Best guess from a `navigator.language` value: English for any `en*`
    /// tag, Spanish otherwise.
    pub fn from_navigator(language: &str) -> Lang {
        if language.to_ascii_lowercase().starts_with("en") {
            Lang::En
        } else {
            Lang::Es
        }
    }

    /// Attribute holding the placeholder text for this language.
    pub fn placeholder_attribute(self) -> String {
        format!("data-lang-{}-placeholder", self.as_str())
    }

    /// Id of the toggle button for this language.
    pub fn button_id(self) -> String {
        format!("lang-{}", self.as_str())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `es` / `en`.
impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(LangError(other.to_string())),
        }
    }
}

/// Initial language: URL parameter, then saved preference, then the browser
/// language. Invalid values at each level fall through to the next.
pub fn resolve_initial(url_param: Option<&str>, saved: Option<&str>, navigator: &str) -> Lang {
    url_param
        .and_then(|v| v.parse().ok())
        .or_else(|| saved.and_then(|v| v.parse().ok()))
        .unwrap_or_else(|| Lang::from_navigator(navigator))
}

/// Preference as exposed to page scripts: the stored value if it names a
/// supported language, `None` (JS `null`) otherwise.
pub fn saved_preference(raw: Option<&str>) -> Option<&'static str> {
    raw.and_then(|v| v.parse::<Lang>().ok()).map(Lang::as_str)
}

/// Whether a link's `href` is a candidate for carrying the `lang` parameter.
/// Fragments and `mailto:`/`tel:` links are left alone; same-origin checks
/// happen after URL resolution.
pub fn should_rewrite_href(href: &str) -> bool {
    !(href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:"))
}
