//! Locale tags for the locale-sensitive case conversions.
//!
//! Only the primary language subtag matters here: a handful of languages
//! tailor the Unicode case mapping, and everything else falls back to the
//! default mapping. Parsing validates the tag shape, not the region or
//! script subtags.

use std::str::FromStr;

use crate::error::Error;

/// Primary language subtags whose case conversion tailors the
/// dotted/dotless i pair (`i`/`İ` and `ı`/`I`).
const DOTTED_DOTLESS_I: [&str; 2] = ["tr", "az"];

/// Tailored case-mapping rules selected by a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tailoring {
    /// Unicode default case mapping.
    Default,
    /// Turkish and Azerbaijani dotted/dotless i rules.
    DottedDotlessI,
}

/// A validated locale tag and the case tailoring it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    tailoring: Tailoring,
}

impl Locale {
    /// The tag this locale was parsed from, e.g. `"tr-TR"`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn tailoring(&self) -> Tailoring {
        self.tailoring
    }
}

/// Parse a tag such as `"tr"`, `"az-Latn"` or `"de-DE"` into a `Locale`.
///
/// The primary subtag must be 2 to 8 ASCII letters; anything else fails
/// with [`Error::InvalidLocale`]. A well-formed tag without tailored rules
/// parses fine and selects the default mapping.
pub fn parse_locale(src: &str) -> Result<Locale, Error> {
    let primary = src.split('-').next().unwrap_or_default();

    if !(2..=8).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::InvalidLocale(src.to_string()));
    }

    let primary = primary.to_ascii_lowercase();
    let tailoring = if DOTTED_DOTLESS_I.contains(&primary.as_str()) {
        Tailoring::DottedDotlessI
    } else {
        log::debug!("locale `{src}` has no tailored case rules, using the default mapping");
        Tailoring::Default
    };

    Ok(Locale {
        tag: src.to_string(),
        tailoring,
    })
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Locale, Error> {
        parse_locale(s)
    }
}
