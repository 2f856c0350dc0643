//! Immutable UTF-16 text values with JavaScript-flavored string semantics.
//!
//! The [`Text`] type stores a sequence of UTF-16 code units, and the
//! operations on it reproduce the documented behavior of the JavaScript
//! string methods they are named after:
//!
//! - case conversion uses the Unicode default case mapping, with
//!   locale-tailored variants behind a [`Locale`] tag,
//! - replacement searches for literal needles (no pattern syntax), with
//!   `$`-token expansion for literal replacements and verbatim splicing
//!   for closure replacers,
//! - every operation returns a new value; a subject is never mutated.
//!
//! The free functions at the crate root are checked mirrors of the same
//! operations: they accept a possibly-absent subject and fail with
//! [`Error::InvalidInput`] instead of assuming one is present, while a
//! present subject is coerced like any other text-like input.
//!
//! ```
//! use jsstr::Text;
//!
//! let subject = Text::from("hello hello");
//! assert_eq!(subject.replace_first("hello", "hi"), "hi hello");
//! assert_eq!(subject.to_upper(), "HELLO HELLO");
//! assert_eq!(subject, "hello hello");
//! ```

pub mod error;
pub mod locale;
pub mod text;

pub use error::Error;
pub use locale::{parse_locale, Locale};
pub use text::{Match, Replacer, Text, ToText};

/// Uppercases `subject` with the default case mapping, failing on an
/// absent subject.
pub fn to_upper(subject: Option<impl ToText>) -> Result<Text, Error> {
    present(subject).map(|text| text.to_upper())
}

/// Lowercases `subject` with the default case mapping, failing on an
/// absent subject.
pub fn to_lower(subject: Option<impl ToText>) -> Result<Text, Error> {
    present(subject).map(|text| text.to_lower())
}

/// Replaces the first occurrence of `search` in `subject`, failing on an
/// absent subject.
pub fn replace_first(
    subject: Option<impl ToText>,
    search: impl ToText,
    rep: impl Replacer,
) -> Result<Text, Error> {
    present(subject).map(|text| text.replace_first(search, rep))
}

/// Replaces every occurrence of `search` in `subject`, failing on an
/// absent subject.
pub fn replace_all(
    subject: Option<impl ToText>,
    search: impl ToText,
    rep: impl Replacer,
) -> Result<Text, Error> {
    present(subject).map(|text| text.replace_all(search, rep))
}

fn present(subject: Option<impl ToText>) -> Result<Text, Error> {
    match subject {
        Some(subject) => Ok(subject.to_text()),
        None => Err(Error::InvalidInput),
    }
}
