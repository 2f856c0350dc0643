//! Case conversion.
//!
//! The default operations apply the Unicode default case mapping and are
//! never locale-sensitive; the `_with` variants consult the tailored rules
//! of a [`Locale`]. Both families return a new value and leave the subject
//! untouched, and both are idempotent.
//!
//! The mapping is the full (multi-character) one, so lengths can change:
//! `"ß"` uppercases to `"SS"` and `"İ"` lowercases to `"i"` followed by a
//! combining dot above.

use crate::locale::{Locale, Tailoring};
use crate::text::coerce::ToText;
use crate::text::value::Text;

impl Text {
    /// Uppercases with the Unicode default case mapping.
    pub fn to_upper(&self) -> Text {
        convert(self, str::to_uppercase)
    }

    /// Lowercases with the Unicode default case mapping.
    ///
    /// The mapping is context-aware where Unicode says so: a Greek capital
    /// sigma in final position lowercases to `ς`.
    pub fn to_lower(&self) -> Text {
        convert(self, str::to_lowercase)
    }

    /// Uppercases with the tailored rules of `locale`, falling back to the
    /// default mapping for untailored locales.
    pub fn to_upper_with(&self, locale: &Locale) -> Text {
        match locale.tailoring() {
            Tailoring::Default => self.to_upper(),
            Tailoring::DottedDotlessI => tailored_upper(self),
        }
    }

    /// Lowercases with the tailored rules of `locale`, falling back to the
    /// default mapping for untailored locales.
    pub fn to_lower_with(&self, locale: &Locale) -> Text {
        match locale.tailoring() {
            Tailoring::Default => self.to_lower(),
            Tailoring::DottedDotlessI => tailored_lower(self),
        }
    }

    /// Case-insensitive equality via the default lowercase mapping.
    pub fn eq_ignore_case(&self, other: impl ToText) -> bool {
        self.to_lower() == other.to_text().to_lower()
    }
}

/// Applies `case` over maximal well-formed runs of code units. Lone
/// surrogates split the runs and are copied through verbatim, so they
/// survive a conversion unchanged.
fn convert(text: &Text, case: fn(&str) -> String) -> Text {
    let mut out = Text::with_capacity(text.len());
    let mut run = String::new();

    for decoded in char::decode_utf16(text.units().iter().copied()) {
        match decoded {
            Ok(ch) => run.push(ch),
            Err(err) => {
                flush_run(&mut run, case, &mut out);
                out.push_unit(err.unpaired_surrogate());
            }
        }
    }
    flush_run(&mut run, case, &mut out);

    out
}

fn flush_run(run: &mut String, case: fn(&str) -> String, out: &mut Text) {
    if !run.is_empty() {
        out.push_str(&case(run));
        run.clear();
    }
}

/// Turkish/Azerbaijani uppercase: `i` maps to `İ`; everything else takes
/// the default mapping (`ı` already uppercases to `I` by default).
fn tailored_upper(text: &Text) -> Text {
    let mut out = Text::with_capacity(text.len());

    for decoded in char::decode_utf16(text.units().iter().copied()) {
        match decoded {
            Ok('i') => out.push_char('İ'),
            Ok(ch) => {
                for upper in ch.to_uppercase() {
                    out.push_char(upper);
                }
            }
            Err(err) => out.push_unit(err.unpaired_surrogate()),
        }
    }

    out
}

/// Turkish/Azerbaijani lowercase: `İ` maps to plain `i`, `I` maps to `ı`,
/// and `I` directly followed by a combining dot above collapses to `i`.
fn tailored_lower(text: &Text) -> Text {
    let mut out = Text::with_capacity(text.len());
    let mut iter = char::decode_utf16(text.units().iter().copied()).peekable();

    while let Some(decoded) = iter.next() {
        match decoded {
            Ok('İ') => out.push_char('i'),
            Ok('I') => {
                if matches!(iter.peek(), Some(Ok('\u{0307}'))) {
                    iter.next();
                    out.push_char('i');
                } else {
                    out.push_char('ı');
                }
            }
            Ok(ch) => {
                for lower in ch.to_lowercase() {
                    out.push_char(lower);
                }
            }
            Err(err) => out.push_unit(err.unpaired_surrogate()),
        }
    }

    out
}
