//! Literal-substring replacement.
//!
//! The search side is always a literal needle (coerced through
//! [`ToText`]): matching is exact sequence equality over code units, with
//! no pattern syntax and no capture groups. The replacement side is
//! anything implementing [`Replacer`]:
//!
//! - text-like values are spliced in with `$`-token expansion
//!   (`$$`, `$&`, `` $` ``, `$'`),
//! - closures receive the [`Match`] and their return value is spliced in
//!   verbatim.
//!
//! Scanning is left-to-right and non-overlapping: after a match the scan
//! resumes at the end of the matched region and never looks inside the
//! just-inserted replacement. When the needle is absent the subject comes
//! back unchanged and a closure replacer is never invoked.

use crate::text::coerce::ToText;
use crate::text::matching::Match;
use crate::text::value::{code_point_len, Text};

const DOLLAR: u16 = 0x24;
const AMPERSAND: u16 = 0x26;
const QUOTE: u16 = 0x27;
const BACKTICK: u16 = 0x60;

/// A replacement strategy, in the manner of `regex::Replacer`.
///
/// Implemented for text-like values (literal replacement with `$`-token
/// expansion) and for `FnMut(&Match) -> impl Into<Text>` closures (verbatim
/// splicing, no expansion).
pub trait Replacer {
    /// Appends the replacement for `m` onto `dst`.
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut Text);
}

impl<F, T> Replacer for F
where
    F: FnMut(&Match<'_>) -> T,
    T: Into<Text>,
{
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut Text) {
        let replacement: Text = (self)(m).into();
        dst.push_units(replacement.units());
    }
}

macro_rules! impl_literal_replacer {
    ($($ty:ty),* $(,)?) => {$(
        impl Replacer for $ty {
            fn replace_append(&mut self, m: &Match<'_>, dst: &mut Text) {
                expand(&self.to_text(), m, dst);
            }
        }
    )*};
}

impl_literal_replacer!(Text, &Text, &str, String, char, bool);
impl_literal_replacer!(i8, i16, i32, i64, i128, isize);
impl_literal_replacer!(u8, u16, u32, u64, u128, usize);
impl_literal_replacer!(f32, f64);

impl Text {
    /// Replaces the first occurrence of `search`, or returns the subject
    /// unchanged if there is none.
    ///
    /// An empty needle matches once, at the very start.
    pub fn replace_first(&self, search: impl ToText, mut rep: impl Replacer) -> Text {
        self.replace_occurrence(&search.to_text(), &mut rep, 1)
    }

    /// Replaces the `n`-th occurrence (1-based, counted non-overlapping),
    /// or returns the subject unchanged if there are fewer than `n`.
    pub fn replace_nth(&self, search: impl ToText, mut rep: impl Replacer, n: usize) -> Text {
        self.replace_occurrence(&search.to_text(), &mut rep, n)
    }

    /// Replaces every non-overlapping occurrence of `search`, scanning
    /// left to right.
    ///
    /// An empty needle matches at every code-unit boundary, giving
    /// `len() + 1` insertions; on a subject containing astral characters
    /// this splits their surrogate pairs. [`Text::intersperse`] is the
    /// code-point-safe alternative.
    pub fn replace_all(&self, search: impl ToText, mut rep: impl Replacer) -> Text {
        let needle = search.to_text();

        let mut out = Text::with_capacity(self.len());
        let mut last = 0;
        let mut pos = 0;
        let mut count = 0usize;

        while let Some(offset) = find_at(self, &needle, pos) {
            out.push_units(&self[last..offset]);
            rep.replace_append(&Match::new(self, offset, needle.len()), &mut out);
            count += 1;

            if needle.is_empty() {
                // Step one unit past the empty match so the scan advances;
                // this is the step that can split a surrogate pair.
                if offset < self.len() {
                    out.push_unit(self[offset]);
                }
                pos = offset + 1;
            } else {
                pos = offset + needle.len();
            }
            last = pos;

            if pos > self.len() {
                break;
            }
        }

        out.push_units(&self[last.min(self.len())..]);
        log::trace!("replaced {count} occurrence(s)");
        out
    }

    /// Replaces `search` only if the subject starts with it.
    pub fn replace_start(&self, search: impl ToText, mut rep: impl Replacer) -> Text {
        let needle = search.to_text();
        if !self.starts_with(needle.units()) {
            return self.clone();
        }

        let m = Match::new(self, 0, needle.len());
        let mut out = Text::with_capacity(self.len());
        rep.replace_append(&m, &mut out);
        out.push_units(m.after());
        out
    }

    /// Replaces `search` only if the subject ends with it.
    pub fn replace_end(&self, search: impl ToText, mut rep: impl Replacer) -> Text {
        let needle = search.to_text();
        if !self.ends_with(needle.units()) {
            return self.clone();
        }

        let m = Match::new(self, self.len() - needle.len(), needle.len());
        let mut out = Text::with_capacity(self.len());
        out.push_units(m.before());
        rep.replace_append(&m, &mut out);
        out
    }

    /// Inserts `sep` between code points, keeping surrogate pairs intact:
    /// `"A😀B"` interspersed with `"-"` is `"A-😀-B"`.
    pub fn intersperse(&self, sep: impl ToText) -> Text {
        let sep = sep.to_text();
        let mut out = Text::with_capacity(self.len() + sep.len() * self.code_point_count());

        let mut i = 0;
        while i < self.len() {
            if i > 0 {
                out.push_units(&sep);
            }
            let step = code_point_len(self, i);
            out.push_units(&self[i..i + step]);
            i += step;
        }

        out
    }

    fn replace_occurrence(&self, needle: &Text, rep: &mut impl Replacer, n: usize) -> Text {
        let mut pos = 0;
        let mut seen = 0;

        while let Some(offset) = find_at(self, needle, pos) {
            seen += 1;
            if seen == n {
                let m = Match::new(self, offset, needle.len());
                let mut out = Text::with_capacity(self.len());
                out.push_units(m.before());
                rep.replace_append(&m, &mut out);
                out.push_units(m.after());
                return out;
            }

            pos = if needle.is_empty() {
                offset + 1
            } else {
                offset + needle.len()
            };
            if pos > self.len() {
                break;
            }
        }

        self.clone()
    }
}

/// First offset at or after `from` where `needle` occurs in `haystack`.
/// An empty needle matches at every offset up to and including the end.
fn find_at(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    let last = haystack.len().checked_sub(needle.len())?;
    (from..=last).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// `$`-token expansion for literal replacements. A `$` followed by
/// anything else — digits included, since literal search has no capture
/// groups — is copied verbatim.
fn expand(rep: &Text, m: &Match<'_>, dst: &mut Text) {
    let units = rep.units();
    let mut i = 0;

    while i < units.len() {
        if units[i] == DOLLAR && i + 1 < units.len() {
            match units[i + 1] {
                DOLLAR => {
                    dst.push_unit(DOLLAR);
                    i += 2;
                    continue;
                }
                AMPERSAND => {
                    dst.push_units(m.text());
                    i += 2;
                    continue;
                }
                BACKTICK => {
                    dst.push_units(m.before());
                    i += 2;
                    continue;
                }
                QUOTE => {
                    dst.push_units(m.after());
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        dst.push_unit(units[i]);
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_occurrence_only() {
        let subject = Text::from("hello hello");
        assert_eq!(subject.replace_first("hello", "hi"), "hi hello");
        assert_eq!(subject, "hello hello");

        assert_eq!(Text::from("aaa").replace_first("a", "b"), "baa");
    }

    #[test]
    fn all_occurrences() {
        let subject = Text::from("abc abc abc");
        assert_eq!(subject.replace_all("abc", "XYZ"), "XYZ XYZ XYZ");
        assert_eq!(subject, "abc abc abc");
    }

    #[test]
    fn absent_needle_returns_subject() {
        let subject = Text::from("no match here");
        assert_eq!(subject.replace_first("xyz", "FOUND"), "no match here");
        assert_eq!(subject.replace_all("xyz", "FOUND"), "no match here");
    }

    #[test]
    fn absent_needle_never_invokes_closure() {
        let mut called = false;
        let result = Text::from("no match here").replace_first("xyz", |_: &Match| {
            called = true;
            Text::from("FOUND")
        });
        assert_eq!(result, "no match here");
        assert!(!called);
    }

    #[test]
    fn non_overlapping_matches() {
        assert_eq!(Text::from("aaaa").replace_all("aa", "b"), "bb");
    }

    #[test]
    fn empty_needle() {
        assert_eq!(Text::from("xxx").replace_first("", "_"), "_xxx");
        assert_eq!(Text::from("AB").replace_all("", "-"), "-A-B-");
        assert_eq!(Text::from("").replace_all("", "-"), "-");
    }

    #[test]
    fn empty_needle_splits_surrogate_pairs() {
        let result = Text::from("😀").replace_all("", "-");
        assert_eq!(result.units(), &[0x2D, 0xD83D, 0x2D, 0xDE00, 0x2D]);
    }

    #[test]
    fn intersperse_keeps_surrogate_pairs() {
        assert_eq!(Text::from("A😀B").intersperse("-"), "A-😀-B");
        assert_eq!(Text::from("").intersperse("-"), "");
        assert_eq!(Text::from("x").intersperse("-"), "x");
    }

    #[test]
    fn dollar_token_expansion() {
        let subject = Text::from("hello world");
        assert_eq!(
            subject.replace_first("hello", "[$$][$&][$`][$']"),
            "[$][hello][][ world] world"
        );
    }

    #[test]
    fn numbered_tokens_are_literal() {
        assert_eq!(Text::from("foo").replace_first("f", "$1"), "$1oo");
    }

    #[test]
    fn trailing_dollar_is_literal() {
        assert_eq!(Text::from("ab").replace_first("a", "$"), "$b");
        assert_eq!(Text::from("ab").replace_first("a", "$x$"), "$x$b");
    }

    #[test]
    fn closure_return_is_verbatim() {
        let result = Text::from("foo").replace_first("o", |_: &Match| Text::from("$&"));
        assert_eq!(result, "f$&o");
    }

    #[test]
    fn closure_sees_match_offset_and_subject() {
        let subject = Text::from("one two two three");
        let result = subject.replace_first("two", |m: &Match| {
            assert_eq!(Text::from(m.subject()), "one two two three");
            format!("[{}@{}]", Text::from(m.text()), m.offset())
        });
        assert_eq!(result, "one [two@4] two three");
    }

    #[test]
    fn closure_runs_once_per_match() {
        let mut offsets = Vec::new();
        let result = Text::from("aaaa").replace_all("aa", |m: &Match| {
            offsets.push(m.offset());
            Text::from("b")
        });
        assert_eq!(result, "bb");
        assert_eq!(offsets, [0, 2]);
    }

    #[test]
    fn search_coercion() {
        assert_eq!(Text::from("id=42").replace_first(42, "XX"), "id=XX");
        assert_eq!(
            Text::from("true or false").replace_first(true, "YES"),
            "YES or false"
        );
    }

    #[test]
    fn replacement_coercion() {
        assert_eq!(Text::from("abc").replace_first("a", 123), "123bc");
        assert_eq!(Text::from("x=?").replace_first("?", 1.5f64), "x=1.5");
    }

    #[test]
    fn nth_occurrence() {
        assert_eq!(Text::from("aaa").replace_nth("a", "b", 2), "aba");
        assert_eq!(Text::from("aaaa").replace_nth("aa", "b", 2), "aab");
        assert_eq!(Text::from("aaa").replace_nth("a", "b", 5), "aaa");
        assert_eq!(Text::from("aaa").replace_nth("a", "b", 0), "aaa");
    }

    #[test]
    fn anchored_start() {
        assert_eq!(
            Text::from("hello world").replace_start("hello", "HI"),
            "HI world"
        );
        assert_eq!(
            Text::from("world hello").replace_start("hello", "HI"),
            "world hello"
        );
        assert_eq!(Text::from("abc").replace_start("", "_"), "_abc");
    }

    #[test]
    fn anchored_end() {
        assert_eq!(
            Text::from("world hello").replace_end("hello", "BYE"),
            "world BYE"
        );
        assert_eq!(
            Text::from("hello world").replace_end("hello", "BYE"),
            "hello world"
        );
        assert_eq!(Text::from("abc").replace_end("", "_"), "abc_");
    }

    #[test]
    fn anchored_replacements_expand_tokens() {
        assert_eq!(
            Text::from("hello world").replace_start("hello", "<$&>"),
            "<hello> world"
        );
    }
}
