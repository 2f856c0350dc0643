//! Conversion of text-like inputs at the API boundary.
//!
//! Search needles, replacements and subjects accept anything `ToText`;
//! the algorithms themselves only ever operate on `Text`. Numeric and
//! boolean inputs convert through their `Display` form, so replacing
//! `42` means replacing the needle `"42"`.

use crate::text::value::Text;

/// Deterministic conversion into a [`Text`] value.
pub trait ToText {
    fn to_text(&self) -> Text;
}

impl ToText for Text {
    fn to_text(&self) -> Text {
        self.clone()
    }
}

impl ToText for str {
    fn to_text(&self) -> Text {
        Text::from(self)
    }
}

impl ToText for String {
    fn to_text(&self) -> Text {
        Text::from(self.as_str())
    }
}

impl ToText for char {
    fn to_text(&self) -> Text {
        Text::from(*self)
    }
}

impl ToText for bool {
    fn to_text(&self) -> Text {
        Text::from(if *self { "true" } else { "false" })
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> Text {
        (**self).to_text()
    }
}

macro_rules! impl_to_text_via_display {
    ($($ty:ty),*) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> Text {
                    Text::from(self.to_string())
                }
            }
        )*
    };
}

impl_to_text_via_display!(i8, i16, i32, i64, i128, isize);
impl_to_text_via_display!(u8, u16, u32, u64, u128, usize);
impl_to_text_via_display!(f32, f64);
