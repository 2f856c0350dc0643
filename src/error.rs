use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The subject of an operation was absent instead of a text value.
    #[error("expected a text value, got an absent subject")]
    InvalidInput,

    /// A locale tag did not have the shape of a language tag.
    #[error("malformed locale tag `{0}`")]
    InvalidLocale(String),
}
