//! Error types for parsing identifiers from strings.

use thiserror::Error;

/// Boxed error produced by a raw representation's `FromStr` implementation.
pub type RawParseError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when the raw value of an identifier cannot be parsed.
///
/// The identifier itself performs no validation, so this only ever wraps the
/// failure reported by the raw representation's own parser.
#[derive(Debug, Error)]
#[error("invalid {entity} identifier: {source}")]
pub struct ParseIdentifierError {
    entity: &'static str,
    #[source]
    source: RawParseError,
}

impl ParseIdentifierError {
    pub(crate) fn new(entity: &'static str, source: impl Into<RawParseError>) -> Self {
        Self {
            entity,
            source: source.into(),
        }
    }

    /// Returns the type name of the entity the identifier belongs to.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns the error reported by the raw representation's parser.
    pub fn raw_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}
