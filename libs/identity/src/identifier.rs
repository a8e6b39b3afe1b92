//! The typed identifier wrapper and its conditional trait implementations.
//!
//! Every capability beyond construction is implemented only when the entity's
//! raw representation implements it too. `#[derive]` would bound the entity
//! type instead, so the implementations are written out by hand.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ParseIdentifierError, RawParseError};
use crate::Identifiable;

/// A type-safe identifier for an entity `E`, backed by a raw value.
///
/// The entity type only tags the identifier at compile time: an
/// `Identifier<E>` has exactly the layout of `E::RawRepresentation`, and
/// identifiers of different entities can never be compared or swapped.
///
/// When the raw representation is serializable, the identifier serializes
/// as a single value, exactly like the raw value would.
#[repr(transparent)]
pub struct Identifier<E: Identifiable + ?Sized> {
    raw: E::RawRepresentation,
}

impl<E: Identifiable + ?Sized> Identifier<E> {
    /// Creates an identifier from a raw value.
    ///
    /// No validation is performed; any raw value is a valid identifier.
    #[must_use]
    pub const fn new(raw: E::RawRepresentation) -> Self {
        Self { raw }
    }

    /// Returns the raw value backing this identifier.
    #[must_use]
    pub const fn raw_value(&self) -> &E::RawRepresentation {
        &self.raw
    }

    /// Consumes the identifier, returning its raw value.
    #[must_use]
    pub fn into_raw_value(self) -> E::RawRepresentation {
        self.raw
    }
}

impl<E: Identifiable + ?Sized> AsRef<E::RawRepresentation> for Identifier<E> {
    fn as_ref(&self) -> &E::RawRepresentation {
        &self.raw
    }
}

// =============================================================================
// Literal construction
// =============================================================================

/// Implements `From<literal type>` for identifiers whose raw representation
/// can itself be built from that type.
macro_rules! impl_from_literal {
    ($($literal:ty),* $(,)?) => {
        $(
            impl<E> From<$literal> for Identifier<E>
            where
                E: Identifiable + ?Sized,
                E::RawRepresentation: From<$literal>,
            {
                fn from(value: $literal) -> Self {
                    Self::new(value.into())
                }
            }
        )*
    };
}

impl_from_literal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl<'a, E> From<&'a str> for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: From<&'a str>,
{
    fn from(value: &'a str) -> Self {
        Self::new(value.into())
    }
}

// =============================================================================
// Value semantics
// =============================================================================

impl<E> Clone for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl<E> Copy for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Copy,
{
}

impl<E> PartialEq for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Eq,
{
}

impl<E> Hash for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E> PartialOrd for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<E> Ord for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

// =============================================================================
// Formatting and parsing
// =============================================================================

impl<E> fmt::Debug for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.raw).finish()
    }
}

impl<E> fmt::Display for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<E> FromStr for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: FromStr,
    <E::RawRepresentation as FromStr>::Err: Into<RawParseError>,
{
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<E::RawRepresentation>()
            .map(Self::new)
            .map_err(|e| ParseIdentifierError::new(std::any::type_name::<E>(), e))
    }
}

// =============================================================================
// Tests
// =============================================================================
