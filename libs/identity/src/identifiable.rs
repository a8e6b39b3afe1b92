//! The capability implemented by entity types that own a typed identifier.

use crate::Identifier;

/// Marks a type as having a type-safe identifier backed by a raw value.
///
/// Implementors choose the raw representation and expose their identifier
/// through [`Identifiable::id`]. Most entities are declared with the
/// [`identifiable!`](crate::identifiable) macro, which picks `String` as the
/// raw representation unless told otherwise.
pub trait Identifiable {
    /// The backing raw type of this type's identifier.
    type RawRepresentation;

    /// Returns the identifier of this instance.
    fn id(&self) -> &Identifier<Self>;
}
