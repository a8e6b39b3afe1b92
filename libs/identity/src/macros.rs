//! Macros for declaring identifiable entities.

/// Implements [`Identifiable`](crate::Identifiable) for an entity struct.
///
/// The entity stores its identifier in a field, `id` unless another field
/// name is given. The raw representation defaults to `String`.
///
/// # Example
///
/// ```
/// use identity::{identifiable, Identifiable, Identifier};
///
/// struct User {
///     id: Identifier<User>,
///     name: String,
/// }
///
/// struct Invoice {
///     number: Identifier<Invoice>,
/// }
///
/// identifiable!(User);
/// identifiable!(Invoice, u64, number);
///
/// let user = User { id: "user-42".into(), name: "Ada".to_string() };
/// let invoice = Invoice { number: Identifier::new(1001) };
///
/// assert_eq!(user.id().raw_value(), "user-42");
/// assert_eq!(*invoice.id().raw_value(), 1001);
/// ```
#[macro_export]
macro_rules! identifiable {
    ($entity:ty) => {
        $crate::identifiable!($entity, ::std::string::String, id);
    };
    ($entity:ty, $raw:ty) => {
        $crate::identifiable!($entity, $raw, id);
    };
    ($entity:ty, $raw:ty, $field:ident) => {
        impl $crate::Identifiable for $entity {
            type RawRepresentation = $raw;

            fn id(&self) -> &$crate::Identifier<Self> {
                &self.$field
            }
        }
    };
}
