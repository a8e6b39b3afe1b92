//! # identity
//!
//! Type-safe identifiers tagged with the entity type that owns them.
//!
//! ## Design Principles
//!
//! - An identifier is its raw value plus a compile-time entity tag
//! - Identifiers of different entities never mix, even with the same raw type
//! - Capabilities (equality, hashing, ordering, formatting, serde) follow the
//!   raw representation
//! - No generation and no validation: any raw value is a valid identifier
//!
//! ## Example
//!
//! ```
//! use identity::{identifiable, Identifiable, Identifier};
//!
//! struct User {
//!     id: Identifier<User>,
//! }
//!
//! struct Order {
//!     id: Identifier<Order>,
//! }
//!
//! identifiable!(User);
//! identifiable!(Order, u64);
//!
//! let user = User { id: "user-42".into() };
//! let order = Order { id: Identifier::new(42) };
//!
//! assert_eq!(user.id().raw_value(), "user-42");
//! assert_eq!(serde_json::to_string(&order.id).unwrap(), "42");
//! ```
//!
//! Identifiers of different entities are different types:
//!
//! ```compile_fail
//! use identity::{identifiable, Identifier};
//!
//! struct User { id: Identifier<User> }
//! struct Group { id: Identifier<Group> }
//! identifiable!(User);
//! identifiable!(Group);
//!
//! fn load_group(id: &Identifier<Group>) -> &str { id.raw_value() }
//!
//! let user = User { id: "42".into() };
//! load_group(&user.id);
//! ```
//!
//! and cannot be compared with each other:
//!
//! ```compile_fail
//! use identity::{identifiable, Identifier};
//!
//! struct User { id: Identifier<User> }
//! struct Group { id: Identifier<Group> }
//! identifiable!(User);
//! identifiable!(Group);
//!
//! let user = User { id: "42".into() };
//! let group = Group { id: "42".into() };
//! let _ = user.id == group.id;
//! ```

mod codec;
mod error;
mod identifiable;
mod identifier;
mod macros;

pub use error::{ParseIdentifierError, RawParseError};
pub use identifiable::Identifiable;
pub use identifier::Identifier;
