//! Serde support.
//!
//! An identifier is encoded as a single value, exactly as its raw value
//! would be. Decoding errors are the raw representation's own.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Identifiable, Identifier};

impl<E> Serialize for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw_value().serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for Identifier<E>
where
    E: Identifiable + ?Sized,
    E::RawRepresentation: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <E::RawRepresentation as Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}
