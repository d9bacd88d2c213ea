mod coerce;
mod decoder;
mod error;
mod json;
mod keyed;
mod path;
mod single;
mod unkeyed;
mod value;

/// Exact numeric coercion trait for primitive targets.
pub use coerce::Primitive;
/// Decoder, shared options, the decode trait, and the top-level entry points.
pub use decoder::{Decode, DecodeOptions, Decoder, KeyConversion, UserInfo, decode, decode_with};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// JSON tree translation.
pub use json::from_json;
/// Keyed container and its reserved super key.
pub use keyed::{KeyedContainer, SUPER_KEY};
/// Decoding path types.
pub use path::{Path, PathKey};
/// Single-value container.
pub use single::SingleValueContainer;
/// Unkeyed container.
pub use unkeyed::UnkeyedContainer;
/// Dynamic value tree node.
pub use value::Value;
