use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeBounds;

use crate::decode::{Decode, DecodeError, Decoder, Path, PathKey, Result, UnkeyedContainer, Value};

/// Reserved mapping key addressed by [`KeyedContainer::super_decoder`].
pub const SUPER_KEY: &str = "super";

/// Mapping view decoding the named fields of one node.
///
/// Every lookup runs the logical field name through the key conversion
/// function first; a missing converted key is reported as a key-not-found
/// failure carrying the string that was actually searched for in the tree.
pub struct KeyedContainer<'v, 'o> {
	decoder: Decoder<'v, 'o>,
	mapping: &'v BTreeMap<String, Value>,
}

impl<'v, 'o> KeyedContainer<'v, 'o> {
	pub(crate) fn new(decoder: Decoder<'v, 'o>, mapping: &'v BTreeMap<String, Value>) -> Self {
		Self { decoder, mapping }
	}

	/// Path of the mapping node.
	pub fn path(&self) -> &Path {
		self.decoder.path()
	}

	/// Number of entries in the backing mapping.
	pub fn len(&self) -> usize {
		self.mapping.len()
	}

	/// Whether the backing mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.mapping.is_empty()
	}

	/// Raw keys present in the backing mapping.
	///
	/// These are tree keys, not logical field names: an arbitrary key
	/// conversion function has no computable inverse. Membership of a
	/// logical name is answered by [`contains`](Self::contains).
	pub fn keys(&self) -> impl Iterator<Item = &'v str> {
		self.mapping.keys().map(String::as_str)
	}

	/// Whether the converted key exists in the backing mapping.
	pub fn contains(&self, key: &str) -> bool {
		self.mapping.contains_key(&self.decoder.convert_key(key))
	}

	/// Whether the value at the converted key is an explicit null.
	pub fn decode_nil(&self, key: &str) -> Result<bool> {
		Ok(self.raw_value(key)?.is_null())
	}

	/// Decodes the value at the converted key into `T`.
	pub fn decode<T: Decode>(&self, key: &str) -> Result<T> {
		self.child_decoder(key)?.decode()
	}

	/// Decodes the value at the converted key, or `None` when absent or null.
	pub fn decode_if_present<T: Decode>(&self, key: &str) -> Result<Option<T>> {
		let converted = self.decoder.convert_key(key);
		match self.mapping.get(&converted) {
			None => Ok(None),
			Some(value) if value.is_null() => Ok(None),
			Some(value) => self.decoder.child(PathKey::Field(key.to_owned()), value).decode().map(Some),
		}
	}

	/// Decodes the value at the converted key and verifies it lies within `range`.
	pub fn decode_in_range<T, R>(&self, key: &str, range: R) -> Result<T>
	where
		T: Decode + PartialOrd + fmt::Debug,
		R: RangeBounds<T> + fmt::Debug,
	{
		let value: T = self.decode(key)?;
		if range.contains(&value) {
			Ok(value)
		} else {
			Err(DecodeError::OutOfRange {
				path: self.decoder.path().child(PathKey::Field(key.to_owned())),
				value: format!("{value:?}"),
				range: format!("{range:?}"),
			})
		}
	}

	/// Opens the mapping stored at the converted key as a nested keyed container.
	pub fn nested_keyed_container(&self, key: &str) -> Result<KeyedContainer<'v, 'o>> {
		self.child_decoder(key)?.keyed_container()
	}

	/// Opens the sequence stored at the converted key as a nested unkeyed container.
	pub fn nested_unkeyed_container(&self, key: &str) -> Result<UnkeyedContainer<'v, 'o>> {
		self.child_decoder(key)?.unkeyed_container()
	}

	/// Child decoder over the value stored at the reserved `"super"` key.
	pub fn super_decoder(&self) -> Result<Decoder<'v, 'o>> {
		self.child_decoder(SUPER_KEY)
	}

	/// Child decoder over the value stored at an explicit key.
	pub fn super_decoder_for_key(&self, key: &str) -> Result<Decoder<'v, 'o>> {
		self.child_decoder(key)
	}

	fn raw_value(&self, key: &str) -> Result<&'v Value> {
		let converted = self.decoder.convert_key(key);
		self.mapping.get(&converted).ok_or_else(|| DecodeError::KeyNotFound {
			path: self.decoder.path().clone(),
			key: converted,
		})
	}

	fn child_decoder(&self, key: &str) -> Result<Decoder<'v, 'o>> {
		let value = self.raw_value(key)?;
		Ok(self.decoder.child(PathKey::Field(key.to_owned()), value))
	}
}
