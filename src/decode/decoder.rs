use std::any::Any;
use std::collections::BTreeMap;

use crate::decode::{
	DecodeError, KeyedContainer, Path, PathKey, Primitive, Result, SingleValueContainer, UnkeyedContainer, Value,
};

/// Key conversion applied to every logical field name before tree lookup.
pub type KeyConversion = Box<dyn Fn(&str) -> String>;

/// Read-only bag of caller context threaded unchanged to every descendant decoder.
pub type UserInfo = BTreeMap<String, Box<dyn Any>>;

/// Caller-configurable state shared by every decoder in one decode call.
pub struct DecodeOptions {
	/// Maps a logical field name to the key actually stored in the tree.
	pub convert_key: KeyConversion,
	/// Arbitrary caller context available to [`Decode`] implementations.
	pub user_info: UserInfo,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			convert_key: Box::new(str::to_owned),
			user_info: UserInfo::new(),
		}
	}
}

impl DecodeOptions {
	/// Creates options with the given key conversion and no user context.
	pub fn with_key_conversion(convert: impl Fn(&str) -> String + 'static) -> Self {
		Self {
			convert_key: Box::new(convert),
			..Self::default()
		}
	}
}

/// A value that can reconstruct itself from a decoder.
///
/// This is the universal recursion point of the engine: every nested field,
/// element, and super value re-enters the decode through this trait.
pub trait Decode: Sized {
	/// Decodes a value from the node bound to `decoder`.
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self>;
}

/// Recursive-descent decoder bound to one tree node.
///
/// Decoders are cheap, stack-scoped, and immutable: recursing into a nested
/// value creates a new decoder with an extended path while the key conversion
/// and user context are inherited by reference.
#[derive(Clone)]
pub struct Decoder<'v, 'o> {
	value: &'v Value,
	path: Path,
	options: &'o DecodeOptions,
}

impl<'v, 'o> Decoder<'v, 'o> {
	/// Creates a root decoder over a tree with an empty path.
	pub fn new(value: &'v Value, options: &'o DecodeOptions) -> Self {
		Self {
			value,
			path: Path::root(),
			options,
		}
	}

	pub(crate) fn child(&self, key: PathKey, value: &'v Value) -> Self {
		Self {
			value,
			path: self.path.child(key),
			options: self.options,
		}
	}

	/// The node being decoded.
	pub fn value(&self) -> &'v Value {
		self.value
	}

	/// Path of the node from the decode root.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Shared caller context.
	pub fn user_info(&self) -> &'o UserInfo {
		&self.options.user_info
	}

	pub(crate) fn convert_key(&self, logical: &str) -> String {
		(self.options.convert_key)(logical)
	}

	pub(crate) fn type_mismatch(&self, expected: &'static str) -> DecodeError {
		DecodeError::TypeMismatch {
			path: self.path.clone(),
			expected,
			actual: self.value.kind().to_owned(),
		}
	}

	/// Views the node as a mapping of named fields.
	pub fn keyed_container(&self) -> Result<KeyedContainer<'v, 'o>> {
		match self.value {
			Value::Mapping(mapping) => Ok(KeyedContainer::new(self.clone(), mapping)),
			_ => Err(self.type_mismatch("mapping")),
		}
	}

	/// Views the node as an ordered sequence.
	pub fn unkeyed_container(&self) -> Result<UnkeyedContainer<'v, 'o>> {
		match self.value {
			Value::Sequence(sequence) => Ok(UnkeyedContainer::new(self.clone(), sequence)),
			_ => Err(self.type_mismatch("sequence")),
		}
	}

	/// Views the node as one directly decodable value.
	pub fn single_value_container(&self) -> SingleValueContainer<'v, 'o> {
		SingleValueContainer::new(self.clone())
	}

	/// Decodes the node into any target type implementing [`Decode`].
	pub fn decode<T: Decode>(&self) -> Result<T> {
		T::decode(self)
	}
}

/// Decodes a tree into `T` using default options.
pub fn decode<T: Decode>(value: &Value) -> Result<T> {
	decode_with(value, &DecodeOptions::default())
}

/// Decodes a tree into `T` with explicit options.
pub fn decode_with<T: Decode>(value: &Value, options: &DecodeOptions) -> Result<T> {
	Decoder::new(value, options).decode()
}

fn decode_primitive<P: Primitive>(decoder: &Decoder<'_, '_>) -> Result<P> {
	decoder.single_value_container().decode()
}

impl Decode for bool {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for String {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for i8 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for i16 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for i32 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for i64 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for u8 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for u16 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for u32 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for u64 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for f32 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl Decode for f64 {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		decode_primitive(decoder)
	}
}

impl<T: Decode> Decode for Option<T> {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		if decoder.value().is_null() {
			Ok(None)
		} else {
			T::decode(decoder).map(Some)
		}
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		let mut container = decoder.unkeyed_container()?;
		let mut items = Vec::with_capacity(container.count());
		while !container.is_at_end() {
			items.push(container.decode()?);
		}
		Ok(items)
	}
}

impl<T: Decode> Decode for BTreeMap<String, T> {
	fn decode(decoder: &Decoder<'_, '_>) -> Result<Self> {
		let Value::Mapping(mapping) = decoder.value() else {
			return Err(decoder.type_mismatch("mapping"));
		};
		mapping
			.iter()
			.map(|(key, value)| {
				let child = decoder.child(PathKey::Field(key.clone()), value);
				Ok((key.clone(), child.decode()?))
			})
			.collect()
	}
}
