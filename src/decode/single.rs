use crate::decode::{DecodeError, Decoder, Path, Primitive, Result};

/// Leaf view decoding one node directly, with no key or index indirection.
pub struct SingleValueContainer<'v, 'o> {
	decoder: Decoder<'v, 'o>,
}

impl<'v, 'o> SingleValueContainer<'v, 'o> {
	pub(crate) fn new(decoder: Decoder<'v, 'o>) -> Self {
		Self { decoder }
	}

	/// Path of the node.
	pub fn path(&self) -> &Path {
		self.decoder.path()
	}

	/// Whether the node is an explicit null.
	pub fn decode_nil(&self) -> bool {
		self.decoder.value().is_null()
	}

	/// Decodes the node into a primitive, applying exact numeric coercion.
	///
	/// A null node is a missing required value, not a shape mismatch.
	pub fn decode<P: Primitive>(&self) -> Result<P> {
		let value = self.decoder.value();
		if value.is_null() {
			return Err(DecodeError::ValueNotFound {
				path: self.decoder.path().clone(),
			});
		}
		P::from_value(value).ok_or_else(|| DecodeError::TypeMismatch {
			path: self.decoder.path().clone(),
			expected: P::NAME,
			actual: value.kind().to_owned(),
		})
	}
}
