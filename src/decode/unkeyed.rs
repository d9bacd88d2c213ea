use crate::decode::{Decode, DecodeError, Decoder, KeyedContainer, Path, PathKey, Result, Value};

/// Sequence view decoding elements strictly in order through a cursor.
///
/// The cursor is the only mutable state in the engine. It advances by exactly
/// one per successful decode; a failed decode leaves it untouched, so a caller
/// inspecting the error observes a consistent position.
pub struct UnkeyedContainer<'v, 'o> {
	decoder: Decoder<'v, 'o>,
	sequence: &'v [Value],
	cursor: usize,
}

impl<'v, 'o> UnkeyedContainer<'v, 'o> {
	pub(crate) fn new(decoder: Decoder<'v, 'o>, sequence: &'v [Value]) -> Self {
		Self {
			decoder,
			sequence,
			cursor: 0,
		}
	}

	/// Path of the sequence node.
	pub fn path(&self) -> &Path {
		self.decoder.path()
	}

	/// Element count, fixed at construction.
	pub fn count(&self) -> usize {
		self.sequence.len()
	}

	/// Zero-based position of the next element to decode.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Whether every element has been consumed.
	pub fn is_at_end(&self) -> bool {
		self.cursor >= self.sequence.len()
	}

	/// Consumes the next element iff it is an explicit null.
	pub fn decode_nil(&mut self) -> Result<bool> {
		if self.peek()?.is_null() {
			self.cursor += 1;
			Ok(true)
		} else {
			Ok(false)
		}
	}

	/// Decodes the next element into `T`, advancing only on success.
	pub fn decode<T: Decode>(&mut self) -> Result<T> {
		let decoded = self.child_decoder()?.decode()?;
		self.cursor += 1;
		Ok(decoded)
	}

	/// Decodes the next element, or `None` at the end or on a null element.
	pub fn decode_if_present<T: Decode>(&mut self) -> Result<Option<T>> {
		if self.is_at_end() {
			return Ok(None);
		}
		if self.decode_nil()? {
			return Ok(None);
		}
		self.decode().map(Some)
	}

	/// Opens the next element as a nested keyed container, consuming it on success.
	pub fn nested_keyed_container(&mut self) -> Result<KeyedContainer<'v, 'o>> {
		let container = self.child_decoder()?.keyed_container()?;
		self.cursor += 1;
		Ok(container)
	}

	/// Opens the next element as a nested unkeyed container, consuming it on success.
	pub fn nested_unkeyed_container(&mut self) -> Result<UnkeyedContainer<'v, 'o>> {
		let container = self.child_decoder()?.unkeyed_container()?;
		self.cursor += 1;
		Ok(container)
	}

	/// Child decoder over the next element, consuming it on success.
	pub fn super_decoder(&mut self) -> Result<Decoder<'v, 'o>> {
		let child = self.child_decoder()?;
		self.cursor += 1;
		Ok(child)
	}

	fn peek(&self) -> Result<&'v Value> {
		self.sequence.get(self.cursor).ok_or_else(|| DecodeError::ValueNotFound {
			path: self.decoder.path().child(PathKey::Index(self.cursor)),
		})
	}

	fn child_decoder(&self) -> Result<Decoder<'v, 'o>> {
		let value = self.peek()?;
		Ok(self.decoder.child(PathKey::Index(self.cursor), value))
	}
}

#[cfg(test)]
mod tests {
	use super::UnkeyedContainer;
	use crate::decode::{DecodeError, DecodeOptions, Decoder, Value, from_json};

	fn open<'v, 'o>(tree: &'v Value, options: &'o DecodeOptions) -> UnkeyedContainer<'v, 'o> {
		Decoder::new(tree, options).unkeyed_container().expect("sequence")
	}

	#[test]
	fn three_decodes_walk_the_cursor_to_the_end() {
		let tree = from_json(&serde_json::json!([10, 20, 30]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		assert_eq!(container.count(), 3);
		for expected in [10_i64, 20, 30] {
			assert!(!container.is_at_end());
			assert_eq!(container.decode::<i64>().expect("decodes"), expected);
		}
		assert_eq!(container.cursor(), 3);
		assert!(container.is_at_end());

		let error = container.decode::<i64>().unwrap_err();
		assert!(matches!(error, DecodeError::ValueNotFound { .. }));
		assert_eq!(error.path().to_string(), "[3]");
		assert_eq!(container.cursor(), 3);
	}

	#[test]
	fn failed_decode_does_not_advance() {
		let tree = from_json(&serde_json::json!(["text", 2]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		assert!(container.decode::<i64>().is_err());
		assert_eq!(container.cursor(), 0);
		assert_eq!(container.decode::<String>().expect("decodes"), "text");
		assert_eq!(container.cursor(), 1);
	}

	#[test]
	fn decode_nil_consumes_only_nulls() {
		let tree = from_json(&serde_json::json!([null, 1]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		assert!(container.decode_nil().expect("in bounds"));
		assert_eq!(container.cursor(), 1);
		assert!(!container.decode_nil().expect("in bounds"));
		assert_eq!(container.cursor(), 1);
		assert_eq!(container.decode::<i64>().expect("decodes"), 1);
		assert!(matches!(container.decode_nil().unwrap_err(), DecodeError::ValueNotFound { .. }));
	}

	#[test]
	fn decode_if_present_consumes_nulls_and_stops_at_the_end() {
		let tree = from_json(&serde_json::json!([null, 5]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		assert_eq!(container.decode_if_present::<i64>().expect("ok"), None);
		assert_eq!(container.decode_if_present::<i64>().expect("ok"), Some(5));
		assert_eq!(container.decode_if_present::<i64>().expect("ok"), None);
		assert_eq!(container.cursor(), 2);
	}

	#[test]
	fn nested_containers_consume_one_position_each() {
		let tree = from_json(&serde_json::json!([{"a": 1}, [2]]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		let keyed = container.nested_keyed_container().expect("mapping");
		assert_eq!(keyed.path().to_string(), "[0]");
		assert_eq!(container.cursor(), 1);

		let mut unkeyed = container.nested_unkeyed_container().expect("sequence");
		assert_eq!(unkeyed.path().to_string(), "[1]");
		assert_eq!(unkeyed.decode::<i64>().expect("decodes"), 2);
		assert!(container.is_at_end());
	}

	#[test]
	fn nested_shape_mismatch_leaves_the_cursor_in_place() {
		let tree = from_json(&serde_json::json!([1]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		assert!(container.nested_keyed_container().is_err());
		assert_eq!(container.cursor(), 0);
		assert_eq!(container.decode::<i64>().expect("decodes"), 1);
	}

	#[test]
	fn super_decoder_advances_after_success() {
		let tree = from_json(&serde_json::json!([{"base": true}, 9]));
		let options = DecodeOptions::default();
		let mut container = open(&tree, &options);

		let parent = container.super_decoder().expect("element");
		assert_eq!(parent.path().to_string(), "[0]");
		assert_eq!(container.cursor(), 1);
		assert!(parent.keyed_container().expect("mapping").decode::<bool>("base").expect("decodes"));
		assert_eq!(container.decode::<i64>().expect("decodes"), 9);
	}
}
