use std::collections::BTreeMap;

/// One node of an untyped dynamic value tree.
///
/// Trees are produced by an external translation layer (see [`from_json`](crate::decode::from_json))
/// and are only borrowed, never mutated, while a decode is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null / absent marker.
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed 8-bit integer.
	I8(i8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 8-bit integer.
	U8(u8),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
	/// UTF-8 string.
	String(String),
	/// Ordered list of values.
	Sequence(Vec<Value>),
	/// String-keyed mapping with unique keys and exact-match lookup.
	Mapping(BTreeMap<String, Value>),
}

impl Value {
	/// Variant name used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::I8(_) => "i8",
			Value::I16(_) => "i16",
			Value::I32(_) => "i32",
			Value::I64(_) => "i64",
			Value::U8(_) => "u8",
			Value::U16(_) => "u16",
			Value::U32(_) => "u32",
			Value::U64(_) => "u64",
			Value::F32(_) => "f32",
			Value::F64(_) => "f64",
			Value::String(_) => "string",
			Value::Sequence(_) => "sequence",
			Value::Mapping(_) => "mapping",
		}
	}

	/// Whether the node is an explicit null.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Value::I8(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Value::I16(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::I32(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::I64(value)
	}
}

impl From<u8> for Value {
	fn from(value: u8) -> Self {
		Value::U8(value)
	}
}

impl From<u16> for Value {
	fn from(value: u16) -> Self {
		Value::U16(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::U32(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::U64(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::F32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Sequence(value)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(value: BTreeMap<String, Value>) -> Self {
		Value::Mapping(value)
	}
}
