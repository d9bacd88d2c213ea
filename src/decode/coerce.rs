use crate::decode::Value;

/// A primitive target type the engine can extract from a single tree node.
///
/// Booleans and strings require an exact tag match. Numeric targets accept any
/// numeric source tag, but only when the stored magnitude is representable in
/// the target type without loss; inexact conversions yield `None` and surface
/// as type mismatches, never as silent truncation or wrapping.
pub trait Primitive: Sized {
	/// Type name used in mismatch diagnostics.
	const NAME: &'static str;

	/// Attempts an exact extraction from a node.
	fn from_value(value: &Value) -> Option<Self>;
}

impl Primitive for bool {
	const NAME: &'static str = "bool";

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Bool(flag) => Some(*flag),
			_ => None,
		}
	}
}

impl Primitive for String {
	const NAME: &'static str = "string";

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(text) => Some(text.clone()),
			_ => None,
		}
	}
}

impl Primitive for i8 {
	const NAME: &'static str = "i8";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for i16 {
	const NAME: &'static str = "i16";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for i32 {
	const NAME: &'static str = "i32";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for i64 {
	const NAME: &'static str = "i64";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for u8 {
	const NAME: &'static str = "u8";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for u16 {
	const NAME: &'static str = "u16";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for u32 {
	const NAME: &'static str = "u32";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for u64 {
	const NAME: &'static str = "u64";

	fn from_value(value: &Value) -> Option<Self> {
		integer_from(value)
	}
}

impl Primitive for f32 {
	const NAME: &'static str = "f32";

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::F32(v) => Some(v),
			Value::F64(v) => {
				let narrowed = v as f32;
				(f64::from(narrowed) == v).then_some(narrowed)
			}
			_ => {
				let magnitude = integer_magnitude(value)?;
				let converted = magnitude as f32;
				(converted as i128 == magnitude && converted.is_finite()).then_some(converted)
			}
		}
	}
}

impl Primitive for f64 {
	const NAME: &'static str = "f64";

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::F64(v) => Some(v),
			Value::F32(v) => Some(f64::from(v)),
			_ => {
				let magnitude = integer_magnitude(value)?;
				let converted = magnitude as f64;
				(converted as i128 == magnitude && converted.is_finite()).then_some(converted)
			}
		}
	}
}

/// Exact extraction into any integer width via a widened intermediate.
fn integer_from<T: TryFrom<i128>>(value: &Value) -> Option<T> {
	let magnitude = match *value {
		Value::F32(v) => integral_magnitude(f64::from(v))?,
		Value::F64(v) => integral_magnitude(v)?,
		_ => integer_magnitude(value)?,
	};
	T::try_from(magnitude).ok()
}

/// Widens any integer-tagged node; `None` for every other tag.
fn integer_magnitude(value: &Value) -> Option<i128> {
	match *value {
		Value::I8(v) => Some(v.into()),
		Value::I16(v) => Some(v.into()),
		Value::I32(v) => Some(v.into()),
		Value::I64(v) => Some(v.into()),
		Value::U8(v) => Some(v.into()),
		Value::U16(v) => Some(v.into()),
		Value::U32(v) => Some(v.into()),
		Value::U64(v) => Some(v.into()),
		_ => None,
	}
}

/// Accepts a float only when it holds an exact integral value.
fn integral_magnitude(v: f64) -> Option<i128> {
	let truncated = v as i128;
	(truncated as f64 == v).then_some(truncated)
}
