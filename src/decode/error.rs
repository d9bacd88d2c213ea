use thiserror::Error;

use crate::decode::Path;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding a dynamic value tree.
///
/// Every variant carries the full decoding path accumulated up to the failure
/// point. Failures propagate unchanged through every enclosing decode; the
/// engine never recovers locally or substitutes defaults.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Required mapping key was absent.
	#[error("key not found at {path}: {key}")]
	KeyNotFound {
		/// Path of the mapping that was searched.
		path: Path,
		/// Converted key string that was actually looked up in the tree.
		key: String,
	},
	/// Sequence was exhausted, or a required value was explicitly null.
	#[error("value not found at {path}")]
	ValueNotFound {
		/// Path of the missing value.
		path: Path,
	},
	/// Node shape or numeric representation did not match the target type.
	#[error("type mismatch at {path}: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Path of the offending node.
		path: Path,
		/// What the target type required.
		expected: &'static str,
		/// Variant actually found in the tree.
		actual: String,
	},
	/// Range-checked decode produced a value outside its permitted range.
	#[error("value out of range at {path}: {value} not in {range}")]
	OutOfRange {
		/// Path of the decoded value.
		path: Path,
		/// Rendered decoded value.
		value: String,
		/// Rendered permitted range.
		range: String,
	},
}

impl DecodeError {
	/// Decoding path carried by the error.
	pub fn path(&self) -> &Path {
		match self {
			DecodeError::KeyNotFound { path, .. }
			| DecodeError::ValueNotFound { path }
			| DecodeError::TypeMismatch { path, .. }
			| DecodeError::OutOfRange { path, .. } => path,
		}
	}
}
