use std::fmt;

/// One step from a tree node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKey {
	/// A named mapping field.
	Field(String),
	/// A zero-based sequence index.
	Index(usize),
}

/// Ordered trail of keys from the decode root to the node currently being decoded.
///
/// Paths serve diagnostics only; they are never used for lookup. Extension is
/// by copy, so sibling decoders never observe each other's keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
	keys: Vec<PathKey>,
}

impl Path {
	/// Creates the empty path of a decode root.
	pub fn root() -> Self {
		Self::default()
	}

	/// Returns a copy of `self` extended with one key.
	pub fn child(&self, key: PathKey) -> Self {
		let mut keys = self.keys.clone();
		keys.push(key);
		Self { keys }
	}

	/// Keys in root-to-leaf order.
	pub fn keys(&self) -> &[PathKey] {
		&self.keys
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Whether the path is the decode root.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.keys.is_empty() {
			return f.write_str("(root)");
		}
		for (position, key) in self.keys.iter().enumerate() {
			match key {
				PathKey::Field(name) => {
					if position > 0 {
						f.write_str(".")?;
					}
					f.write_str(name)?;
				}
				PathKey::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}
