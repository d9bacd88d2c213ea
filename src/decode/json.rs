use crate::decode::Value;

/// Translates a parsed JSON document into the engine's value model.
///
/// Numbers keep the narrowest natural tag: anything representable as `i64`
/// becomes `I64`, remaining non-negative integers become `U64`, everything
/// else becomes `F64`.
pub fn from_json(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(flag) => Value::Bool(*flag),
		serde_json::Value::Number(number) => {
			if let Some(signed) = number.as_i64() {
				Value::I64(signed)
			} else if let Some(unsigned) = number.as_u64() {
				Value::U64(unsigned)
			} else {
				Value::F64(number.as_f64().unwrap_or(f64::NAN))
			}
		}
		serde_json::Value::String(text) => Value::String(text.clone()),
		serde_json::Value::Array(items) => Value::Sequence(items.iter().map(from_json).collect()),
		serde_json::Value::Object(entries) => Value::Mapping(entries.iter().map(|(key, value)| (key.clone(), from_json(value))).collect()),
	}
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		from_json(&json)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::from_json;
	use crate::decode::Value;

	#[test]
	fn scalars_keep_their_shape() {
		assert_eq!(from_json(&json!(null)), Value::Null);
		assert_eq!(from_json(&json!(true)), Value::Bool(true));
		assert_eq!(from_json(&json!("x")), Value::String("x".to_owned()));
	}

	#[test]
	fn numbers_get_the_narrowest_natural_tag() {
		assert_eq!(from_json(&json!(1)), Value::I64(1));
		assert_eq!(from_json(&json!(-1)), Value::I64(-1));
		assert_eq!(from_json(&json!(u64::MAX)), Value::U64(u64::MAX));
		assert_eq!(from_json(&json!(1.5)), Value::F64(1.5));
	}

	#[test]
	fn collections_translate_recursively() {
		let value = from_json(&json!({"a": [1, "b", null]}));
		let Value::Mapping(mapping) = value else {
			panic!("expected mapping");
		};
		let Some(Value::Sequence(items)) = mapping.get("a") else {
			panic!("expected sequence at a");
		};
		assert_eq!(items.len(), 3);
		assert_eq!(items[0], Value::I64(1));
		assert_eq!(items[2], Value::Null);
	}

	#[test]
	fn owned_conversion_matches_the_borrowed_one() {
		let json = json!({"a": 1});
		assert_eq!(Value::from(json.clone()), from_json(&json));
	}
}
