//! Loosely-typed userinfo documents with independent, per-field typed lookups.
//!
//! Providers disagree on which claims they return, so the document is kept as a
//! [`serde_json::Value`] and every lookup reports its own [`ClaimError`]. Callers
//! decide whether a failed lookup is fatal (required claims) or simply means
//! "absent" (optional claims).

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Error returned when a single path lookup cannot produce the requested type.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ClaimError {
	/// The path does not exist in the document (or resolves to `null`).
	#[error("Field `{path}` is missing.")]
	Missing {
		/// Dotted path that was requested.
		path: String,
	},
	/// The path exists but holds a value of another type.
	#[error("Field `{path}` is not {expected}.")]
	WrongType {
		/// Dotted path that was requested.
		path: String,
		/// Human readable description of the expected type.
		expected: &'static str,
	},
}

/// JSON document returned by a provider's userinfo endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct UserInfoDocument(Value);
impl UserInfoDocument {
	/// Parses a response body.
	///
	/// Any JSON value is accepted; lookups against a non-object document simply report
	/// [`ClaimError::Missing`].
	pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
		serde_json::from_slice(body).map(Self)
	}

	/// Returns the underlying JSON value.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Starts a lookup for a dotted path such as `groups` or `profile.email`.
	pub fn get_path<'a>(&'a self, path: &'a str) -> PathLookup<'a> {
		let value = path.split('.').try_fold(&self.0, |current, branch| current.get(branch));

		PathLookup { path, value: value.filter(|v| !v.is_null()) }
	}
}
impl From<Value> for UserInfoDocument {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

/// Result of [`UserInfoDocument::get_path`], converted with one of the typed accessors.
#[derive(Clone, Copy, Debug)]
pub struct PathLookup<'a> {
	path: &'a str,
	value: Option<&'a Value>,
}
impl PathLookup<'_> {
	/// Returns `true` when the path resolved to a non-null value.
	pub fn exists(&self) -> bool {
		self.value.is_some()
	}

	/// Reads the value as a string.
	pub fn string(&self) -> Result<String, ClaimError> {
		match self.present()? {
			Value::String(s) => Ok(s.clone()),
			_ => Err(self.wrong_type("a string")),
		}
	}

	/// Reads the value as a signed 64-bit integer; floats and numeric strings are rejected.
	pub fn int(&self) -> Result<i64, ClaimError> {
		match self.present()? {
			Value::Number(n) => n.as_i64().ok_or_else(|| self.wrong_type("an integer")),
			_ => Err(self.wrong_type("an integer")),
		}
	}

	/// Reads the value as an array of strings.
	///
	/// `null` elements decode to empty strings; any other non-string element fails the whole
	/// lookup.
	pub fn string_array(&self) -> Result<Vec<String>, ClaimError> {
		let Value::Array(items) = self.present()? else {
			return Err(self.wrong_type("an array of strings"));
		};

		items
			.iter()
			.map(|item| match item {
				Value::String(s) => Ok(s.clone()),
				Value::Null => Ok(String::new()),
				_ => Err(self.wrong_type("an array of strings")),
			})
			.collect()
	}

	fn present(&self) -> Result<&Value, ClaimError> {
		self.value.ok_or_else(|| ClaimError::Missing { path: self.path.to_owned() })
	}

	fn wrong_type(&self, expected: &'static str) -> ClaimError {
		ClaimError::WrongType { path: self.path.to_owned(), expected }
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn document(value: Value) -> UserInfoDocument {
		UserInfoDocument::from(value)
	}

	#[test]
	fn lookups_fail_independently() {
		let doc = document(json!({ "id": "not-a-number", "email": "a@b.com" }));

		assert_eq!(
			doc.get_path("id").int(),
			Err(ClaimError::WrongType { path: "id".into(), expected: "an integer" })
		);
		assert_eq!(doc.get_path("email").string().as_deref(), Ok("a@b.com"));
		assert_eq!(doc.get_path("groups").string_array(), Err(ClaimError::Missing {
			path: "groups".into()
		}));
	}

	#[test]
	fn int_rejects_floats_and_out_of_range_values() {
		let doc = document(json!({ "a": 42, "b": 42.5, "c": u64::MAX, "d": -7 }));

		assert_eq!(doc.get_path("a").int(), Ok(42));
		assert!(doc.get_path("b").int().is_err());
		assert!(doc.get_path("c").int().is_err());
		assert_eq!(doc.get_path("d").int(), Ok(-7));
	}

	#[test]
	fn string_array_maps_nulls_and_rejects_mixed_types() {
		let doc = document(json!({
			"plain": ["x", "y"],
			"nulls": ["x", null],
			"mixed": ["x", 1],
			"scalar": "x",
		}));

		assert_eq!(doc.get_path("plain").string_array(), Ok(vec!["x".into(), "y".into()]));
		assert_eq!(doc.get_path("nulls").string_array(), Ok(vec!["x".into(), String::new()]));
		assert!(doc.get_path("mixed").string_array().is_err());
		assert!(doc.get_path("scalar").string_array().is_err());
	}

	#[test]
	fn dotted_paths_walk_nested_objects() {
		let doc = document(json!({ "profile": { "email": "nested@example.com" }, "id": null }));

		assert_eq!(doc.get_path("profile.email").string().as_deref(), Ok("nested@example.com"));
		assert!(!doc.get_path("profile.missing").exists());
		assert!(!doc.get_path("id").exists(), "Null values count as missing.");
	}

	#[test]
	fn non_object_documents_parse_but_report_missing_fields() {
		let doc = UserInfoDocument::from_slice(b"[1, 2, 3]").expect("Arrays are valid JSON.");

		assert_eq!(doc.get_path("id").int(), Err(ClaimError::Missing { path: "id".into() }));
		assert!(UserInfoDocument::from_slice(b"<html>").is_err());
	}
}
