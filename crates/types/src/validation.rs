//! Field-level validation for inbound JSON submissions
//!
//! Submissions arrive as loose JSON objects. A [`FieldReader`] walks the
//! expected fields, collects one [`FieldError`] per offending field and only
//! yields the typed value when every field passed.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Machine-readable reason attached to a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
	/// Field missing or carrying the wrong JSON type
	InvalidType,
	/// Field is a string outside the allowed set
	InvalidEnumValue,
	/// Body is not a JSON object at all
	InvalidBody,
}

/// A single validation failure, addressed by its path in the body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FieldError {
	pub path: Vec<String>,
	pub code: FieldErrorCode,
	pub message: String,
}

impl FieldError {
	pub fn required(field: &str) -> Self {
		Self {
			path: vec![field.to_string()],
			code: FieldErrorCode::InvalidType,
			message: "Required".to_string(),
		}
	}

	pub fn invalid_type(field: &str, expected: &str, received: &Value) -> Self {
		Self {
			path: vec![field.to_string()],
			code: FieldErrorCode::InvalidType,
			message: format!(
				"Expected {}, received {}",
				expected,
				json_type_name(received)
			),
		}
	}

	pub fn invalid_enum(field: &str, options: &[&str], received: &str) -> Self {
		let options = options
			.iter()
			.map(|o| format!("'{}'", o))
			.collect::<Vec<_>>()
			.join(" | ");
		Self {
			path: vec![field.to_string()],
			code: FieldErrorCode::InvalidEnumValue,
			message: format!(
				"Invalid enum value. Expected {}, received '{}'",
				options, received
			),
		}
	}

	pub fn invalid_body(message: impl Into<String>) -> Self {
		Self {
			path: Vec::new(),
			code: FieldErrorCode::InvalidBody,
			message: message.into(),
		}
	}

	/// Top-level field this error refers to, if any
	pub fn field(&self) -> Option<&str> {
		self.path.first().map(String::as_str)
	}
}

/// Every field error found in one submission
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
	errors: Vec<FieldError>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn single(error: FieldError) -> Self {
		Self {
			errors: vec![error],
		}
	}

	pub fn push(&mut self, error: FieldError) {
		self.errors.push(error);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn into_errors(self) -> Vec<FieldError> {
		self.errors
	}

	/// Whether any error points at `field`
	pub fn has_field(&self, field: &str) -> bool {
		self.errors.iter().any(|e| e.field() == Some(field))
	}
}

/// Reads typed fields out of a JSON object while accumulating errors.
///
/// String readers return an empty placeholder on failure so callers can keep
/// reading every field; [`FieldReader::finish`] discards the built value when
/// any error was recorded. Readers without a sensible placeholder return
/// `None` instead.
pub struct FieldReader<'a> {
	object: &'a Map<String, Value>,
	errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
	pub fn new(body: &'a Value) -> ValidationResult<Self> {
		match body {
			Value::Object(object) => Ok(Self {
				object,
				errors: ValidationErrors::new(),
			}),
			other => Err(ValidationErrors::single(FieldError::invalid_body(format!(
				"Expected object, received {}",
				json_type_name(other)
			)))),
		}
	}

	/// A string that must be present and non-null
	pub fn required_string(&mut self, field: &str) -> String {
		match self.object.get(field) {
			Some(Value::String(s)) => s.clone(),
			Some(other) => {
				self.errors
					.push(FieldError::invalid_type(field, "string", other));
				String::new()
			},
			None => {
				self.errors.push(FieldError::required(field));
				String::new()
			},
		}
	}

	/// A string that may be absent or null
	pub fn optional_string(&mut self, field: &str) -> Option<String> {
		match self.object.get(field) {
			None | Some(Value::Null) => None,
			Some(Value::String(s)) => Some(s.clone()),
			Some(other) => {
				self.errors
					.push(FieldError::invalid_type(field, "string", other));
				None
			},
		}
	}

	/// A required string restricted to `options`, parsed into `T`
	pub fn required_enum<T>(&mut self, field: &str, options: &[&str]) -> Option<T>
	where
		T: FromStr,
	{
		match self.object.get(field) {
			Some(Value::String(s)) => match s.parse::<T>() {
				Ok(value) => Some(value),
				Err(_) => {
					self.errors
						.push(FieldError::invalid_enum(field, options, s));
					None
				},
			},
			Some(other) => {
				self.errors
					.push(FieldError::invalid_type(field, "string", other));
				None
			},
			None => {
				self.errors.push(FieldError::required(field));
				None
			},
		}
	}

	/// Yield `value` when every field passed. A reader only returns `None`
	/// after recording an error, so `None` never escapes as success.
	pub fn finish<T>(self, value: Option<T>) -> ValidationResult<T> {
		match value {
			Some(value) if self.errors.is_empty() => Ok(value),
			_ => Err(self.errors),
		}
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
