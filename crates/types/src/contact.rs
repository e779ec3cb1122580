//! Contact inquiry model
//!
//! A lead submitted through the general contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::validation::{FieldReader, ValidationResult};

/// Validated contact form submission, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewContactInquiry {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub inquiry_type: String,
	pub message: String,
}

impl NewContactInquiry {
	/// Validate a raw JSON body.
	///
	/// All five fields must be present strings. Unknown fields, including any
	/// caller-supplied `id` or `createdAt`, are ignored.
	pub fn from_json(body: &Value) -> ValidationResult<Self> {
		let mut reader = FieldReader::new(body)?;
		let inquiry = Self {
			name: reader.required_string("name"),
			email: reader.required_string("email"),
			phone: reader.required_string("phone"),
			inquiry_type: reader.required_string("inquiryType"),
			message: reader.required_string("message"),
		};
		reader.finish(Some(inquiry))
	}
}

/// Stored contact inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub inquiry_type: String,
	pub message: String,
	#[serde(with = "crate::timestamp")]
	#[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
	pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
	pub fn new(id: String, inquiry: NewContactInquiry, created_at: DateTime<Utc>) -> Self {
		Self {
			id,
			name: inquiry.name,
			email: inquiry.email,
			phone: inquiry.phone,
			inquiry_type: inquiry.inquiry_type,
			message: inquiry.message,
			created_at,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn valid_body() -> Value {
		json!({
			"name": "Jane Wanjiku",
			"email": "jane@example.com",
			"phone": "+254700000000",
			"inquiryType": "installation",
			"message": "Looking for a rooftop system"
		})
	}

	#[test]
	fn test_valid_body_parses() {
		let inquiry = NewContactInquiry::from_json(&valid_body()).unwrap();
		assert_eq!(inquiry.name, "Jane Wanjiku");
		assert_eq!(inquiry.inquiry_type, "installation");
	}

	#[test]
	fn test_missing_email_is_reported() {
		let mut body = valid_body();
		body.as_object_mut().unwrap().remove("email");

		let err = NewContactInquiry::from_json(&body).unwrap_err();
		assert_eq!(err.len(), 1);
		assert!(err.has_field("email"));
	}

	#[test]
	fn test_caller_cannot_supply_id_or_created_at() {
		let mut body = valid_body();
		body["id"] = json!("forged");
		body["createdAt"] = json!("1999-01-01T00:00:00.000Z");

		let inquiry = NewContactInquiry::from_json(&body).unwrap();
		let json = serde_json::to_value(&inquiry).unwrap();
		assert!(json.get("id").is_none());
		assert!(json.get("createdAt").is_none());
	}

	#[test]
	fn test_stored_record_serializes_camel_case() {
		let created_at = "2024-06-01T10:00:00.000Z".parse::<DateTime<Utc>>().unwrap();
		let inquiry = ContactInquiry::new(
			"abc".to_string(),
			NewContactInquiry::from_json(&valid_body()).unwrap(),
			created_at,
		);

		let json = serde_json::to_value(&inquiry).unwrap();
		assert_eq!(json["id"], "abc");
		assert_eq!(json["inquiryType"], "installation");
		assert_eq!(json["createdAt"], "2024-06-01T10:00:00.000Z");
	}
}
