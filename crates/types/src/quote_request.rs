//! Quote request model
//!
//! A lead tied to one product or package from the catalog.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::validation::{FieldReader, ValidationResult};

/// Kind of catalog item a quote is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
	Product,
	Package,
}

impl ItemType {
	pub const VARIANTS: &'static [&'static str] = &["product", "package"];

	pub fn as_str(&self) -> &'static str {
		match self {
			ItemType::Product => "product",
			ItemType::Package => "package",
		}
	}
}

impl fmt::Display for ItemType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ItemType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"product" => Ok(ItemType::Product),
			"package" => Ok(ItemType::Package),
			other => Err(format!("unknown item type: {}", other)),
		}
	}
}

/// Validated quote request, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewQuoteRequest {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub item_type: ItemType,
	pub item_id: String,
	pub item_name: String,
	#[serde(default)]
	pub message: Option<String>,
}

impl NewQuoteRequest {
	/// Validate a raw JSON body. `message` may be absent or null.
	pub fn from_json(body: &Value) -> ValidationResult<Self> {
		let mut reader = FieldReader::new(body)?;
		let name = reader.required_string("name");
		let email = reader.required_string("email");
		let phone = reader.required_string("phone");
		let item_type = reader.required_enum::<ItemType>("itemType", ItemType::VARIANTS);
		let item_id = reader.required_string("itemId");
		let item_name = reader.required_string("itemName");
		let message = reader.optional_string("message");

		reader.finish(item_type.map(|item_type| Self {
			name,
			email,
			phone,
			item_type,
			item_id,
			item_name,
			message,
		}))
	}
}

/// Stored quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub item_type: ItemType,
	pub item_id: String,
	pub item_name: String,
	pub message: Option<String>,
	#[serde(with = "crate::timestamp")]
	#[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
	pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
	pub fn new(id: String, request: NewQuoteRequest, created_at: DateTime<Utc>) -> Self {
		Self {
			id,
			name: request.name,
			email: request.email,
			phone: request.phone,
			item_type: request.item_type,
			item_id: request.item_id,
			item_name: request.item_name,
			message: request.message,
			created_at,
		}
	}
}
