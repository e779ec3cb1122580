//! API request fixtures for e2e and integration tests

use serde_json::{json, Value};

/// API test data fixtures
#[allow(dead_code)]
pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	/// Valid contact form submission
	pub fn valid_contact_inquiry() -> Value {
		json!({
			"name": "Jane Wanjiku",
			"email": "jane@example.com",
			"phone": "+254700000000",
			"inquiryType": "installation",
			"message": "I'd like a site survey for a 5kW rooftop system."
		})
	}

	/// Contact submission with a distinguishable name
	pub fn contact_inquiry_named(name: &str) -> Value {
		let mut body = Self::valid_contact_inquiry();
		body["name"] = json!(name);
		body
	}

	/// Contact submission without the email field
	pub fn contact_inquiry_missing_email() -> Value {
		let mut body = Self::valid_contact_inquiry();
		body.as_object_mut()
			.expect("fixture is an object")
			.remove("email");
		body
	}

	/// Valid quote request for a product, without the optional message
	pub fn valid_quote_request() -> Value {
		json!({
			"name": "Otieno",
			"email": "otieno@example.com",
			"phone": "+254711111111",
			"itemType": "product",
			"itemId": "inverter-1",
			"itemName": "Hybrid Inverter 5kW"
		})
	}

	/// Valid quote request for a package, with a message
	pub fn package_quote_request_with_message() -> Value {
		json!({
			"name": "Amina",
			"email": "amina@example.com",
			"phone": "+254722222222",
			"itemType": "package",
			"itemId": "commercial-20kw",
			"itemName": "20kW Commercial System",
			"message": "Warehouse roof, about 600 square metres"
		})
	}

	/// Quote request with an item type outside product/package
	pub fn quote_request_invalid_item_type() -> Value {
		let mut body = Self::valid_quote_request();
		body["itemType"] = json!("service");
		body
	}
}
