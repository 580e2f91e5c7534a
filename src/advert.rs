//! Advert payload assembly.
//!
//! [`AdvertBuilder`] is a pure data helper with no network dependency; its output is the
//! JSON body [`Adverts::create`](crate::resource::Adverts::create) expects.

// self
use crate::_prelude::*;

/// Who is publishing the advert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvertiserType {
	/// A private person (the default).
	#[default]
	Private,
	/// A business account.
	Business,
}
impl AdvertiserType {
	/// Returns the wire-level value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Private => "private",
			Self::Business => "business",
		}
	}
}

/// Consuming builder assembling an advert creation payload.
///
/// Starts with `advertiser_type = "private"` and an empty attribute list; every setter
/// overwrites its field except [`attribute`](Self::attribute), which appends.
#[derive(Clone, Debug)]
pub struct AdvertBuilder {
	data: Map<String, Value>,
}
impl AdvertBuilder {
	/// Creates a builder with the default advertiser type and no attributes.
	pub fn new() -> Self {
		let mut data = Map::new();

		data.insert("advertiser_type".into(), AdvertiserType::Private.as_str().into());
		data.insert("attributes".into(), Value::Array(Vec::new()));

		Self { data }
	}

	/// Sets the advert title.
	pub fn title(self, title: impl Into<String>) -> Self {
		self.set("title", title.into())
	}

	/// Sets the advert description.
	pub fn description(self, description: impl Into<String>) -> Self {
		self.set("description", description.into())
	}

	/// Sets the category the advert is published under.
	pub fn category_id(self, category_id: u64) -> Self {
		self.set("category_id", category_id)
	}

	/// Overrides the advertiser type.
	pub fn advertiser_type(self, advertiser_type: AdvertiserType) -> Self {
		self.set("advertiser_type", advertiser_type.as_str())
	}

	/// Sets the external listing URL the advert mirrors.
	pub fn external_url(self, url: impl Into<String>) -> Self {
		self.set("external_url", url.into())
	}

	/// Sets the partner-side identifier of the advert.
	pub fn external_id(self, external_id: impl Into<String>) -> Self {
		self.set("external_id", external_id.into())
	}

	/// Sets the contact person shown on the advert.
	pub fn contact(self, name: impl Into<String>, phone: impl Into<String>) -> Self {
		self.set("contact", json!({ "name": name.into(), "phone": phone.into() }))
	}

	/// Sets the advert location; coordinates are optional and serialized as `null` when
	/// absent, matching the upstream payload shape.
	pub fn location(self, city_id: u64, latitude: Option<f64>, longitude: Option<f64>) -> Self {
		self.set(
			"location",
			json!({ "city_id": city_id, "latitude": latitude, "longitude": longitude }),
		)
	}

	/// Sets the price; the currency is omitted entirely when not given.
	pub fn price(self, value: u64, currency: Option<&str>) -> Self {
		let mut price = Map::new();

		price.insert("value".into(), value.into());

		if let Some(currency) = currency {
			price.insert("currency".into(), currency.into());
		}

		self.set("price", price)
	}

	/// Appends one category attribute `(code, value)` pair.
	pub fn attribute(mut self, code: impl Into<String>, value: impl Into<Value>) -> Self {
		if let Some(Value::Array(attributes)) = self.data.get_mut("attributes") {
			attributes.push(json!({ "code": code.into(), "value": value.into() }));
		}

		self
	}

	/// Yields the assembled payload.
	pub fn build(self) -> Value {
		Value::Object(self.data)
	}

	fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.data.insert(name.into(), value.into());

		self
	}
}
impl Default for AdvertBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn builder_defaults_to_private_with_empty_attributes() {
		assert_eq!(
			AdvertBuilder::new().build(),
			json!({ "advertiser_type": "private", "attributes": [] })
		);
	}

	#[test]
	fn builder_assembles_a_full_payload() {
		let advert = AdvertBuilder::new()
			.title("Mountain bike")
			.description("Barely used.")
			.category_id(1423)
			.external_id("bike-1")
			.contact("Jan", "+48123123123")
			.location(1, Some(52.22), Some(21.01))
			.price(1500, Some("PLN"))
			.attribute("condition", "used")
			.attribute("color", "red")
			.build();

		assert_eq!(
			advert,
			json!({
				"advertiser_type": "private",
				"attributes": [
					{ "code": "condition", "value": "used" },
					{ "code": "color", "value": "red" },
				],
				"title": "Mountain bike",
				"description": "Barely used.",
				"category_id": 1423,
				"external_id": "bike-1",
				"contact": { "name": "Jan", "phone": "+48123123123" },
				"location": { "city_id": 1, "latitude": 52.22, "longitude": 21.01 },
				"price": { "value": 1500, "currency": "PLN" },
			})
		);
	}

	#[test]
	fn price_omits_currency_when_absent() {
		let advert = AdvertBuilder::new().price(100, None).build();

		assert_eq!(advert["price"], json!({ "value": 100 }));
	}

	#[test]
	fn advertiser_type_can_be_overridden() {
		let advert = AdvertBuilder::new().advertiser_type(AdvertiserType::Business).build();

		assert_eq!(advert["advertiser_type"], json!("business"));
	}
}
