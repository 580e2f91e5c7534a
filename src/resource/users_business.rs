//! Business profiles facade: company data, logos, and banners.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/users-business`.
#[derive(Clone, Copy, Debug)]
pub struct UsersBusiness<'a> {
	client: &'a Client,
}
impl<'a> UsersBusiness<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches the authenticated business profile.
	pub async fn me(&self) -> Result<Value> {
		let endpoint = format!("{}/me", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Replaces the authenticated business profile.
	pub async fn update(&self, profile: &BusinessProfile) -> Result<Value> {
		let endpoint = format!("{}/me", self.endpoint());
		let data = json!({
			"name": profile.name,
			"description": profile.description,
			"phones": profile.phones,
			"address": {
				"street": profile.address.street,
				"number": profile.address.number,
				"postcode": profile.address.postcode,
				"city": profile.address.city,
			},
			"subdomain": profile.subdomain,
			"website_url": profile.website_url,
		});

		self.client.request(Method::PUT, &endpoint, data).await.map(unwrap_data)
	}

	/// Lists the uploaded company logos.
	pub async fn logos(&self) -> Result<Value> {
		let endpoint = format!("{}/me/logos", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Uploads a company logo by URL.
	pub async fn post_logo(&self, logo_url: &str) -> Result<Value> {
		let endpoint = format!("{}/me/logos", self.endpoint());

		self.client
			.request(Method::PUT, &endpoint, json!({ "url": logo_url }))
			.await
			.map(unwrap_data)
	}

	/// Fetches one banner by id, or all of them when no id is given.
	pub async fn banners(&self, id: Option<u64>) -> Result<Value> {
		let endpoint = match id {
			Some(id) => format!("{}/me/logos/{id}", self.endpoint()),
			None => format!("{}/me/logos", self.endpoint()),
		};

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}
}
impl ApiResource for UsersBusiness<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/users-business"
	}
}

/// Company profile payload for [`UsersBusiness::update`].
#[derive(Clone, Debug)]
pub struct BusinessProfile {
	/// Company name.
	pub name: String,
	/// Free-form company description.
	pub description: String,
	/// Contact phone numbers.
	pub phones: Vec<String>,
	/// Company address.
	pub address: BusinessAddress,
	/// Subdomain the company page is served under.
	pub subdomain: String,
	/// Company website URL.
	pub website_url: String,
}

/// Company address carried inside [`BusinessProfile`].
#[derive(Clone, Debug)]
pub struct BusinessAddress {
	/// Street name.
	pub street: String,
	/// Street number.
	pub number: String,
	/// Postal code.
	pub postcode: String,
	/// City name.
	pub city: String,
}
