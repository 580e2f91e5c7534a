//! Adverts facade: listing, publishing, and command posts.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/adverts`.
#[derive(Clone, Copy, Debug)]
pub struct Adverts<'a> {
	client: &'a Client,
}
impl<'a> Adverts<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches one advert by id.
	pub async fn get(&self, id: u64) -> Result<Value> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Lists adverts; a `limit` of zero fetches without pagination parameters.
	pub async fn list(&self, limit: u64, offset: u64) -> Result<Value> {
		let data = if limit > 0 { json!({ "limit": limit, "offset": offset }) } else { Value::Null };

		self.client.request(Method::GET, self.endpoint(), data).await.map(unwrap_data)
	}

	/// Publishes a new advert; see [`AdvertBuilder`](crate::advert::AdvertBuilder) for
	/// assembling the body.
	pub async fn create(&self, advert: Value) -> Result<Value> {
		self.client.request(Method::POST, self.endpoint(), advert).await.map(unwrap_data)
	}

	/// Deletes an advert.
	pub async fn delete(&self, id: u64) -> Result<()> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::DELETE, &endpoint, Value::Null).await.map(|_| ())
	}

	/// Activates a previously deactivated or pending advert.
	pub async fn activate(&self, id: u64) -> Result<Value> {
		self.command(id, json!({ "command": "activate" })).await
	}

	/// Deactivates an advert, flagging whether the item was actually sold.
	pub async fn deactivate(&self, id: u64, is_success: bool) -> Result<Value> {
		self.command(id, json!({ "command": "deactivate", "is_success": is_success })).await
	}

	async fn command(&self, id: u64, body: Value) -> Result<Value> {
		let endpoint = format!("{}/{id}/commands", self.endpoint());

		self.client.request(Method::POST, &endpoint, body).await.map(unwrap_data)
	}
}
impl ApiResource for Adverts<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/adverts"
	}
}
