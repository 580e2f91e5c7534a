//! Cities facade.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/cities`.
#[derive(Clone, Copy, Debug)]
pub struct Cities<'a> {
	client: &'a Client,
}
impl<'a> Cities<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches one city by id.
	pub async fn get(&self, id: u64) -> Result<Value> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Lists cities; a `limit` of zero fetches without pagination parameters.
	pub async fn list(&self, limit: u64, offset: u64) -> Result<Value> {
		let data = if limit > 0 { json!({ "limit": limit, "offset": offset }) } else { Value::Null };

		self.client.request(Method::GET, self.endpoint(), data).await.map(unwrap_data)
	}

	/// Fetches the districts of one city.
	pub async fn districts(&self, city_id: u64) -> Result<Value> {
		let endpoint = format!("{}/{city_id}/districts", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}
}
impl ApiResource for Cities<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/cities"
	}
}
