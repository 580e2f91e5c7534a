//! Categories facade.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/categories`.
#[derive(Clone, Copy, Debug)]
pub struct Categories<'a> {
	client: &'a Client,
}
impl<'a> Categories<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches one category by id.
	pub async fn get(&self, id: u64) -> Result<Value> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Lists the full category tree.
	pub async fn list(&self) -> Result<Value> {
		self.client.request(Method::GET, self.endpoint(), Value::Null).await.map(unwrap_data)
	}

	/// Fetches the attribute definitions adverts in this category must supply.
	pub async fn attributes(&self, category_id: u64) -> Result<Value> {
		let endpoint = format!("{}/{category_id}/attributes", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}
}
impl ApiResource for Categories<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/categories"
	}
}
