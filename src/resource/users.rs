//! Users facade: the authenticated partner user and their account.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/users`.
#[derive(Clone, Copy, Debug)]
pub struct Users<'a> {
	client: &'a Client,
}
impl<'a> Users<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches one user by id.
	pub async fn get(&self, id: u64) -> Result<Value> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Fetches the authenticated user.
	pub async fn me(&self) -> Result<Value> {
		let endpoint = format!("{}/me", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Fetches the authenticated user's account balance.
	pub async fn account_balance(&self) -> Result<Value> {
		let endpoint = format!("{}/me/account-balance", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Fetches the authenticated user's payment methods.
	pub async fn payment_methods(&self) -> Result<Value> {
		let endpoint = format!("{}/me/payment-methods", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}
}
impl ApiResource for Users<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/users"
	}
}
