//! Message threads facade: conversations attached to adverts.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{ApiResource, unwrap_data},
};

/// Facade over `partner/threads`.
#[derive(Clone, Copy, Debug)]
pub struct Threads<'a> {
	client: &'a Client,
}
impl<'a> Threads<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Fetches one thread by id.
	pub async fn get(&self, id: u64) -> Result<Value> {
		let endpoint = format!("{}/{id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Lists threads, optionally filtered by advert and/or interlocutor; a `limit` of
	/// zero fetches without pagination parameters.
	pub async fn list(
		&self,
		advert_id: Option<u64>,
		interlocutor_id: Option<u64>,
		limit: u64,
		offset: u64,
	) -> Result<Value> {
		let mut data = Map::new();

		if let Some(advert_id) = advert_id {
			data.insert("advert_id".into(), advert_id.into());
		}
		if let Some(interlocutor_id) = interlocutor_id {
			data.insert("interlocutor_id".into(), interlocutor_id.into());
		}
		if limit > 0 {
			data.insert("limit".into(), limit.into());
			data.insert("offset".into(), offset.into());
		}

		self.client
			.request(Method::GET, self.endpoint(), Value::Object(data))
			.await
			.map(unwrap_data)
	}

	/// Lists the messages of one thread; a `limit` of zero fetches without pagination
	/// parameters.
	pub async fn messages(&self, thread_id: u64, limit: u64, offset: u64) -> Result<Value> {
		let endpoint = format!("{}/{thread_id}/messages", self.endpoint());
		let data = if limit > 0 { json!({ "limit": limit, "offset": offset }) } else { Value::Null };

		self.client.request(Method::GET, &endpoint, data).await.map(unwrap_data)
	}

	/// Fetches one message of one thread.
	pub async fn message(&self, thread_id: u64, message_id: u64) -> Result<Value> {
		let endpoint = format!("{}/{thread_id}/messages/{message_id}", self.endpoint());

		self.client.request(Method::GET, &endpoint, Value::Null).await.map(unwrap_data)
	}

	/// Posts a reply into a thread, optionally attaching files by URL.
	pub async fn reply(
		&self,
		thread_id: u64,
		text: &str,
		attachments: Option<&[String]>,
	) -> Result<Value> {
		let endpoint = format!("{}/{thread_id}/messages", self.endpoint());
		let mut data = json!({ "text": text });

		if let (Some(attachments), Value::Object(map)) = (attachments, &mut data) {
			map.insert("attachments".into(), attachments.into());
		}

		self.client.request(Method::POST, &endpoint, data).await.map(unwrap_data)
	}

	/// Marks every message of the thread as read.
	pub async fn mark_as_read(&self, thread_id: u64) -> Result<Value> {
		self.command(thread_id, json!({ "command": "mark-as-read" })).await
	}

	/// Flags or unflags the thread as a favourite.
	pub async fn set_favourite(&self, thread_id: u64, is_favourite: bool) -> Result<Value> {
		self.command(
			thread_id,
			json!({ "command": "set-favourite", "is_favourite": is_favourite }),
		)
		.await
	}

	async fn command(&self, thread_id: u64, body: Value) -> Result<Value> {
		let endpoint = format!("{}/{thread_id}/commands", self.endpoint());

		self.client.request(Method::POST, &endpoint, body).await.map(unwrap_data)
	}
}
impl ApiResource for Threads<'_> {
	fn endpoint(&self) -> &'static str {
		"partner/threads"
	}
}
