//! OLX partner API client: one authenticated request pipeline, an automatic OAuth 2.0
//! token lifecycle, and a normalized error model shared by every resource facade.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod advert;
pub mod client;
pub mod country;
pub mod credentials;
pub mod error;
pub mod obs;
pub mod resource;

mod token;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, Method, StatusCode};
	pub use serde::Deserialize;
	pub use serde_json::{Map, Value, json};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
