//! Thin per-resource facades translating domain calls into pipeline requests.
//!
//! Each facade borrows the [`Client`](crate::client::Client), supplies its base path via
//! [`ApiResource::endpoint`], and marshals parameters into
//! [`Client::request`](crate::client::Client::request). Facades perform no error handling
//! of their own; everything propagates unchanged. Where the upstream wraps a payload in a
//! nested `data` field the facade unwraps it locally, as a per-endpoint detail rather
//! than a pipeline guarantee.

pub mod adverts;
pub mod categories;
pub mod cities;
pub mod threads;
pub mod users;
pub mod users_business;

pub use adverts::Adverts;
pub use categories::Categories;
pub use cities::Cities;
pub use threads::Threads;
pub use users::Users;
pub use users_business::{BusinessAddress, BusinessProfile, UsersBusiness};

// self
use crate::_prelude::*;

/// Capability interface every resource facade implements.
pub trait ApiResource {
	/// Base path of this resource, relative to the API root.
	fn endpoint(&self) -> &'static str;
}

/// Takes the nested `data` field out of a response, yielding `Null` when absent.
pub(crate) fn unwrap_data(mut value: Value) -> Value {
	value.get_mut("data").map_or(Value::Null, Value::take)
}
