//! Core client: the request/authentication pipeline and the token lifecycle.
//!
//! [`Client`] turns a logical `(method, endpoint, payload)` triple into an authenticated
//! HTTP call against one country's API host. Token acquisition is lazy: the first
//! authenticated call without a held token performs a refresh-or-client-credentials
//! exchange behind a singleflight guard, so racing first calls produce exactly one
//! exchange. Outcome classification is uniform across every call: 4xx maps to
//! [`Error::Rejected`], unreadable 2xx bodies map to shape errors, and everything below
//! the client-error tier propagates as the transport's own error.

// crates.io
use reqwest::Response;
// self
use crate::{
	_prelude::*,
	country::Country,
	credentials::Credentials,
	error::ConfigError,
	obs::{self, CallKind, CallOutcome, CallSpan},
	resource::{Adverts, Categories, Cities, Threads, Users, UsersBusiness},
	token::{self, Grant, TokenGrant, TokenState},
};

/// `Version` header value the partner API requires on every call.
const API_VERSION: &str = "2.0";

/// Core OLX partner API client.
///
/// Cheap to share behind an `Arc`; token state lives behind locks so concurrent tasks may
/// reuse one instance, though no coordination beyond the lazy-fetch guard is performed.
pub struct Client {
	http: ReqwestClient,
	credentials: Credentials,
	api_base: Url,
	authorize_base: Url,
	tokens: RwLock<TokenState>,
	token_guard: AsyncMutex<()>,
}
impl Client {
	/// Creates a client bound to the given country's host with a default transport.
	pub fn new(credentials: Credentials, country: Country) -> Result<Self> {
		let http = ReqwestClient::builder().build().map_err(ConfigError::from)?;

		Self::with_http_client(credentials, country, http)
	}

	/// Creates a client bound to the given country's host, reusing a caller-provided
	/// transport (custom TLS, timeouts, proxies).
	pub fn with_http_client(
		credentials: Credentials,
		country: Country,
		http: ReqwestClient,
	) -> Result<Self> {
		let authorize_base =
			Url::parse(country.host()).map_err(|source| ConfigError::InvalidBaseUrl { source })?;
		let api_base = authorize_base
			.join("api/")
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(Self {
			http,
			credentials,
			api_base,
			authorize_base,
			tokens: RwLock::default(),
			token_guard: AsyncMutex::new(()),
		})
	}

	/// Creates a client against an explicit API base URL instead of a country host.
	///
	/// Intended for staging environments and tests; the authorization URL is derived from
	/// the base's origin. The base must end with a trailing slash for endpoint joining.
	pub fn with_api_base(
		credentials: Credentials,
		api_base: Url,
		http: ReqwestClient,
	) -> Result<Self> {
		let authorize_base =
			api_base.join("/").map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(Self {
			http,
			credentials,
			api_base,
			authorize_base,
			tokens: RwLock::default(),
			token_guard: AsyncMutex::new(()),
		})
	}

	/// Returns the API base URL every endpoint path is joined onto.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// Returns the credentials this client authenticates with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Returns the adverts facade.
	pub fn adverts(&self) -> Adverts<'_> {
		Adverts::new(self)
	}

	/// Returns the categories facade.
	pub fn categories(&self) -> Categories<'_> {
		Categories::new(self)
	}

	/// Returns the cities facade.
	pub fn cities(&self) -> Cities<'_> {
		Cities::new(self)
	}

	/// Returns the message threads facade.
	pub fn threads(&self) -> Threads<'_> {
		Threads::new(self)
	}

	/// Returns the users facade.
	pub fn users(&self) -> Users<'_> {
		Users::new(self)
	}

	/// Returns the business profiles facade.
	pub fn users_business(&self) -> UsersBusiness<'_> {
		UsersBusiness::new(self)
	}

	/// Builds the authorization URL that starts the authorization-code flow.
	///
	/// Pure string construction, no network call. `state` is the caller-supplied random
	/// value echoed back on the redirect.
	pub fn connect_url(&self, redirect_url: &str, state: &str) -> Result<Url> {
		let mut url = self.authorize_base.join("oauth/authorize/").map_err(|source| {
			ConfigError::InvalidEndpoint { endpoint: "oauth/authorize/".into(), source }
		})?;

		url.query_pairs_mut()
			.append_pair("client_id", &self.credentials.client_id().to_string())
			.append_pair("response_type", "code")
			.append_pair("state", state)
			.append_pair("scope", token::AUTHORIZE_SCOPE)
			.append_pair("redirect_uri", redirect_url);

		Ok(url)
	}

	/// Performs a token exchange, choosing the grant automatically, and returns the new
	/// access token.
	///
	/// With an `access_code` the `authorization_code` grant runs and `redirect_url`
	/// becomes mandatory; otherwise a held refresh token selects the `refresh_token`
	/// grant, and an empty state falls back to `client_credentials`. On success the
	/// access token is stored and the refresh token is replaced, or cleared when the
	/// server omits it.
	pub async fn generate_token(
		&self,
		access_code: Option<&str>,
		redirect_url: Option<&str>,
	) -> Result<String> {
		let refresh_token = self.tokens.read().refresh_token.clone();
		let grant = match access_code {
			Some(code) => {
				let redirect_url = redirect_url.ok_or(ConfigError::MissingRedirectUrl)?;

				Grant::AuthorizationCode { code, redirect_url }
			},
			None => match refresh_token {
				Some(refresh_token) => Grant::RefreshToken { refresh_token },
				None => Grant::ClientCredentials,
			},
		};

		self.exchange(grant).await
	}

	/// Overwrites the held access token with an externally obtained one.
	pub fn set_token(&self, token: impl Into<String>) {
		self.tokens.write().access_token = Some(token.into());
	}

	/// Returns the held access token, if any.
	pub fn token(&self) -> Option<String> {
		self.tokens.read().access_token.clone()
	}

	/// Overwrites the held refresh token.
	pub fn set_refresh_token(&self, refresh_token: impl Into<String>) {
		self.tokens.write().refresh_token = Some(refresh_token.into());
	}

	/// Returns the held refresh token, if any.
	pub fn refresh_token(&self) -> Option<String> {
		self.tokens.read().refresh_token.clone()
	}

	/// Executes one logical API call and normalizes its outcome.
	///
	/// GET turns `data` (a flat object) into the query string, DELETE ignores `data`,
	/// and every other method sends `data` as a JSON body. All calls carry the
	/// `Accept`/`Version` headers plus a bearer token, fetching one lazily first if none
	/// is held. A 204 yields an empty object; other bodies are returned as parsed JSON
	/// with no `data` unwrapping, which is left to the individual facades.
	pub async fn request(&self, method: Method, endpoint: &str, data: Value) -> Result<Value> {
		const KIND: CallKind = CallKind::Resource;

		let span = CallSpan::new(KIND, "request");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let mut url = self.endpoint_url(endpoint)?;
				let with_body = method != Method::GET && method != Method::DELETE;

				if method == Method::GET {
					append_query(&mut url, &data);
				}

				let bearer = self.bearer_token().await?;
				let mut builder = self
					.http
					.request(method, url)
					.header("Accept", "application/json")
					.header("Version", API_VERSION)
					.bearer_auth(bearer);

				if with_body {
					let body = if data.is_null() { Value::Object(Map::new()) } else { data };

					builder = builder.json(&body);
				}

				let response = builder.send().await?;

				classify(response).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Returns the held access token, performing a lazy refresh-or-client-credentials
	/// exchange when none exists yet.
	///
	/// This is the only implicit network side effect in the library: a caller who never
	/// authenticates manually still gets a working client on the first authenticated
	/// call. The guard keeps racing first calls from performing duplicate exchanges.
	async fn bearer_token(&self) -> Result<String> {
		if let Some(held) = self.tokens.read().access_token.clone() {
			return Ok(held);
		}

		let _singleflight = self.token_guard.lock().await;

		if let Some(held) = self.tokens.read().access_token.clone() {
			return Ok(held);
		}

		self.generate_token(None, None).await
	}

	async fn exchange(&self, grant: Grant<'_>) -> Result<String> {
		const KIND: CallKind = CallKind::TokenExchange;

		let span = CallSpan::new(KIND, grant.as_str());

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.endpoint_url(token::TOKEN_ENDPOINT)?;
				let form = grant.form(&self.credentials);
				// The exchange itself is the one call that must not carry a bearer token.
				let response = self
					.http
					.post(url)
					.header("Accept", "application/json")
					.header("Version", API_VERSION)
					.form(&form)
					.send()
					.await?;
				let status = response.status();
				let value = classify(response).await?;
				let payload: TokenGrant =
					serde_path_to_error::deserialize(value.clone()).map_err(|source| {
						Error::TokenPayload { status: status.as_u16(), details: value, source }
					})?;

				{
					let mut tokens = self.tokens.write();

					tokens.access_token = Some(payload.access_token.clone());
					tokens.refresh_token = payload.refresh_token;
				}

				Ok(payload.access_token)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
		self.api_base.join(endpoint).map_err(|source| {
			ConfigError::InvalidEndpoint { endpoint: endpoint.into(), source }.into()
		})
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("api_base", &self.api_base.as_str())
			.field("credentials", &self.credentials)
			.field("tokens", &*self.tokens.read())
			.finish()
	}
}

/// Classifies a non-4xx outcome: 204 becomes an empty object, anything else must carry a
/// JSON body. 5xx falls through `error_for_status` and surfaces as the transport's error.
async fn classify(response: Response) -> Result<Value> {
	let status = response.status();

	if status.is_client_error() {
		return Err(rejection(response).await);
	}

	let response = response.error_for_status()?;

	if status == StatusCode::NO_CONTENT {
		return Ok(Value::Object(Map::new()));
	}

	let body = response.text().await?;

	// Only 204 may be legitimately empty; any other empty body is a server contract
	// violation surfaced distinctly from JSON errors.
	if body.trim().is_empty() {
		return Err(Error::EmptyBody {
			status: status.as_u16(),
			details: json!({ "status_code": status.as_u16() }),
		});
	}

	match serde_json::from_str(&body) {
		Ok(value) => Ok(value),
		Err(e) => Err(Error::MalformedJson {
			status: status.as_u16(),
			details: json!({ "body": body, "json_error": e.to_string() }),
		}),
	}
}

/// Maps a 4xx response into [`Error::Rejected`], extracting the best human message.
///
/// The upstream API is inconsistent about where it places the explanation, so two shapes
/// are tried in order (`error.message`, then `error_description`) before falling back to
/// the transport's own generic message for the status.
async fn rejection(response: Response) -> Error {
	let status = response.status();
	let fallback =
		response.error_for_status_ref().err().map_or_else(|| status.to_string(), |e| e.to_string());
	let body = response.text().await.unwrap_or_default();
	let details: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
	let message = details["error"]["message"]
		.as_str()
		.or_else(|| details["error_description"].as_str())
		.map_or(fallback, ToOwned::to_owned);

	Error::Rejected { message, status: status.as_u16(), details }
}

/// Appends the flat `data` object to the URL's query string, stringifying scalars the way
/// the API expects. Nulls are skipped; facades never pass nested values for GET.
fn append_query(url: &mut Url, data: &Value) {
	let Value::Object(map) = data else { return };

	if map.is_empty() {
		return;
	}

	let mut pairs = url.query_pairs_mut();

	for (key, value) in map {
		match value {
			Value::Null => {},
			Value::String(s) => {
				pairs.append_pair(key, s);
			},
			other => {
				pairs.append_pair(key, &other.to_string());
			},
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn client() -> Client {
		Client::new(Credentials::new(1234567890, "client_secret"), Country::Ua)
			.expect("Client construction should succeed for supported countries.")
	}

	#[test]
	fn construction_binds_the_country_host() {
		assert_eq!(client().api_base().as_str(), "https://www.olx.ua/api/");
	}

	#[test]
	fn connect_url_matches_the_documented_shape() {
		let url = client()
			.connect_url("https://example.com/redirect", "testState")
			.expect("Authorization URL should build.");

		assert_eq!(
			url.as_str(),
			"https://www.olx.ua/oauth/authorize/?client_id=1234567890&response_type=code\
			&state=testState&scope=read+write+v2&redirect_uri=https%3A%2F%2Fexample.com%2Fredirect"
		);
	}

	#[test]
	fn token_accessors_have_no_validation() {
		let client = client();

		assert!(client.token().is_none());
		assert!(client.refresh_token().is_none());

		client.set_token("external");
		client.set_refresh_token("external-refresh");

		assert_eq!(client.token().as_deref(), Some("external"));
		assert_eq!(client.refresh_token().as_deref(), Some("external-refresh"));
	}

	#[test]
	fn append_query_stringifies_scalars_and_skips_nulls() {
		let mut url = Url::parse("https://www.olx.ua/api/partner/adverts")
			.expect("Static URL should parse.");

		append_query(&mut url, &json!({ "limit": 10, "offset": 0, "q": "bike", "skip": null }));

		assert_eq!(url.query(), Some("limit=10&offset=0&q=bike"));
	}

	#[test]
	fn append_query_leaves_the_url_untouched_without_data() {
		let mut url = Url::parse("https://www.olx.ua/api/partner/adverts")
			.expect("Static URL should parse.");

		append_query(&mut url, &Value::Null);
		append_query(&mut url, &json!({}));

		assert_eq!(url.query(), None);
	}
}
