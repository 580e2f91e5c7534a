//! Token lifecycle primitives: grant selection, form assembly, and exchange payloads.

// self
use crate::{_prelude::*, credentials::Credentials};

/// Fixed token endpoint path, relative to the API base.
pub(crate) const TOKEN_ENDPOINT: &str = "open/oauth/token";
/// Scope string the token endpoint expects.
pub(crate) const TOKEN_SCOPE: &str = "v2 read write";
/// Scope string the authorization URL expects; the upstream API uses a different word
/// order here than at the token endpoint.
pub(crate) const AUTHORIZE_SCOPE: &str = "read write v2";

/// OAuth 2.0 grant selected for a token exchange.
///
/// No `Debug` on purpose: refresh tokens and access codes must not reach logs.
#[derive(Clone)]
pub(crate) enum Grant<'a> {
	/// `authorization_code` exchange for a partner-user token.
	AuthorizationCode {
		code: &'a str,
		redirect_url: &'a str,
	},
	/// `refresh_token` rotation of a previously issued token.
	RefreshToken {
		refresh_token: String,
	},
	/// `client_credentials` application-level token.
	ClientCredentials,
}
impl Grant<'_> {
	/// Returns the wire-level `grant_type` value, also used as a span label.
	pub(crate) const fn as_str(&self) -> &'static str {
		match self {
			Self::AuthorizationCode { .. } => "authorization_code",
			Self::RefreshToken { .. } => "refresh_token",
			Self::ClientCredentials => "client_credentials",
		}
	}

	/// Builds the form-encoded body for this grant.
	pub(crate) fn form(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
		let mut form = vec![
			("grant_type", self.as_str().to_owned()),
			("client_id", credentials.client_id().to_string()),
			("client_secret", credentials.client_secret().expose().to_owned()),
		];

		match self {
			Self::AuthorizationCode { code, redirect_url } => {
				form.push(("scope", TOKEN_SCOPE.to_owned()));
				form.push(("code", (*code).to_owned()));
				form.push(("redirect_uri", (*redirect_url).to_owned()));
			},
			Self::RefreshToken { refresh_token } =>
				form.push(("refresh_token", refresh_token.clone())),
			Self::ClientCredentials => form.push(("scope", TOKEN_SCOPE.to_owned())),
		}

		form
	}
}

/// Current access/refresh token pair.
///
/// Starts empty; populated by any successful exchange. The refresh token survives
/// access-token refreshes unless the server omits it, in which case it is cleared.
#[derive(Default)]
pub(crate) struct TokenState {
	pub access_token: Option<String>,
	pub refresh_token: Option<String>,
}
impl Debug for TokenState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenState")
			.field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

/// Successful token endpoint payload.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenGrant {
	pub access_token: String,
	#[serde(default)]
	pub refresh_token: Option<String>,
}
