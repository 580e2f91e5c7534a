//! Normalized error model shared by the request pipeline, token exchanges, and facades.
//!
//! Every API-semantic failure surfaces as one [`Error`] enum so calling code needs exactly
//! one type to catch. Each variant that originates from an HTTP exchange carries the HTTP
//! status and the JSON detail tree captured at the point the failure was detected; the
//! uniform accessors ([`Error::code`], [`Error::details`], [`Error::flatten_details`],
//! [`Error::has_missing_params`]) work across all of them.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Network-level failures below the client-error tier (timeouts, connection errors, 5xx)
/// are not given semantic meaning here; they propagate unwrapped as [`Error::Transport`].
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem detected before any network call.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The remote API answered with a 4xx status.
	#[error("{message}")]
	Rejected {
		/// Human-readable message extracted from the response detail tree.
		message: String,
		/// Original HTTP status code.
		status: u16,
		/// Parsed detail tree; [`Value::Null`] when the body was not valid JSON.
		details: Value,
	},
	/// A non-204 response arrived with an empty body.
	#[error("API returned an empty body for a non-204 status code.")]
	EmptyBody {
		/// HTTP status code of the offending response.
		status: u16,
		/// Detail tree recording the status code.
		details: Value,
	},
	/// A response body could not be decoded as JSON.
	#[error("Failed to decode API response: invalid JSON.")]
	MalformedJson {
		/// HTTP status code of the offending response.
		status: u16,
		/// Detail tree carrying the raw body and the parser diagnostics.
		details: Value,
	},
	/// The token endpoint answered 2xx but the payload lacks a usable access token.
	#[error("Token endpoint returned a malformed payload.")]
	TokenPayload {
		/// HTTP status code of the exchange response.
		status: u16,
		/// The decoded payload as returned by the endpoint.
		details: Value,
		/// Structured deserialization failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Underlying transport failure (network, TLS, 5xx), passed through unwrapped.
	#[error(transparent)]
	Transport(#[from] ReqwestError),
}
impl Error {
	/// Returns the HTTP status associated with this failure, or `0` when none exists.
	pub fn code(&self) -> u16 {
		match self {
			Self::Config(_) => 0,
			Self::Rejected { status, .. }
			| Self::EmptyBody { status, .. }
			| Self::MalformedJson { status, .. }
			| Self::TokenPayload { status, .. } => *status,
			Self::Transport(e) => e.status().map_or(0, |s| s.as_u16()),
		}
	}

	/// Returns the detail tree unmodified, for machine consumption.
	pub fn details(&self) -> Option<&Value> {
		match self {
			Self::Rejected { details, .. }
			| Self::EmptyBody { details, .. }
			| Self::MalformedJson { details, .. }
			| Self::TokenPayload { details, .. }
				if !details.is_null() =>
				Some(details),
			_ => None,
		}
	}

	/// Pretty-prints the detail tree as JSON with unicode left unescaped.
	pub fn details_pretty(&self) -> String {
		serde_json::to_string_pretty(self.details().unwrap_or(&Value::Null)).unwrap_or_default()
	}

	/// Renders the detail tree as one `path: value` line per leaf scalar.
	///
	/// See [`flatten`] for the exact formatting contract.
	pub fn flatten_details(&self) -> String {
		self.details().map(flatten).unwrap_or_default()
	}

	/// Returns `true` iff `details.error.details` exists and any of its keys contains the
	/// substring `params`.
	///
	/// Callers use this to decide whether a validation-retry UI should be shown. The
	/// substring match is inherited upstream policy and must not be tightened.
	pub fn has_missing_params(&self) -> bool {
		let Some(Value::Object(map)) =
			self.details().map(|details| &details["error"]["details"])
		else {
			return false;
		};

		map.keys().any(|key| key.contains("params"))
	}
}

/// Configuration and validation failures detected before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Country code is not part of the supported set.
	#[error("Country `{0}` is not supported.")]
	UnsupportedCountry(String),
	/// An access code was supplied without the redirect URL the grant requires.
	#[error("Redirect URL must be provided when using an access code to generate a token.")]
	MissingRedirectUrl,
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint path cannot be joined onto the API base.
	#[error("Endpoint path `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Offending endpoint path.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::HttpClientBuild { source: Box::new(e) }
	}
}

/// Flattens a detail tree into one line per leaf scalar.
///
/// Paths use dotted/indexed notation (`validation.0.field: title`). String leaves are
/// rendered raw; other scalars use their JSON rendering. Order follows the tree's natural
/// key/index order (insertion order for objects, numeric order for arrays) and every line,
/// including the last, is newline-terminated. The output is byte-stable because it seeds
/// human-facing error displays.
pub fn flatten(details: &Value) -> String {
	let mut out = String::new();

	flatten_into(details, "", &mut out);

	out
}

fn flatten_into(node: &Value, path: &str, out: &mut String) {
	match node {
		Value::Object(map) =>
			for (key, child) in map {
				flatten_into(child, &join_path(path, key), out);
			},
		Value::Array(items) =>
			for (index, child) in items.iter().enumerate() {
				flatten_into(child, &join_path(path, &index.to_string()), out);
			},
		leaf => {
			if !path.is_empty() {
				out.push_str(path);
				out.push_str(": ");
			}

			match leaf {
				Value::String(s) => out.push_str(s),
				other => out.push_str(&other.to_string()),
			}

			out.push('\n');
		},
	}
}

fn join_path(path: &str, segment: &str) -> String {
	if path.is_empty() { segment.into() } else { format!("{path}.{segment}") }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn rejected(details: Value) -> Error {
		Error::Rejected { message: "rejected".into(), status: 400, details }
	}

	#[test]
	fn flatten_renders_leaves_in_tree_order() {
		let details = json!({ "error": "invalid_request", "validation": [{ "field": "title" }] });

		assert_eq!(flatten(&details), "error: invalid_request\nvalidation.0.field: title\n");
	}

	#[test]
	fn flatten_handles_scalars_and_non_string_leaves() {
		assert_eq!(flatten(&json!("lonely")), "lonely\n");
		assert_eq!(flatten(&json!({ "status_code": 200 })), "status_code: 200\n");
		assert_eq!(flatten(&json!({ "flag": true, "gone": null })), "flag: true\ngone: null\n");
	}

	#[test]
	fn has_missing_params_matches_key_substring() {
		let err = rejected(json!({ "error": { "details": { "missing_params": ["title"] } } }));

		assert!(err.has_missing_params());

		let err = rejected(json!({ "error": { "details": { "invalid_params": {} } } }));

		assert!(err.has_missing_params());

		let err = rejected(json!({ "error": { "details": { "fields": {} } } }));

		assert!(!err.has_missing_params());

		let err = rejected(json!({ "error": { "message": "nope" } }));

		assert!(!err.has_missing_params());

		let err = rejected(Value::Null);

		assert!(!err.has_missing_params());
	}

	#[test]
	fn details_pretty_leaves_unicode_unescaped() {
		let err = rejected(json!({ "error": "błąd" }));

		assert_eq!(err.details_pretty(), "{\n  \"error\": \"błąd\"\n}");
	}

	#[test]
	fn code_defaults_to_zero_without_a_status() {
		assert_eq!(Error::Config(ConfigError::MissingRedirectUrl).code(), 0);
		assert_eq!(rejected(Value::Null).code(), 400);
	}

	#[test]
	fn null_details_read_as_absent() {
		let err = rejected(Value::Null);

		assert!(err.details().is_none());
		assert_eq!(err.details_pretty(), "null");
		assert_eq!(err.flatten_details(), "");
	}
}
