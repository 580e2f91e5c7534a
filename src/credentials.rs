//! Partner application credentials.

// self
use crate::_prelude::*;

/// Immutable holder of the partner application's client id and secret.
#[derive(Clone, Debug)]
pub struct Credentials {
	client_id: u64,
	client_secret: ClientSecret,
}
impl Credentials {
	/// Creates a new credentials pair.
	pub fn new(client_id: u64, client_secret: impl Into<String>) -> Self {
		Self { client_id, client_secret: ClientSecret::new(client_secret) }
	}

	/// Returns the numeric client identifier.
	pub fn client_id(&self) -> u64 {
		self.client_id
	}

	/// Returns the client secret wrapper.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}
}

/// Redacted client secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ClientSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let credentials = Credentials::new(1234567890, "client_secret");

		assert_eq!(format!("{:?}", credentials.client_secret()), "ClientSecret(\"<redacted>\")");
		assert_eq!(format!("{}", credentials.client_secret()), "<redacted>");
		assert_eq!(credentials.client_secret().expose(), "client_secret");
	}
}
