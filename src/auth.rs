//! Bearer-token collaborators consulted while requests are built.
//!
//! Token acquisition and renewal live outside this crate; implementations of
//! [`TokenProvider`] simply hand back the current token string whenever a
//! request is assembled.

// self
use crate::_prelude::*;

/// Redacted bearer token wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiToken(String);
impl ApiToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ApiToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiToken").field(&"<redacted>").finish()
	}
}
impl Display for ApiToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Supplies the bearer token attached to every outbound request.
pub trait TokenProvider
where
	Self: Send + Sync,
{
	/// Returns the token sent as `Authorization: Bearer <token>`.
	fn bearer_token(&self) -> ApiToken;
}

/// Provider that always returns the same token.
#[derive(Clone, Debug)]
pub struct StaticTokenProvider {
	token: ApiToken,
}
impl StaticTokenProvider {
	/// Creates a provider around a fixed token string.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: ApiToken::new(token) }
	}
}
impl TokenProvider for StaticTokenProvider {
	fn bearer_token(&self) -> ApiToken {
		self.token.clone()
	}
}

/// Provider whose token can be replaced at runtime, e.g. after an external renewal.
///
/// Requests already built keep the token they were assembled with; only
/// subsequently built requests observe the rotated value.
pub struct RotatingTokenProvider {
	token: RwLock<ApiToken>,
}
impl RotatingTokenProvider {
	/// Creates a provider seeded with an initial token.
	pub fn new(initial: impl Into<String>) -> Self {
		Self { token: RwLock::new(ApiToken::new(initial)) }
	}

	/// Replaces the current token.
	pub fn rotate(&self, token: impl Into<String>) {
		*self.token.write() = ApiToken::new(token);
	}
}
impl TokenProvider for RotatingTokenProvider {
	fn bearer_token(&self) -> ApiToken {
		self.token.read().clone()
	}
}
impl Debug for RotatingTokenProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RotatingTokenProvider").field("token", &"<redacted>").finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token = ApiToken::new("super-secret");

		assert_eq!(format!("{token:?}"), "ApiToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.expose(), "super-secret");
	}

	#[test]
	fn rotation_changes_subsequent_tokens() {
		let provider = RotatingTokenProvider::new("first");

		assert_eq!(provider.bearer_token().expose(), "first");

		provider.rotate("second");

		assert_eq!(provider.bearer_token().expose(), "second");
	}

	#[test]
	fn static_provider_clones_the_same_token() {
		let provider = StaticTokenProvider::new("fixed");

		assert_eq!(provider.bearer_token().expose(), "fixed");
		assert_eq!(provider.bearer_token(), ApiToken::new("fixed"));
	}
}
