//! Management client facade aggregating the per-resource endpoints.

pub mod client_grants;
pub mod tenants;

pub use client_grants::*;
pub use tenants::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::TokenProvider,
	error::{ArgumentError, ConfigError},
	http::{HttpTransport, Method},
	request::MgmtRequest,
};
#[cfg(feature = "reqwest")]
use crate::{auth::StaticTokenProvider, http::ReqwestHttpTransport};

/// Entry point for the management API surface.
///
/// The client owns the API base URL plus the injected transport and token
/// collaborators; per-resource endpoints borrow it and build deferred
/// [`MgmtRequest`] values. Requests share no mutable state, so one client can
/// serve any number of concurrent executions.
#[derive(Clone)]
pub struct ManagementClient {
	/// Base URL every resource path is resolved against.
	pub base_url: Url,
	/// Transport used for every outbound call.
	pub transport: Arc<dyn HttpTransport>,
	/// Provider consulted for the bearer token attached to each request.
	pub tokens: Arc<dyn TokenProvider>,
}
impl ManagementClient {
	/// Creates a client that reuses the caller-provided transport + token provider pair.
	pub fn with_transport(
		base_url: Url,
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenProvider>,
	) -> Self {
		Self { base_url, transport, tokens }
	}

	/// Builds a request for the given resource path with the shared header set.
	pub(crate) fn request<T>(
		&self,
		resource: &'static str,
		operation: &'static str,
		method: Method,
		segments: &[&str],
	) -> Result<MgmtRequest<T>>
	where
		T: DeserializeOwned,
	{
		let url = self.endpoint_url(segments)?;
		let token = self.tokens.bearer_token();
		let request = MgmtRequest::new(self.transport.clone(), resource, operation, method, url)
			.with_header("Authorization", format!("Bearer {}", token.expose()));

		Ok(request)
	}

	fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ConfigError> {
		let mut url = self.base_url.clone();

		{
			let mut path = url
				.path_segments_mut()
				.map_err(|()| ConfigError::OpaqueBaseUrl { url: self.base_url.to_string() })?;

			path.pop_if_empty();

			for segment in segments {
				path.push(segment);
			}
		}

		Ok(url)
	}
}
#[cfg(feature = "reqwest")]
impl ManagementClient {
	/// Creates a client backed by the crate's default reqwest transport and a static token.
	///
	/// Use [`ManagementClient::with_transport`] to supply a custom transport or a
	/// token provider that rotates.
	pub fn new(base_url: Url, api_token: impl Into<String>) -> Self {
		Self::with_transport(
			base_url,
			Arc::new(ReqwestHttpTransport::default()),
			Arc::new(StaticTokenProvider::new(api_token)),
		)
	}
}
impl Debug for ManagementClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ManagementClient").field("base_url", &self.base_url).finish()
	}
}

/// Unwraps a required argument or reports its literal label.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T, ArgumentError> {
	value.ok_or(ArgumentError::Required { name })
}
