//! Transport primitives for management API calls.
//!
//! The module exposes [`HttpTransport`] alongside the plain [`HttpRequest`] and
//! [`HttpResponse`] wire structs so downstream crates can integrate custom HTTP
//! stacks. The trait is the client's only dependency on an HTTP implementation;
//! retry, caching, timeout, and TLS policy all belong to the implementation,
//! never to this crate. The default reqwest adapter lives behind the `reqwest`
//! feature.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future resolved by [`HttpTransport`] implementations.
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// HTTP methods used by the management API surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	/// Retrieve a resource or collection.
	Get,
	/// Create a resource.
	Post,
	/// Partially update a resource.
	Patch,
	/// Fully replace a resource.
	Put,
	/// Remove a resource.
	Delete,
}
impl Method {
	/// Returns the canonical uppercase method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Patch => "PATCH",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One outbound HTTP request handed to the transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// HTTP method.
	pub method: Method,
	/// Fully interpolated request URL, query string included.
	pub url: Url,
	/// Header name/value pairs in send order.
	pub headers: Vec<(Cow<'static, str>, String)>,
	/// Raw JSON body bytes, when present.
	pub body: Option<Vec<u8>>,
}

/// Raw response surfaced by the transport: status, headers, body bytes.
#[derive(Clone, Debug, Default)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response header name/value pairs.
	pub headers: Vec<(String, String)>,
	/// Raw body bytes; empty when the server sent none.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Returns true when the status falls in the 2xx success range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP stacks capable of executing management API calls.
///
/// Callers provide an implementation behind `Arc<dyn HttpTransport>` and the
/// client issues exactly one [`call`](HttpTransport::call) per executed request.
/// Implementations must be `Send + Sync` so a single client can be shared
/// across tasks, and the returned future must be `Send` so callers can box or
/// spawn it freely. Dropping the future before completion is the cancellation
/// signal; implementations should abort the in-flight call on a best-effort
/// basis.
pub trait HttpTransport
where
	Self: Send + Sync,
{
	/// Executes the request and resolves with the raw response.
	fn call(&self, request: HttpRequest) -> TransportFuture<'_>;
}

#[cfg(feature = "reqwest")]
/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Redirect and TLS configuration stay with the caller-supplied client; the
/// wrapper only translates between the crate's wire structs and reqwest's.
#[derive(Clone, Default)]
pub struct ReqwestHttpTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl From<Method> for reqwest::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Patch => reqwest::Method::PATCH,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpTransport {
	fn call(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(request.method.into(), request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_ref(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.map(|(name, value)| {
					(name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
				})
				.collect();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(HttpResponse { status, headers, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn method_names_are_canonical() {
		assert_eq!(Method::Get.as_str(), "GET");
		assert_eq!(Method::Patch.as_str(), "PATCH");
		assert_eq!(Method::Delete.to_string(), "DELETE");
	}

	#[test]
	fn success_range_covers_2xx_only() {
		assert!(HttpResponse { status: 200, ..Default::default() }.is_success());
		assert!(HttpResponse { status: 204, ..Default::default() }.is_success());
		assert!(!HttpResponse { status: 199, ..Default::default() }.is_success());
		assert!(!HttpResponse { status: 301, ..Default::default() }.is_success());
		assert!(!HttpResponse { status: 404, ..Default::default() }.is_success());
	}
}
