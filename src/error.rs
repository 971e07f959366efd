//! Client-level error types shared across endpoints, requests, and transports.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required argument was absent; raised before any request is built.
	#[error(transparent)]
	Argument(#[from] ArgumentError),
	/// Local configuration or request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The API rejected the call with a non-2xx status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// A successful response carried a body this client could not decode.
	#[error(transparent)]
	Deserialization(#[from] DeserializationError),
}

/// Missing-argument failures raised synchronously by endpoint modules.
///
/// The message is a fixed literal naming the parameter, so callers can match on
/// it without inspecting variant internals.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ArgumentError {
	/// A required parameter was absent.
	#[error("'{name}' cannot be null!")]
	Required {
		/// Human-readable parameter label used by the endpoint.
		name: &'static str,
	},
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot host additional path segments (e.g., an opaque `mailto:`-style URL).
	#[error("Base URL cannot be extended with path segments: {url}.")]
	OpaqueBaseUrl {
		/// The offending base URL.
		url: String,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	BodySerialize(#[from] serde_json::Error),
	/// Blocking runtime could not be started.
	#[cfg(feature = "blocking")]
	#[error("Blocking runtime could not be started.")]
	BlockingRuntime {
		/// Underlying runtime build failure.
		#[source]
		source: std::io::Error,
	},
}

/// Non-2xx responses returned by the API.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// Server returned a machine-readable error payload.
	#[error("API call failed with status {status}: {message}")]
	Response {
		/// HTTP status code of the response.
		status: u16,
		/// Machine-readable error code, when the payload carried one.
		code: Option<String>,
		/// Human-readable message from the payload.
		message: String,
	},
	/// Server returned no parseable error payload.
	#[error("API call failed with status {status}.")]
	Status {
		/// HTTP status code of the response.
		status: u16,
	},
}
impl ApiError {
	/// Classifies a non-2xx response, extracting code/message fields when the body is JSON.
	pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
		#[derive(Deserialize)]
		struct ErrorBody {
			#[serde(alias = "errorCode")]
			error_code: Option<String>,
			error: Option<String>,
			message: Option<String>,
		}

		let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
			return Self::Status { status };
		};
		let code = parsed.error_code;
		let message = parsed.message.or(parsed.error);

		match message {
			Some(message) => Self::Response { status, code, message },
			None => Self::Status { status },
		}
	}

	/// HTTP status code carried by either variant.
	pub fn status(&self) -> u16 {
		match self {
			Self::Response { status, .. } | Self::Status { status } => *status,
		}
	}

	/// Machine-readable error code, when the server provided one.
	pub fn code(&self) -> Option<&str> {
		match self {
			Self::Response { code, .. } => code.as_deref(),
			Self::Status { .. } => None,
		}
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Malformed bodies inside otherwise successful responses.
#[derive(Debug, ThisError)]
pub enum DeserializationError {
	/// Response body did not match the shape the endpoint declared.
	#[error("Response body did not match the expected shape.")]
	Body {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response being decoded.
		status: u16,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn argument_error_messages_are_literal() {
		let err = ArgumentError::Required { name: "client id" };

		assert_eq!(err.to_string(), "'client id' cannot be null!");

		let err: Error = ArgumentError::Required { name: "scope" }.into();

		assert_eq!(err.to_string(), "'scope' cannot be null!");
	}

	#[test]
	fn api_error_prefers_message_and_keeps_code() {
		let body = br#"{"statusCode":403,"error":"Forbidden","errorCode":"insufficient_scope","message":"Missing scopes."}"#;
		let err = ApiError::from_response(403, body);

		assert_eq!(err.status(), 403);
		assert_eq!(err.code(), Some("insufficient_scope"));
		assert!(err.to_string().contains("Missing scopes."));
	}

	#[test]
	fn api_error_falls_back_to_error_field_then_status() {
		let err = ApiError::from_response(400, br#"{"error":"invalid_body"}"#);

		assert!(matches!(err, ApiError::Response { ref message, .. } if message == "invalid_body"));

		let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");

		assert!(matches!(err, ApiError::Status { status: 502 }));
		assert_eq!(err.to_string(), "API call failed with status 502.");

		let err = ApiError::from_response(500, b"{}");

		assert!(matches!(err, ApiError::Status { status: 500 }));
	}
}
