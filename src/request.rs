//! Deferred request objects: one pending HTTP call each.
//!
//! [`MgmtRequest`] fixes method, URL, headers, and body at construction time
//! and performs exactly one outbound call when executed. The async
//! [`execute`](MgmtRequest::execute) is the core; the blocking adapter behind
//! the `blocking` feature drives the same future on a current-thread runtime.
//! Both consume the request, so a value can never be sent twice.

// std
use std::marker::PhantomData;
// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ApiError, ConfigError, DeserializationError},
	http::{HttpRequest, HttpResponse, HttpTransport, Method},
	obs::{self, CallOutcome, RequestSpan},
};

/// One pending management API call, parameterized by the expected response type.
///
/// Dropping the future returned by [`execute`](Self::execute) before completion
/// cancels the call on a best-effort basis; once the response is being consumed
/// there is no guarantee.
pub struct MgmtRequest<T> {
	transport: Arc<dyn HttpTransport>,
	resource: &'static str,
	operation: &'static str,
	method: Method,
	url: Url,
	headers: Vec<(Cow<'static, str>, String)>,
	body: Option<Vec<u8>>,
	discard_response: bool,
	_response: PhantomData<fn() -> T>,
}
impl<T> MgmtRequest<T>
where
	T: DeserializeOwned,
{
	pub(crate) fn new(
		transport: Arc<dyn HttpTransport>,
		resource: &'static str,
		operation: &'static str,
		method: Method,
		url: Url,
	) -> Self {
		Self {
			transport,
			resource,
			operation,
			method,
			url,
			headers: vec![(Cow::Borrowed("Content-Type"), "application/json".into())],
			body: None,
			discard_response: false,
			_response: PhantomData,
		}
	}

	/// Adds a header, replacing any existing value under the same (case-insensitive) name.
	pub fn with_header(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<String>,
	) -> Self {
		let name = name.into();
		let value = value.into();

		if let Some(entry) =
			self.headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
		{
			entry.1 = value;
		} else {
			self.headers.push((name, value));
		}

		self
	}

	/// Attaches a JSON body serialized from the provided value.
	///
	/// Serialization happens immediately so field order in the payload matches
	/// the declaration order of the value's type.
	pub fn with_body<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_vec(body).map_err(ConfigError::BodySerialize)?);

		Ok(self)
	}

	/// Appends query parameters in the provided order.
	pub(crate) fn with_query_pairs(mut self, pairs: &[(Cow<'static, str>, String)]) -> Self {
		if pairs.is_empty() {
			return self;
		}

		{
			let mut serializer = self.url.query_pairs_mut();

			for (key, value) in pairs {
				serializer.append_pair(key.as_ref(), value);
			}
		}

		self
	}

	/// Marks the response body as uninteresting; it is dropped without decoding.
	pub(crate) fn discard_response_body(mut self) -> Self {
		self.discard_response = true;

		self
	}

	/// Executes the call and maps the response into the declared type.
	///
	/// Exactly one outbound HTTP request is issued per execution. All failures
	/// surface here: transport errors, non-2xx API errors, and
	/// body-deserialization errors. Nothing is retried or logged internally.
	pub async fn execute(self) -> Result<T> {
		let resource = self.resource;
		let span = RequestSpan::new(resource, self.operation);

		obs::record_call_outcome(resource, CallOutcome::Attempt);

		let result = span.instrument(self.send()).await;

		match &result {
			Ok(_) => obs::record_call_outcome(resource, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(resource, CallOutcome::Failure),
		}

		result
	}

	/// Executes the call, blocking the current thread until completion.
	///
	/// Thin adapter over [`execute`](Self::execute): the same request core runs
	/// on a throwaway current-thread runtime. Must not be called from within an
	/// async context.
	#[cfg(feature = "blocking")]
	pub fn execute_blocking(self) -> Result<T> {
		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()
			.map_err(|source| ConfigError::BlockingRuntime { source })?;

		runtime.block_on(self.execute())
	}

	async fn send(self) -> Result<T> {
		let request = HttpRequest {
			method: self.method,
			url: self.url,
			headers: self.headers,
			body: self.body,
		};
		let response = self.transport.call(request).await?;

		if !response.is_success() {
			return Err(ApiError::from_response(response.status, &response.body).into());
		}

		decode(self.discard_response, response)
	}
}
impl<T> Debug for MgmtRequest<T> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MgmtRequest")
			.field("method", &self.method)
			.field("url", &self.url)
			.field("resource", &self.resource)
			.field("operation", &self.operation)
			.field("body_set", &self.body.is_some())
			.finish()
	}
}

fn decode<T>(discard_body: bool, response: HttpResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	// Empty success bodies decode as JSON null so `()` and `Option` targets succeed.
	let bytes = if discard_body || response.body.is_empty() {
		b"null".as_slice()
	} else {
		response.body.as_slice()
	};
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DeserializationError::Body { source, status: response.status }.into())
}
