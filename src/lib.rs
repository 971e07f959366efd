//! Typed Rust client for a multi-tenant identity-management REST API—fluent filters, deferred
//! requests, and tolerant JSON mapping over an injected HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod filter;
pub mod http;
pub mod mgmt;
pub mod model;
pub mod obs;
pub mod request;

pub use mgmt::ManagementClient;

#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{auth::StaticTokenProvider, http::ReqwestHttpTransport, mgmt::ManagementClient};

	/// Bearer token attached by mock-backed integration test clients.
	pub const TEST_API_TOKEN: &str = "apiToken";

	/// Builds a [`ManagementClient`] pointed at a mock server base URL.
	pub fn build_test_client(base_url: &str) -> ManagementClient {
		let transport = Arc::new(ReqwestHttpTransport::default());
		let tokens = Arc::new(StaticTokenProvider::new(TEST_API_TOKEN));

		ManagementClient::with_transport(
			Url::parse(base_url).expect("Mock server base URL should parse successfully."),
			transport,
			tokens,
		)
	}
}

mod _prelude {
	pub use std::{
		borrow::Cow,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, mgmt_api_client as _, tokio as _};
