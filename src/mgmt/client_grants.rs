//! Client-grants endpoint: list, create, update, delete.
//!
//! Every operation validates its arguments synchronously and reports the first
//! missing one, so no request object is built (and no call leaves the process)
//! for invalid input.

// self
use crate::{
	_prelude::*,
	filter::ClientGrantsFilter,
	http::Method,
	mgmt::{ManagementClient, require},
	model::{ClientGrant, ClientGrantsPage},
	request::MgmtRequest,
};

const RESOURCE: &str = "client_grants";
const COLLECTION: [&str; 3] = ["api", "v2", "client-grants"];

/// Typed operations for the `/api/v2/client-grants` resource family.
pub struct ClientGrantsEndpoint<'a> {
	client: &'a ManagementClient,
}
impl ManagementClient {
	/// Client-grants endpoint accessor.
	pub fn client_grants(&self) -> ClientGrantsEndpoint<'_> {
		ClientGrantsEndpoint { client: self }
	}
}
impl ClientGrantsEndpoint<'_> {
	/// Builds a GET request for the collection, returning the paginated envelope.
	///
	/// Filter parameters are attached verbatim; `None` produces no query string.
	/// The envelope's metadata fields are only populated when the filter asked
	/// for totals.
	pub fn list(
		&self,
		filter: Option<&ClientGrantsFilter>,
	) -> Result<MgmtRequest<ClientGrantsPage>> {
		let mut request = self.client.request(RESOURCE, "list", Method::Get, &COLLECTION)?;

		if let Some(filter) = filter {
			request = request.with_query_pairs(filter.as_pairs());
		}

		Ok(request)
	}

	/// Builds a GET request for the collection as a bare sequence.
	pub fn list_unpaged(&self) -> Result<MgmtRequest<Vec<ClientGrant>>> {
		self.client.request(RESOURCE, "list", Method::Get, &COLLECTION)
	}

	/// Builds a POST request creating a grant for the client/audience pair.
	///
	/// All three parameters are required and checked in order: client id, then
	/// audience, then scope. Scope order is preserved in the payload.
	pub fn create(
		&self,
		client_id: Option<&str>,
		audience: Option<&str>,
		scope: Option<&[String]>,
	) -> Result<MgmtRequest<ClientGrant>> {
		let client_id = require(client_id, "client id")?;
		let audience = require(audience, "audience")?;
		let scope = require(scope, "scope")?;
		let body = CreateClientGrantPayload { client_id, audience, scope };

		self.client.request(RESOURCE, "create", Method::Post, &COLLECTION)?.with_body(&body)
	}

	/// Builds a PATCH request replacing the grant's scope list, order preserved.
	pub fn update(
		&self,
		id: Option<&str>,
		scope: Option<&[String]>,
	) -> Result<MgmtRequest<ClientGrant>> {
		let id = require(id, "client grant id")?;
		let scope = require(scope, "scope")?;
		let body = UpdateClientGrantPayload { scope };

		self.client
			.request(RESOURCE, "update", Method::Patch, &["api", "v2", "client-grants", id])?
			.with_body(&body)
	}

	/// Builds a DELETE request removing the grant; the response body is not of interest.
	pub fn delete(&self, id: Option<&str>) -> Result<MgmtRequest<()>> {
		let id = require(id, "client grant id")?;
		let request = self
			.client
			.request(RESOURCE, "delete", Method::Delete, &["api", "v2", "client-grants", id])?
			.discard_response_body();

		Ok(request)
	}
}

#[derive(Serialize)]
struct CreateClientGrantPayload<'a> {
	client_id: &'a str,
	audience: &'a str,
	scope: &'a [String],
}

#[derive(Serialize)]
struct UpdateClientGrantPayload<'a> {
	scope: &'a [String],
}
