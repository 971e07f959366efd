//! Client-grant records and their paginated envelope.

// self
use crate::_prelude::*;

/// Grant authorizing one client to call one API audience.
///
/// Returned by the server and immutable once received; there is no client-side
/// lifecycle beyond carrying the fields back and forth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientGrant {
	/// Server-assigned grant identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Identifier of the client the grant belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// API identifier (audience) the grant targets.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audience: Option<String>,
	/// Granted scopes, order preserved as returned by the server.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<Vec<String>>,
}

/// Page of client grants plus the totals metadata the server attaches on demand.
///
/// Deserializes from either a bare JSON array (no totals requested) or the
/// envelope keyed by `client_grants` (totals requested); the metadata fields
/// stay `None` in the former case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientGrantsPage {
	/// Zero-based index of the first item in this page.
	pub start: Option<u32>,
	/// Page size limit the server applied.
	pub limit: Option<u32>,
	/// Number of items in this page.
	pub length: Option<u32>,
	/// Total number of items across all pages.
	pub total: Option<u32>,
	/// Grants contained in this page; an empty page is an empty list, never an error.
	pub items: Vec<ClientGrant>,
}
impl<'de> Deserialize<'de> for ClientGrantsPage {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Envelope {
				start: Option<u32>,
				limit: Option<u32>,
				length: Option<u32>,
				total: Option<u32>,
				client_grants: Vec<ClientGrant>,
			},
			Bare(Vec<ClientGrant>),
		}

		Ok(match Repr::deserialize(deserializer)? {
			Repr::Envelope { start, limit, length, total, client_grants } =>
				Self { start, limit, length, total, items: client_grants },
			Repr::Bare(items) => Self { items, ..Default::default() },
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bare_arrays_deserialize_without_metadata() {
		let page: ClientGrantsPage =
			serde_json::from_str(r#"[{"id":"1"},{"id":"2","unknown_field":true}]"#)
				.expect("Bare array should deserialize successfully.");

		assert_eq!(page.items.len(), 2);
		assert!(page.start.is_none());
		assert!(page.total.is_none());
	}

	#[test]
	fn envelopes_surface_all_metadata_fields() {
		let payload = r#"{"start":0,"limit":50,"length":14,"total":14,"client_grants":[{"id":"1"},{"id":"2"}]}"#;
		let page: ClientGrantsPage =
			serde_json::from_str(payload).expect("Envelope should deserialize successfully.");

		assert_eq!(page.start, Some(0));
		assert_eq!(page.limit, Some(50));
		assert_eq!(page.length, Some(14));
		assert_eq!(page.total, Some(14));
		assert_eq!(page.items.len(), 2);
	}

	#[test]
	fn empty_responses_yield_empty_sequences() {
		let page: ClientGrantsPage =
			serde_json::from_str("[]").expect("Empty array should deserialize successfully.");

		assert!(page.items.is_empty());

		let page: ClientGrantsPage = serde_json::from_str(r#"{"client_grants":[]}"#)
			.expect("Empty envelope should deserialize successfully.");

		assert!(page.items.is_empty());
	}

	#[test]
	fn grants_tolerate_unknown_fields_and_round_trip() {
		let grant: ClientGrant = serde_json::from_str(
			r#"{"id":"1","client_id":"abc","audience":"https://api","scope":["openid","profile"],"brand_new_field":{}}"#,
		)
		.expect("Grant should deserialize despite unknown fields.");

		assert_eq!(grant.scope.as_deref(), Some(["openid".to_string(), "profile".to_string()].as_slice()));

		let serialized =
			serde_json::to_string(&grant).expect("Grant should serialize successfully.");

		assert_eq!(
			serialized,
			r#"{"id":"1","client_id":"abc","audience":"https://api","scope":["openid","profile"]}"#,
		);
	}

	#[test]
	fn unset_fields_are_omitted_entirely() {
		let serialized = serde_json::to_string(&ClientGrant::default())
			.expect("Empty grant should serialize successfully.");

		assert_eq!(serialized, "{}");
	}
}
