//! Domain records exchanged with the management API.
//!
//! Every field is optional; unset fields are omitted from serialized JSON
//! (never emitted as `null`) and unknown response fields are ignored, so
//! records stay forward compatible in both directions.

pub mod client_grant;
pub mod tenant;

pub use client_grant::*;
pub use tenant::*;
