//! Client for the Philadelphia Address Information Service (AIS).
//!
//! [`AisClient`] issues the address search request; [`AddressLookup`] is the
//! decoded payload with typed accessors for the fields the CMS cares about
//! (election division, coordinates, ZIP). One request per query, no retry —
//! transport policy belongs to the host.

pub mod client;
pub mod response;

pub use client::{AisClient, AisError};
pub use response::{AddressLookup, Feature, MatchType};
