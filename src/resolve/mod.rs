//! # Resolve Module
//!
//! The stateful layer: resolving free-form molecule names through an external
//! chemical-name resolution service, and memoizing the immutable results.
//!
//! ## Key Components
//!
//! - [`client`] - The blocking lookup client over the external service, behind
//!   the [`client::LookupClient`] trait so the network can be swapped out
//! - [`cache`] - The single-flight [`cache::MoleculeCache`]: at most one
//!   external round-trip per distinct name, however many threads ask
//! - [`record`] - The immutable [`record::ResolvedMolecule`] value every
//!   successful resolution produces
//! - [`error`] - The resolution error taxonomy
//!
//! The only blocking operations in the crate live here; everything reachable
//! without a cache miss is synchronous and side-effect-free.

pub mod cache;
pub mod client;
pub mod error;
pub mod record;
