//! # Chemistry Reference Library
//!
//! Identity and composition data for nuclides (elements and isotopes) together with
//! a cached resolver that turns free-form chemical names into structured, validated
//! molecule descriptions.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction, so the
//! pure reference data stays usable without ever touching the network.
//!
//! - **[`core`]: The Foundation.** Stateless reference data and pure functions: the
//!   periodic table ([`core::element`]), the isotope mass table ([`core::isotope`]),
//!   the closed [`core::nuclide::Nuclide`] union over both, and the chemical formula
//!   parser ([`core::formula`]).
//!
//! - **[`resolve`]: The Logic Core.** The stateful layer that resolves molecule names
//!   through an external chemical-name resolution service and memoizes the immutable
//!   results. Its centerpiece is [`resolve::cache::MoleculeCache`], a single-flight
//!   cache guaranteeing at most one external round-trip per distinct name, no matter
//!   how many threads ask concurrently.
//!
//! - **[`molecule`]: The Public API.** The thin [`molecule::Molecule`] handle that
//!   validates its name eagerly at construction and afterwards answers every query
//!   from the shared cached record.

pub mod core;
pub mod molecule;
pub mod resolve;
