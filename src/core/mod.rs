//! # Core Module
//!
//! Stateless reference data and pure algorithms: everything in here is synchronous,
//! side-effect-free and usable without network access.
//!
//! ## Key Components
//!
//! - [`element`] - The periodic table: one `Element` per known element with its
//!   physical and chemical reference data, plus symbol/name lookups
//! - [`isotope`] - The isotope mass table and the validated `Isotope` handle
//! - [`nuclide`] - The closed `Nuclide` union over elements and isotopes, and
//!   name resolution across both
//! - [`compound`] - The `ChemicalCompound` trait shared by everything that has a
//!   mass and a nuclide decomposition
//! - [`formula`] - The lenient chemical formula parser

pub mod compound;
pub mod element;
pub mod formula;
pub mod isotope;
mod isotope_data;
pub mod nuclide;
