//! # Core Module
//!
//! The stateless foundation of miniChemistry: the chemical vocabulary every reaction is
//! written in, and the lookup databases that describe how real substances behave.
//!
//! ## Architecture
//!
//! - **Periodic Table** ([`elements`]) - Static element records, groups and oxidation states
//! - **Particle Model** ([`particles`]) - Simple substances, ions, molecules and ion groups
//! - **Formula Handling** ([`formula`]) - Tokenizing formulas and resolving them to particles
//! - **Lookup Databases** ([`data`]) - Solubility, acids, bases and the metal activity series
//!
//! Everything here is immutable once built. Particles are plain values and the databases are
//! parsed once and then only read, so both can be shared freely between threads.

pub mod data;
pub mod elements;
pub mod formula;
pub mod particles;
