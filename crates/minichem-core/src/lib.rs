//! # miniChemistry Core Library
//!
//! A school-chemistry engine: it models substances as particles, predicts the products of
//! inorganic reactions from the classes of the reagents, and balances the resulting
//! equations with exact rational arithmetic.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless chemical vocabulary (`Element`, `Particle`),
//!   formula parsing and the read-only lookup databases.
//!
//! - **[`engine`]: The Logic Core.** Reaction mechanisms and their restrictions, the
//!   Reaction Prediction Tool that dispatches on reagent classes, the `Equalizer` and the
//!   shared `Chemistry` context that owns the loaded resources.
//!
//! - **[`reactions`]: The Public API.** Reaction entities (`MolecularReaction`,
//!   `IonGroupReaction`, `HalfReaction`) that tie prediction and balancing together.

pub mod core;
pub mod engine;
pub mod reactions;
