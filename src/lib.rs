//! DEXCHECK: required-key validation for Pokémon reference datasets.
//!
//! Typed schemas for the pokedex/moves/items/types JSON files plus a generic
//! required-field checker. Each dataset has a standalone validator binary
//! (see src/bin/) that loads its file, checks every record, writes a JSON
//! report next to the dataset and exits non-zero when any record fails.

pub mod data;
pub mod report;
pub mod schema;
