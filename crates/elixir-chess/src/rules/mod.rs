//! Movement rules for every piece archetype.

pub mod movegen;

pub use movegen::{is_legal_destination, legal_destinations};
