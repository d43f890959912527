// Battle core schema - shared catalog definitions
// This crate contains the data shapes read from the species, move and type
// catalogs. They are plain serde types so the catalogs can be authored in RON
// and the same types can be handed to the network and persistence layers.

// Re-export the main types
pub use battle_data::*;
pub use move_types::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod move_types;
pub mod pokemon_types;
pub mod species_data;
