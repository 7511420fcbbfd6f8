//! Game definitions and logic.

mod moves;
mod outcome;
mod table;

pub use moves::MoveSet;
pub use outcome::{beats, resolve, resolve_positions, Outcome};
pub use table::HelpTable;
