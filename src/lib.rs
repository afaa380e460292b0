//! Minimal edit scripts between two sequences.
//!
//! [`wagner_fischer::calculate_diff`] returns the shortest list of inserts,
//! substitutions and deletions turning one sequence into another;
//! [`apply::apply`] replays such a script and [`serialization`] renders it.

pub mod apply;
pub mod grid;
pub mod serialization;
pub mod wagner_fischer;
