//! Layout engine for parliament hemicycles
//!
//! This module takes an ordered list of parties and computes the position of every
//! seat, producing a [`Layout`] whose seats are ordered left to right and assigned to
//! parties in input order.

pub mod assign;
pub mod config;
pub mod engine;
pub mod error;
pub mod order;
pub mod placer;
pub mod solver;
pub mod types;

pub use config::LayoutConfig;
pub use engine::{compute, compute_with_total};
pub use error::LayoutError;
pub use solver::{solve_rows, RowSolution};
pub use types::*;
