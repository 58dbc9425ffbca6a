//! Core data model for N²×N² Sudoku and Sudoku-X puzzles.
//!
//! This crate contains no solving logic. It provides:
//!
//! - [`CandidateSet`] - a bitset of values still possible in one cell
//! - [`Geometry`] - board dimensions and the constraint variant
//! - [`Position`] / [`Group`] - cell coordinates and constraint groups
//! - [`Grid`] / [`Presets`] - the candidate grid and its fixed givens
//! - [`codec`] - conversion between puzzle text and grids

pub use self::{
    candidate_set::CandidateSet,
    codec::ParseError,
    geometry::{Geometry, GeometryError, Variant},
    grid::{Grid, Presets},
    group::Group,
    position::Position,
};

mod candidate_set;
pub mod codec;
mod geometry;
mod grid;
mod group;
mod position;
