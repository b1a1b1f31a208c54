//! Console rendering for the canonsort binary

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
