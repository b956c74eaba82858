//! Puzzle generation and solving
//!
//! The [`WordIndex`] buckets a dictionary by letter set; solving a puzzle walks the
//! subsets of its optional letters and unions the matching buckets.

mod index;
mod submask;

pub use index::{WordIndex, puzzles_for_pot};
pub use submask::{Submasks, submasks};
