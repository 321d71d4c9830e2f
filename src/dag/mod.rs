// src/dag/mod.rs

//! Resubmission graph construction.
//!
//! - [`start`] resolves the reference start day.
//! - [`normalize`] rolls past deadlines into next year and picks the next
//!   conference.
//! - [`builder`] derives the transitively reduced edge set.
//! - [`graph`] is the resulting petgraph-backed structure.
//! - [`layout`] places nodes by topological level for rendering.

pub mod builder;
pub mod graph;
pub mod layout;
pub mod normalize;
pub mod start;

pub use builder::build_graph;
pub use graph::{ConferenceGraph, ConferenceNode};
pub use layout::{level_layout, PlacedNode};
pub use normalize::{next_conference, normalize};
pub use start::{prompt_days_from_now, resolve_start_day, StartPoint};
