//! Client-side view state.

pub mod listing;
