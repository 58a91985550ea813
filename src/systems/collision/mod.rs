//! Pairwise collision handling: broad/narrow-phase detection and
//! impulse-based resolution.

pub mod detect;
pub mod resolve;

pub use detect::{detect, Contact};
pub use resolve::resolve_pair;
