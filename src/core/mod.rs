//! Core types for the vastu-topo library.
//!
//! - [`Direction`] and [`Side`]: cardinal headings and the wall-following
//!   side convention
//! - [`GridPos`]: integer cell coordinates (ground truth bookkeeping)
//! - [`Signature`]: the 4-bit local openness vector, the agent's only
//!   observable state

mod direction;
mod position;
mod signature;

pub use direction::{Direction, Side};
pub use position::GridPos;
pub use signature::Signature;
