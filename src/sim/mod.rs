//! Deterministic bubble-field simulation
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - One frame per call, no hidden time source
//! - Seeded RNG only, injected by the caller
//! - Stable iteration order (by spawn id)
//! - No rendering or terminal dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{PairContact, detect_pair, reflect_into_bounds, resolve_pair};
pub use state::{Bubble, BubbleField, RngState, SPRITE_POOL};
pub use step::{perturb, step};
