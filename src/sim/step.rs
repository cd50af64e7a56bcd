//! Per-frame advancement of the bubble field
//!
//! Pure snapshot-in, snapshot-out: the frame loop calls `step` once per
//! redraw and swaps the result in wholesale. No partial mutation is ever
//! visible outside a call.

use rand::Rng;

use super::collision::{detect_pair, reflect_into_bounds, resolve_pair};
use super::state::BubbleField;
use crate::consts::PERTURB_JITTER;

/// Advance the field by one frame.
///
/// Three phases: integrate positions by velocity, clamp-and-reflect against
/// the field boundary, then resolve every overlapping unordered pair as an
/// elastic collision. Bubble order is preserved from the input snapshot.
/// The current viewport width converts pixel sizes into field units.
pub fn step(field: &BubbleField, viewport_width: f32) -> BubbleField {
    let mut next = field.clone();
    next.frame += 1;

    // Phase 1: integration
    for b in &mut next.bubbles {
        b.pos += b.vel;
    }

    // Phase 2: boundary reflection
    for b in &mut next.bubbles {
        reflect_into_bounds(b, viewport_width);
    }

    // Phase 3: pairwise elastic collisions, each unordered pair once
    let len = next.bubbles.len();
    for i in 0..len {
        for j in (i + 1)..len {
            let (left, right) = next.bubbles.split_at_mut(j);
            let b1 = &mut left[i];
            let b2 = &mut right[0];
            if let Some(contact) = detect_pair(b1, b2, viewport_width) {
                resolve_pair(b1, b2, &contact);
            }
        }
    }

    // Separation can shove a bubble past the wall; the boundary invariant
    // holds after every frame, so bounds are re-enforced here.
    for b in &mut next.bubbles {
        reflect_into_bounds(b, viewport_width);
    }

    next
}

/// React to a pointer touching one bubble: invert its velocity and add a
/// small random jitter to both components. Every other bubble is untouched,
/// and an unknown id leaves the whole snapshot unchanged.
pub fn perturb<R: Rng>(field: &BubbleField, id: u32, rng: &mut R) -> BubbleField {
    let mut next = field.clone();

    if let Some(b) = next.bubbles.iter_mut().find(|b| b.id == id) {
        b.vel.x = -b.vel.x + rng.random_range(-PERTURB_JITTER..=PERTURB_JITTER);
        b.vel.y = -b.vel.y + rng.random_range(-PERTURB_JITTER..=PERTURB_JITTER);
    }

    next
}
