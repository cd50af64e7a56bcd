//! Collision detection and response for the bubble field
//!
//! Two cases: bubble against the field boundary (clamp and reflect), and
//! bubble against bubble (equal-mass elastic exchange along the center line,
//! then positional separation so the boundaries no longer overlap).

use glam::Vec2;

use super::state::Bubble;
use crate::consts::FIELD_MAX;

/// Contact between two overlapping bubbles
#[derive(Debug, Clone, Copy)]
pub struct PairContact {
    /// Unit normal from the first bubble's center toward the second's
    pub normal: Vec2,
    /// Center distance at detection time
    pub distance: f32,
    /// How far the boundaries interpenetrate
    pub overlap: f32,
}

/// Check a pair of bubbles for overlap.
///
/// Returns `None` when the bubbles are apart, and also when their centers
/// coincide exactly: with no usable normal the pair is skipped for this frame
/// rather than dividing by zero, and a later frame's jitter separates them.
pub fn detect_pair(b1: &Bubble, b2: &Bubble, viewport_width: f32) -> Option<PairContact> {
    let delta = b2.pos - b1.pos;
    let distance = delta.length();
    let sum_radii = b1.radius(viewport_width) + b2.radius(viewport_width);

    if distance <= 0.0 || distance >= sum_radii {
        return None;
    }

    Some(PairContact {
        normal: delta / distance,
        distance,
        overlap: sum_radii - distance,
    })
}

/// Resolve a detected contact as an equal-mass elastic collision.
///
/// The relative velocity component along the normal is exchanged between the
/// two bubbles (masses are not modeled), then both are pushed apart along the
/// normal, splitting the overlap correction equally.
pub fn resolve_pair(b1: &mut Bubble, b2: &mut Bubble, contact: &PairContact) {
    let n = contact.normal;

    // Equal-mass impulse: swap the normal components of the two velocities
    let p = (b1.vel - b2.vel).dot(n);
    b1.vel -= p * n;
    b2.vel += p * n;

    // Separate so the boundaries just touch
    if contact.overlap > 0.0 {
        let correction = n * (contact.overlap / 2.0);
        b1.pos -= correction;
        b2.pos += correction;
    }
}

/// Clamp a bubble into the field, reflecting the crossing velocity component.
///
/// Reflection forces the sign of the component (non-negative at the low edge,
/// non-positive at the high edge) rather than negating it, so a bubble already
/// heading inward is left alone.
pub fn reflect_into_bounds(b: &mut Bubble, viewport_width: f32) {
    let r = b.radius(viewport_width);

    if b.pos.x < r {
        b.pos.x = r;
        b.vel.x = b.vel.x.abs();
    }
    if b.pos.x > FIELD_MAX - r {
        b.pos.x = FIELD_MAX - r;
        b.vel.x = -b.vel.x.abs();
    }
    if b.pos.y < r {
        b.pos.y = r;
        b.vel.y = b.vel.y.abs();
    }
    if b.pos.y > FIELD_MAX - r {
        b.pos.y = FIELD_MAX - r;
        b.vel.y = -b.vel.y.abs();
    }
}
