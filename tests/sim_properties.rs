//! Property tests for the bubble-field simulator
//!
//! These pin the testable invariants of the physics step: bubbles never leave
//! the field, no impulse is invented for separated pairs, the equal-mass
//! exchange conserves the paired normal components, and separation only ever
//! reduces overlap.

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use pokebase_console::consts::FIELD_MAX;
use pokebase_console::sim::{Bubble, BubbleField, detect_pair, perturb, resolve_pair, step};

const WIDTH: f32 = 1200.0;

fn bubble(id: u32, pos: Vec2, vel: Vec2, size: f32) -> Bubble {
    Bubble {
        id,
        sprite: 25,
        pos,
        vel,
        size,
    }
}

/// An overlapping pair at a chosen fraction of the contact distance.
fn overlapping_pair() -> impl Strategy<Value = (Bubble, Bubble)> {
    (
        80.0f32..150.0,
        80.0f32..150.0,
        0.05f32..0.95,
        0.0f32..std::f32::consts::TAU,
        prop::array::uniform4(-0.2f32..0.2),
    )
        .prop_map(|(s1, s2, frac, angle, v)| {
            let sum_radii = (s1 + s2) / WIDTH * 50.0;
            let offset = Vec2::from_angle(angle) * (sum_radii * frac);
            let b1 = bubble(0, Vec2::new(50.0, 50.0), Vec2::new(v[0], v[1]), s1);
            let b2 = bubble(1, Vec2::new(50.0, 50.0) + offset, Vec2::new(v[2], v[3]), s2);
            (b1, b2)
        })
        .prop_filter("centers must not coincide", |(b1, b2)| {
            (b2.pos - b1.pos).length() > 1e-3
        })
}

proptest! {
    #[test]
    fn field_stays_in_bounds_for_any_seed(
        seed in any::<u64>(),
        count in 0usize..40,
        frames in 1usize..120,
    ) {
        let mut field = BubbleField::new(count, seed);
        for _ in 0..frames {
            field = step(&field, WIDTH);
        }
        for b in &field.bubbles {
            let r = b.radius(WIDTH);
            prop_assert!(b.pos.x >= r - 1e-4 && b.pos.x <= FIELD_MAX - r + 1e-4);
            prop_assert!(b.pos.y >= r - 1e-4 && b.pos.y <= FIELD_MAX - r + 1e-4);
            prop_assert!(b.vel.x.is_finite() && b.vel.y.is_finite());
        }
    }

    #[test]
    fn separated_pair_gets_no_impulse(
        x1 in 20.0f32..40.0,
        x2 in 60.0f32..80.0,
        y in 20.0f32..80.0,
        v in prop::array::uniform4(-0.2f32..0.2),
        s1 in 80.0f32..150.0,
        s2 in 80.0f32..150.0,
    ) {
        // Far apart on x (gap at least 20 units against a radii sum of at
        // most 12.5) and moving at most 0.4 toward each other per frame:
        // a single step cannot bring them into contact, so velocities must
        // pass through untouched (interior placement avoids the walls).
        let field = BubbleField {
            seed: 0,
            frame: 0,
            bubbles: vec![
                bubble(0, Vec2::new(x1, y), Vec2::new(v[0], v[1]), s1),
                bubble(1, Vec2::new(x2, y), Vec2::new(v[2], v[3]), s2),
            ],
        };
        let next = step(&field, WIDTH);
        prop_assert_eq!(next.bubbles[0].vel, Vec2::new(v[0], v[1]));
        prop_assert_eq!(next.bubbles[1].vel, Vec2::new(v[2], v[3]));
    }

    #[test]
    fn elastic_exchange_conserves_normal_budget((b1, b2) in overlapping_pair()) {
        let contact = detect_pair(&b1, &b2, WIDTH);
        prop_assume!(contact.is_some());
        let contact = contact.unwrap();

        let (mut c1, mut c2) = (b1.clone(), b2.clone());
        let n = contact.normal;
        let before_sum = c1.vel.dot(n) + c2.vel.dot(n);
        let before_sq = c1.vel.dot(n).powi(2) + c2.vel.dot(n).powi(2);

        resolve_pair(&mut c1, &mut c2, &contact);

        // Equal-mass exchange: the two normal components swap, so both their
        // sum and their squared sum survive the collision.
        let after_sum = c1.vel.dot(n) + c2.vel.dot(n);
        let after_sq = c1.vel.dot(n).powi(2) + c2.vel.dot(n).powi(2);
        prop_assert!((before_sum - after_sum).abs() < 1e-4);
        prop_assert!((before_sq - after_sq).abs() < 1e-4);

        // Tangential components are untouched
        let t = Vec2::new(-n.y, n.x);
        prop_assert!((c1.vel.dot(t) - b1.vel.dot(t)).abs() < 1e-5);
        prop_assert!((c2.vel.dot(t) - b2.vel.dot(t)).abs() < 1e-5);
    }

    #[test]
    fn separation_monotonically_de_overlaps((b1, b2) in overlapping_pair()) {
        let contact = detect_pair(&b1, &b2, WIDTH);
        prop_assume!(contact.is_some());
        let contact = contact.unwrap();

        let (mut c1, mut c2) = (b1.clone(), b2.clone());
        let before = (c2.pos - c1.pos).length();
        resolve_pair(&mut c1, &mut c2, &contact);
        let after = (c2.pos - c1.pos).length();
        let sum_radii = c1.radius(WIDTH) + c2.radius(WIDTH);

        prop_assert!(after >= before - 1e-5);
        prop_assert!(after >= sum_radii - 1e-3);
    }

    #[test]
    fn perturb_leaves_everything_else_bit_identical(
        seed in any::<u64>(),
        count in 1usize..30,
        target in 0u32..30,
        rng_seed in any::<u64>(),
    ) {
        let field = BubbleField::new(count, seed);
        let mut rng = Pcg32::seed_from_u64(rng_seed);
        let next = perturb(&field, target, &mut rng);

        prop_assert_eq!(field.len(), next.len());
        for (a, b) in field.bubbles.iter().zip(&next.bubbles) {
            prop_assert_eq!(a.pos, b.pos);
            prop_assert_eq!(a.size, b.size);
            if a.id != target {
                prop_assert_eq!(a.vel, b.vel);
            }
        }
    }
}

#[test]
fn coincident_spawn_is_guarded() {
    // Both bubbles at the same center with zero velocity: the degenerate
    // zero-distance pair is skipped, nothing moves, nothing divides by zero.
    let field = BubbleField {
        seed: 0,
        frame: 0,
        bubbles: vec![
            bubble(0, Vec2::new(40.0, 40.0), Vec2::ZERO, 100.0),
            bubble(1, Vec2::new(40.0, 40.0), Vec2::ZERO, 100.0),
        ],
    };
    let next = step(&field, WIDTH);
    assert_eq!(next.bubbles[0].pos, field.bubbles[0].pos);
    assert_eq!(next.bubbles[1].pos, field.bubbles[1].pos);
    assert_eq!(next.bubbles[0].vel, Vec2::ZERO);
    assert_eq!(next.bubbles[1].vel, Vec2::ZERO);
}
