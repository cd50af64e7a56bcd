//! Bubble-field state and snapshot types
//!
//! Everything the frame loop replaces wholesale each frame lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::pixel_radius;

/// Pokédex ids the avatar sprites are drawn from at spawn.
pub const SPRITE_POOL: &[u16] = &[
    6, 3, 9, 25, 282, 150, 448, 94, 131, 143, 196, 197, 212, 248, 330, 445, 658, 700, 809, 1, 2,
    4, 7, 10, 12, 15, 18, 22, 24, 26, 38, 39, 40, 65, 68, 76, 99, 112, 115, 121, 123, 130, 134,
    135, 142, 149, 181, 208, 214, 229, 230, 254, 257, 260, 302, 306, 319, 323, 334, 350, 359, 362,
    373, 376, 380, 381, 384, 386, 392, 398, 405, 407, 409, 460, 461, 468, 472, 475, 479, 483, 485,
    487, 491, 530, 534, 537, 542, 549, 553, 555, 560, 571, 609, 612, 635, 637, 642, 646, 660, 681,
    706, 715, 719, 724, 727, 730, 740, 745, 748, 758, 760, 766, 773, 776, 778, 784, 786, 788, 800,
    801, 802, 805,
];

/// One floating avatar, modeled as a moving circle.
///
/// Positions are normalized viewport units ([0, 100] per axis), velocities are
/// units per frame. `size` is the on-screen diameter in pixels, fixed at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    /// Pokédex id of the sprite shown inside the bubble (immutable)
    pub sprite: u16,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Bubble {
    /// Radius in normalized field units for the given viewport width.
    #[inline]
    pub fn radius(&self, viewport_width: f32) -> f32 {
        pixel_radius(self.size, viewport_width)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete bubble-field snapshot (deterministic, serializable)
///
/// The set is created once, never grows or shrinks, and keeps its spawn
/// order - iteration is stable by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleField {
    /// Seed the field was generated from, for reproducibility
    pub seed: u64,
    /// Frames advanced since generation
    pub frame: u64,
    pub bubbles: Vec<Bubble>,
}

impl BubbleField {
    /// Generate a field of `count` bubbles from an injected RNG.
    ///
    /// Spawn positions are inset from the edges; overlap between freshly
    /// spawned bubbles is allowed and resolved lazily by the first collision
    /// pass. A zero count yields an empty field, not an error.
    pub fn generate<R: Rng>(count: usize, seed: u64, rng: &mut R) -> Self {
        let bubbles = (0..count)
            .map(|i| Bubble {
                id: i as u32,
                sprite: SPRITE_POOL[rng.random_range(0..SPRITE_POOL.len())],
                pos: Vec2::new(
                    rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX),
                    rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX),
                ),
                vel: Vec2::new(
                    rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED),
                    rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED),
                ),
                size: rng.random_range(SIZE_MIN..=SIZE_MAX) as f32,
            })
            .collect();

        Self {
            seed,
            frame: 0,
            bubbles,
        }
    }

    /// Generate a field with its own seeded RNG.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        Self::generate(count, seed, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_generate_respects_spawn_ranges() {
        let field = BubbleField::new(50, 7);
        assert_eq!(field.len(), 50);
        for b in &field.bubbles {
            assert!(b.pos.x >= SPAWN_X_MIN && b.pos.x <= SPAWN_X_MAX);
            assert!(b.pos.y >= SPAWN_Y_MIN && b.pos.y <= SPAWN_Y_MAX);
            assert!(b.vel.x.abs() <= SPAWN_SPEED && b.vel.y.abs() <= SPAWN_SPEED);
            assert!(b.size >= SIZE_MIN as f32 && b.size <= SIZE_MAX as f32);
            assert!(SPRITE_POOL.contains(&b.sprite));
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = BubbleField::new(20, 42);
        let b = BubbleField::new(20, 42);
        assert_eq!(a, b);
        let c = BubbleField::new(20, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_count_yields_empty_field() {
        let field = BubbleField::new(0, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_ids_are_stable_spawn_order() {
        let field = BubbleField::new(10, 3);
        for (i, b) in field.bubbles.iter().enumerate() {
            assert_eq!(b.id, i as u32);
        }
    }
}
