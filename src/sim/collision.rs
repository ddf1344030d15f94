//! Collision detection between shots and enemies
//!
//! Everything here is a circle. Contact is boundary-inclusive: two circles
//! whose centers are exactly `ra + rb` apart are touching.

use glam::Vec2;

use super::state::{Enemy, Shot};

/// Result of a circle/circle check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles touch or overlap
    pub hit: bool,
    /// Distance between centers
    pub distance: f32,
    /// Overlap depth (0 when exactly touching, negative when apart)
    pub penetration: f32,
}

/// Check two circles for contact
pub fn circle_circle_collision(a: Vec2, ra: f32, b: Vec2, rb: f32) -> CollisionResult {
    let distance = a.distance(b);
    let reach = ra + rb;
    CollisionResult {
        hit: distance <= reach,
        distance,
        penetration: reach - distance,
    }
}

/// A shot/enemy pair in contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub enemy_id: u32,
    pub shot_id: u32,
    /// Enemy center at the moment of the hit
    pub point: Vec2,
}

/// All-pairs scan: every live enemy against every live shot
///
/// Pairs come out enemy-major in list order, so an enemy touching several
/// shots yields one `Hit` per shot.
pub fn find_hits(enemies: &[Enemy], shots: &[Shot]) -> Vec<Hit> {
    let mut hits = Vec::new();
    if enemies.is_empty() || shots.is_empty() {
        return hits;
    }

    for enemy in enemies.iter().filter(|e| e.alive) {
        for shot in shots.iter().filter(|s| s.alive) {
            if circle_circle_collision(enemy.pos, enemy.radius, shot.pos, shot.radius).hit {
                hits.push(Hit {
                    enemy_id: enemy.id,
                    shot_id: shot.id,
                    point: enemy.pos,
                });
            }
        }
    }
    hits
}
