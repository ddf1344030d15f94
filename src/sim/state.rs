//! Arena state and entity lifecycle
//!
//! The arena owns the ship, the shot and enemy lists and the effects that go
//! with them. Everything that happens to an entity is reported as a
//! `GameEvent` so the host can mirror it in its own scene graph.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::find_hits;
use super::easing::Easing;
use super::motion::{Motion, MotionSet, MotionTag};
use super::scheduler::{Scheduler, TimerKind};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::effects::{EXHAUST_DEFINITION, ParticleEffect, STARS_DEFINITION};
use crate::settings::{InputMode, Settings};
use crate::travel_time;

/// Exhaust flame sits just behind the ship's nose
pub const EXHAUST_OFFSET: Vec2 = Vec2::new(-10.0, 0.0);

/// Visible world rectangle (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: Vec2,
    pub size: Vec2,
}

impl WorldBounds {
    /// Bounds anchored at the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Motions currently steering the ship
    pub motions: MotionSet,
    /// Set while an upward discrete move is in effect
    pub moving_up: bool,
    /// Set while a downward discrete move is in effect
    pub moving_down: bool,
    /// Attached exhaust flame
    pub exhaust: ParticleEffect,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        let mut exhaust = ParticleEffect::new(EXHAUST_DEFINITION).at(pos + EXHAUST_OFFSET);
        exhaust.rotation = -90.0;
        exhaust.scale = 0.5;
        exhaust.auto_remove_on_finish = false;
        Self {
            pos,
            motions: MotionSet::default(),
            moving_up: false,
            moving_down: false,
            exhaust,
        }
    }

    /// Advance steering motions and keep the exhaust attached
    pub fn advance(&mut self, dt: f32) {
        self.pos = self.motions.advance(self.pos, dt);
        self.exhaust.position = self.pos + EXHAUST_OFFSET;
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone)]
pub struct Shot {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub motion: Motion,
    pub alive: bool,
}

/// An enemy drifting toward the left edge
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub motion: Motion,
    pub alive: bool,
}

/// Things the host should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ShotFired { id: u32, pos: Vec2 },
    /// Shot reached the right edge
    ShotExpired { id: u32 },
    /// Shot destroyed by the enemy it struck
    ShotConsumed { id: u32 },
    EnemySpawned { id: u32, pos: Vec2 },
    /// Enemy reached the left edge
    EnemyEscaped { id: u32 },
    EnemyDestroyed { id: u32, pos: Vec2 },
    ExplosionTriggered { pos: Vec2 },
    Sound { effect: SoundEffect, looping: bool },
}

/// Vertical spawn coordinate for a uniform draw `r` in [0, 1)
///
/// A zero draw pins the enemy to `radius`; the result never drops below it.
pub fn enemy_spawn_y(r: f64, height: f32, radius: f32) -> f32 {
    let y = if r > 0.0 {
        r * height as f64 - radius as f64
    } else {
        radius as f64
    };
    (y as f32).max(radius)
}

/// Complete arena state for one play session
#[derive(Debug, Clone)]
pub struct ArenaState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub bounds: WorldBounds,
    pub input_mode: InputMode,
    /// Shots are destroyed along with the enemy they hit
    pub consume_shot_on_hit: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds since the arena was entered
    pub elapsed: f32,
    pub ship: Ship,
    /// Live shots (spawn order)
    pub shots: Vec<Shot>,
    /// Live enemies (spawn order)
    pub enemies: Vec<Enemy>,
    /// Shared explosion, repositioned and restarted on every hit
    pub explosion: ParticleEffect,
    /// Background star field
    pub stars: ParticleEffect,
    pub scheduler: Scheduler,
    events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl ArenaState {
    /// Enter the arena: place the ship, register timers, start the ambience
    pub fn new(bounds: WorldBounds, settings: &Settings, seed: u64, explosion: ParticleEffect) -> Self {
        let ship_pos = Vec2::new(bounds.min.x + SHIP_LEFT_OFFSET, bounds.center().y);

        let mut scheduler = Scheduler::default();
        scheduler.schedule(TimerKind::Fire, FIRE_INTERVAL);
        scheduler.schedule(TimerKind::SpawnEnemy, ENEMY_SPAWN_INTERVAL);
        scheduler.schedule(TimerKind::CheckCollisions, 0.0);

        let mut stars = ParticleEffect::new(STARS_DEFINITION)
            .at(bounds.center() + Vec2::new(STARS_X_OFFSET, 0.0));
        stars.auto_remove_on_finish = false;

        let mut explosion = explosion;
        explosion.stop();
        explosion.visible = false;

        let mut state = Self {
            seed,
            bounds,
            input_mode: settings.input_mode,
            consume_shot_on_hit: settings.consume_shot_on_hit,
            time_ticks: 0,
            elapsed: 0.0,
            ship: Ship::new(ship_pos),
            shots: Vec::new(),
            enemies: Vec::new(),
            explosion,
            stars,
            scheduler,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        state.events.push(GameEvent::Sound {
            effect: SoundEffect::Laser,
            looping: true,
        });

        log::info!(
            "Arena entered: {}x{} world, {} input, seed {}",
            bounds.width(),
            bounds.height(),
            settings.input_mode.as_str(),
            seed
        );

        state
    }

    /// Enter an arena sized by the settings
    pub fn from_settings(settings: &Settings, seed: u64, explosion: ParticleEffect) -> Self {
        let bounds = WorldBounds::new(settings.world_width, settings.world_height);
        Self::new(bounds, settings, seed, explosion)
    }

    /// Leave the arena, handing the explosion back for reuse
    pub fn into_explosion(self) -> ParticleEffect {
        log::info!(
            "Arena left after {} ticks ({} shots, {} enemies on screen)",
            self.time_ticks,
            self.shots.len(),
            self.enemies.len()
        );
        self.explosion
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Spawn a shot at the ship's muzzle, bound for the right edge
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = self.ship.pos + Vec2::new(SHOT_OFFSET_X, SHOT_OFFSET_Y);
        let target = Vec2::new(self.bounds.max().x, pos.y);
        self.shots.push(Shot {
            id,
            pos,
            radius: SHOT_RADIUS,
            motion: Motion::move_to(pos, target, SHOT_TRAVEL_TIME),
            alive: true,
        });
        self.events.push(GameEvent::ShotFired { id, pos });
        id
    }

    /// Spawn an enemy at a random height on the right edge
    pub fn spawn_enemy(&mut self) -> u32 {
        let r: f64 = self.rng.random();
        self.spawn_enemy_with_draw(r)
    }

    /// Spawn an enemy using an explicit random draw in [0, 1)
    pub fn spawn_enemy_with_draw(&mut self, r: f64) -> u32 {
        let id = self.next_entity_id();
        let y = enemy_spawn_y(r, self.bounds.height(), ENEMY_RADIUS);
        let pos = Vec2::new(
            self.bounds.min.x + self.bounds.width() - ENEMY_RADIUS,
            self.bounds.min.y + y,
        );
        let target = Vec2::new(self.bounds.min.x, pos.y);
        self.enemies.push(Enemy {
            id,
            pos,
            radius: ENEMY_RADIUS,
            motion: Motion::move_to(pos, target, ENEMY_TRAVEL_TIME),
            alive: true,
        });
        log::debug!("Enemy {} spawned at ({:.1}, {:.1})", id, pos.x, pos.y);
        self.events.push(GameEvent::EnemySpawned { id, pos });
        id
    }

    /// Glide the ship vertically to `target_y` at constant average speed
    pub fn move_ship_to(&mut self, target_y: f32) {
        let target = Vec2::new(self.ship.pos.x, target_y);
        let duration = travel_time(self.ship.pos.distance(target), SHIP_SPEED);
        self.ship
            .motions
            .run(Motion::move_to(self.ship.pos, target, duration).eased(Easing::SineInOut));
    }

    /// Start moving toward the top edge. Returns false if already doing so.
    pub fn move_ship_up(&mut self) -> bool {
        let target_y = self.bounds.max().y - SHIP_EDGE_MARGIN;
        self.move_ship_directional(MotionTag::ShipUp, target_y)
    }

    /// Start moving toward the bottom edge. Returns false if already doing so.
    pub fn move_ship_down(&mut self) -> bool {
        let target_y = self.bounds.min.y + SHIP_EDGE_MARGIN;
        self.move_ship_directional(MotionTag::ShipDown, target_y)
    }

    fn move_ship_directional(&mut self, tag: MotionTag, target_y: f32) -> bool {
        self.ship.motions.cancel(tag.opposite());
        *self.guard_mut(tag.opposite()) = false;

        if *self.guard_mut(tag) {
            return false;
        }
        *self.guard_mut(tag) = true;

        let target = Vec2::new(self.ship.pos.x, target_y);
        let duration = travel_time(self.ship.pos.distance(target), SHIP_SPEED);
        self.ship.motions.run(
            Motion::move_to(self.ship.pos, target, duration)
                .eased(Easing::SineInOut)
                .tagged(tag),
        );
        true
    }

    fn guard_mut(&mut self, tag: MotionTag) -> &mut bool {
        match tag {
            MotionTag::ShipUp => &mut self.ship.moving_up,
            MotionTag::ShipDown => &mut self.ship.moving_down,
        }
    }

    /// Both directions released: stop all ship motion
    pub fn halt_ship(&mut self) {
        self.ship.motions.stop_all();
        self.ship.moving_up = false;
        self.ship.moving_down = false;
    }

    /// Displace the ship by an analog stick reading (stick y grows downward)
    pub fn nudge_ship(&mut self, stick: Vec2) {
        self.ship.pos += Vec2::new(stick.x, -stick.y) * SHIP_NUDGE_SPEED;
        self.ship.exhaust.position = self.ship.pos + EXHAUST_OFFSET;
    }

    /// Remove an enemy. Destroying one that is already gone does nothing.
    pub fn destroy_enemy(&mut self, id: u32) -> bool {
        match self.enemies.iter_mut().find(|e| e.id == id && e.alive) {
            Some(enemy) => {
                enemy.alive = false;
                true
            }
            None => false,
        }
    }

    /// Remove a shot. Destroying one that is already gone does nothing.
    pub fn destroy_shot(&mut self, id: u32) -> bool {
        match self.shots.iter_mut().find(|s| s.id == id && s.alive) {
            Some(shot) => {
                shot.alive = false;
                true
            }
            None => false,
        }
    }

    /// Move the shared explosion to `pos` and restart it
    pub fn trigger_explosion(&mut self, pos: Vec2) {
        self.explosion.visible = true;
        self.explosion.position = pos;
        self.explosion.reset();
        self.events.push(GameEvent::ExplosionTriggered { pos });
    }

    /// Resolve shot/enemy contacts; returns the number of hits processed
    pub fn check_collisions(&mut self) -> usize {
        let hits = find_hits(&self.enemies, &self.shots);
        let mut processed = 0;

        for hit in hits {
            if self.consume_shot_on_hit {
                // A dead enemy can't use up further shots
                let enemy_alive = self
                    .enemies
                    .iter()
                    .any(|e| e.id == hit.enemy_id && e.alive);
                if !enemy_alive || !self.destroy_shot(hit.shot_id) {
                    continue;
                }
                self.events.push(GameEvent::ShotConsumed { id: hit.shot_id });
            }

            if self.destroy_enemy(hit.enemy_id) {
                log::debug!("Enemy {} hit by shot {}", hit.enemy_id, hit.shot_id);
                self.events.push(GameEvent::EnemyDestroyed {
                    id: hit.enemy_id,
                    pos: hit.point,
                });
            }

            self.events.push(GameEvent::Sound {
                effect: SoundEffect::Explosion,
                looping: false,
            });
            self.trigger_explosion(hit.point);
            processed += 1;
        }

        self.remove_destroyed();
        processed
    }

    /// Advance every entity motion; finished shots and enemies are removed
    pub fn advance_motions(&mut self, dt: f32) {
        self.ship.advance(dt);

        for shot in &mut self.shots {
            shot.pos = shot.motion.advance(dt);
            if shot.motion.is_finished() && shot.alive {
                shot.alive = false;
                self.events.push(GameEvent::ShotExpired { id: shot.id });
            }
        }

        for enemy in &mut self.enemies {
            enemy.pos = enemy.motion.advance(dt);
            if enemy.motion.is_finished() && enemy.alive {
                enemy.alive = false;
                self.events.push(GameEvent::EnemyEscaped { id: enemy.id });
            }
        }

        self.remove_destroyed();
    }

    /// Advance particle effect clocks
    pub fn advance_effects(&mut self, dt: f32) {
        self.explosion.advance(dt);
        self.stars.advance(dt);
        self.ship.exhaust.advance(dt);
    }

    fn remove_destroyed(&mut self) {
        self.shots.retain(|s| s.alive);
        self.enemies.retain(|e| e.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ExplosionPool;

    fn arena(settings: &Settings) -> ArenaState {
        let mut pool = ExplosionPool::new();
        ArenaState::new(WorldBounds::new(1280.0, 720.0), settings, 42, pool.acquire())
    }

    #[test]
    fn test_enter_arena() {
        let mut state = arena(&Settings::default());
        assert_eq!(state.ship.pos, Vec2::new(100.0, 360.0));
        assert!(state.shots.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.scheduler.is_scheduled(TimerKind::Fire));
        assert!(state.scheduler.is_scheduled(TimerKind::SpawnEnemy));
        assert!(state.scheduler.is_scheduled(TimerKind::CheckCollisions));
        assert!(!state.explosion.visible);
        assert!(!state.explosion.active);
        assert_eq!(state.stars.position, Vec2::new(1040.0, 360.0));
        assert_eq!(state.ship.exhaust.position, Vec2::new(90.0, 360.0));

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Sound {
                effect: SoundEffect::Laser,
                looping: true
            }]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_bounds_with_offset_origin() {
        let bounds = WorldBounds {
            min: Vec2::new(-100.0, 50.0),
            size: Vec2::new(800.0, 600.0),
        };
        let mut pool = ExplosionPool::new();
        let mut state = ArenaState::new(bounds, &Settings::default(), 1, pool.acquire());
        assert_eq!(state.ship.pos, Vec2::new(0.0, 350.0));

        state.spawn_enemy_with_draw(0.0);
        assert_eq!(state.enemies[0].pos, Vec2::new(660.0, 90.0));
        assert_eq!(state.enemies[0].motion.to, Vec2::new(-100.0, 90.0));
    }

    #[test]
    fn test_fire_from_ship_muzzle() {
        let mut state = arena(&Settings::default());
        let id = state.fire();
        let shot = &state.shots[0];
        assert_eq!(shot.id, id);
        assert_eq!(shot.pos, Vec2::new(160.0, 357.5));
        assert_eq!(shot.motion.to, Vec2::new(1280.0, 357.5));
        assert_eq!(shot.motion.duration, SHOT_TRAVEL_TIME);
        assert_eq!(shot.motion.easing, Easing::Linear);
    }

    #[test]
    fn test_spawn_enemy_half_draw() {
        let mut state = arena(&Settings::default());
        state.spawn_enemy_with_draw(0.5);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.pos, Vec2::new(1240.0, 320.0));
        assert_eq!(enemy.motion.to, Vec2::new(0.0, 320.0));
        assert_eq!(enemy.motion.duration, ENEMY_TRAVEL_TIME);
    }

    #[test]
    fn test_spawn_y_edge_cases() {
        assert_eq!(enemy_spawn_y(0.0, 720.0, 40.0), 40.0);
        assert_eq!(enemy_spawn_y(0.5, 720.0, 40.0), 320.0);
        // Small draws would dip below the radius
        assert_eq!(enemy_spawn_y(0.01, 720.0, 40.0), 40.0);
        assert!(enemy_spawn_y(0.999_999, 720.0, 40.0) < 720.0 - 40.0 + 0.01);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = arena(&Settings::default());
        let a = state.fire();
        let b = state.spawn_enemy();
        let c = state.fire();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_move_ship_to_duration() {
        let mut state = arena(&Settings::default());
        state.move_ship_to(110.0);
        let motion = state.ship.motions.iter().next().unwrap();
        assert!((motion.duration - 0.5).abs() < 1e-6);
        assert_eq!(motion.to, Vec2::new(100.0, 110.0));
        assert_eq!(motion.easing, Easing::SineInOut);
        assert_eq!(motion.tag, None);

        // A new touch replaces the glide in progress
        state.move_ship_to(610.0);
        assert_eq!(state.ship.motions.len(), 1);
    }

    #[test]
    fn test_move_ship_up_scenario() {
        let mut state = arena(&Settings::default());
        assert!(state.move_ship_up());
        let motion = state.ship.motions.iter().next().unwrap();
        assert_eq!(motion.to, Vec2::new(100.0, 645.0));
        assert!((motion.duration - 0.57).abs() < 1e-5);
        assert_eq!(motion.tag, Some(MotionTag::ShipUp));
        assert!(state.ship.moving_up);
    }

    #[test]
    fn test_move_ship_up_is_idempotent() {
        let mut state = arena(&Settings::default());
        assert!(state.move_ship_up());
        assert!(!state.move_ship_up());
        assert_eq!(state.ship.motions.len(), 1);
    }

    #[test]
    fn test_down_cancels_up() {
        let mut state = arena(&Settings::default());
        state.move_ship_up();
        assert!(state.move_ship_down());
        assert!(!state.ship.motions.is_running(MotionTag::ShipUp));
        assert!(state.ship.motions.is_running(MotionTag::ShipDown));
        assert!(!state.ship.moving_up);
        assert!(state.ship.moving_down);
        let motion = state.ship.motions.iter().next().unwrap();
        assert_eq!(motion.to, Vec2::new(100.0, 75.0));

        // And back up again
        assert!(state.move_ship_up());
        assert!(!state.ship.motions.is_running(MotionTag::ShipDown));
    }

    #[test]
    fn test_halt_clears_guards() {
        let mut state = arena(&Settings::default());
        state.move_ship_to(600.0);
        state.move_ship_up();
        state.halt_ship();
        assert!(state.ship.motions.is_empty());
        assert!(!state.ship.moving_up && !state.ship.moving_down);
        assert!(state.move_ship_up());
    }

    #[test]
    fn test_nudge_ship() {
        let mut state = arena(&Settings::default());
        state.nudge_ship(Vec2::new(0.5, -1.0));
        assert_eq!(state.ship.pos, Vec2::new(105.0, 370.0));
        assert_eq!(state.ship.exhaust.position, Vec2::new(95.0, 370.0));
    }

    #[test]
    fn test_collision_scenario() {
        let mut state = arena(&Settings::default());
        state.drain_events();
        state.fire();
        state.enemies.push(Enemy {
            id: 99,
            pos: Vec2::new(160.0, 360.0),
            radius: ENEMY_RADIUS,
            motion: Motion::move_to(Vec2::new(160.0, 360.0), Vec2::new(0.0, 360.0), 3.0),
            alive: true,
        });

        assert_eq!(state.check_collisions(), 1);
        assert!(state.enemies.is_empty());
        // The shot keeps flying
        assert_eq!(state.shots.len(), 1);
        assert!(state.explosion.visible);
        assert!(state.explosion.active);
        assert_eq!(state.explosion.position, Vec2::new(160.0, 360.0));
        assert_eq!(state.explosion.resets, 1);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::EnemyDestroyed {
            id: 99,
            pos: Vec2::new(160.0, 360.0)
        }));
        assert!(events.contains(&GameEvent::Sound {
            effect: SoundEffect::Explosion,
            looping: false
        }));

        // Enemy is gone for good; nothing left to hit
        assert_eq!(state.check_collisions(), 0);
        assert!(!state.destroy_enemy(99));
    }

    #[test]
    fn test_consume_shot_on_hit() {
        let settings = Settings {
            consume_shot_on_hit: true,
            ..Default::default()
        };
        let mut state = arena(&settings);
        state.fire();
        state.spawn_enemy_with_draw(0.5);
        state.enemies[0].pos = Vec2::new(170.0, 357.5);

        assert_eq!(state.check_collisions(), 1);
        assert!(state.shots.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.events().iter().any(|e| matches!(e, GameEvent::ShotConsumed { .. })));
    }

    #[test]
    fn test_enemy_hit_by_two_shots_destroyed_once() {
        let mut state = arena(&Settings::default());
        state.fire();
        state.fire();
        state.spawn_enemy_with_draw(0.5);
        state.enemies[0].pos = Vec2::new(170.0, 357.5);
        state.drain_events();

        assert_eq!(state.check_collisions(), 2);
        let events = state.drain_events();
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count();
        let explosions = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ExplosionTriggered { .. }))
            .count();
        assert_eq!(destroyed, 1);
        assert_eq!(explosions, 2);
        assert_eq!(state.explosion.resets, 2);
    }

    #[test]
    fn test_consumed_shot_cannot_hit_twice() {
        let settings = Settings {
            consume_shot_on_hit: true,
            ..Default::default()
        };
        let mut state = arena(&settings);
        state.fire();
        state.spawn_enemy_with_draw(0.5);
        state.spawn_enemy_with_draw(0.5);
        state.enemies[0].pos = Vec2::new(170.0, 357.5);
        state.enemies[1].pos = Vec2::new(150.0, 357.5);

        assert_eq!(state.check_collisions(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_destroyed_enemy_consumes_only_one_shot() {
        let settings = Settings {
            consume_shot_on_hit: true,
            ..Default::default()
        };
        let mut state = arena(&settings);
        state.fire();
        state.fire();
        state.spawn_enemy_with_draw(0.5);
        state.enemies[0].pos = Vec2::new(170.0, 357.5);
        state.drain_events();

        assert_eq!(state.check_collisions(), 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.shots.len(), 1);
        let consumed = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotConsumed { .. }))
            .count();
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_motions_expire_entities() {
        let mut state = arena(&Settings::default());
        state.fire();
        state.spawn_enemy_with_draw(0.5);
        state.drain_events();

        state.advance_motions(1.0);
        assert!(state.shots.is_empty());
        assert_eq!(state.enemies.len(), 1);
        assert!((state.enemies[0].pos.x - (1240.0 - 1240.0 / 3.0)).abs() < 1e-3);

        state.advance_motions(2.0);
        assert!(state.enemies.is_empty());

        let events = state.drain_events();
        assert!(matches!(events[0], GameEvent::ShotExpired { .. }));
        assert!(matches!(events[1], GameEvent::EnemyEscaped { .. }));
    }

    #[test]
    fn test_explosion_returned_on_exit() {
        let mut pool = ExplosionPool::new();
        let mut state = arena(&Settings::default());
        state.trigger_explosion(Vec2::new(5.0, 5.0));
        pool.release(state.into_explosion());
        assert_eq!(pool.idle_count(), 1);
        assert!(!pool.acquire().visible);
    }
}
