//! Space Arena entry point
//!
//! Runs a headless session natively: a scripted pilot feeds touches and key
//! presses into the fixed-timestep loop, and arena events are routed to the
//! audio manager and tallied in the log.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use glam::Vec2;

    use space_arena::audio::{AudioManager, LogBackend};
    use space_arena::consts::*;
    use space_arena::effects::ExplosionPool;
    use space_arena::platform::{DirectionalState, Disconnected};
    use space_arena::sim::{ArenaState, GameEvent, TickInput, tick_with_controller};
    use space_arena::{InputMode, Settings};

    /// Length of the scripted session in seconds
    const SESSION_SECS: f32 = 20.0;
    /// Host frame time (30 fps host driving a 60 Hz simulation)
    const FRAME_DT: f32 = 1.0 / 30.0;

    /// Game instance holding all state
    struct Game {
        state: ArenaState,
        audio: AudioManager<LogBackend>,
        controller: Disconnected,
        accumulator: f32,
        input: TickInput,
        // Session tallies
        shots_fired: u32,
        enemies_destroyed: u32,
        enemies_escaped: u32,
    }

    impl Game {
        fn new(state: ArenaState, audio: AudioManager<LogBackend>) -> Self {
            Self {
                state,
                audio,
                controller: Disconnected { player: 1 },
                accumulator: 0.0,
                input: TickInput::default(),
                shots_fired: 0,
                enemies_destroyed: 0,
                enemies_escaped: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick_with_controller(&mut self.state, &input, &mut self.controller, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Touches are one-shot
                self.input.touches.clear();
            }

            self.route_events();
        }

        fn route_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Sound { effect, looping } => self.audio.play(effect, looping),
                    GameEvent::ShotFired { .. } => self.shots_fired += 1,
                    GameEvent::EnemyDestroyed { id, pos } => {
                        self.enemies_destroyed += 1;
                        log::debug!("Enemy {} destroyed at ({:.0}, {:.0})", id, pos.x, pos.y);
                    }
                    GameEvent::EnemyEscaped { .. } => self.enemies_escaped += 1,
                    _ => {}
                }
            }
        }

        /// Scripted pilot: tap to a new height every 1.5s, and in discrete
        /// mode alternate holding up and down every 2s
        fn steer(&mut self, time: f32, frame: u32) {
            let bounds = self.state.bounds;
            if frame.is_multiple_of(45) {
                let lane = (frame / 45) % 4;
                let y = bounds.min.y + bounds.height() * (0.2 + 0.2 * lane as f32);
                self.input.touches.push(Vec2::new(bounds.center().x, y));
            }

            if self.state.input_mode == InputMode::Discrete {
                let phase = (time / 2.0) as u32 % 3;
                self.input.keys = match phase {
                    0 => DirectionalState { up: true, down: false },
                    1 => DirectionalState { up: false, down: true },
                    _ => DirectionalState::NONE,
                };
            }
        }
    }

    /// Fold a wall-clock timestamp into a seed: whole seconds mixed with the
    /// sub-second nanoseconds
    fn seed_from_duration(since_epoch: Duration) -> u64 {
        since_epoch.as_secs() ^ u64::from(since_epoch.subsec_nanos())
    }

    fn pick_seed(settings: &Settings) -> Result<u64> {
        match settings.seed {
            Some(seed) => Ok(seed),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .context("system clock is before the Unix epoch")?;
                Ok(seed_from_duration(now))
            }
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Space Arena (native) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load_from(&path)
                .with_context(|| format!("failed to load settings from {}", path))?,
            None => Settings::load_or_default(Settings::FILE_NAME),
        };
        let seed = pick_seed(&settings)?;

        let mut pool = ExplosionPool::new();
        let state = ArenaState::from_settings(&settings, seed, pool.acquire());
        let audio = AudioManager::from_settings(LogBackend, &settings);
        let mut game = Game::new(state, audio);

        let frames = (SESSION_SECS / FRAME_DT).round() as u32;
        for frame in 0..frames {
            game.steer(frame as f32 * FRAME_DT, frame);
            game.update(FRAME_DT);
        }

        log::info!(
            "Session over: {} shots fired, {} enemies destroyed, {} escaped",
            game.shots_fired,
            game.enemies_destroyed,
            game.enemies_escaped
        );
        println!(
            "{} shots fired, {} enemies destroyed, {} escaped",
            game.shots_fired, game.enemies_destroyed, game.enemies_escaped
        );

        pool.release(game.state.into_explosion());
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm host embeds the library directly
}
