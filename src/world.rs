//! Master game state: entity collections, counters, and phase flags.

use rand::Rng;

use crate::entities::{Bullet, Enemy, EnemyBullet, Player};

/// Lives at the start of a session.
pub const STARTING_LIVES: i32 = 3;
/// The opening wave is exactly this many enemies; every refill after a
/// cleared wave holds `BASE_WAVE_SIZE + level`.
pub const BASE_WAVE_SIZE: usize = 5;

/// The whole mutable game state.  Owned and ticked by the driver
/// thread; the render layer only ever reads it between ticks.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub score: u32,
    pub level: u32,
    /// May dip below zero on the tick the fatal hit lands; the HUD
    /// clamps at zero and `game_over` latches the terminal state.
    pub lives: i32,
    pub started: bool,
    pub game_over: bool,
}

impl World {
    /// An idle world.  Nothing moves until `start_game`.
    pub fn new() -> Self {
        World {
            player: Player::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            started: false,
            game_over: false,
        }
    }

    /// Reset every counter and collection and seed the opening wave.
    pub fn start_game(&mut self, rng: &mut impl Rng) {
        self.player = Player::new();
        self.enemies = (0..BASE_WAVE_SIZE).map(|_| Enemy::spawn(rng)).collect();
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.score = 0;
        self.level = 1;
        self.lives = STARTING_LIVES;
        self.started = true;
        self.game_over = false;
    }

    /// Replace the (cleared) wave with the next, larger one.
    pub fn spawn_wave(&mut self, rng: &mut impl Rng) {
        self.enemies = (0..self.wave_size()).map(|_| Enemy::spawn(rng)).collect();
    }

    pub fn wave_size(&self) -> usize {
        BASE_WAVE_SIZE + self.level as usize
    }

    /// True while the simulation should run.
    pub fn in_play(&self) -> bool {
        self.started && !self.game_over
    }

    /// Lives as shown on the HUD; never negative, even on the fatal tick.
    pub fn lives_display(&self) -> i32 {
        self.lives.max(0)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
