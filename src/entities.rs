//! All game entity types and their one-tick motion rules.
//!
//! Entities are plain data plus a single `advance()` step.  Bounds
//! handling (wrap for enemies, deactivation for projectiles) lives
//! inside `advance()`, so the update engine never branches per type.

use rand::Rng;

// ── Playfield constants ───────────────────────────────────────────────────────

/// World-pixel dimensions of the playfield (and the nominal window).
pub const FIELD_WIDTH: i32 = 1000;
pub const FIELD_HEIGHT: i32 = 600;

/// Enemies (re)appear with x in [0, SPAWN_SPAN_X) and y in [0, SPAWN_SPAN_Y).
pub const SPAWN_SPAN_X: i32 = 500;
pub const SPAWN_SPAN_Y: i32 = 300;

// ── Sprite tags ───────────────────────────────────────────────────────────────

/// Symbolic drawable identifier carried by each entity.  The render
/// layer owns the mapping from tag to glyph and colour; nothing in the
/// core ever touches a drawing API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Invader,
    Shot,
    EnemyShot,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Ticks of post-ram grace left.  Body collisions are skipped while
    /// this is non-zero.
    pub hit_cooldown: u32,
}

impl Player {
    pub const WIDTH: i32 = 40;
    pub const HEIGHT: i32 = 40;
    /// Column the ship spawns in and is knocked back to after a ram.
    pub const SPAWN_X: i32 = 500;
    pub const SPAWN_Y: i32 = 500;

    pub fn new() -> Self {
        Player {
            x: Self::SPAWN_X,
            y: Self::SPAWN_Y,
            hit_cooldown: 0,
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Ship
    }

    /// Point-in-rectangle test against the ship's full sprite bounds
    /// (inclusive edges).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && px <= (self.x + Self::WIDTH) as f32
            && py >= self.y as f32
            && py <= (self.y + Self::HEIGHT) as f32
    }

    /// Rectangle-overlap test against an enemy body (inclusive edges).
    pub fn overlaps(&self, enemy: &Enemy) -> bool {
        self.x + Self::WIDTH >= enemy.x
            && self.x <= enemy.x + Enemy::WIDTH
            && self.y + Self::HEIGHT >= enemy.y
            && self.y <= enemy.y + Enemy::HEIGHT
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
}

impl Enemy {
    pub const WIDTH: i32 = 50;
    pub const HEIGHT: i32 = 50;
    /// Pixels descended per tick.
    const FALL_SPEED: i32 = 2;

    /// A fresh enemy somewhere in the spawn region.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Enemy {
            x: rng.gen_range(0..SPAWN_SPAN_X),
            y: rng.gen_range(0..SPAWN_SPAN_Y),
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Invader
    }

    /// Descend one tick.  Past the bottom edge the enemy wraps back to
    /// the top at a fresh random column, so the rain never stops.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.y += Self::FALL_SPEED;
        if self.y > FIELD_HEIGHT {
            self.y = 0;
            self.x = rng.gen_range(0..SPAWN_SPAN_X);
        }
    }

    /// Point-in-rectangle test used for bullet hits (inclusive edges).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && px <= (self.x + Self::WIDTH) as f32
            && py >= self.y as f32
            && py <= (self.y + Self::HEIGHT) as f32
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player shot.  Positions are floats so the motion rule mirrors the
/// enemy shot exactly, just with the sign flipped.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Bullet {
    /// Pixels climbed per tick.
    const SPEED: f32 = 10.0;

    /// Fired from the ship's horizontal centre, at its nose.
    pub fn fired_from(player: &Player) -> Self {
        Bullet {
            x: (player.x + Player::WIDTH / 2) as f32,
            y: player.y as f32,
            active: true,
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Shot
    }

    /// Climb one tick; deactivates on leaving the top edge.
    pub fn advance(&mut self) {
        self.y -= Self::SPEED;
        if self.y < 0.0 {
            self.active = false;
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnemyBullet {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl EnemyBullet {
    /// Pixels dropped per tick.
    const SPEED: f32 = 10.0;

    /// Dropped from the enemy's horizontal centre, at its bottom edge.
    pub fn fired_from(enemy: &Enemy) -> Self {
        EnemyBullet {
            x: (enemy.x + Enemy::WIDTH / 2) as f32,
            y: (enemy.y + Enemy::HEIGHT) as f32,
            active: true,
        }
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::EnemyShot
    }

    /// Fall one tick; deactivates on leaving the bottom edge.
    pub fn advance(&mut self) {
        self.y += Self::SPEED;
        if self.y > FIELD_HEIGHT as f32 {
            self.active = false;
        }
    }
}
