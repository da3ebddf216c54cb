//! The per-frame update engine and the collision/scoring resolver.
//!
//! `tick` advances the whole world one step.  All randomness comes
//! through the injected `rng` (one long-lived generator, seeded once by
//! the caller) and all sound goes through the injected `audio` sink, so
//! tests can drive both deterministically.

use rand::Rng;

use crate::audio::Audio;
use crate::entities::{Bullet, EnemyBullet, Player, FIELD_WIDTH};
use crate::world::World;

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Per-enemy, per-tick chance of returning fire: 1 in ENEMY_FIRE_ODDS.
const ENEMY_FIRE_ODDS: u32 = 50;
/// Points per enemy destroyed.
const KILL_SCORE: u32 = 10;
/// Horizontal pixels per move intent.
const PLAYER_STEP: i32 = 5;
/// Body-collision grace period in ticks (~0.5 s at 60 Hz).
const HIT_COOLDOWN_TICKS: u32 = 30;

// ── Input intents ─────────────────────────────────────────────────────────────

/// A player action decoded from a raw key event by the input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Apply one input intent.  Ignored outside active play, so a buffered
/// keystroke can never move the ship after game over.
pub fn apply_intent(world: &mut World, intent: Intent, audio: &dyn Audio) {
    if !world.in_play() {
        return;
    }
    match intent {
        Intent::MoveLeft => {
            world.player.x = (world.player.x - PLAYER_STEP).max(0);
        }
        Intent::MoveRight => {
            world.player.x = (world.player.x + PLAYER_STEP).min(FIELD_WIDTH - Player::WIDTH);
        }
        Intent::Fire => {
            world.bullets.push(Bullet::fired_from(&world.player));
            audio.play_shot();
        }
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one tick (one 16 ms frame).
///
/// The driver already skips ticking outside active play, but a queued
/// timer event can still land after game over, so the engine checks the
/// phase again and no-ops.
pub fn tick(world: &mut World, rng: &mut impl Rng, audio: &dyn Audio) {
    if !world.in_play() {
        return;
    }

    if world.player.hit_cooldown > 0 {
        world.player.hit_cooldown -= 1;
    }

    // ── 1. Enemies descend and occasionally return fire ──────────────────────
    for enemy in &mut world.enemies {
        enemy.advance(rng);
        if rng.gen_ratio(1, ENEMY_FIRE_ODDS) {
            world.enemy_bullets.push(EnemyBullet::fired_from(enemy));
        }
    }

    // ── 2. Move projectiles, then drop the spent ones ────────────────────────
    for bullet in &mut world.bullets {
        bullet.advance();
    }
    for bullet in &mut world.enemy_bullets {
        bullet.advance();
    }
    world.bullets.retain(|b| b.active);
    world.enemy_bullets.retain(|b| b.active);

    // ── 3. Collisions and scoring ────────────────────────────────────────────
    resolve_collisions(world, rng, audio);
}

// ── Collision & scoring ───────────────────────────────────────────────────────

/// Pairwise hit detection plus the score/life bookkeeping it drives.
///
/// Three passes in a fixed order: player bullets against enemies, enemy
/// bullets against the ship, enemy bodies against the ship.  The first
/// pass marks hits by index and filters afterwards, so one bullet can
/// never take out two enemies in a single tick.
fn resolve_collisions(world: &mut World, rng: &mut impl Rng, audio: &dyn Audio) {
    // ── Player bullets × enemies ─────────────────────────────────────────────
    let mut dead_enemies: Vec<usize> = Vec::new();
    let mut spent_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in world.bullets.iter().enumerate() {
        for (ei, enemy) in world.enemies.iter().enumerate() {
            if dead_enemies.contains(&ei) {
                continue;
            }
            if enemy.contains(bullet.x, bullet.y) {
                dead_enemies.push(ei);
                spent_bullets.push(bi);
                break;
            }
        }
    }

    if !dead_enemies.is_empty() {
        world.score += KILL_SCORE * dead_enemies.len() as u32;
        world.enemies = world
            .enemies
            .iter()
            .enumerate()
            .filter(|(i, _)| !dead_enemies.contains(i))
            .map(|(_, e)| e.clone())
            .collect();
        world.bullets = world
            .bullets
            .iter()
            .enumerate()
            .filter(|(i, _)| !spent_bullets.contains(i))
            .map(|(_, b)| b.clone())
            .collect();
        for _ in &dead_enemies {
            audio.play_explosion();
        }

        // A cleared wave refills in the same tick: one level up, one
        // more enemy.
        if world.enemies.is_empty() {
            world.level += 1;
            world.spawn_wave(rng);
        }
    }

    // ── Enemy bullets × player ───────────────────────────────────────────────
    for bullet in &mut world.enemy_bullets {
        if bullet.active && world.player.contains(bullet.x, bullet.y) {
            bullet.active = false;
            world.lives -= 1;
            if world.lives <= 0 {
                world.game_over = true;
            }
        }
    }

    // ── Enemy bodies × player ────────────────────────────────────────────────
    if world.player.hit_cooldown == 0 {
        for enemy in &world.enemies {
            if world.player.overlaps(enemy) {
                world.lives -= 1;
                if world.lives <= 0 {
                    world.game_over = true;
                } else {
                    // Survivable ram: throw the ship back to its spawn
                    // column and arm a short grace period.
                    world.player.x = Player::SPAWN_X;
                    world.player.hit_cooldown = HIT_COOLDOWN_TICKS;
                }
                break;
            }
        }
    }
}
