use space_invaders::entities::{Bullet, Enemy, EnemyBullet};
use space_invaders::world::World;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_world_is_idle() {
    let w = World::new();
    assert!(!w.started);
    assert!(!w.game_over);
    assert!(!w.in_play());
    assert!(w.enemies.is_empty());
    assert_eq!(w.score, 0);
    assert_eq!(w.level, 1);
    assert_eq!(w.lives, 3);
}

// ── start_game ────────────────────────────────────────────────────────────────

#[test]
fn start_game_resets_everything() {
    let mut rng = seeded_rng();
    let mut w = World::new();
    w.score = 990;
    w.level = 7;
    w.lives = -1;
    w.game_over = true;
    w.player.x = 123;
    w.player.hit_cooldown = 12;
    w.bullets.push(Bullet { x: 1.0, y: 2.0, active: true });
    w.enemy_bullets.push(EnemyBullet { x: 3.0, y: 4.0, active: true });

    w.start_game(&mut rng);

    assert_eq!(w.score, 0);
    assert_eq!(w.level, 1);
    assert_eq!(w.lives, 3);
    assert!(w.started);
    assert!(!w.game_over);
    assert!(w.in_play());
    assert!(w.bullets.is_empty());
    assert!(w.enemy_bullets.is_empty());
    assert_eq!(w.enemies.len(), 5);
    assert_eq!(w.player.x, 500);
    assert_eq!(w.player.y, 500);
    assert_eq!(w.player.hit_cooldown, 0);
}

#[test]
fn start_game_seeds_wave_within_spawn_region() {
    let mut rng = seeded_rng();
    let mut w = World::new();
    w.start_game(&mut rng);
    for e in &w.enemies {
        assert!((0..500).contains(&e.x));
        assert!((0..300).contains(&e.y));
    }
}

#[test]
fn start_game_twice_yields_identical_counters() {
    let mut rng = seeded_rng();
    let mut w = World::new();
    w.start_game(&mut rng);
    w.start_game(&mut rng);
    assert_eq!(w.score, 0);
    assert_eq!(w.level, 1);
    assert_eq!(w.lives, 3);
    assert_eq!(w.enemies.len(), 5);
    assert!(w.in_play());
    for e in &w.enemies {
        assert!((0..500).contains(&e.x));
        assert!((0..300).contains(&e.y));
    }
}

// ── Waves ─────────────────────────────────────────────────────────────────────

#[test]
fn wave_size_grows_with_level() {
    let mut w = World::new();
    w.level = 2;
    assert_eq!(w.wave_size(), 7);
    w.level = 9;
    assert_eq!(w.wave_size(), 14);
}

#[test]
fn spawn_wave_respects_level() {
    let mut rng = seeded_rng();
    let mut w = World::new();
    w.level = 3;
    w.spawn_wave(&mut rng);
    assert_eq!(w.enemies.len(), 8);
}

// ── Phase & HUD queries ───────────────────────────────────────────────────────

#[test]
fn in_play_requires_started_and_not_over() {
    let mut w = World::new();
    assert!(!w.in_play());
    w.started = true;
    assert!(w.in_play());
    w.game_over = true;
    assert!(!w.in_play());
}

#[test]
fn lives_display_never_negative() {
    let mut w = World::new();
    w.lives = 2;
    assert_eq!(w.lives_display(), 2);
    w.lives = 0;
    assert_eq!(w.lives_display(), 0);
    w.lives = -2;
    assert_eq!(w.lives_display(), 0);
}

// ── Cloning ───────────────────────────────────────────────────────────────────

#[test]
fn world_clone_is_independent() {
    let mut rng = seeded_rng();
    let mut w = World::new();
    w.start_game(&mut rng);

    let mut cloned = w.clone();
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5, y: 5 });

    assert_eq!(w.player.x, 500);
    assert_eq!(w.score, 0);
    assert_eq!(w.enemies.len(), 5);
}
