use space_invaders::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_at_spawn() {
    let p = Player::new();
    assert_eq!(p.x, 500);
    assert_eq!(p.y, 500);
    assert_eq!(p.hit_cooldown, 0);
}

#[test]
fn player_contains_inclusive_bounds() {
    let p = Player::new(); // (500, 500), 40×40
    assert!(p.contains(500.0, 500.0)); // top-left corner
    assert!(p.contains(540.0, 540.0)); // bottom-right corner
    assert!(p.contains(510.0, 510.0)); // interior
    assert!(!p.contains(541.0, 510.0)); // one pixel right
    assert!(!p.contains(510.0, 499.0)); // one pixel above
}

#[test]
fn player_overlaps_enemy_at_touching_edge() {
    let p = Player::new(); // x in [500, 540]
    // Enemy whose left edge exactly meets the ship's right edge
    let touching = Enemy { x: 540, y: 500 };
    assert!(p.overlaps(&touching));
    // One pixel further and they no longer meet
    let apart = Enemy { x: 541, y: 500 };
    assert!(!p.overlaps(&apart));
}

#[test]
fn player_overlap_requires_both_axes() {
    let p = Player::new();
    // Horizontal overlap but vertically far away
    let above = Enemy { x: 500, y: 100 };
    assert!(!p.overlaps(&above));
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_spawn_within_region() {
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let e = Enemy::spawn(&mut rng);
        assert!((0..500).contains(&e.x));
        assert!((0..300).contains(&e.y));
    }
}

#[test]
fn enemy_descends_two_per_tick() {
    let mut rng = seeded_rng();
    let mut e = Enemy { x: 100, y: 100 };
    e.advance(&mut rng);
    assert_eq!(e.y, 102);
    assert_eq!(e.x, 100); // no wrap, no drift
}

#[test]
fn enemy_wraps_past_bottom() {
    let mut rng = seeded_rng();
    let mut e = Enemy { x: 100, y: 599 };
    e.advance(&mut rng); // 601 > 600 → wrap
    assert_eq!(e.y, 0);
    assert!((0..500).contains(&e.x));
}

#[test]
fn enemy_does_not_wrap_at_exact_bottom() {
    let mut rng = seeded_rng();
    let mut e = Enemy { x: 100, y: 598 };
    e.advance(&mut rng); // exactly 600 — still on the field
    assert_eq!(e.y, 600);
    assert_eq!(e.x, 100);
}

#[test]
fn enemy_contains_inclusive_bounds() {
    let e = Enemy { x: 100, y: 200 };
    assert!(e.contains(100.0, 200.0));
    assert!(e.contains(150.0, 250.0));
    assert!(!e.contains(151.0, 250.0));
    assert!(!e.contains(99.0, 200.0));
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_fired_from_ship_centre() {
    let p = Player { x: 300, y: 500, hit_cooldown: 0 };
    let b = Bullet::fired_from(&p);
    assert_eq!(b.x, 320.0); // x + width/2
    assert_eq!(b.y, 500.0);
    assert!(b.active);
}

#[test]
fn bullet_climbs_ten_per_tick() {
    let mut b = Bullet { x: 100.0, y: 300.0, active: true };
    b.advance();
    assert_eq!(b.y, 290.0);
    assert!(b.active);
}

#[test]
fn bullet_deactivates_crossing_top() {
    let mut b = Bullet { x: 100.0, y: 10.0, active: true };
    b.advance(); // y = 0 — still on the field
    assert!(b.active);
    b.advance(); // y = -10 — gone
    assert!(!b.active);
    // Deactivation happens exactly once; further advances change nothing
    b.advance();
    assert!(!b.active);
}

// ── EnemyBullet ───────────────────────────────────────────────────────────────

#[test]
fn enemy_bullet_fired_from_enemy_bottom_centre() {
    let e = Enemy { x: 100, y: 200 };
    let b = EnemyBullet::fired_from(&e);
    assert_eq!(b.x, 125.0); // x + width/2
    assert_eq!(b.y, 250.0); // y + height
    assert!(b.active);
}

#[test]
fn enemy_bullet_falls_ten_per_tick() {
    let mut b = EnemyBullet { x: 100.0, y: 300.0, active: true };
    b.advance();
    assert_eq!(b.y, 310.0);
    assert!(b.active);
}

#[test]
fn enemy_bullet_deactivates_crossing_bottom() {
    let mut b = EnemyBullet { x: 100.0, y: 590.0, active: true };
    b.advance(); // y = 600 — still on the field
    assert!(b.active);
    b.advance(); // y = 610 — gone
    assert!(!b.active);
}

// ── Sprite tags ───────────────────────────────────────────────────────────────

#[test]
fn entities_carry_their_sprite_tags() {
    let mut rng = seeded_rng();
    assert_eq!(Player::new().sprite(), Sprite::Ship);
    assert_eq!(Enemy::spawn(&mut rng).sprite(), Sprite::Invader);
    assert_eq!(
        Bullet::fired_from(&Player::new()).sprite(),
        Sprite::Shot
    );
    assert_eq!(
        EnemyBullet::fired_from(&Enemy { x: 0, y: 0 }).sprite(),
        Sprite::EnemyShot
    );
}

#[test]
fn entity_clone_is_independent() {
    let e = Enemy { x: 10, y: 20 };
    let mut c = e.clone();
    c.x = 99;
    assert_eq!(e.x, 10);

    let b = Bullet { x: 1.0, y: 2.0, active: true };
    let mut c = b.clone();
    c.active = false;
    assert!(b.active);
}
