//! Render adapter: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; the world's fixed 1000×600
//! coordinate space is projected onto whatever size the terminal
//! happens to be.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use space_invaders::entities::{Sprite, FIELD_HEIGHT, FIELD_WIDTH};
use space_invaders::world::World;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Sprite tag → glyph and colour.  The one place appearance is decided;
/// the entities themselves only carry the tag.
fn skin(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::Ship => ("◢▲◣", Color::White),
        Sprite::Invader => ("«◙»", Color::Green),
        Sprite::Shot => ("║", Color::Yellow),
        Sprite::EnemyShot => ("↓", Color::Red),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World, cols: u16, rows: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;
    draw_hud(out, world, cols)?;

    for enemy in &world.enemies {
        draw_sprite(out, enemy.sprite(), enemy.x as f32, enemy.y as f32, cols, rows)?;
    }
    for bullet in &world.bullets {
        if bullet.active {
            draw_sprite(out, bullet.sprite(), bullet.x, bullet.y, cols, rows)?;
        }
    }
    for bullet in &world.enemy_bullets {
        if bullet.active {
            draw_sprite(out, bullet.sprite(), bullet.x, bullet.y, cols, rows)?;
        }
    }
    draw_sprite(
        out,
        world.player.sprite(),
        world.player.x as f32,
        world.player.y as f32,
        cols,
        rows,
    )?;

    draw_controls_hint(out, rows)?;

    if world.game_over {
        draw_game_over(out, world, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── World → cell projection ───────────────────────────────────────────────────

/// Map world coordinates onto the cell region inside the border
/// (columns 1..cols-1, rows 2..rows-2).
fn project(x: f32, y: f32, cols: u16, rows: u16) -> (u16, u16) {
    let span_x = cols.saturating_sub(3).max(1) as f32;
    let span_y = rows.saturating_sub(5).max(1) as f32;
    let fx = x.clamp(0.0, FIELD_WIDTH as f32) / FIELD_WIDTH as f32;
    let fy = y.clamp(0.0, FIELD_HEIGHT as f32) / FIELD_HEIGHT as f32;
    (1 + (fx * span_x) as u16, 2 + (fy * span_y) as u16)
}

fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: Sprite,
    x: f32,
    y: f32,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (glyph, color) = skin(sprite);
    let (cx, cy) = project(x, y, cols, rows);
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row rows-2 — bottom bar
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World, cols: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", world.score)))?;

    // Level — centre
    let level_str = format!("Level {}", world.level);
    let lx = (cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Lives — right, clamped so the fatal tick never shows a negative
    let hearts: String = "♥".repeat(world.lives_display() as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = cols.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, world: &World, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];
    let score_line = format!("Final Score: {:>6}", world.score);
    let level_line = format!("Reached Level: {:>4}", world.level);
    let hint = "R - Play Again  Q - Quit";

    let cx = cols / 2;
    let total_rows = lines.len() + 3;
    let start_row = (rows / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    out.queue(cursor::MoveTo(
        cx.saturating_sub(score_line.chars().count() as u16 / 2),
        score_row,
    ))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(level_line.chars().count() as u16 / 2),
        score_row + 1,
    ))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(&level_line))?;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        score_row + 2,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
