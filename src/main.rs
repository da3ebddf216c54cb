mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::audio::{Audio, Beeper, NullAudio};
use space_invaders::compute::{apply_intent, tick, Intent};
use space_invaders::world::World;

/// One simulation step every 16 ms, the classic ~60 Hz arcade cadence.
const FRAME: Duration = Duration::from_millis(16);

// ── CLI flags ─────────────────────────────────────────────────────────────────

struct CliArgs {
    /// `--mute` / `-m`: run with the silent audio sink.
    mute: bool,
    /// `--seed N`: deterministic RNG seed.
    seed: Option<u64>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut mute = false;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--mute" || args[i] == "-m" {
            mute = true;
            i += 1;
        } else if args[i] == "--seed" && i + 1 < args.len() {
            seed = args[i + 1].parse().ok();
            i += 2;
        } else {
            i += 1;
        }
    }
    CliArgs { mute, seed }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Route any requested logging to a file: stderr is unusable once the
/// alternate screen is up.  Without `RUST_LOG` nothing is initialized.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create("space_invaders.log") {
        Ok(f) => env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(f)))
            .init(),
        Err(err) => {
            env_logger::init();
            log::warn!("could not open log file, logging to stderr: {err}");
        }
    }
}

// ── Input adapter ─────────────────────────────────────────────────────────────

/// Raw key → player intent.  Unrecognized keys map to `None` and are
/// ignored.  Held keys arrive as repeated press events, so the OS
/// key-repeat rate doubles as the movement rate.
fn intent_for(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Char(' ') => Some(Intent::Fire),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the fixed-rate loop: drain queued input once per frame, tick,
/// render, sleep off the remainder.  Returns when the player quits.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    world: &mut World,
    rng: &mut StdRng,
    audio: &dyn Audio,
) -> std::io::Result<()> {
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(());
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') if world.game_over => {
                    log::info!("restart after game over (final score {})", world.score);
                    world.start_game(rng);
                }
                code => {
                    if let Some(intent) = intent_for(code) {
                        apply_intent(world, intent, audio);
                    }
                }
            }
        }

        if world.in_play() {
            tick(world, rng, audio);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, world, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let args = parse_args();
    init_logging();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let audio: Box<dyn Audio> = if args.mute {
        Box::new(NullAudio)
    } else {
        Box::new(Beeper)
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending
    // them through a channel so the game loop never blocks on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut world = World::new();
    world.start_game(&mut rng);
    log::info!("session started (seed: {:?}, mute: {})", args.seed, args.mute);

    let result = run(&mut out, &rx, &mut world, &mut rng, &*audio);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
