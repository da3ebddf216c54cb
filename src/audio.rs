//! Sound-cue boundary.
//!
//! The game core only ever talks to the `Audio` trait; concrete sinks
//! live behind it, so a muted or unavailable audio path degrades to
//! silence without touching gameplay.

use std::io::Write;

/// Fire-and-forget sound cues.  Implementations must not block and must
/// swallow their own failures.
pub trait Audio {
    /// The ship fired a shot.
    fn play_shot(&self);
    /// An enemy was destroyed.
    fn play_explosion(&self);
}

/// Silent sink: the degraded path when audio is muted or unavailable.
pub struct NullAudio;

impl Audio for NullAudio {
    fn play_shot(&self) {}

    fn play_explosion(&self) {}
}

/// Terminal-bell sink.  BEL is the one sound a bare terminal can make;
/// write errors are dropped.
pub struct Beeper;

impl Beeper {
    fn bell(&self) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

impl Audio for Beeper {
    fn play_shot(&self) {
        self.bell();
    }

    fn play_explosion(&self) {
        self.bell();
    }
}
