//! Core of a terminal Space Invaders clone: entities, world state, the
//! per-frame update/collision engine, and the sound-cue boundary.  All
//! terminal I/O lives in the binary.

pub mod audio;
pub mod compute;
pub mod entities;
pub mod world;
