//! Animation state machines for the hero section
//!
//! Both machines are deterministic and externally clocked: the event loop
//! calls `advance` with the current instant, and each machine processes
//! whatever deadlines have come due. Nothing here spawns threads or tasks;
//! cancellation is clearing a deadline.

pub mod race;
pub mod typewriter;

pub use race::{ProgressRace, RacePhase};
pub use typewriter::Typewriter;
