pub mod clock;
pub mod tempo;
pub mod ticks;

pub use self::clock::ClockTime;
pub use self::tempo::{Tempo, TempoState};
pub use self::ticks::TicksTime;
