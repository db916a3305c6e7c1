use failure::Fail;

use crate::time::TicksTime;

#[derive(Debug, Fail, PartialEq)]
pub enum ConvertError {
  #[fail(display = "Invalid tempo: {} bpm", bpm)]
  InvalidTempo { bpm: i32 },

  #[fail(display = "Invalid time division: {} ticks per quarter note", ticks)]
  InvalidTimeDivision { ticks: u16 },

  #[fail(display = "Invalid timer resolution: {}", resolution)]
  InvalidResolution { resolution: u16 },

  #[fail(display = "Time out of range at tick {}", tick)]
  TimeOverflow { tick: TicksTime },

  #[fail(display = "More than one message found at tick {}", tick)]
  MergeInvariantViolation { tick: TicksTime },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
