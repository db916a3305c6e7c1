use log::trace;

use crate::error::{ConvertError, ConvertResult};
use crate::time::{clock, ClockTime, TicksTime};

const SECONDS_PER_MINUTE: f64 = 60.0;

// 2^64, the first value that does not fit
const MAX_MICROS: f64 = 18_446_744_073_709_551_616.0;

/// Tempo in beats (quarter notes) per minute. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo(u32);

impl Tempo {
  pub fn new(bpm: i32) -> ConvertResult<Tempo> {
    if bpm > 0 {
      Ok(Tempo(bpm as u32))
    } else {
      Err(ConvertError::InvalidTempo { bpm })
    }
  }

  pub fn get_value(&self) -> u32 {
    self.0
  }
}

impl From<Tempo> for f64 {
  fn from(item: Tempo) -> Self {
    f64::from(item.0)
  }
}

impl From<Tempo> for u32 {
  fn from(item: Tempo) -> Self {
    item.0
  }
}

/// Live tick to wall-clock scaling for one conversion.
///
/// The time division is fixed for the whole file, the tempo changes every
/// time a tempo message is visited.
#[derive(Debug, Clone)]
pub struct TempoState {
  ticks_per_quarter_note: u16,
  tempo: Tempo,
  seconds_per_tick: f64,
}

impl TempoState {
  pub fn new(ticks_per_quarter_note: u16, bpm: i32) -> ConvertResult<TempoState> {
    if ticks_per_quarter_note == 0 {
      return Err(ConvertError::InvalidTimeDivision {
        ticks: ticks_per_quarter_note,
      });
    }

    let tempo = Tempo::new(bpm)?;
    Ok(TempoState {
      ticks_per_quarter_note,
      tempo,
      seconds_per_tick: Self::seconds_per_tick_for(tempo, ticks_per_quarter_note),
    })
  }

  pub fn set_tempo(&mut self, bpm: i32) -> ConvertResult<()> {
    self.tempo = Tempo::new(bpm)?;
    self.seconds_per_tick = Self::seconds_per_tick_for(self.tempo, self.ticks_per_quarter_note);
    trace!(
      "Tempo set to {} bpm ({} s/tick)",
      bpm,
      self.seconds_per_tick
    );
    Ok(())
  }

  pub fn get_tempo(&self) -> Tempo {
    self.tempo
  }

  pub fn seconds_per_tick(&self) -> f64 {
    self.seconds_per_tick
  }

  /// Wall-clock length of `relative` ticks at the current tempo, truncated to whole microseconds.
  ///
  /// `None` when the interval does not fit in a `ClockTime`.
  pub fn interval(&self, relative: TicksTime) -> Option<ClockTime> {
    let micros = f64::from(relative) * self.seconds_per_tick * clock::MICROS_PER_SECOND as f64;
    if micros.is_finite() && micros < MAX_MICROS {
      Some(ClockTime::new(micros as u64))
    } else {
      None
    }
  }

  fn seconds_per_tick_for(tempo: Tempo, ticks_per_quarter_note: u16) -> f64 {
    let seconds_per_beat = SECONDS_PER_MINUTE / f64::from(tempo);
    seconds_per_beat / f64::from(ticks_per_quarter_note)
  }
}
