use log::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::message::ControlMessage;
use crate::time::{ClockTime, TempoState};

/// Turns the tick gaps of a sequenced track into wait times.
pub struct TimingResolver {
  tempo: TempoState,
}

impl TimingResolver {
  pub fn new(tempo: TempoState) -> TimingResolver {
    TimingResolver { tempo }
  }

  pub fn tempo(&self) -> &TempoState {
    &self.tempo
  }

  /// Sets the wait time of every message to the interval until the next one,
  /// and returns the sum of all the waits.
  ///
  /// A tempo message only affects the intervals after it. The last message
  /// keeps a zero wait.
  pub fn resolve(&mut self, messages: &mut [ControlMessage]) -> ConvertResult<ClockTime> {
    let mut elapsed = ClockTime::zero();

    for index in 0..messages.len() {
      let (head, tail) = messages.split_at_mut(index);
      let current = &mut tail[0];

      match head.last_mut() {
        Some(previous) => {
          let tick = current.position();
          let overflow = || ConvertError::TimeOverflow { tick };

          let relative = tick - previous.position();
          let wait = self.tempo.interval(relative).ok_or_else(overflow)?;
          let timestamp = previous
            .timestamp()
            .checked_add(ClockTime::from_millis(wait.to_millis()))
            .ok_or_else(overflow)?;
          elapsed = elapsed.checked_add(wait).ok_or_else(overflow)?;

          previous.set_wait(wait);
          current.set_relative_ticks(relative);
          current.set_timestamp(timestamp);
        }
        None => current.set_timestamp(ClockTime::zero()),
      }
      current.set_wait(ClockTime::zero());

      if let Some(bpm) = current.tempo() {
        debug!("Tempo change to {} bpm at tick {}", bpm, current.position());
        self.tempo.set_tempo(bpm)?;
      }
    }
    Ok(elapsed)
  }
}
