//! Note number to oscillator half-period lookup.
//!
//! The table holds the period of every note in microseconds for the four
//! octaves the buzzers can play (C1 to B4). Everything outside that range is
//! zero, which on the wire is the same as "silence".

use crate::error::{ConvertError, ConvertResult};

/// Microseconds per tick of the device timer.
pub const TIMER_RESOLUTION: u16 = 40;

pub const NUM_NOTES: usize = 128;

#[rustfmt::skip]
const MICRO_PERIODS: [u16; NUM_NOTES] = [
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  30578, 28861, 27242, 25713, 24270, 22909, 21622, 20409, 19263, 18182, 17161, 16198, // C1
  15289, 14436, 13621, 12856, 12135, 11454, 10811, 10205, 9632, 9091, 8581, 8099,     // C2
  7645, 7218, 6811, 6428, 6068, 5727, 5406, 5103, 4816, 4546, 4291, 4050,             // C3
  3823, 3609, 3406, 3214, 3034, 2864, 2703, 2552, 2408, 2273, 2146, 2025,             // C4
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
  0, 0, 0, 0, 0, 0, 0, 0,
];

#[derive(Debug, Clone, Copy)]
pub struct FrequencyTable {
  resolution: u16,
}

impl FrequencyTable {
  pub fn new(resolution: u16) -> ConvertResult<FrequencyTable> {
    if resolution == 0 {
      Err(ConvertError::InvalidResolution { resolution })
    } else {
      Ok(FrequencyTable { resolution })
    }
  }

  pub fn resolution(&self) -> u16 {
    self.resolution
  }

  /// Half-period of `note` in timer ticks, or zero when the note can not be played.
  pub fn period_for(&self, note: u8) -> u16 {
    MICRO_PERIODS
      .get(usize::from(note))
      .map(|period| (u32::from(*period) / (2 * u32::from(self.resolution))) as u16)
      .unwrap_or(0)
  }
}

impl Default for FrequencyTable {
  fn default() -> FrequencyTable {
    FrequencyTable {
      resolution: TIMER_RESOLUTION,
    }
  }
}
