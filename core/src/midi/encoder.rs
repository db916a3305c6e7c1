use log::trace;

use super::types::{Period, U4};

#[inline]
fn u4(d: &U4) -> u8 {
  d & 0x0f
}

#[inline]
fn period_msb(p: &Period) -> u8 {
  ((p >> 8) & 0xff) as u8
}

#[inline]
fn period_lsb(p: &Period) -> u8 {
  (p & 0xff) as u8
}

/// One channel command on the wire: which buzzer, and the half-period to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
  /// Wire channel, 1 to 16
  pub channel: u8,
  pub period: Period,
}

impl Frame {
  /// Frame for a MIDI channel (0 to 15) playing `period`.
  ///
  /// Only the low 4 bits of `channel` are used, so 16 becomes wire channel 1.
  pub fn note_on(channel: U4, period: Period) -> Frame {
    let masked = u4(&channel);
    if masked != channel {
      trace!("MIDI channel {} out of range, sent as {}", channel, masked + 1);
    }
    Frame {
      channel: masked + 1,
      period,
    }
  }

  /// Frame silencing a MIDI channel (0 to 15).
  pub fn note_off(channel: U4) -> Frame {
    Frame::note_on(channel, 0)
  }

  pub fn is_silence(&self) -> bool {
    self.period == 0
  }
}

pub struct Encoder;

impl Encoder {
  pub const FRAME_SIZE: usize = 3;

  pub fn encode(frame: &Frame, out: &mut [u8]) {
    out[..Self::FRAME_SIZE].copy_from_slice(&[
      frame.channel,
      period_msb(&frame.period),
      period_lsb(&frame.period),
    ])
  }

  /// Appends the encoded frame at the end of `payload`.
  pub fn append(frame: &Frame, payload: &mut Vec<u8>) {
    let start = payload.len();
    payload.resize(start + Self::FRAME_SIZE, 0);
    Self::encode(frame, &mut payload[start..]);
  }
}
