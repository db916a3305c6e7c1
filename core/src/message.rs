use crate::midi::{Decoder, Encoder, Frame};
use crate::time::{ClockTime, TicksTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
  Plain,

  /// Changes the tempo for everything that comes after this message
  Tempo { bpm: i32 },
}

/// One unit sent to the device: a payload of frames and the time to wait
/// before the next message.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlMessage {
  position: TicksTime,
  relative_ticks: TicksTime,
  wait: ClockTime,
  timestamp: ClockTime,
  kind: MessageKind,
  payload: Vec<u8>,
}

impl ControlMessage {
  pub fn new(position: TicksTime) -> ControlMessage {
    ControlMessage {
      position,
      relative_ticks: TicksTime::zero(),
      wait: ClockTime::zero(),
      timestamp: ClockTime::zero(),
      kind: MessageKind::Plain,
      payload: Vec::new(),
    }
  }

  pub fn with_frame(position: TicksTime, frame: Frame) -> ControlMessage {
    let mut message = ControlMessage::new(position);
    message.push_frame(frame);
    message
  }

  pub fn with_tempo(position: TicksTime, bpm: i32) -> ControlMessage {
    let mut message = ControlMessage::new(position);
    message.kind = MessageKind::Tempo { bpm };
    message
  }

  pub fn position(&self) -> TicksTime {
    self.position
  }

  /// Ticks since the previous message in the sequence.
  pub fn relative_ticks(&self) -> TicksTime {
    self.relative_ticks
  }

  /// Time to wait before sending the next message. Zero on the last one.
  pub fn wait(&self) -> ClockTime {
    self.wait
  }

  /// Approximate time since the start of the track, in whole milliseconds.
  pub fn timestamp(&self) -> ClockTime {
    self.timestamp
  }

  pub fn kind(&self) -> MessageKind {
    self.kind
  }

  pub fn tempo(&self) -> Option<i32> {
    match self.kind {
      MessageKind::Tempo { bpm } => Some(bpm),
      MessageKind::Plain => None,
    }
  }

  pub fn is_tempo(&self) -> bool {
    self.tempo().is_some()
  }

  pub fn payload(&self) -> &[u8] {
    &self.payload
  }

  pub fn frames(&self) -> Vec<Frame> {
    Decoder::frames(&self.payload)
  }

  pub(crate) fn push_frame(&mut self, frame: Frame) {
    Encoder::append(&frame, &mut self.payload);
  }

  /// Turns this message into a tempo message, or updates its tempo. The payload is untouched.
  pub(crate) fn set_tempo(&mut self, bpm: i32) {
    self.kind = MessageKind::Tempo { bpm };
  }

  pub(crate) fn set_relative_ticks(&mut self, relative_ticks: TicksTime) {
    self.relative_ticks = relative_ticks;
  }

  pub(crate) fn set_wait(&mut self, wait: ClockTime) {
    self.wait = wait;
  }

  pub(crate) fn set_timestamp(&mut self, timestamp: ClockTime) {
    self.timestamp = timestamp;
  }
}
