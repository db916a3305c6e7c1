//! Walks the tracks and merges everything happening at one tick into one message.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{ConvertError, ConvertResult};
use crate::frequency::FrequencyTable;
use crate::message::ControlMessage;
use crate::midi::{Frame, SourceEvent, Track};
use crate::time::TicksTime;

/// Messages indexed by tick position.
///
/// Positions restart at zero for every track, so events from different tracks
/// that share a tick number end up in the same message even though their
/// tracks may not be aligned in time.
pub struct Timeline {
  table: FrequencyTable,
  messages: Vec<ControlMessage>,
  index: HashMap<TicksTime, usize>,
}

impl Timeline {
  pub fn new(table: FrequencyTable) -> Timeline {
    Timeline {
      table,
      messages: Vec::new(),
      index: HashMap::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }

  pub fn get(&self, position: TicksTime) -> Option<&ControlMessage> {
    self.index.get(&position).map(|&slot| &self.messages[slot])
  }

  pub fn add_tracks<'a, I>(&mut self, tracks: I) -> ConvertResult<&mut Self>
  where
    I: IntoIterator<Item = &'a Track>,
  {
    for track in tracks {
      self.add_track(track)?;
    }
    Ok(self)
  }

  /// Adds the events of one track, starting at tick zero.
  pub fn add_track(&mut self, track: &Track) -> ConvertResult<&mut Self> {
    let num_messages = self.messages.len();
    let mut position = TicksTime::zero();

    for event in track.events.iter() {
      position = position
        .checked_add(event.delta_ticks())
        .ok_or(ConvertError::TimeOverflow { tick: position })?;
      self.add_event(position, event);
    }

    debug!(
      "Track {:?}: {} events, {} new messages, ends at tick {}",
      track.name,
      track.events.len(),
      self.messages.len() - num_messages,
      position
    );
    Ok(self)
  }

  fn add_event(&mut self, position: TicksTime, event: &SourceEvent) {
    match *event {
      SourceEvent::NoteOn { channel, note, .. } => {
        let period = self.table.period_for(note);
        self.add_frame(position, Frame::note_on(channel, period));
      }
      SourceEvent::NoteOff { channel, .. } => {
        self.add_frame(position, Frame::note_off(channel));
      }
      SourceEvent::TempoChange { bpm, .. } => {
        self.add_tempo(position, bpm);
      }
      SourceEvent::Other { .. } => {}
    }
  }

  fn add_frame(&mut self, position: TicksTime, frame: Frame) {
    trace!("[{}] {:?}", position, frame);
    match self.index.get(&position).copied() {
      Some(slot) => self.messages[slot].push_frame(frame),
      None => self.insert(ControlMessage::with_frame(position, frame)),
    }
  }

  fn add_tempo(&mut self, position: TicksTime, bpm: i32) {
    trace!("[{}] tempo {} bpm", position, bpm);
    match self.index.get(&position).copied() {
      Some(slot) => self.messages[slot].set_tempo(bpm),
      None => self.insert(ControlMessage::with_tempo(position, bpm)),
    }
  }

  fn insert(&mut self, message: ControlMessage) {
    self.index.insert(message.position(), self.messages.len());
    self.messages.push(message);
  }

  /// Messages in creation order.
  pub fn into_messages(self) -> Vec<ControlMessage> {
    self.messages
  }
}
