//! MIDI timeline to device messages.

use log::{debug, info};

use crate::error::ConvertResult;
use crate::frequency::FrequencyTable;
use crate::message::ControlMessage;
use crate::midi::MidiFile;
use crate::resolver::TimingResolver;
use crate::sequencer::Sequencer;
use crate::time::{ClockTime, TempoState};
use crate::timeline::Timeline;

/// The converted messages of a whole file, ready to be streamed.
#[derive(Debug, Clone)]
pub struct ConvertedTrack<'a> {
  initial_bpm: i32,
  messages: Vec<ControlMessage>,
  duration: ClockTime,
  source: &'a MidiFile,
}

impl<'a> ConvertedTrack<'a> {
  pub fn initial_bpm(&self) -> i32 {
    self.initial_bpm
  }

  pub fn messages(&self) -> &[ControlMessage] {
    &self.messages
  }

  pub fn source(&self) -> &'a MidiFile {
    self.source
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }

  /// Sum of all the waits, that is the time from the first to the last message.
  pub fn total_duration(&self) -> ClockTime {
    self.duration
  }

  pub fn payload_bytes(&self) -> usize {
    self.messages.iter().map(|message| message.payload().len()).sum()
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
  table: FrequencyTable,
}

impl Converter {
  pub fn new(table: FrequencyTable) -> Converter {
    Converter { table }
  }

  pub fn with_resolution(resolution: u16) -> ConvertResult<Converter> {
    FrequencyTable::new(resolution).map(Converter::new)
  }

  pub fn convert<'a>(&self, midi_file: &'a MidiFile) -> ConvertResult<ConvertedTrack<'a>> {
    let header = midi_file.header;
    let tempo = TempoState::new(header.ticks_per_quarter_note, header.initial_bpm)?;

    info!(
      "Converting {} tracks ({} ticks per quarter note, {} bpm) ...",
      midi_file.tracks.len(),
      header.ticks_per_quarter_note,
      header.initial_bpm
    );

    let mut timeline = Timeline::new(self.table);
    timeline.add_tracks(midi_file.tracks.iter())?;
    debug!("Timeline built with {} messages", timeline.len());

    let mut messages = Sequencer::sequence(timeline.into_messages())?;

    let duration = TimingResolver::new(tempo).resolve(&mut messages)?;

    Ok(ConvertedTrack {
      initial_bpm: header.initial_bpm,
      messages,
      duration,
      source: midi_file,
    })
  }
}
