//! Parsed MIDI timeline, as handed over by the file parser.

use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use super::types::{U4, U7};
use crate::time::TicksTime;

/// `channel` is expected in 0 to 15. Larger values keep only their low 4 bits
/// when encoded.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceEvent {
  NoteOn {
    delta_ticks: u64,
    channel: U4,
    note: U7,
  },

  NoteOff {
    delta_ticks: u64,
    channel: U4,
    note: U7,
  },

  TempoChange {
    delta_ticks: u64,
    bpm: i32,
  },

  /// Any event the converter does not act on. It still moves the track position.
  Other {
    #[serde(default)]
    delta_ticks: u64,
  },
}

impl SourceEvent {
  pub fn delta_ticks(&self) -> TicksTime {
    match self {
      SourceEvent::NoteOn { delta_ticks, .. }
      | SourceEvent::NoteOff { delta_ticks, .. }
      | SourceEvent::TempoChange { delta_ticks, .. }
      | SourceEvent::Other { delta_ticks } => TicksTime::new(*delta_ticks),
    }
  }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Track {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub events: Vec<SourceEvent>,
}

impl Track {
  pub fn new(events: Vec<SourceEvent>) -> Track {
    Track { name: None, events }
  }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
  pub ticks_per_quarter_note: u16,
  pub initial_bpm: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MidiFile {
  pub header: FileHeader,
  #[serde(default)]
  pub tracks: Vec<Track>,
}

impl MidiFile {
  pub fn new(header: FileHeader, tracks: Vec<Track>) -> MidiFile {
    MidiFile { header, tracks }
  }

  pub fn from_file<'a, T>(path: T) -> Result<MidiFile, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let midi_file: MidiFile = toml::from_str(&content)?;
    Ok(midi_file)
  }

  pub fn from_str<'a, T>(content: T) -> Result<MidiFile, Error>
  where
    T: Into<&'a str>,
  {
    let midi_file: MidiFile = toml::from_str(content.into())?;
    Ok(midi_file)
  }
}

#[cfg(test)]
mod test {

  use super::*;

  #[test]
  pub fn delta_ticks() {
    let events = vec![
      SourceEvent::NoteOn {
        delta_ticks: 1,
        channel: 0,
        note: 60,
      },
      SourceEvent::NoteOff {
        delta_ticks: 2,
        channel: 0,
        note: 60,
      },
      SourceEvent::TempoChange {
        delta_ticks: 3,
        bpm: 90,
      },
      SourceEvent::Other { delta_ticks: 4 },
    ];
    let deltas: Vec<u64> = events.iter().map(|e| e.delta_ticks().ticks()).collect();
    assert_eq!(deltas, vec![1, 2, 3, 4]);
  }

  #[test]
  pub fn from_str() {
    let midi_file = MidiFile::from_str(
      r#"
[header]
ticks_per_quarter_note = 480
initial_bpm = 120

[[tracks]]
name = "lead"

[[tracks.events]]
kind = "tempo_change"
delta_ticks = 0
bpm = 100

[[tracks.events]]
kind = "note_on"
delta_ticks = 0
channel = 2
note = 60

[[tracks.events]]
kind = "other"
delta_ticks = 10

[[tracks.events]]
kind = "note_off"
delta_ticks = 470
channel = 2
note = 60

[[tracks]]
"#,
    )
    .unwrap();

    assert_eq!(
      midi_file.header,
      FileHeader {
        ticks_per_quarter_note: 480,
        initial_bpm: 120,
      }
    );
    assert_eq!(midi_file.tracks.len(), 2);
    assert_eq!(midi_file.tracks[0].name.as_ref().map(String::as_str), Some("lead"));
    assert_eq!(
      midi_file.tracks[0].events,
      vec![
        SourceEvent::TempoChange {
          delta_ticks: 0,
          bpm: 100,
        },
        SourceEvent::NoteOn {
          delta_ticks: 0,
          channel: 2,
          note: 60,
        },
        SourceEvent::Other { delta_ticks: 10 },
        SourceEvent::NoteOff {
          delta_ticks: 470,
          channel: 2,
          note: 60,
        },
      ]
    );
    assert!(midi_file.tracks[1].events.is_empty());
  }

  #[test]
  pub fn from_str_rejects_missing_header() {
    assert!(MidiFile::from_str("[[tracks]]\n").is_err());
  }
}
