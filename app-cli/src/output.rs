use std::io::{self, Write};

use mididuino_core::config::OutputFormat;
use mididuino_core::ConvertedTrack;

pub fn render<W: Write>(track: &ConvertedTrack, format: OutputFormat, out: &mut W) -> io::Result<()> {
  match format {
    OutputFormat::Text => render_text(track, out),
    OutputFormat::Hex => render_hex(track, out),
  }
}

/// One line per message: timestamp, wait, tick, tempo and frames.
fn render_text<W: Write>(track: &ConvertedTrack, out: &mut W) -> io::Result<()> {
  writeln!(out, "# initial tempo {} bpm", track.initial_bpm())?;
  for message in track.messages() {
    write!(
      out,
      "{:>8}ms {:>10}us tick {:>8}",
      message.timestamp().to_millis(),
      message.wait().to_micros(),
      message.position().ticks()
    )?;
    if let Some(bpm) = message.tempo() {
      write!(out, " tempo {}", bpm)?;
    }
    for frame in message.frames() {
      write!(out, " [{}:{}]", frame.channel, frame.period)?;
    }
    writeln!(out)?;
  }
  Ok(())
}

/// One line per message: the payload bytes, then the wait in microseconds.
fn render_hex<W: Write>(track: &ConvertedTrack, out: &mut W) -> io::Result<()> {
  for message in track.messages() {
    for byte in message.payload() {
      write!(out, "{:02x} ", byte)?;
    }
    writeln!(out, "; {}", message.wait().to_micros())?;
  }
  Ok(())
}

#[cfg(test)]
mod test {

  use super::*;
  use mididuino_core::midi::{FileHeader, MidiFile, SourceEvent, Track};
  use mididuino_core::Converter;

  fn midi_file() -> MidiFile {
    MidiFile::new(
      FileHeader {
        ticks_per_quarter_note: 96,
        initial_bpm: 60,
      },
      vec![Track::new(vec![
        SourceEvent::NoteOn {
          delta_ticks: 0,
          channel: 0,
          note: 60,
        },
        SourceEvent::TempoChange {
          delta_ticks: 96,
          bpm: 120,
        },
        SourceEvent::NoteOff {
          delta_ticks: 0,
          channel: 0,
          note: 60,
        },
      ])],
    )
  }

  fn rendered(format: OutputFormat) -> String {
    let file = midi_file();
    let track = Converter::default().convert(&file).unwrap();
    let mut out = Vec::new();
    render(&track, format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  pub fn render_text() {
    let text = rendered(OutputFormat::Text);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "# initial tempo 60 bpm");
    assert_eq!(lines[1], "       0ms    1000000us tick        0 [1:47]");
    assert_eq!(lines[2], "    1000ms          0us tick       96 tempo 120 [1:0]");
  }

  #[test]
  pub fn render_hex() {
    let text = rendered(OutputFormat::Hex);
    assert_eq!(text, "01 00 2f ; 1000000\n01 00 00 ; 0\n");
  }
}
