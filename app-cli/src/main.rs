use std::io::{self, Write};

use log::{debug, info, warn};

use failure::{Error, Fail};

use mididuino_core::{config::Config, midi::MidiFile, ConvertedTrack, Converter};

mod output;
use crate::output::render;

const MIDIDUINO_CONFIG: &str = "MIDIDUINO_CONFIG";
const DEFAULT_MIDIDUINO_CONFIG: &str = "mididuino.toml";

const MIDIDUINO_LOG_CONFIG: &str = "MIDIDUINO_LOG_CONFIG";
const DEFAULT_MIDIDUINO_LOG_CONFIG: &str = "log4rs.yaml";

#[derive(Debug, Fail)]
enum MainError {
  #[fail(display = "Failed to init logging: {}", cause)]
  LoggingInit { cause: String },

  #[fail(display = "Usage: mididuino <timeline.toml>")]
  MissingInput,
}

fn main() -> Result<(), Error> {
  init_logging()?;

  let config = init_config()?;

  let input_path = std::env::args().nth(1).ok_or(MainError::MissingInput)?;

  info!("Loading timeline from {} ...", input_path);
  let midi_file = MidiFile::from_file(input_path.as_str())?;

  let converter = Converter::with_resolution(config.convert.resolution)?;
  let track = converter.convert(&midi_file)?;
  log_summary(&track);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  render(&track, config.output.format, &mut out)?;
  out.flush()?;

  Ok(())
}

fn init_logging() -> Result<(), Error> {
  let log_config_path = std::env::var(MIDIDUINO_LOG_CONFIG)
    .unwrap_or_else(|_| DEFAULT_MIDIDUINO_LOG_CONFIG.to_string());

  log4rs::init_file(log_config_path.as_str(), Default::default()).map_err(|err| {
    MainError::LoggingInit {
      cause: err.to_string(),
    }
  })?;

  Ok(())
}

fn init_config() -> Result<Config, Error> {
  let config_path =
    std::env::var(MIDIDUINO_CONFIG).unwrap_or_else(|_| DEFAULT_MIDIDUINO_CONFIG.to_string());

  if !std::path::Path::new(&config_path).exists() {
    warn!("Configuration {} not found, using defaults", config_path);
    return Ok(Config::default());
  }

  info!("Loading configuration from {} ...", config_path);
  let config = Config::from_file(config_path.as_str())?;
  debug!("{:#?}", config);

  Ok(config)
}

fn log_summary(track: &ConvertedTrack) {
  info!(
    "Converted {} messages, {} payload bytes, {:.3} seconds",
    track.len(),
    track.payload_bytes(),
    track.total_duration().to_seconds()
  );
}
