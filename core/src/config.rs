use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::frequency::TIMER_RESOLUTION;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Convert {
  /// Device timer resolution in microseconds
  pub resolution: u16,
}

impl Default for Convert {
  fn default() -> Convert {
    Convert {
      resolution: TIMER_RESOLUTION,
    }
  }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
  #[serde(rename = "text")]
  Text,
  #[serde(rename = "hex")]
  Hex,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Output {
  pub format: OutputFormat,
}

impl Default for Output {
  fn default() -> Output {
    Output {
      format: OutputFormat::Text,
    }
  }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
  pub convert: Convert,
  pub output: Output,
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}
