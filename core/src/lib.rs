pub mod config;
pub mod converter;
pub mod error;
pub mod frequency;
pub mod message;
pub mod midi;
pub mod resolver;
pub mod sequencer;
pub mod time;
pub mod timeline;

pub use crate::converter::{ConvertedTrack, Converter};
pub use crate::error::{ConvertError, ConvertResult};
pub use crate::message::{ControlMessage, MessageKind};
