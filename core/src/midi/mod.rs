pub mod decoder;
pub mod encoder;
pub mod events;
pub mod types;

pub use self::decoder::Decoder;
pub use self::encoder::{Encoder, Frame};
pub use self::events::{FileHeader, MidiFile, SourceEvent, Track};
