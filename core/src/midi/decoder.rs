use super::encoder::{Encoder, Frame};

/// Iterates the frames of an encoded payload.
pub struct Decoder<'a> {
  pos: usize,
  data: &'a [u8],
}

impl<'a> Decoder<'a> {
  pub fn new(data: &'a [u8]) -> Decoder<'a> {
    Decoder { pos: 0, data }
  }

  pub fn frames(data: &'a [u8]) -> Vec<Frame> {
    Decoder::new(data).collect()
  }

  /// Trailing bytes that do not make up a whole frame.
  pub fn remainder(&self) -> &'a [u8] {
    let whole = self.data.len() - self.data.len() % Encoder::FRAME_SIZE;
    &self.data[whole.max(self.pos)..]
  }
}

impl<'a> Iterator for Decoder<'a> {
  type Item = Frame;

  fn next(&mut self) -> Option<Frame> {
    let end = self.pos + Encoder::FRAME_SIZE;
    if end <= self.data.len() {
      let bytes = &self.data[self.pos..end];
      self.pos = end;
      Some(Frame {
        channel: bytes[0],
        period: (u16::from(bytes[1]) << 8) | u16::from(bytes[2]),
      })
    } else {
      None
    }
  }
}
