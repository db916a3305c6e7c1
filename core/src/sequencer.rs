use log::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::message::ControlMessage;

pub struct Sequencer;

impl Sequencer {
  /// Puts all the messages in chronological order.
  ///
  /// The sort is stable. Two messages at the same tick mean the timeline
  /// was not merged properly, and the whole conversion fails.
  pub fn sequence<I>(messages: I) -> ConvertResult<Vec<ControlMessage>>
  where
    I: IntoIterator<Item = ControlMessage>,
  {
    let mut messages: Vec<ControlMessage> = messages.into_iter().collect();
    messages.sort_by_key(|message| message.position());

    if let Some(pair) = messages
      .windows(2)
      .find(|pair| pair[0].position() == pair[1].position())
    {
      return Err(ConvertError::MergeInvariantViolation {
        tick: pair[0].position(),
      });
    }

    debug!("Sequenced {} messages", messages.len());
    Ok(messages)
  }
}
