use std::{
  cmp::{min, Ordering},
  fmt,
  ops::Sub,
};

/// Position or distance on a track timeline, in the file's ticks.
///
/// The resolution of a tick is given by the file's time division
/// (ticks per quarter note), so a `TicksTime` only becomes wall-clock time
/// through a [`TempoState`](crate::time::TempoState).
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct TicksTime(u64);

impl TicksTime {
  pub fn new(ticks: u64) -> TicksTime {
    TicksTime(ticks)
  }

  pub fn zero() -> TicksTime {
    TicksTime(0)
  }

  pub fn ticks(&self) -> u64 {
    self.0
  }

  pub fn checked_add(self, rhs: TicksTime) -> Option<TicksTime> {
    self.0.checked_add(rhs.0).map(TicksTime)
  }
}

impl Ord for TicksTime {
  fn cmp(&self, other: &TicksTime) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl PartialOrd for TicksTime {
  fn partial_cmp(&self, other: &TicksTime) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Sub for TicksTime {
  type Output = TicksTime;
  fn sub(self, rhs: TicksTime) -> Self {
    TicksTime::new(self.0 - min(self.0, rhs.0))
  }
}

impl From<u64> for TicksTime {
  fn from(item: u64) -> Self {
    TicksTime(item)
  }
}

impl From<TicksTime> for f64 {
  fn from(item: TicksTime) -> Self {
    item.0 as f64
  }
}

impl From<TicksTime> for u64 {
  fn from(item: TicksTime) -> Self {
    item.0
  }
}

impl fmt::Display for TicksTime {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod test {

  use super::TicksTime;
  use std::cmp::Ordering;

  #[test]
  pub fn new() {
    let ticks_time = TicksTime::new(1234);
    assert_eq!(ticks_time.0, 1234);
  }

  #[test]
  pub fn zero() {
    let ticks_time = TicksTime::zero();
    assert_eq!(ticks_time.0, 0);
    assert_eq!(ticks_time, TicksTime::default());
  }

  #[test]
  pub fn ord_cmp() {
    let time1 = TicksTime::new(1234);
    let time2 = TicksTime::new(1235);
    assert_eq!(time1.cmp(&time2), Ordering::Less);
    assert_eq!(time2.cmp(&time1), Ordering::Greater);
    assert_eq!(time1.cmp(&time1), Ordering::Equal);
  }

  #[test]
  pub fn checked_add() {
    let position = TicksTime::new(u64::MAX - 1);
    assert_eq!(position.checked_add(TicksTime::new(1)), Some(TicksTime::new(u64::MAX)));
    assert_eq!(position.checked_add(TicksTime::new(2)), None);
  }

  #[test]
  pub fn sub() {
    let time1 = TicksTime::new(100);
    let time2 = TicksTime::new(30);
    assert_eq!(time1 - time2, TicksTime(70));
  }

  #[test]
  pub fn sub_saturates_at_zero() {
    let time1 = TicksTime::new(30);
    let time2 = TicksTime::new(100);
    assert_eq!(time1 - time2, TicksTime::zero());
  }

  #[test]
  pub fn u64_from() {
    let time1 = TicksTime::from(1234u64);
    assert_eq!(u64::from(time1), 1234);
    assert_eq!(f64::from(time1), 1234.0);
  }

  #[test]
  pub fn display() {
    assert_eq!(TicksTime::new(480).to_string(), "480");
  }
}
