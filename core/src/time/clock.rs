use std::fmt;

pub const MICROS_PER_MILLI: u64 = 1_000;
pub const MICROS_PER_SECOND: u64 = 1_000_000;

pub type UnitType = u64;
pub const UNITS_PER_SECOND: UnitType = MICROS_PER_SECOND as UnitType;
pub const UNITS_PER_MILLI: UnitType = MICROS_PER_MILLI as UnitType;

///! Wall-clock time with microsecond resolution
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Default)]
pub struct ClockTime(UnitType);

impl ClockTime {
  pub fn zero() -> ClockTime {
    ClockTime(0)
  }

  pub fn new(units: UnitType) -> ClockTime {
    ClockTime(units)
  }

  pub fn from_millis(millis: u64) -> ClockTime {
    ClockTime(millis * UNITS_PER_MILLI)
  }

  pub fn checked_add(self, rhs: ClockTime) -> Option<ClockTime> {
    self.0.checked_add(rhs.0).map(ClockTime)
  }

  pub fn units(&self) -> UnitType {
    self.0
  }

  pub fn to_micros(&self) -> u64 {
    self.0
  }

  /// Whole milliseconds, truncated.
  pub fn to_millis(&self) -> u64 {
    self.0 / UNITS_PER_MILLI
  }

  pub fn to_seconds(&self) -> f64 {
    self.0 as f64 / UNITS_PER_SECOND as f64
  }
}

impl fmt::Display for ClockTime {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}us", self.0)
  }
}

#[cfg(test)]
mod test {
  use super::ClockTime;

  #[test]
  pub fn clock_time_new() {
    let time = ClockTime::new(15);
    assert_eq!(time.units(), 15);
    assert_eq!(time.to_micros(), 15);
  }

  #[test]
  pub fn clock_time_zero() {
    let time = ClockTime::zero();
    assert_eq!(time.units(), 0);
  }

  #[test]
  pub fn clock_time_checked_add() {
    let time = ClockTime::new(u64::MAX - 10);
    assert_eq!(time.checked_add(ClockTime::new(10)), Some(ClockTime::new(u64::MAX)));
    assert_eq!(time.checked_add(ClockTime::new(11)), None);
  }

  #[test]
  pub fn clock_time_millis() {
    assert_eq!(ClockTime::from_millis(3).units(), 3_000);
    assert_eq!(ClockTime::new(1_999).to_millis(), 1);
    assert_eq!(ClockTime::new(999).to_millis(), 0);
  }

  #[test]
  pub fn clock_time_display() {
    assert_eq!(ClockTime::new(1500).to_string(), "1500us");
  }
}
