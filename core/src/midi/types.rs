pub type U4 = u8;
pub type U7 = u8;

/// Half-period in device timer ticks, zero meaning silence
pub type Period = u16;
