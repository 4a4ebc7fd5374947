//! Social status roll table

/// Upper bound (inclusive) of every 2d6 bracket below the last
const STATUS_ROLL_BOUNDARIES: [u32; 4] = [2, 4, 9, 11];

/// Lowest status rank a roll can produce
pub const MIN_STATUS: u32 = 2;

/// Highest status rank a roll can produce
pub const MAX_STATUS: u32 = 6;

/// Map a 2d6 roll (2..12) to a Status rank in 2..=6
#[inline]
pub fn status_from_roll(roll: u32) -> u32 {
    MIN_STATUS + STATUS_ROLL_BOUNDARIES.iter().take_while(|&&b| roll > b).count() as u32
}
