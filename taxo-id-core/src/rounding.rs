//! Power-of-ten boundary rounding.
//!
//! Every range boundary the engine lays down is rounded up to a decimal
//! boundary so that published ranges survive small taxonomy growth without
//! shifting their neighbours.

/// Round `value` up to the nearest integer ending in at least `zeros`
/// trailing decimal zeros.
///
/// `zeros = 0` is the identity.
///
/// ```
/// use taxo_id_core::rounding::round_up_to_nearest;
///
/// assert_eq!(round_up_to_nearest(123, 1), 130);
/// assert_eq!(round_up_to_nearest(123, 2), 200);
/// assert_eq!(round_up_to_nearest(100, 2), 100);
/// ```
pub fn round_up_to_nearest(value: u64, zeros: u32) -> u64 {
    let factor = 10u64.pow(zeros);
    ((value + factor - 1) / factor) * factor
}
