//! ADA display-unit to lovelace conversion.

/// Indivisible base units per display unit (1 ADA = 1,000,000 lovelace).
pub const LOVELACE_PER_ADA: u64 = 1_000_000;

/// Convert an ADA amount to lovelace, truncating toward zero.
///
/// Truncation, never rounding up: floating-point drift in the display amount
/// must not cause the transaction to spend more than the user typed.
/// Negative and NaN inputs convert to zero.
pub fn ada_to_lovelace(ada: f64) -> u64 {
    (ada * LOVELACE_PER_ADA as f64).floor() as u64
}
