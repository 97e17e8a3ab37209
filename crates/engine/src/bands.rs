//! Threshold ladders shared by the describers.
//!
//! A ladder is an ordered list of rungs checked top-down; the first rung whose
//! threshold the value strictly exceeds wins, otherwise the floor applies.

/// One step of a ladder.
#[derive(Debug, Clone, Copy)]
pub struct Rung<T> {
    /// Value must be strictly greater than this
    pub above: f64,
    pub value: T,
}

/// Evaluate a ladder, first match wins.
pub fn climb<T: Copy>(value: f64, rungs: &[Rung<T>], floor: T) -> T {
    rungs
        .iter()
        .find(|rung| value > rung.above)
        .map_or(floor, |rung| rung.value)
}

/// Round to whole degrees with halves going toward positive infinity.
///
/// Negative zero comes out as `0`.
pub fn round_degrees(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
