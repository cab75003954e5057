/// Scalar curves mapping a progress value into an output range.
pub mod curve;
/// Easing functions.
pub mod ease;
