//! Control commands accepted by the [`SimulationController`](super::controller::SimulationController)
//!
//! Input handlers (keyboard, buttons, a headless driver) translate their
//! events into these values instead of touching simulation state directly.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Advance one fixed step unless paused
    Step,
    /// Flip between running and paused
    TogglePause,
    /// Add to the speed multiplier, unbounded
    NudgeSpeed(f64),
    /// Multiply the speed multiplier, clamped to the engine bounds
    ScaleSpeed(f64),
    /// Rebuild the default configuration
    Reset,
}
