/// Breakpoint and measurement driven collapse decisions.
pub mod responsive;
