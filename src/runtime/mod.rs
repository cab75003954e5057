/// Effect trait and the per-instance frame loop.
pub mod effect;
/// Input events delivered by the host.
pub mod event;
/// Host capabilities and an in-memory host.
pub mod host;
