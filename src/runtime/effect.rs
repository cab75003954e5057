use crate::foundation::core::{Tick, Viewport};
use crate::foundation::error::KonaResult;
use crate::render::surface::Surface;
use crate::runtime::event::{EventKind, InputEvent};
use crate::runtime::host::{FrameRequest, Host, ListenerId};

/// Tolerance when comparing elapsed time against a frame interval.
const INTERVAL_EPSILON_SECS: f64 = 1e-9;

/// One decorative animation with its own state, update rule and paint step.
///
/// Implementations never touch the host directly; [`EffectLoop`] owns scheduling and
/// listener bookkeeping so update/draw can be driven by any frame primitive.
pub trait Effect {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Event categories the effect needs delivered.
    fn listens(&self) -> &'static [EventKind];

    /// Build per-mount state. An error disables the effect.
    fn mount(&mut self, viewport: Viewport) -> KonaResult<()>;

    /// Discard per-mount state.
    fn unmount(&mut self);

    /// React to input. Runs to completion before the next tick.
    fn handle_event(&mut self, event: &InputEvent);

    /// Advance state by one tick.
    fn update(&mut self, tick: &Tick);

    /// Paint current state.
    fn draw(&self, surface: &mut dyn Surface);

    /// Minimum seconds between updates, for effects that run below the host frame rate.
    fn frame_interval(&self) -> Option<f64> {
        None
    }
}

/// Lifecycle state of an [`EffectLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Not started, or stopped.
    Idle,
    /// Listening and ticking.
    Running,
    /// A required capability was missing; the effect is a no-op until stopped.
    Disabled,
}

/// Drives one [`Effect`] from host frame callbacks.
///
/// `start` acquires listeners and one frame callback, `stop` releases all of them. Stale
/// callbacks and events arriving after `stop` are ignored, so nothing mutates the effect
/// after teardown.
#[derive(Debug)]
pub struct EffectLoop<E> {
    effect: E,
    state: LoopState,
    listeners: Vec<(EventKind, ListenerId)>,
    outstanding: Option<FrameRequest>,
    ticks: u64,
    last_update_secs: Option<f64>,
}

impl<E: Effect> EffectLoop<E> {
    /// Wrap an effect; nothing is acquired until [`EffectLoop::start`].
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            state: LoopState::Idle,
            listeners: Vec::new(),
            outstanding: None,
            ticks: 0,
            last_update_secs: None,
        }
    }

    /// The wrapped effect.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Ticks run since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Outstanding frame callback, if any.
    pub fn outstanding(&self) -> Option<FrameRequest> {
        self.outstanding
    }

    /// Listener registered for `kind`, if running.
    pub fn listener_for(&self, kind: EventKind) -> Option<ListenerId> {
        self.listeners
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, id)| *id)
    }

    /// Probe capabilities, mount, register listeners and request the first frame.
    ///
    /// Missing surface or a failed mount leaves the loop [`LoopState::Disabled`] with nothing
    /// acquired. Calling `start` on a running or disabled loop does nothing.
    #[tracing::instrument(skip_all, fields(effect = self.effect.name()))]
    pub fn start<H: Host>(&mut self, host: &mut H) -> LoopState {
        if self.state != LoopState::Idle {
            return self.state;
        }
        let name = self.effect.name();

        if host.surface().is_none() {
            tracing::debug!(effect = name, "no drawing surface; effect disabled");
            self.state = LoopState::Disabled;
            return self.state;
        }

        let viewport = host.viewport();
        if let Err(err) = self.effect.mount(viewport) {
            tracing::debug!(effect = name, %err, "mount failed; effect disabled");
            self.effect.unmount();
            self.state = LoopState::Disabled;
            return self.state;
        }

        for &kind in self.effect.listens() {
            let id = host.add_listener(kind);
            self.listeners.push((kind, id));
        }
        self.outstanding = Some(host.request_frame());
        self.ticks = 0;
        self.last_update_secs = None;
        self.state = LoopState::Running;
        tracing::debug!(
            effect = name,
            listeners = self.listeners.len(),
            width = viewport.width,
            height = viewport.height,
            "effect started"
        );
        self.state
    }

    /// Release listeners and the outstanding frame, then discard effect state. Idempotent.
    pub fn stop<H: Host>(&mut self, host: &mut H) {
        for (_, id) in self.listeners.drain(..) {
            host.remove_listener(id);
        }
        if let Some(request) = self.outstanding.take() {
            host.cancel_frame(request);
        }
        if self.state == LoopState::Running {
            self.effect.unmount();
            tracing::debug!(effect = self.effect.name(), ticks = self.ticks, "effect stopped");
        }
        self.state = LoopState::Idle;
    }

    /// Frame callback. Returns `true` when a tick ran.
    ///
    /// Only the outstanding request is honored. Exactly one new request is made afterwards,
    /// even when the frame was skipped for being under the effect's frame interval.
    pub fn on_frame<H: Host>(
        &mut self,
        host: &mut H,
        request: FrameRequest,
        now_secs: f64,
    ) -> bool {
        if self.state != LoopState::Running || self.outstanding != Some(request) {
            return false;
        }
        self.outstanding = None;

        let due = match (self.effect.frame_interval(), self.last_update_secs) {
            (Some(interval), Some(last)) => now_secs - last + INTERVAL_EPSILON_SECS >= interval,
            _ => true,
        };

        if due {
            let tick = Tick {
                frame: self.ticks,
                now_secs,
                dt_secs: self
                    .last_update_secs
                    .map_or(0.0, |last| (now_secs - last).max(0.0)),
            };
            self.effect.update(&tick);
            self.ticks += 1;
            self.last_update_secs = Some(now_secs);

            let drawn = match host.surface() {
                Some(surface) => {
                    self.effect.draw(&mut *surface);
                    if let Err(err) = surface.present() {
                        tracing::warn!(effect = self.effect.name(), %err, "present failed");
                    }
                    true
                }
                None => false,
            };
            if !drawn {
                tracing::debug!(effect = self.effect.name(), "surface lost; effect disabled");
                self.stop(host);
                self.state = LoopState::Disabled;
                return false;
            }
        }

        self.outstanding = Some(host.request_frame());
        due
    }

    /// Forward an event while running. Returns `true` when delivered.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        if self.state != LoopState::Running || self.listener_for(event.kind()).is_none() {
            return false;
        }
        self.effect.handle_event(event);
        true
    }
}

impl<E> Drop for EffectLoop<E> {
    fn drop(&mut self) {
        if self.state == LoopState::Running {
            tracing::warn!(
                listeners = self.listeners.len(),
                "effect loop dropped while running; host handles were not released"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/effect.rs"]
mod tests;
