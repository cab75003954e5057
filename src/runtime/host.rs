use std::collections::BTreeMap;

use crate::foundation::core::Viewport;
use crate::render::surface::Surface;
use crate::runtime::effect::{Effect, EffectLoop};
use crate::runtime::event::{EventKind, InputEvent};

/// Handle for one outstanding frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

/// Handle for one registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Capabilities a rendering environment lends to effects.
///
/// A browser host maps these onto `requestAnimationFrame`, `addEventListener` and a canvas
/// context; tests use [`HeadlessHost`].
pub trait Host {
    /// Drawing surface type.
    type Surface: Surface;

    /// Drawing surface, or `None` when the environment cannot provide one.
    fn surface(&mut self) -> Option<&mut Self::Surface>;

    /// Current viewport.
    fn viewport(&self) -> Viewport;

    /// Schedule one frame callback.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a scheduled callback; unknown handles are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Register interest in an event category.
    fn add_listener(&mut self, kind: EventKind) -> ListenerId;

    /// Deregister a listener; unknown handles are ignored.
    fn remove_listener(&mut self, id: ListenerId);
}

/// In-memory [`Host`] driven manually, one frame at a time.
#[derive(Debug)]
pub struct HeadlessHost<S> {
    surface: Option<S>,
    viewport: Viewport,
    clock_secs: f64,
    next_handle: u64,
    pending: Vec<FrameRequest>,
    listeners: BTreeMap<ListenerId, EventKind>,
}

impl<S: Surface> HeadlessHost<S> {
    /// Host with a drawing surface.
    pub fn new(viewport: Viewport, surface: S) -> Self {
        Self::with_surface(viewport, Some(surface))
    }

    /// Host that may or may not offer a surface.
    pub fn with_surface(viewport: Viewport, surface: Option<S>) -> Self {
        Self {
            surface,
            viewport,
            clock_secs: 0.0,
            next_handle: 1,
            pending: Vec::new(),
            listeners: BTreeMap::new(),
        }
    }

    /// Host without drawing capability.
    pub fn without_surface(viewport: Viewport) -> Self {
        Self::with_surface(viewport, None)
    }

    /// Host clock in seconds.
    pub fn clock_secs(&self) -> f64 {
        self.clock_secs
    }

    /// Borrow the surface.
    pub fn surface_ref(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Take the surface back, leaving the host without one.
    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Change the viewport without notifying anyone; pair with a `Resize` dispatch.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Frame callbacks scheduled and not yet fired or cancelled.
    pub fn pending_frames(&self) -> &[FrameRequest] {
        &self.pending
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether `id` is currently registered.
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Advance the clock by `dt_secs` and fire every callback scheduled before this frame.
    pub fn step<E: Effect>(&mut self, effect: &mut EffectLoop<E>, dt_secs: f64) {
        self.clock_secs += dt_secs.max(0.0);
        let now = self.clock_secs;
        for request in std::mem::take(&mut self.pending) {
            effect.on_frame(self, request, now);
        }
    }

    /// Run `frames` frames at a fixed `dt_secs`.
    pub fn run_frames<E: Effect>(&mut self, effect: &mut EffectLoop<E>, frames: u32, dt_secs: f64) {
        for _ in 0..frames {
            self.step(effect, dt_secs);
        }
    }

    /// Deliver `event` if the effect holds a live listener for its category.
    pub fn dispatch<E: Effect>(&mut self, effect: &mut EffectLoop<E>, event: InputEvent) -> bool {
        if let InputEvent::Resize(viewport) = event {
            self.viewport = viewport;
        }
        match effect.listener_for(event.kind()) {
            Some(id) if self.has_listener(id) => effect.dispatch(&event),
            _ => false,
        }
    }

    fn next_handle(&mut self) -> u64 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }
}

impl<S: Surface> Host for HeadlessHost<S> {
    type Surface = S;

    fn surface(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_handle());
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
    }

    fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_handle());
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/host.rs"]
mod tests;
