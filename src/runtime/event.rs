use crate::foundation::core::{Point, Viewport};

/// Input delivered to a running effect.
///
/// Touch input is reported through the pointer variants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved to `pos` at host time `time_secs`.
    PointerMove {
        /// Position in viewport pixels.
        pos: Point,
        /// Host clock in seconds.
        time_secs: f64,
    },
    /// Primary button or touch went down.
    PointerDown {
        /// Position in viewport pixels.
        pos: Point,
    },
    /// Primary button or touch was released.
    PointerUp {
        /// Position in viewport pixels.
        pos: Point,
    },
    /// Pointer entered the effect's element.
    PointerEnter,
    /// Pointer left the effect's element.
    PointerLeave,
    /// Document scrolled.
    Scroll {
        /// Vertical scroll offset in pixels.
        scroll_y: f64,
    },
    /// Viewport resized.
    Resize(Viewport),
}

/// Listener category a host registers for an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// `PointerMove`.
    PointerMove,
    /// `PointerDown` and `PointerUp`.
    PointerButton,
    /// `PointerEnter` and `PointerLeave`.
    Hover,
    /// `Scroll`.
    Scroll,
    /// `Resize`.
    Resize,
}

impl InputEvent {
    /// Listener category that delivers this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerDown { .. } | Self::PointerUp { .. } => EventKind::PointerButton,
            Self::PointerEnter | Self::PointerLeave => EventKind::Hover,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize(_) => EventKind::Resize,
        }
    }
}
