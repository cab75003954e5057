use crate::foundation::core::Viewport;

/// Widths measured from a rendered navigation bar or similar row.
///
/// Either measurement may be missing when layout has not happened yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CollapseProbe {
    /// Available width of the container.
    pub container_width: Option<f64>,
    /// Width the content needs when laid out in one row.
    pub content_width: Option<f64>,
}

impl CollapseProbe {
    /// Probe with both measurements present.
    pub fn measured(container_width: f64, content_width: f64) -> Self {
        Self {
            container_width: Some(container_width),
            content_width: Some(content_width),
        }
    }

    fn usable(self) -> Option<(f64, f64)> {
        let container = self.container_width.filter(|w| w.is_finite() && *w > 0.0)?;
        let content = self.content_width.filter(|w| w.is_finite() && *w > 0.0)?;
        Some((container, content))
    }
}

/// Whether a row should switch to its collapsed (menu) form.
///
/// Overflowing content collapses regardless of width. Without usable measurements the
/// decision falls back to `viewport.width < breakpoint`.
pub fn should_collapse(probe: CollapseProbe, viewport: Viewport, breakpoint: f64) -> bool {
    match probe.usable() {
        Some((container, content)) => content > container || viewport.is_narrow(breakpoint),
        None => viewport.is_narrow(breakpoint),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/responsive.rs"]
mod tests;
