//! Display-side collaborators injected into the site at startup.

/// Programmatic control over the visible page.
pub trait Viewport: Send + Sync {
    fn scroll_to_top(&self);
}

/// Optional scroll-animation capability.
///
/// Present only when the host provides one; every caller must behave the same
/// with `None`.
pub trait Animator: Send + Sync {
    /// Recompute animation trigger points after the page content changed.
    fn refresh(&self);
}

/// Viewport for hosts with nothing to scroll.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to_top(&self) {}
}
