use crate::animation::tween::{Target, Tween};
use crate::dom::Subscription;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineDefaults {
    /// Log a warning when a tween's target matches nothing.
    pub null_target_warn: bool,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self { null_target_warn: true }
    }
}

/// Tweening backend used by [`super::AnimationController`].
///
/// Implementations own the interpolation and easing; callers only describe
/// what should move.
pub trait AnimationEngine {
    /// Sets up scroll-trigger support and anything else the engine needs
    /// before the first tween.
    fn register_extensions(&self);

    fn configure(&self, defaults: EngineDefaults);

    /// Number of elements `target` currently resolves to.
    fn count(&self, target: &Target) -> usize;

    /// Starts `tween` after `delay` seconds.
    ///
    /// Scroll-triggered tweens stay parked until their trigger fires; the
    /// returned subscription keeps that trigger alive.
    fn play(&self, tween: &Tween, delay: f64) -> Option<Subscription>;

    /// Calls `handler` with the page's vertical scroll offset on every scroll.
    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Option<Subscription>;
}
