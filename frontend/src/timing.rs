use gloo_timers::callback::Timeout;

/// Runs a task once after a fixed number of milliseconds.
///
/// Components only ever talk to this trait so the timer-driven parts of the
/// page (overlay fade, bot latency, toast lifetime) can be stepped by hand.
pub trait Delay {
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>);
}

/// Browser timer backed by `setTimeout`. Pending tasks cannot be cancelled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(millis, task).forget();
    }
}
