//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use yew::prelude::*;

use crate::animation::engine::{AnimationEngine, EngineDefaults};
use crate::animation::tween::{Target, Tween};
use crate::dom::Subscription;
use crate::timing::Delay;

type ScrollHandlers = Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>;

/// Engine that records every call instead of touching a document.
#[derive(Default)]
pub struct RecordingEngine {
    pub registrations: Cell<usize>,
    pub defaults: RefCell<Vec<EngineDefaults>>,
    pub played: RefCell<Vec<(Tween, f64)>>,
    counts: HashMap<String, usize>,
    scroll_handlers: ScrollHandlers,
    next_handler: Cell<usize>,
    live: Rc<Cell<usize>>,
}

impl RecordingEngine {
    pub fn with_count(mut self, selector: &str, count: usize) -> Self {
        self.counts.insert(selector.to_string(), count);
        self
    }

    pub fn live_subscriptions(&self) -> usize {
        self.live.get()
    }

    pub fn scroll_to(&self, offset: f64) {
        for (_, handler) in self.scroll_handlers.borrow_mut().iter_mut() {
            handler(offset);
        }
    }

    fn subscription(&self, teardown: impl FnOnce() + 'static) -> Subscription {
        let live = self.live.clone();
        live.set(live.get() + 1);
        Subscription::new(move || {
            live.set(live.get() - 1);
            teardown();
        })
    }
}

impl AnimationEngine for RecordingEngine {
    fn register_extensions(&self) {
        self.registrations.set(self.registrations.get() + 1);
    }

    fn configure(&self, defaults: EngineDefaults) {
        self.defaults.borrow_mut().push(defaults);
    }

    fn count(&self, target: &Target) -> usize {
        self.counts.get(target.selector()).copied().unwrap_or(0)
    }

    fn play(&self, tween: &Tween, delay: f64) -> Option<Subscription> {
        self.played.borrow_mut().push((tween.clone(), delay));
        tween.scroll_trigger.as_ref().map(|_| self.subscription(|| ()))
    }

    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Option<Subscription> {
        let id = self.next_handler.replace(self.next_handler.get() + 1);
        self.scroll_handlers.borrow_mut().push((id, handler));

        let handlers = self.scroll_handlers.clone();
        Some(self.subscription(move || {
            handlers.borrow_mut().retain(|(other, _)| *other != id);
        }))
    }
}

/// Delay whose tasks only run when the test says so.
#[derive(Clone, Default)]
pub struct ManualDelay {
    queue: Rc<RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>>,
}

impl ManualDelay {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn pending_delays(&self) -> Vec<u32> {
        self.queue.borrow().iter().map(|(ms, _)| *ms).collect()
    }

    /// Runs queued tasks in scheduling order, including ones they schedule.
    pub fn run_all(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, task)) => task(),
                None => break,
            }
        }
    }

    /// Runs only what is queued right now.
    pub fn run_pending(&self) {
        let batch: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for (_, task) in batch {
            task();
        }
    }
}

impl Delay for ManualDelay {
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back((millis, task));
    }
}

/// Reducer state outside of a component, driven through a callback.
pub struct Store<T: Reducible> {
    state: Rc<RefCell<Rc<T>>>,
}

impl<T: Reducible + Default + 'static> Store<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(Rc::new(T::default()))),
        }
    }
}

impl<T: Reducible + 'static> Store<T> {
    pub fn state(&self) -> Rc<T> {
        self.state.borrow().clone()
    }

    pub fn dispatcher(&self) -> Callback<T::Action> {
        let state = self.state.clone();
        Callback::from(move |action| {
            let current = state.borrow().clone();
            let next = current.reduce(action);
            *state.borrow_mut() = next;
        })
    }
}
