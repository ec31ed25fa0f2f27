use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Keeps an event listener (or any other registration) alive.
///
/// Dropping the handle or calling [`Subscription::unsubscribe`] runs the
/// teardown exactly once.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Attaches `handler` to `event` on `target` until the returned handle drops.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Option<Subscription> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        warn!("Failed to attach {} listener: {:?}", event, e);
        return None;
    }

    let target = target.clone();
    Some(Subscription::new(move || {
        if let Err(e) = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("Failed to detach {} listener: {:?}", event, e);
        }
    }))
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    match document.query_selector_all(selector) {
        Ok(nodes) => (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Invalid selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}
