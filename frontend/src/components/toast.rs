use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::timing::{Delay, TimerDelay};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn header_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast-header bg-success text-white",
            Severity::Danger => "toast-header bg-danger text-white",
            Severity::Warning => "toast-header bg-warning text-white",
            Severity::Info => "toast-header bg-info text-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastRecord {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// False once the hide transition has started.
    pub showing: bool,
}

impl ToastRecord {
    /// Bootstrap toast classes. `show` stays on through the fade, since
    /// `.toast:not(.show)` is `display: none`; `showing` drives the opacity.
    pub fn classes(&self) -> Classes {
        classes!("toast", "fade", "show", (!self.showing).then(|| "showing"))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<ToastRecord>,
}

pub enum ToastAction {
    Push(ToastRecord),
    Hide(u32),
    Remove(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Hide(id) => {
                if let Some(toast) = next.toasts.iter_mut().find(|t| t.id == id) {
                    toast.showing = false;
                }
            }
            ToastAction::Remove(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

/// Handle for raising toasts, shared through context.
#[derive(Clone)]
pub struct Toaster {
    dispatch: Callback<ToastAction>,
    delay: Rc<dyn Delay>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        self.dispatch == other.dispatch && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Toaster {
    pub fn new(dispatch: Callback<ToastAction>, delay: Rc<dyn Delay>) -> Self {
        Self {
            dispatch,
            delay,
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Toaster with nowhere to render; used when no container is mounted.
    pub fn detached() -> Self {
        warn!("No toast container mounted, notifications will be dropped");
        Self::new(Callback::noop(), Rc::new(TimerDelay))
    }

    pub fn show(&self, title: &str, message: &str, severity: Severity) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        info!("Toast {}: {} {}", id, title, message);

        self.dispatch.emit(ToastAction::Push(ToastRecord {
            id,
            title: title.to_string(),
            message: message.to_string(),
            severity,
            showing: true,
        }));

        let toaster = self.clone();
        self.delay.after(
            config::TOAST_AUTOHIDE_MS,
            Box::new(move || toaster.hide(id)),
        );
        id
    }

    /// Starts the hide transition; the node goes away once it finishes.
    pub fn hide(&self, id: u32) {
        self.dispatch.emit(ToastAction::Hide(id));
        let dispatch = self.dispatch.clone();
        self.delay.after(
            config::TOAST_FADE_MS,
            Box::new(move || dispatch.emit(ToastAction::Remove(id))),
        );
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the toast stack, renders the container and provides a [`Toaster`].
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let toaster = {
        let stack = stack.clone();
        use_memo(
            move |_| {
                let dispatch = Callback::from(move |action| stack.dispatch(action));
                Toaster::new(dispatch, Rc::new(TimerDelay))
            },
            (),
        )
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="toast-container position-fixed bottom-0 end-0 p-3">
                { for stack.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let onclose = {
                        let toaster = (*toaster).clone();
                        Callback::from(move |_: MouseEvent| toaster.hide(id))
                    };
                    html! {
                        <div
                            key={id}
                            class={toast.classes()}
                            role="alert"
                            aria-live="assertive"
                            aria-atomic="true"
                        >
                            <div class={toast.severity.header_class()}>
                                <strong class="me-auto">{ &toast.title }</strong>
                                <button type="button" class="btn-close btn-close-white" onclick={onclose}></button>
                            </div>
                            <div class="toast-body">
                                { &toast.message }
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {format!(r#"
                .toast-container {{
                    z-index: 1080;
                }}
                .toast.fade {{
                    transition: opacity {}ms linear;
                }}
                .toast.showing {{
                    opacity: 0;
                }}
                "#, config::TOAST_FADE_MS)}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualDelay, Store};

    fn toaster(store: &Store<ToastStack>, delay: &ManualDelay) -> Toaster {
        Toaster::new(store.dispatcher(), Rc::new(delay.clone()))
    }

    #[test]
    fn toasts_stack_in_call_order() {
        let store = Store::<ToastStack>::new();
        let delay = ManualDelay::default();
        let toaster = toaster(&store, &delay);

        toaster.show("First", "one", Severity::Success);
        toaster.show("Second", "two", Severity::Danger);
        toaster.show("First", "one", Severity::Success);

        let titles: Vec<String> = store.state().toasts.iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["First", "Second", "First"]);
        assert!(store.state().toasts.iter().all(|t| t.showing));
    }

    #[test]
    fn toast_hides_then_removes_itself() {
        let store = Store::<ToastStack>::new();
        let delay = ManualDelay::default();
        let toaster = toaster(&store, &delay);

        toaster.show("Success!", "sent", Severity::Success);
        assert_eq!(delay.pending_delays(), vec![config::TOAST_AUTOHIDE_MS]);

        delay.run_pending();
        assert!(!store.state().toasts[0].showing);
        assert_eq!(delay.pending_delays(), vec![config::TOAST_FADE_MS]);

        delay.run_pending();
        assert!(store.state().toasts.is_empty());
    }

    #[test]
    fn closing_early_and_auto_hide_both_clean_up() {
        let store = Store::<ToastStack>::new();
        let delay = ManualDelay::default();
        let toaster = toaster(&store, &delay);

        let first = toaster.show("a", "a", Severity::Info);
        toaster.show("b", "b", Severity::Warning);
        toaster.hide(first);

        // auto-hide timers of both toasts plus the manual fade
        delay.run_all();
        assert!(store.state().toasts.is_empty());
    }

    #[test]
    fn hide_of_unknown_toast_is_ignored() {
        let store = Store::<ToastStack>::new();
        let delay = ManualDelay::default();
        let toaster = toaster(&store, &delay);

        toaster.show("a", "a", Severity::Info);
        toaster.hide(42);
        delay.run_pending();
        // toast 0 started hiding but its fade has not finished
        assert!(store.state().toasts.iter().any(|t| t.id == 0));
    }

    #[test]
    fn fading_toast_stays_displayed_until_removed() {
        let store = Store::<ToastStack>::new();
        let delay = ManualDelay::default();
        let toaster = toaster(&store, &delay);

        toaster.show("Error!", "nope", Severity::Danger);
        let visible = store.state().toasts[0].classes();
        assert!(visible.contains("show"));
        assert!(!visible.contains("showing"));

        delay.run_pending();
        let fading = store.state().toasts[0].classes();
        assert!(fading.contains("show"));
        assert!(fading.contains("showing"));
    }

    #[test]
    fn severity_picks_header_colour() {
        assert!(Severity::Danger.header_class().contains("bg-danger"));
        assert!(Severity::Success.header_class().contains("bg-success"));
    }
}
