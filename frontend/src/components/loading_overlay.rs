use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::animation::tween::Ease;
use crate::config;
use crate::timing::Delay;

const LOADER_TEXT: &str = "EmpireBuilders";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Shown,
    Fading,
}

impl OverlayState {
    /// Whether an overlay node is in the document.
    pub fn is_present(&self) -> bool {
        !matches!(self, OverlayState::Hidden)
    }
}

pub enum OverlayAction {
    Show,
    Fade,
    Remove,
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (*self, action) {
            (OverlayState::Hidden, OverlayAction::Show) => OverlayState::Shown,
            (OverlayState::Shown, OverlayAction::Fade) => OverlayState::Fading,
            (OverlayState::Fading, OverlayAction::Remove) => OverlayState::Hidden,
            (state, _) => state,
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Show/hide handle over the overlay state.
#[derive(Clone)]
pub struct LoadingOverlay {
    dispatch: Callback<OverlayAction>,
}

impl LoadingOverlay {
    pub fn new(dispatch: Callback<OverlayAction>) -> Self {
        Self { dispatch }
    }

    /// Puts the overlay up. Showing it twice still leaves a single overlay.
    pub fn show(&self) {
        self.dispatch.emit(OverlayAction::Show);
    }

    /// Fades the overlay out and drops it once the fade is over.
    pub fn hide(&self, delay: &dyn Delay) {
        debug!("Fading out loading overlay");
        self.dispatch.emit(OverlayAction::Fade);
        let dispatch = self.dispatch.clone();
        delay.after(
            config::OVERLAY_FADE_MS,
            Box::new(move || dispatch.emit(OverlayAction::Remove)),
        );
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayViewProps {
    pub state: OverlayState,
}

#[function_component(LoadingOverlayView)]
pub fn loading_overlay_view(props: &LoadingOverlayViewProps) -> Html {
    if !props.state.is_present() {
        return html! {};
    }

    let fading = props.state == OverlayState::Fading;

    html! {
        <div class={classes!("loading-overlay", fading.then(|| "fading"))}>
            <div class="loader-content">
                <div class="loader-text">
                    { for LOADER_TEXT.chars().enumerate().map(|(i, letter)| html! {
                        <span style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}>
                            { letter.to_string() }
                        </span>
                    }) }
                </div>
            </div>
            <style>
                {format!(r#"
                .loading-overlay {{
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: #fff;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 9999;
                    opacity: 1;
                    transition: opacity {fade}ms {ease};
                }}
                .loading-overlay.fading {{
                    opacity: 0;
                    pointer-events: none;
                }}
                .loader-text span {{
                    display: inline-block;
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #007bff;
                    opacity: 0;
                    animation: loaderLetter 0.5s {back} forwards;
                }}
                @keyframes loaderLetter {{
                    from {{
                        opacity: 0;
                        transform: translateY(50px);
                    }}
                    to {{
                        opacity: 1;
                        transform: translateY(0);
                    }}
                }}
                "#,
                fade = config::OVERLAY_FADE_MS,
                ease = Ease::Power2InOut.css(),
                back = Ease::BackOut(1.7).css())}
            </style>
        </div>
    }
}
