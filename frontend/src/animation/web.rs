use std::cell::Cell;
use std::fmt;

use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element};

use crate::animation::engine::{AnimationEngine, EngineDefaults};
use crate::animation::scroll::{GateEvent, ScrollGate};
use crate::animation::tween::{Direction, Repeat, Target, Tween};
use crate::dom::{self, Subscription};

#[wasm_bindgen]
extern "C" {
    type Animatable;

    #[wasm_bindgen(js_name = Animation)]
    type WebAnimation;

    #[wasm_bindgen(method, catch)]
    fn animate(this: &Animatable, keyframes: &JsValue, options: &JsValue) -> Result<WebAnimation, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn play(this: &WebAnimation) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn pause(this: &WebAnimation) -> Result<(), JsValue>;

    #[wasm_bindgen(method, setter = playbackRate)]
    fn set_playback_rate(this: &WebAnimation, rate: f64);
}

/// Options object handed to `Element.animate`.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Timing {
    duration: f64,
    delay: f64,
    easing: String,
    fill: &'static str,
    iterations: f64,
    direction: &'static str,
}

impl Timing {
    fn new(tween: &Tween, delay_seconds: f64) -> Self {
        Self {
            duration: tween.duration * 1000.0,
            delay: delay_seconds * 1000.0,
            easing: tween.ease.css(),
            fill: match tween.direction {
                Direction::From => "both",
                Direction::To => "forwards",
            },
            iterations: match tween.repeat {
                Repeat::Once => 1.0,
                Repeat::Forever => f64::INFINITY,
            },
            direction: if tween.yoyo { "alternate" } else { "normal" },
        }
    }
}

/// Logs a failed playback call. Returns whether it went through.
fn playback_ok<E: fmt::Debug>(step: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {} scroll animation: {:?}", step, e);
            false
        }
    }
}

/// Engine backed by the browser's Web Animations API.
#[derive(Debug)]
pub struct WebAnimations {
    defaults: Cell<EngineDefaults>,
    supported: Cell<bool>,
}

impl Default for WebAnimations {
    fn default() -> Self {
        Self {
            defaults: Cell::new(EngineDefaults::default()),
            supported: Cell::new(true),
        }
    }
}

impl WebAnimations {
    fn resolve(&self, target: &Target) -> Vec<Element> {
        let mut elements = dom::query_all(target.selector());
        if let Target::Nth(_, index) = target {
            elements = elements.into_iter().nth(*index).into_iter().collect();
        }
        if elements.is_empty() && self.defaults.get().null_target_warn {
            warn!("Animation target {} not found", target.selector());
        }
        elements
    }

    fn start(&self, tween: &Tween, delay: f64, elements: &[Element]) -> Vec<WebAnimation> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let keyframes = match tween.keyframes().serialize(&serializer) {
            Ok(keyframes) => keyframes,
            Err(e) => {
                warn!("Failed to encode keyframes for {}: {}", tween.target.selector(), e);
                return Vec::new();
            }
        };

        elements
            .iter()
            .enumerate()
            .filter_map(|(i, element)| {
                let timing = Timing::new(tween, delay + tween.stagger * i as f64);
                let options = timing.serialize(&serializer).ok()?;
                element
                    .unchecked_ref::<Animatable>()
                    .animate(&keyframes, &options)
                    .map_err(|e| warn!("Element.animate failed: {:?}", e))
                    .ok()
            })
            .collect()
    }
}

impl AnimationEngine for WebAnimations {
    fn register_extensions(&self) {
        let supported = js_sys::Reflect::get(&js_sys::global(), &"Element".into())
            .and_then(|element| js_sys::Reflect::get(&element, &"prototype".into()))
            .and_then(|proto| js_sys::Reflect::has(&proto, &"animate".into()))
            .unwrap_or(false);

        if supported {
            info!("Web Animations available, scroll triggers enabled");
        } else {
            warn!("Web Animations API missing, animations disabled");
        }
        self.supported.set(supported);
    }

    fn configure(&self, defaults: EngineDefaults) {
        self.defaults.set(defaults);
    }

    fn count(&self, target: &Target) -> usize {
        self.resolve(target).len()
    }

    fn play(&self, tween: &Tween, delay: f64) -> Option<Subscription> {
        if !self.supported.get() {
            return None;
        }

        let elements = self.resolve(&tween.target);
        if elements.is_empty() {
            return None;
        }
        let animations = self.start(tween, delay, &elements);

        let trigger = tween.scroll_trigger.as_ref()?;
        let trigger_element = self.resolve(&trigger.trigger).into_iter().next()?;
        for animation in &animations {
            playback_ok("pause", animation.pause());
        }

        let window = web_sys::window()?;
        let mut gate = ScrollGate::new(trigger);
        let mut check = {
            let window = window.clone();
            move || {
                let top = trigger_element.get_bounding_client_rect().top();
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);

                let rate = match gate.update(top, viewport) {
                    Some(GateEvent::Enter) => 1.0,
                    Some(GateEvent::LeaveBack) => -1.0,
                    None => return,
                };
                for animation in &animations {
                    animation.set_playback_rate(rate);
                    playback_ok("play", animation.play());
                }
            }
        };

        // Already past the start line on load
        check();
        dom::listen(&window, "scroll", check)
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut(f64)>) -> Option<Subscription> {
        let window = web_sys::window()?;
        let source = window.clone();
        dom::listen(&window, "scroll", move || {
            handler(source.scroll_y().unwrap_or(0.0));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Ease;

    #[test]
    fn timing_converts_to_milliseconds() {
        let tween = Tween::from(Target::all(".card")).duration(1.5).ease(Ease::Linear);
        let timing = Timing::new(&tween, 0.25);
        assert_eq!(timing.duration, 1500.0);
        assert_eq!(timing.delay, 250.0);
        assert_eq!(timing.fill, "both");
        assert_eq!(timing.iterations, 1.0);
        assert_eq!(timing.direction, "normal");
    }

    #[test]
    fn playback_failures_are_reported_not_swallowed() {
        assert!(playback_ok::<String>("pause", Ok(())));
        assert!(!playback_ok("pause", Err("InvalidStateError".to_string())));
        assert!(!playback_ok("play", Err("InvalidStateError".to_string())));
    }

    #[test]
    fn endless_yoyo_alternates_forever() {
        let tween = Tween::to(Target::all(".btn")).forever().yoyo();
        let timing = Timing::new(&tween, 0.0);
        assert!(timing.iterations.is_infinite());
        assert_eq!(timing.direction, "alternate");
        assert_eq!(timing.fill, "forwards");
    }
}
