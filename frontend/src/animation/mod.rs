//! Entrance, scroll and navbar animations for the landing page.

pub mod engine;
pub mod scroll;
pub mod tween;
pub mod web;

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use crate::dom::Subscription;
use engine::{AnimationEngine, EngineDefaults};
use scroll::{NavbarAutoHide, NavbarState};
use tween::{Ease, Length, Position, ScrollTrigger, Target, Timeline, Tween};

pub struct AnimationController<E: AnimationEngine> {
    engine: Rc<E>,
    initialized: Cell<bool>,
}

impl<E: AnimationEngine + 'static> AnimationController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Rc::new(engine),
            initialized: Cell::new(false),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Registers engine extensions and global defaults. Later calls do nothing.
    pub fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }
        self.engine.register_extensions();
        self.engine.configure(EngineDefaults {
            null_target_warn: false,
        });
        info!("Animation engine initialized");
    }

    pub fn intro_timeline() -> Timeline {
        Timeline::new()
            .then(
                Tween::from(Target::all(".hero"))
                    .clip_path("circle(0% at 50% 50%)")
                    .duration(1.5)
                    .ease(Ease::Power3InOut),
                Position::AfterPrevious,
            )
            .then(
                Tween::from(Target::all(".hero h1"))
                    .y(Length::Px(100.0))
                    .opacity(0.0)
                    .duration(1.0)
                    .ease(Ease::BackOut(1.7))
                    .stagger(0.2),
                Position::Overlap(0.5),
            )
            .then(
                Tween::from(Target::all(".hero p"))
                    .y(Length::Px(50.0))
                    .opacity(0.0)
                    .duration(0.8)
                    .ease(Ease::BackOut(1.5)),
                Position::Overlap(0.3),
            )
            .then(
                Tween::from(Target::all(".hero .btn"))
                    .scale(0.0)
                    .opacity(0.0)
                    .duration(0.5)
                    .ease(Ease::BackOut(2.0)),
                Position::Overlap(0.2),
            )
    }

    /// Hero reveal, then heading, paragraph and buttons, each overlapping the last.
    pub fn play_intro_sequence(&self) {
        let timeline = Self::intro_timeline();
        for step in timeline.schedule(|target| self.engine.count(target)) {
            debug!("Intro step {} at {:.2}s", step.tween.target.selector(), step.start);
            self.engine.play(step.tween, step.start);
        }
    }

    /// Cards and section headings fade up as they scroll into view.
    pub fn bind_scroll_reveals(&self) -> Vec<Subscription> {
        let mut tweens = vec![Tween::from(Target::all(".bg-light .card"))
            .opacity(0.0)
            .y(Length::Px(50.0))
            .duration(1.0)
            .stagger(0.2)
            .ease(Ease::Power3Out)
            .scroll_trigger(ScrollTrigger::top_at(Target::all(".bg-light"), 0.7))];

        let headers = self.engine.count(&Target::all("section h2"));
        tweens.extend((0..headers).map(|i| {
            let header = Target::Nth("section h2".to_string(), i);
            Tween::from(header.clone())
                .opacity(0.0)
                .y(Length::Px(30.0))
                .duration(1.0)
                .ease(Ease::BackOut(1.7))
                .scroll_trigger(ScrollTrigger::top_at(header, 0.8))
        }));

        tweens
            .iter()
            .filter_map(|tween| self.engine.play(tween, 0.0))
            .collect()
    }

    /// Slides the navbar out while scrolling down and back in when scrolling up.
    pub fn bind_navbar_auto_hide(&self) -> Option<Subscription> {
        let engine = self.engine.clone();
        let mut navbar = NavbarAutoHide::default();
        let mut applied = NavbarState::Shown;

        self.engine.on_scroll(Box::new(move |scroll| {
            let state = navbar.update(scroll);
            if state == applied {
                return;
            }
            applied = state;

            let offset = match state {
                NavbarState::Hidden => -100.0,
                NavbarState::Shown => 0.0,
            };
            engine.play(
                &Tween::to(Target::all(".navbar"))
                    .y(Length::Percent(offset))
                    .duration(0.3)
                    .ease(Ease::Power3Out),
                0.0,
            );
        }))
    }

    /// Slow endless drift of the hero's gradient layer.
    pub fn create_dynamic_background(&self) {
        self.engine.play(
            &Tween::to(Target::all(".dynamic-bg"))
                .background_position("100% 100%")
                .duration(20.0)
                .ease(Ease::Linear)
                .forever(),
            0.0,
        );
    }

    pub fn animate_chat_buttons(&self) {
        self.engine.play(
            &Tween::to(Target::all(".position-fixed .btn"))
                .y(Length::Px(-10.0))
                .duration(1.5)
                .ease(Ease::Power1InOut)
                .yoyo()
                .forever()
                .stagger(0.2),
            0.0,
        );
    }

    /// Everything that runs once the loading overlay starts fading.
    pub fn run_page_animations(&self) -> Vec<Subscription> {
        self.create_dynamic_background();
        self.play_intro_sequence();
        let mut subscriptions = self.bind_scroll_reveals();
        subscriptions.extend(self.bind_navbar_auto_hide());
        self.animate_chat_buttons();
        subscriptions
    }
}
