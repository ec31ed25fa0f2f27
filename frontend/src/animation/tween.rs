use std::collections::BTreeMap;
use std::fmt;

/// What a tween applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// Every element matching the selector.
    All(String),
    /// Only the n-th match (document order) of the selector.
    Nth(String, usize),
}

impl Target {
    pub fn all(selector: &str) -> Self {
        Target::All(selector.to_string())
    }

    pub fn selector(&self) -> &str {
        match self {
            Target::All(s) | Target::Nth(s, _) => s,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Prop {
    Opacity(f64),
    Y(Length),
    Scale(f64),
    ClipPath(String),
    BackgroundPosition(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2InOut,
    Power3InOut,
    Power3Out,
    /// Overshooting ease-out; the value is the overshoot strength (1.7 is the usual default).
    BackOut(f64),
}

impl Ease {
    /// CSS timing function approximating the curve.
    pub fn css(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)".to_string(),
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Ease::Power3InOut => "cubic-bezier(0.76, 0, 0.24, 1)".to_string(),
            Ease::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Ease::BackOut(overshoot) => {
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", 1.0 + overshoot * 0.33)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    /// Animate from the given props to the element's resting state.
    From,
    /// Animate from the current state to the given props.
    To,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Once,
    Forever,
}

/// Gate that plays a tween once its trigger element scrolls into view.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: Target,
    /// Fires when the trigger's top edge is above this fraction of the viewport height.
    pub start: f64,
    /// Play backwards when the trigger scrolls back below the start line.
    pub reversible: bool,
}

impl ScrollTrigger {
    pub fn top_at(trigger: Target, start: f64) -> Self {
        Self {
            trigger,
            start,
            reversible: true,
        }
    }
}

pub type Keyframe = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub direction: Direction,
    pub props: Vec<Prop>,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Seconds between consecutive matched elements.
    pub stagger: f64,
    pub repeat: Repeat,
    pub yoyo: bool,
    pub scroll_trigger: Option<ScrollTrigger>,
}

impl Tween {
    fn new(target: Target, direction: Direction) -> Self {
        Self {
            target,
            direction,
            props: Vec::new(),
            duration: 0.5,
            ease: Ease::Power1InOut,
            stagger: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            scroll_trigger: None,
        }
    }

    pub fn from(target: Target) -> Self {
        Self::new(target, Direction::From)
    }

    pub fn to(target: Target) -> Self {
        Self::new(target, Direction::To)
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.props.push(Prop::Opacity(value));
        self
    }

    pub fn y(mut self, value: Length) -> Self {
        self.props.push(Prop::Y(value));
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.props.push(Prop::Scale(value));
        self
    }

    pub fn clip_path(mut self, value: &str) -> Self {
        self.props.push(Prop::ClipPath(value.to_string()));
        self
    }

    pub fn background_position(mut self, value: &str) -> Self {
        self.props.push(Prop::BackgroundPosition(value.to_string()));
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn scroll_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }

    /// Seconds from the first element starting to the last one finishing.
    pub fn span(&self, matched: usize) -> f64 {
        self.duration + self.stagger * matched.saturating_sub(1) as f64
    }

    /// Keyframes for the Web Animations API.
    ///
    /// `To` tweens give a single keyframe so the browser starts from the
    /// element's current computed style.
    pub fn keyframes(&self) -> Vec<Keyframe> {
        let styled = keyframe(&self.props, false);
        match self.direction {
            Direction::From => vec![styled, keyframe(&self.props, true)],
            Direction::To => vec![styled],
        }
    }
}

fn keyframe(props: &[Prop], resting: bool) -> Keyframe {
    let mut frame = Keyframe::new();
    let mut transform = Vec::new();

    for prop in props {
        match prop {
            Prop::Opacity(v) => {
                let v = if resting { 1.0 } else { *v };
                frame.insert("opacity", v.to_string());
            }
            Prop::Y(len) => {
                let len = if resting { Length::Px(0.0) } else { *len };
                transform.push(format!("translateY({})", len));
            }
            Prop::Scale(v) => {
                let v = if resting { 1.0 } else { *v };
                transform.push(format!("scale({})", v));
            }
            Prop::ClipPath(v) => {
                let v = if resting { "circle(75% at 50% 50%)" } else { v.as_str() };
                frame.insert("clipPath", v.to_string());
            }
            Prop::BackgroundPosition(v) => {
                let v = if resting { "0% 0%" } else { v.as_str() };
                frame.insert("backgroundPosition", v.to_string());
            }
        }
    }

    if !transform.is_empty() {
        frame.insert("transform", transform.join(" "));
    }
    frame
}

/// Where a timeline step starts relative to the step before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the previous step ends.
    AfterPrevious,
    /// This many seconds before the previous step ends ("-=0.5").
    Overlap(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTween<'a> {
    pub start: f64,
    pub end: f64,
    pub tween: &'a Tween,
}

/// Ordered list of tweens with relative start offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<(Tween, Position)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, tween: Tween, position: Position) -> Self {
        self.steps.push((tween, position));
        self
    }

    /// Absolute start times, in seconds from the timeline start.
    ///
    /// `matched` reports how many elements a target resolves to, since a
    /// staggered step lasts until its last element finishes.
    pub fn schedule(&self, matched: impl Fn(&Target) -> usize) -> Vec<ScheduledTween<'_>> {
        let mut previous_end = 0.0_f64;
        let mut scheduled = Vec::with_capacity(self.steps.len());

        for (tween, position) in &self.steps {
            let start = match position {
                Position::AfterPrevious => previous_end,
                Position::Overlap(seconds) => (previous_end - seconds).max(0.0),
            };
            let end = start + tween.span(matched(&tween.target));
            scheduled.push(ScheduledTween { start, end, tween });
            previous_end = end;
        }
        scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn from_tween_ends_at_resting_state() {
        let tween = Tween::from(Target::all(".hero h1"))
            .y(Length::Px(100.0))
            .opacity(0.0);

        let frames = tween.keyframes();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["opacity"], "0");
        assert_eq!(frames[0]["transform"], "translateY(100px)");
        assert_eq!(frames[1]["opacity"], "1");
        assert_eq!(frames[1]["transform"], "translateY(0px)");
    }

    #[test]
    fn transforms_are_combined_into_one_property() {
        let tween = Tween::from(Target::all(".btn")).y(Length::Px(10.0)).scale(0.0);
        let frames = tween.keyframes();
        assert_eq!(frames[0]["transform"], "translateY(10px) scale(0)");
    }

    #[test]
    fn to_tween_has_single_keyframe() {
        let tween = Tween::to(Target::all(".navbar")).y(Length::Percent(-100.0));
        let frames = tween.keyframes();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["transform"], "translateY(-100%)");
    }

    #[test]
    fn back_out_matches_standard_curve() {
        assert_eq!(Ease::BackOut(1.7).css(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }

    #[test]
    fn overlapping_steps_start_before_previous_end() {
        let timeline = Timeline::new()
            .then(Tween::from(Target::all("a")).duration(1.5), Position::AfterPrevious)
            .then(Tween::from(Target::all("b")).duration(1.0), Position::Overlap(0.5))
            .then(Tween::from(Target::all("c")).duration(0.8), Position::Overlap(0.3));

        let schedule = timeline.schedule(|_| 1);
        let starts: Vec<f64> = schedule.iter().map(|s| s.start).collect();
        assert!(approx(starts[0], 0.0));
        assert!(approx(starts[1], 1.0));
        assert!(approx(starts[2], 1.7));
        assert!(approx(schedule[2].end, 2.5));
    }

    #[test]
    fn stagger_extends_step_by_matched_elements() {
        let timeline = Timeline::new()
            .then(Tween::from(Target::all("h1")).duration(1.0).stagger(0.2), Position::AfterPrevious)
            .then(Tween::from(Target::all("p")).duration(1.0), Position::AfterPrevious);

        let schedule = timeline.schedule(|t| if t.selector() == "h1" { 3 } else { 1 });
        assert!(approx(schedule[0].end, 1.4));
        assert!(approx(schedule[1].start, 1.4));
    }

    #[test]
    fn overlap_never_starts_before_zero() {
        let timeline = Timeline::new()
            .then(Tween::from(Target::all("a")).duration(0.2), Position::Overlap(1.0));
        assert!(approx(timeline.schedule(|_| 1)[0].start, 0.0));
    }
}
