//! Declarative entrance transitions.
//!
//! A section describes how an element enters (`EnterTransition`) and the
//! `Reveal` component interprets that description against the scroll position.
//! Nothing in here touches the DOM, so the rules are tested on the host.

/// Offset of an element relative to its resting layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose { x: 0.0, y: 0.0, scale: 1.0, opacity: 1.0 };

    fn transform(&self) -> String {
        if self.scale == 1.0 {
            format!("translate({}px, {}px)", self.x, self.y)
        } else {
            format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power3Out,
    Power2InOut,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Ease::Power2InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
        }
    }

    /// Progress along the curve for `t` in [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Reverse,
    None,
}

/// What happens on each of the four threshold crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::Reverse,
        }
    }
}

/// Viewport thresholds as fractions of the viewport height from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// The element enters once its top is above this line.
    pub start: f64,
    /// The element leaves once its bottom is above this line.
    pub end: f64,
    pub actions: ToggleActions,
}

impl ScrollTrigger {
    pub const SECTION: ScrollTrigger = ScrollTrigger {
        start: 0.80,
        end: 0.20,
        actions: ToggleActions {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::Reverse,
        },
    };

    pub const CARD: ScrollTrigger = ScrollTrigger {
        start: 0.85,
        end: 0.15,
        ..ScrollTrigger::SECTION
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Plays once as soon as the element is mounted.
    Mount,
    Scroll(ScrollTrigger),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnterTransition {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
    pub trigger: Trigger,
}

impl EnterTransition {
    fn from_pose(from: Pose) -> Self {
        Self {
            from,
            duration_ms: 800,
            delay_ms: 0,
            ease: Ease::Power2Out,
            trigger: Trigger::Scroll(ScrollTrigger::SECTION),
        }
    }

    /// Fades in while moving up from `dy` pixels below.
    pub fn rise(dy: f64) -> Self {
        Self::from_pose(Pose { y: dy, opacity: 0.0, ..Pose::REST })
    }

    /// Fades in while sliding horizontally from `dx`.
    pub fn slide(dx: f64) -> Self {
        Self::from_pose(Pose { x: dx, opacity: 0.0, ..Pose::REST })
    }

    /// Fades in while rising and growing from `scale`.
    pub fn pop(dy: f64, scale: f64) -> Self {
        Self::from_pose(Pose { y: dy, scale, opacity: 0.0, ..Pose::REST })
    }

    pub fn starting_at(mut self, from: Pose) -> Self {
        self.from = from;
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Delays the n-th member of a list by `step_ms` per position.
    pub fn stagger(mut self, index: usize, step_ms: u32) -> Self {
        self.delay_ms += index as u32 * step_ms;
        self
    }

    pub fn on_scroll(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = Trigger::Scroll(trigger);
        self
    }

    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }

    /// Initial pose with transitions off, so hiding is instant.
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition: none;",
            self.from.opacity,
            self.from.transform()
        )
    }

    /// Initial pose, animated back without the entrance delay.
    pub fn reversed_style(&self) -> String {
        let timing = format!("{}ms {}", self.duration_ms, self.ease.css());
        format!(
            "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing};",
            self.from.opacity,
            self.from.transform(),
            timing = timing
        )
    }

    /// Resting pose, transitioned into with this entrance's timing.
    pub fn shown_style(&self) -> String {
        let timing = format!("{}ms {} {}ms", self.duration_ms, self.ease.css(), self.delay_ms);
        format!(
            "opacity: 1; transform: none; transition: opacity {timing}, transform {timing};",
            timing = timing
        )
    }
}

/// Where an element sits relative to its trigger lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

impl Zone {
    /// `top` and `bottom` are the element's bounding box relative to the viewport.
    pub fn locate(top: f64, bottom: f64, viewport_height: f64, trigger: &ScrollTrigger) -> Zone {
        let start_line = trigger.start * viewport_height;
        let end_line = trigger.end * viewport_height;
        if top > start_line {
            Zone::Before
        } else if bottom < end_line {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Hidden,
    Shown,
}

impl Playback {
    fn apply(self, action: Action) -> Playback {
        match action {
            Action::Play => Playback::Shown,
            Action::Reverse => Playback::Hidden,
            Action::None => self,
        }
    }

    /// Applies every crossing between two zones, in scroll order.
    pub fn advance(self, from: Zone, to: Zone, actions: &ToggleActions) -> Playback {
        let crossings = match (from, to) {
            (Zone::Before, Zone::Active) => vec![actions.on_enter],
            (Zone::Active, Zone::After) => vec![actions.on_leave],
            (Zone::Before, Zone::After) => vec![actions.on_enter, actions.on_leave],
            (Zone::After, Zone::Active) => vec![actions.on_enter_back],
            (Zone::Active, Zone::Before) => vec![actions.on_leave_back],
            (Zone::After, Zone::Before) => vec![actions.on_enter_back, actions.on_leave_back],
            _ => vec![],
        };
        crossings.into_iter().fold(self, |state, action| state.apply(action))
    }

    /// State for an element first seen in `zone`, as if scrolled there from the top.
    pub fn initial(zone: Zone, actions: &ToggleActions) -> Playback {
        Playback::Hidden.advance(Zone::Before, zone, actions)
    }
}

/// Sequential steps where each may start before the previous one ends.
#[derive(Debug, Default)]
pub struct Timeline {
    cursor_ms: i64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a step of `duration_ms` starting `overlap_ms` before the previous
    /// step ends, and returns its absolute start delay.
    pub fn then(&mut self, duration_ms: u32, overlap_ms: u32) -> u32 {
        let start = (self.cursor_ms - overlap_ms as i64).max(0);
        self.cursor_ms = self.cursor_ms.max(start + duration_ms as i64);
        start as u32
    }

    pub fn total_ms(&self) -> u32 {
        self.cursor_ms as u32
    }
}

/// Eased counter value for a stat counting up from zero.
pub fn count_up(target: u32, elapsed_ms: u32, delay_ms: u32, duration_ms: u32) -> u32 {
    if elapsed_ms <= delay_ms {
        return 0;
    }
    if duration_ms == 0 {
        return target;
    }
    let t = (elapsed_ms - delay_ms) as f64 / duration_ms as f64;
    let value = (Ease::Power2Out.apply(t) * target as f64).ceil();
    (value as u32).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn zone(top: f64, bottom: f64) -> Zone {
        Zone::locate(top, bottom, VH, &ScrollTrigger::SECTION)
    }

    #[test]
    fn zones_follow_the_trigger_lines() {
        assert_eq!(zone(900.0, 1200.0), Zone::Before);
        assert_eq!(zone(700.0, 1000.0), Zone::Active);
        assert_eq!(zone(-500.0, 150.0), Zone::After);
        // exactly on the start line counts as entered
        assert_eq!(zone(800.0, 1100.0), Zone::Active);
    }

    #[test]
    fn card_trigger_uses_wider_lines() {
        let card = ScrollTrigger::CARD;
        assert_eq!(Zone::locate(820.0, 900.0, VH, &card), Zone::Active);
        assert_eq!(Zone::locate(-100.0, 170.0, VH, &card), Zone::Active);
        assert_eq!(Zone::locate(-100.0, 140.0, VH, &card), Zone::After);
    }

    #[test]
    fn plays_on_enter_and_reverses_on_leave_back() {
        let actions = ToggleActions::default();
        let shown = Playback::Hidden.advance(Zone::Before, Zone::Active, &actions);
        assert_eq!(shown, Playback::Shown);
        let hidden = shown.advance(Zone::Active, Zone::Before, &actions);
        assert_eq!(hidden, Playback::Hidden);
        let replayed = hidden.advance(Zone::Before, Zone::Active, &actions);
        assert_eq!(replayed, Playback::Shown);
    }

    #[test]
    fn leaving_past_the_end_keeps_content_visible() {
        let actions = ToggleActions::default();
        let state = Playback::Shown.advance(Zone::Active, Zone::After, &actions);
        assert_eq!(state, Playback::Shown);
        let state = state.advance(Zone::After, Zone::Active, &actions);
        assert_eq!(state, Playback::Shown);
    }

    #[test]
    fn jumps_apply_every_crossing_in_order() {
        let actions = ToggleActions::default();
        assert_eq!(
            Playback::Hidden.advance(Zone::Before, Zone::After, &actions),
            Playback::Shown
        );
        assert_eq!(
            Playback::Shown.advance(Zone::After, Zone::Before, &actions),
            Playback::Hidden
        );
    }

    #[test]
    fn staying_in_a_zone_changes_nothing() {
        let actions = ToggleActions::default();
        for zone in [Zone::Before, Zone::Active, Zone::After] {
            assert_eq!(Playback::Hidden.advance(zone, zone, &actions), Playback::Hidden);
            assert_eq!(Playback::Shown.advance(zone, zone, &actions), Playback::Shown);
        }
    }

    #[test]
    fn elements_loaded_below_the_fold_start_hidden() {
        let actions = ToggleActions::default();
        assert_eq!(Playback::initial(Zone::Before, &actions), Playback::Hidden);
        assert_eq!(Playback::initial(Zone::Active, &actions), Playback::Shown);
        assert_eq!(Playback::initial(Zone::After, &actions), Playback::Shown);
    }

    #[test]
    fn stagger_adds_per_index_delay() {
        let base = EnterTransition::pop(30.0, 0.9).duration(600);
        assert_eq!(base.stagger(0, 100).delay_ms, 0);
        assert_eq!(base.stagger(3, 100).delay_ms, 300);
        assert_eq!(base.delay(1000).stagger(2, 200).delay_ms, 1400);
    }

    #[test]
    fn styles_describe_both_ends_of_the_transition() {
        let t = EnterTransition::pop(30.0, 0.9).duration(600).stagger(1, 100);
        assert_eq!(
            t.hidden_style(),
            "opacity: 0; transform: translate(0px, 30px) scale(0.9); transition: none;"
        );
        let shown = t.shown_style();
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("opacity 600ms cubic-bezier(0.215, 0.61, 0.355, 1) 100ms"));
    }

    #[test]
    fn reversing_animates_back_without_delay() {
        let t = EnterTransition::rise(50.0).stagger(2, 150);
        let reversed = t.reversed_style();
        assert!(reversed.starts_with("opacity: 0; transform: translate(0px, 50px);"));
        assert!(reversed.ends_with("transform 800ms cubic-bezier(0.215, 0.61, 0.355, 1);"));
    }

    #[test]
    fn hero_timeline_overlaps_steps() {
        let mut tl = Timeline::new();
        assert_eq!(tl.then(1000, 0), 0);
        assert_eq!(tl.then(800, 500), 500);
        assert_eq!(tl.then(600, 300), 1000);
        assert_eq!(tl.then(600, 200), 1400);
        assert_eq!(tl.then(1000, 800), 1200);
        assert_eq!(tl.total_ms(), 2200);
    }

    #[test]
    fn timeline_never_starts_before_zero() {
        let mut tl = Timeline::new();
        assert_eq!(tl.then(300, 1000), 0);
    }

    #[test]
    fn eases_hit_both_ends() {
        for ease in [Ease::Power2Out, Ease::Power3Out, Ease::Power2InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);
            assert!(ease.apply(0.5) > 0.0 && ease.apply(0.5) < 1.0);
        }
    }

    #[test]
    fn count_up_waits_then_reaches_target() {
        assert_eq!(count_up(50, 500, 1000, 2000), 0);
        let mid = count_up(50, 2000, 1000, 2000);
        assert!(mid > 0 && mid < 50);
        assert_eq!(count_up(50, 3000, 1000, 2000), 50);
        assert_eq!(count_up(50, 9000, 1000, 2000), 50);
    }
}
