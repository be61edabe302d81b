//! Transition planning between two seat layouts
//!
//! Seat lists carry no keys, so an old and a new layout are matched by list position:
//! positions present in both are updates, positions only in the new list enter, and
//! positions only in the old list exit. Each phase is animated according to an
//! immutable [`TransitionConfig`].

use log::debug;
use serde::Deserialize;

use crate::layout::Seat;

/// How newly added seats appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnterStyle {
    /// Drawn in place immediately
    #[default]
    None,
    GrowFromZero,
    FromCenter,
    FromCenterAndGrow,
}

/// How persisting seats move to their new position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateStyle {
    None,
    #[default]
    Animate,
}

/// How removed seats disappear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStyle {
    /// Removed immediately
    None,
    ShrinkToZero,
    ToCenter,
    #[default]
    ToCenterAndShrink,
}

impl ExitStyle {
    /// Final circle of a seat leaving from `from`, or `None` when it is removed at once
    pub fn target(self, from: CircleState) -> Option<CircleState> {
        match self {
            ExitStyle::None => None,
            ExitStyle::ShrinkToZero => Some(from.collapsed()),
            ExitStyle::ToCenter => Some(from.at_center()),
            ExitStyle::ToCenterAndShrink => Some(from.at_center().collapsed()),
        }
    }
}

/// Animation policy for the three redraw phases
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub enter: EnterStyle,
    pub update: UpdateStyle,
    pub exit: ExitStyle,
    /// Duration of every animated transition, in milliseconds
    pub duration_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter: EnterStyle::default(),
            update: UpdateStyle::default(),
            exit: ExitStyle::default(),
            duration_ms: 1000,
        }
    }
}

impl TransitionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enter(mut self, enter: EnterStyle) -> Self {
        self.enter = enter;
        self
    }

    pub fn with_update(mut self, update: UpdateStyle) -> Self {
        self.update = update;
        self
    }

    pub fn with_exit(mut self, exit: ExitStyle) -> Self {
        self.exit = exit;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Which redraw phase a seat is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Update,
    Exit,
}

/// Drawable state of a seat circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleState {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl CircleState {
    pub fn of(seat: &Seat<'_>) -> Self {
        Self {
            cx: seat.cartesian.x,
            cy: seat.cartesian.y,
            r: seat.seat_radius,
        }
    }

    fn at_center(self) -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            ..self
        }
    }

    fn collapsed(self) -> Self {
        Self { r: 0.0, ..self }
    }
}

/// Planned animation for one seat position
#[derive(Debug, Clone, PartialEq)]
pub struct SeatTransition {
    /// Position in the seat list
    pub index: usize,
    pub phase: Phase,
    pub class_name: String,
    /// Party fill as declared, before palette resolution
    pub fill: String,
    pub title: Option<String>,
    pub from: CircleState,
    pub to: CircleState,
    pub animated: bool,
}

/// All seat transitions for one redraw
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub transitions: Vec<SeatTransition>,
    pub duration_ms: u32,
}

impl TransitionPlan {
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &SeatTransition> {
        self.transitions.iter().filter(move |t| t.phase == phase)
    }

    pub fn count(&self, phase: Phase) -> usize {
        self.phase(phase).count()
    }
}

fn describe(index: usize, phase: Phase, seat: &Seat<'_>) -> SeatTransition {
    let state = CircleState::of(seat);
    SeatTransition {
        index,
        phase,
        class_name: seat.class_name(),
        fill: seat.fill().to_string(),
        title: seat.member.and_then(|m| m.name()).map(str::to_string),
        from: state,
        to: state,
        animated: false,
    }
}

/// Diff two seat lists by position and plan each seat's animation
pub fn plan_transitions(
    previous: &[Seat<'_>],
    next: &[Seat<'_>],
    config: &TransitionConfig,
) -> TransitionPlan {
    let mut transitions = Vec::with_capacity(previous.len().max(next.len()));

    for (index, seat) in next.iter().enumerate() {
        let mut t = match previous.get(index) {
            Some(old) => {
                let mut t = describe(index, Phase::Update, seat);
                t.from = CircleState::of(old);
                t.animated = config.update == UpdateStyle::Animate;
                t
            }
            None => {
                let mut t = describe(index, Phase::Enter, seat);
                t.from = match config.enter {
                    EnterStyle::None => t.to,
                    EnterStyle::GrowFromZero => t.to.collapsed(),
                    EnterStyle::FromCenter => t.to.at_center(),
                    EnterStyle::FromCenterAndGrow => t.to.at_center().collapsed(),
                };
                t.animated = config.enter != EnterStyle::None;
                t
            }
        };
        if !t.animated {
            t.from = t.to;
        }
        transitions.push(t);
    }

    for (index, seat) in previous.iter().enumerate().skip(next.len()) {
        let mut t = describe(index, Phase::Exit, seat);
        if let Some(to) = config.exit.target(t.from) {
            t.to = to;
            t.animated = true;
            transitions.push(t);
        }
    }

    let plan = TransitionPlan {
        transitions,
        duration_ms: config.duration_ms,
    };
    debug!(
        "transition plan: {} entering, {} updating, {} exiting",
        plan.count(Phase::Enter),
        plan.count(Phase::Update),
        plan.count(Phase::Exit)
    );
    plan
}
