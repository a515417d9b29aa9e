//! Hover/click highlighting as an explicit state machine.
//!
//! [`transition`] is pure: it maps a state and an event to the next state plus the
//! effects to perform. [`Controller`] owns the fade deadline and applies effects to a
//! [`Surface`]; time only enters through the `now` arguments of its methods.

use crate::session::{Popup, Session};
use regex::Regex;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Identity of one scheduled fade-out. Stale timeouts are recognized by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    Highlighted(String),
    /// The pointer left `region`; it clears when the timer fires.
    Fading(String, TimerId),
}

impl State {
    /// Region currently shown, fading or not.
    pub fn region(&self) -> Option<&str> {
        match self {
            State::Idle => None,
            State::Highlighted(r) | State::Fading(r, _) => Some(r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Select(String),
    Deselect,
    Timeout(TimerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowPopup(String),
    HighlightTrail(Option<String>),
    /// Toggle the page-level "show" marker.
    SetShowing(bool),
    ScheduleFade(TimerId),
    CancelFade(TimerId),
}

/// Next state and effects for `event`. `fresh` is used only if a fade gets scheduled.
pub fn transition(state: &State, event: Event, fresh: TimerId) -> (State, Vec<Effect>) {
    use Effect::*;
    match (state, event) {
        (State::Idle, Event::Select(r)) => (
            State::Highlighted(r.clone()),
            vec![ShowPopup(r.clone()), HighlightTrail(Some(r)), SetShowing(true)],
        ),
        (State::Highlighted(cur), Event::Select(r)) if *cur == r => (state.clone(), vec![]),
        (State::Highlighted(_), Event::Select(r)) => (
            State::Highlighted(r.clone()),
            vec![ShowPopup(r.clone()), HighlightTrail(Some(r))],
        ),
        (State::Highlighted(cur), Event::Deselect) => {
            (State::Fading(cur.clone(), fresh), vec![ScheduleFade(fresh)])
        }
        (State::Fading(cur, t), Event::Select(r)) if *cur == r => {
            (State::Highlighted(r), vec![CancelFade(*t)])
        }
        (State::Fading(_, t), Event::Select(r)) => (
            State::Highlighted(r.clone()),
            vec![CancelFade(*t), ShowPopup(r.clone()), HighlightTrail(Some(r))],
        ),
        (State::Fading(_, t), Event::Timeout(fired)) if *t == fired => {
            (State::Idle, vec![SetShowing(false), HighlightTrail(None)])
        }
        // Deselect while fading or idle, stray timeouts: nothing to do.
        (_, Event::Deselect | Event::Timeout(_)) => (state.clone(), vec![]),
    }
}

/// Where highlight effects land.
pub trait Surface {
    fn show_popup(&mut self, region: &str);
    fn highlight_trail(&mut self, region: Option<&str>);
    fn set_showing(&mut self, showing: bool);
}

/// Drives [`transition`] and keeps the single live fade deadline.
#[derive(Debug)]
pub struct Controller<S> {
    state: State,
    surface: S,
    fade_delay: Duration,
    deadline: Option<(TimerId, Instant)>,
    next_timer: u64,
}

impl<S: Surface> Controller<S> {
    pub fn new(surface: S, fade_delay: Duration) -> Self {
        Self {
            state: State::Idle,
            surface,
            fade_delay,
            deadline: None,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// When the pending fade (if any) fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.map(|(_, at)| at)
    }

    pub fn select(&mut self, region: &str, now: Instant) -> Vec<Effect> {
        self.dispatch(Event::Select(region.to_string()), now)
    }

    pub fn deselect(&mut self, now: Instant) -> Vec<Effect> {
        self.dispatch(Event::Deselect, now)
    }

    /// Fire the fade if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        match self.deadline {
            Some((id, at)) if now >= at => {
                self.deadline = None;
                self.dispatch(Event::Timeout(id), now)
            }
            _ => vec![],
        }
    }

    fn dispatch(&mut self, event: Event, now: Instant) -> Vec<Effect> {
        let fresh = TimerId(self.next_timer);
        let (next, effects) = transition(&self.state, event, fresh);
        log::debug!("highlight {:?} -> {:?}", self.state, next);
        self.state = next;
        for effect in &effects {
            match effect {
                Effect::ShowPopup(r) => self.surface.show_popup(r),
                Effect::HighlightTrail(r) => self.surface.highlight_trail(r.as_deref()),
                Effect::SetShowing(on) => self.surface.set_showing(*on),
                Effect::ScheduleFade(id) => {
                    self.next_timer += 1;
                    self.deadline = Some((*id, now + self.fade_delay));
                }
                Effect::CancelFade(id) => {
                    if self.deadline.is_some_and(|(live, _)| live == *id) {
                        self.deadline = None;
                    }
                }
            }
        }
        effects
    }
}

/// In-memory rendering surface: the popup, trail classes and page marker a browser
/// would hold, computed from a session.
#[derive(Debug, Clone)]
pub struct SessionSurface<'a> {
    session: &'a Session,
    pub popup: Option<Popup>,
    pub highlighted: Option<String>,
    pub showing: bool,
    /// How many times a popup was (re)built.
    pub popup_builds: usize,
}

impl<'a> SessionSurface<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            popup: None,
            highlighted: None,
            showing: false,
            popup_builds: 0,
        }
    }

    /// Class attributes of every trail group, in region order.
    pub fn trail_classes(&self) -> Vec<String> {
        self.session
            .regions()
            .map(|(r, _)| crate::render::trail::trail_class(r, self.highlighted.as_deref() == Some(r)))
            .collect()
    }
}

impl Surface for SessionSurface<'_> {
    fn show_popup(&mut self, region: &str) {
        self.popup_builds += 1;
        self.popup = Some(self.session.popup(region).unwrap_or_else(|| Popup {
            label: region.to_string(),
            upper: String::new(),
            lower: String::new(),
        }));
    }

    fn highlight_trail(&mut self, region: Option<&str>) {
        self.highlighted = region.map(str::to_string);
    }

    fn set_showing(&mut self, showing: bool) {
        self.showing = showing;
    }
}

fn trail_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^trail (..)( hilite)?$").expect("valid trail class regex"))
}

fn trail_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\btrail\s*").expect("valid trail marker regex"))
}

/// Split a trail group's class into (region, highlighted).
pub fn parse_trail_class(class: &str) -> Option<(&str, bool)> {
    let caps = trail_class_re().captures(class)?;
    Some((caps.get(1)?.as_str(), caps.get(2).is_some()))
}

/// Region addressed by an element inside a trail group, given that group's class.
///
/// Removes the `trail` marker and keeps the first two characters of what remains.
pub fn region_from_trail_class(class: &str) -> Option<String> {
    if !trail_marker_re().is_match(class) {
        return None;
    }
    let rest = trail_marker_re().replace(class, "");
    Some(rest.chars().take(2).collect())
}
