//! Navigation controller: keypress to focus change, with scroll-and-retry.
//!
//! The controller is frame-driven. A vertical move that finds nothing
//! scrolls the nearest container (or the page) and parks a
//! [`PendingRetry`]; the host calls [`NavigationController::tick`] with the
//! elapsed time (or [`NavigationController::resume_retry`] once layout has
//! settled) to run the next search. A keypress that lands while an attempt
//! is in flight is swallowed and stops any further scroll steps for that
//! attempt.

use spatial_types::config::NavSettings;
use spatial_types::input::{Direction, Key};

use crate::feedback::{self, FeedbackSink};
use crate::geometry::bias;
use crate::interaction::{InteractionEvent, Movement};
use crate::page::{NodeId, Page, ScrollTarget};
use crate::scroll::{boundary_reached, first_scroll_view, page_scroll_status};
use crate::search::SearchEngine;

/// A scroll-driven retry waiting for layout to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRetry {
    pub direction: Direction,
    pub remaining_ms: u32,
}

/// The keypress that started the attempt in flight.
#[derive(Debug, Clone)]
struct Attempt {
    key: String,
    origin: NodeId,
}

/// Per-enablement navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavigationSession {
    last_focused: Option<NodeId>,
    attempting_navigation: bool,
    key_press_during_navigation: bool,
    pending: Option<PendingRetry>,
    attempt: Option<Attempt>,
    /// Page scroll offset at the last focus change.
    last_scroll_y: Option<f32>,
    /// The current attempt scrolled something.
    scrolled: bool,
}

impl NavigationSession {
    pub fn last_focused(&self) -> Option<NodeId> {
        self.last_focused
    }

    pub fn is_attempting(&self) -> bool {
        self.attempting_navigation
    }

    pub fn key_press_during_navigation(&self) -> bool {
        self.key_press_during_navigation
    }

    pub fn pending(&self) -> Option<PendingRetry> {
        self.pending
    }

    fn finish(&mut self) -> Option<Attempt> {
        self.attempting_navigation = false;
        self.pending = None;
        self.attempt.take()
    }
}

/// Result of feeding an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// Not a navigation key, nothing focused, or navigation disabled. The
    /// host should let the key through.
    Ignored,
    /// Swallowed because an attempt is already in flight.
    Busy,
    Focused(NodeId),
    /// Scrolled; call `tick` or `resume_retry` to search again.
    Scrolled {
        target: ScrollTarget,
        delta: f32,
        retry_in_ms: u32,
    },
    /// The attempt ended with nowhere to go.
    NoTarget,
    /// Escape silenced the feedback sink.
    SoundsStopped,
}

impl NavOutcome {
    /// Should the host suppress the key's default action?
    pub fn handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Drives directional navigation for one page.
pub struct NavigationController<F: FeedbackSink> {
    settings: NavSettings,
    engine: SearchEngine,
    session: Option<NavigationSession>,
    feedback: F,
}

impl<F: FeedbackSink> NavigationController<F> {
    /// Create a controller. It starts enabled if the settings say so.
    pub fn new(settings: NavSettings, feedback: F) -> Self {
        let mut controller = Self {
            engine: SearchEngine::new(settings.tuning.clone()),
            session: None,
            settings,
            feedback,
        };
        if controller.settings.extension_enabled {
            controller.enable();
        }
        controller
    }

    pub fn enable(&mut self) {
        if self.session.is_none() {
            log::info!("Spatial navigation enabled");
            self.session = Some(NavigationSession::default());
        }
    }

    /// Drop the session and silence any playing cue.
    pub fn disable(&mut self) {
        if self.session.take().is_some() {
            log::info!("Spatial navigation disabled");
            self.feedback.stop_all();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.session.is_some()
    }

    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    /// Apply new settings. Toggles the session if `extension_enabled`
    /// changed.
    pub fn set_settings(&mut self, settings: NavSettings) {
        self.engine = SearchEngine::new(settings.tuning.clone());
        let enabled = settings.extension_enabled;
        self.settings = settings;
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }

    pub fn session(&self) -> Option<&NavigationSession> {
        self.session.as_ref()
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Handle a keydown with the browser's key name.
    pub fn handle_key<P: Page + ?Sized>(&mut self, page: &mut P, key: &str) -> NavOutcome {
        let profile = self.settings.navigation_type;
        let Some(session) = self.session.as_mut() else {
            return NavOutcome::Ignored;
        };

        if Key::parse(key) == Some(Key::Escape) {
            self.feedback.stop_all();
            return NavOutcome::SoundsStopped;
        }

        let dir = Direction::from_key(key, profile);
        if dir == Direction::None {
            return NavOutcome::Ignored;
        }
        let Some(start) = session.last_focused else {
            return NavOutcome::Ignored;
        };

        if session.attempting_navigation {
            log::debug!("Key {key} during navigation attempt; stopping scroll retries");
            session.key_press_during_navigation = true;
            return NavOutcome::Busy;
        }

        session.attempting_navigation = true;
        session.key_press_during_navigation = false;
        session.scrolled = false;
        session.attempt = Some(Attempt {
            key: key.to_ascii_lowercase(),
            origin: start,
        });
        self.attempt(page, dir)
    }

    /// Count down a pending retry; runs it once the settle delay elapsed.
    pub fn tick<P: Page + ?Sized>(&mut self, page: &mut P, elapsed_ms: u32) -> Option<NavOutcome> {
        let pending = self.session.as_mut()?.pending.as_mut()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return None;
        }
        self.resume_retry(page)
    }

    /// Run a pending retry now.
    pub fn resume_retry<P: Page + ?Sized>(&mut self, page: &mut P) -> Option<NavOutcome> {
        let pending = self.session.as_mut()?.pending.take()?;
        Some(self.attempt(page, pending.direction))
    }

    /// Record a focus change and announce the element.
    ///
    /// The controller calls this itself after moving focus; hosts call it
    /// for focus changes made any other way (mouse, tab key).
    pub fn on_focus<P: Page + ?Sized>(&mut self, page: &P, node: NodeId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.last_focused = Some(node);

        let scroll_y = page.page_scroll().scroll_top;
        let page_moved = session.last_scroll_y.is_some_and(|y| y != scroll_y);
        let scrolled = page_moved || std::mem::take(&mut session.scrolled);
        let previous_y = session.last_scroll_y.replace(scroll_y);

        let here = bias(page, node, true);
        if scrolled {
            if page_moved {
                let direction = match previous_y {
                    Some(y) if scroll_y < y => Direction::Up,
                    _ => Direction::Down,
                };
                InteractionEvent::Scroll {
                    element_type: tag_name(page, node),
                    direction,
                }
                .log(self.settings.detailed_logging);
            }
            if let Some(cue) = feedback::scroll_beep(&self.settings, here) {
                self.feedback.play(cue);
            }
        }

        let text = self.engine.oracle().readout(page, node);
        log::debug!("Focus node {node}: {text:?}");
        if let Some(cue) = feedback::speech(&self.settings, &text, here) {
            self.feedback.play(cue);
        }
    }

    fn attempt<P: Page + ?Sized>(&mut self, page: &mut P, dir: Direction) -> NavOutcome {
        let Some(start) = self.session.as_ref().and_then(|s| s.last_focused) else {
            return NavOutcome::Ignored;
        };
        match self.engine.find(page, start, dir) {
            Some(found) => {
                page.focus(found);
                if let Some(attempt) = self.session.as_mut().and_then(NavigationSession::finish) {
                    InteractionEvent::Keypress {
                        key: attempt.key,
                        direction: dir,
                        movement: Movement::Moved {
                            from: tag_name(page, attempt.origin),
                            to: tag_name(page, found),
                        },
                    }
                    .log(self.settings.detailed_logging);
                }
                self.on_focus(page, found);
                NavOutcome::Focused(found)
            },
            None if dir.is_vertical() => self.scroll_and_retry(page, start, dir),
            None => self.give_up(page, start, dir),
        }
    }

    fn scroll_and_retry<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        start: NodeId,
        dir: Direction,
    ) -> NavOutcome {
        let interrupted = self
            .session
            .as_ref()
            .is_some_and(|s| s.key_press_during_navigation);
        if interrupted {
            log::debug!("Scroll retry cancelled by keypress");
            return self.give_up(page, start, dir);
        }

        let Some(target) = scroll_target(page, start, dir) else {
            return self.give_up(page, start, dir);
        };
        let step = self.engine.tuning().scroll_step;
        let delta = if dir == Direction::Up { -step } else { step };

        let before = offset(page, target);
        page.scroll_by(target, delta);
        if offset(page, target) == before {
            log::debug!("Scroll of {target:?} did not move; giving up");
            return self.give_up(page, start, dir);
        }
        log::debug!("No element {dir:?}; scrolled {target:?} by {delta}");

        if let Some(cue) = feedback::blank_region_click(&self.settings, bias(page, start, true)) {
            self.feedback.play(cue);
        }

        let retry_in_ms = self.engine.tuning().settle_delay_ms;
        if let Some(session) = self.session.as_mut() {
            session.scrolled = true;
            session.pending = Some(PendingRetry {
                direction: dir,
                remaining_ms: retry_in_ms,
            });
        }
        NavOutcome::Scrolled {
            target,
            delta,
            retry_in_ms,
        }
    }

    fn give_up<P: Page + ?Sized>(&mut self, page: &P, start: NodeId, dir: Direction) -> NavOutcome {
        if let Some(attempt) = self.session.as_mut().and_then(NavigationSession::finish) {
            InteractionEvent::Keypress {
                key: attempt.key,
                direction: dir,
                movement: Movement::unsuccessful(),
            }
            .log(self.settings.detailed_logging);
        }
        if let Some(cue) = feedback::edge_click(&self.settings, bias(page, start, true)) {
            self.feedback.play(cue);
        }
        NavOutcome::NoTarget
    }
}

/// Nearest scroll container with room left in `dir`, else the page if it
/// can still scroll.
fn scroll_target<P: Page + ?Sized>(page: &mut P, start: NodeId, dir: Direction) -> Option<ScrollTarget> {
    let mut view = first_scroll_view(page, start);
    while let Some(v) = view {
        if !boundary_reached(page, v, dir) {
            return Some(ScrollTarget::Element(v));
        }
        view = first_scroll_view(page, v);
    }
    page_scroll_status(page)
        .can_scroll(dir)
        .then_some(ScrollTarget::Page)
}

fn offset<P: Page + ?Sized>(page: &P, target: ScrollTarget) -> f32 {
    match target {
        ScrollTarget::Page => page.page_scroll().scroll_top,
        ScrollTarget::Element(id) => page.scroll_metrics(id).scroll_top,
    }
}

fn tag_name<P: Page + ?Sized>(page: &P, node: NodeId) -> String {
    page.tag(node)
        .map(|t| t.as_str().to_string())
        .unwrap_or_default()
}
