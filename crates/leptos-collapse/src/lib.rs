//! Leptos Collapse Utilities
//!
//! Height-animated expand/collapse panels and auto-growing textareas.
//! The open/closed phase lives in a small state machine; the DOM helpers
//! only write inline `height` styles and leave the easing to CSS transitions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlTextAreaElement};

/// Delay before checking whether an expanded panel runs past the viewport
pub const SCROLL_CHECK_DELAY_MS: u32 = 400;

/// Space left below a panel after scrolling it into view
pub const SCROLL_MARGIN_PX: f64 = 40.0;

/// Animation phase of a single panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// DOM work requested by a phase change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStep {
    /// Pin height to 0, then to the natural content height on the next frame
    Expand,
    /// Pin height to the current height, then to 0 on the next frame
    Collapse,
    /// Drop the pinned height back to `auto`
    Release,
}

/// Per-panel state machine.
///
/// `Collapsed --expand--> Expanding --transition_end--> Expanded`
/// `Expanded --collapse--> Collapsing --frame_tick--> Collapsed`
///
/// Reversing direction mid-transition is allowed and not reconciled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panel {
    phase: PanelPhase,
}

impl Panel {
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the panel carries the `open` class.
    /// A collapsing panel keeps it until the frame that zeroes its height.
    pub fn is_open(&self) -> bool {
        self.phase != PanelPhase::Collapsed
    }

    /// Click on the header: direction follows the `open` class.
    pub fn toggle(&mut self) -> Option<PanelStep> {
        if self.is_open() {
            self.collapse()
        } else {
            self.expand()
        }
    }

    /// No-op when already open.
    pub fn expand(&mut self) -> Option<PanelStep> {
        match self.phase {
            PanelPhase::Expanding | PanelPhase::Expanded => None,
            PanelPhase::Collapsed | PanelPhase::Collapsing => {
                self.phase = PanelPhase::Expanding;
                Some(PanelStep::Expand)
            }
        }
    }

    pub fn collapse(&mut self) -> Option<PanelStep> {
        match self.phase {
            PanelPhase::Expanding | PanelPhase::Expanded => {
                self.phase = PanelPhase::Collapsing;
                Some(PanelStep::Collapse)
            }
            PanelPhase::Collapsed | PanelPhase::Collapsing => None,
        }
    }

    /// The CSS height transition finished.
    pub fn transition_end(&mut self) -> Option<PanelStep> {
        if self.phase == PanelPhase::Expanding {
            self.phase = PanelPhase::Expanded;
            Some(PanelStep::Release)
        } else {
            None
        }
    }

    /// The frame after a collapse was started.
    pub fn frame_tick(&mut self) {
        if self.phase == PanelPhase::Collapsing {
            self.phase = PanelPhase::Collapsed;
        }
    }
}

fn set_height(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("height", value);
}

/// Measure the natural height, pin to 0 and grow to it on the next frame.
pub fn start_expand(el: &HtmlElement) {
    set_height(el, "auto");
    let full = format!("{}px", el.scroll_height());
    set_height(el, "0px");

    let el = el.clone();
    request_animation_frame(move || set_height(&el, &full));
}

/// Pin the current height and shrink to 0 on the next frame.
/// `on_frame` runs in that same frame.
pub fn start_collapse<F>(el: &HtmlElement, on_frame: F)
where
    F: FnOnce() + 'static,
{
    set_height(el, &format!("{}px", el.scroll_height()));

    let el = el.clone();
    request_animation_frame(move || {
        set_height(&el, "0");
        on_frame();
    });
}

pub fn release_height(el: &HtmlElement) {
    set_height(el, "auto");
}

/// How far to scroll so that `bottom` sits above the viewport edge with margin
pub fn overflow_below_viewport(bottom: f64, viewport_bottom: f64) -> Option<f64> {
    (bottom > viewport_bottom).then(|| bottom - viewport_bottom + SCROLL_MARGIN_PX)
}

/// After [`SCROLL_CHECK_DELAY_MS`], smooth-scroll the window if `el` ends below the viewport.
pub fn scroll_into_view_later(el: &HtmlElement) {
    let el = el.clone();
    Timeout::new(SCROLL_CHECK_DELAY_MS, move || {
        let win = window();
        let Some(viewport_bottom) = win.inner_height().ok().and_then(|h| h.as_f64()) else {
            return;
        };
        let bottom = el.get_bounding_client_rect().bottom();
        if let Some(top) = overflow_below_viewport(bottom, viewport_bottom) {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            win.scroll_by_with_scroll_to_options(&opts);
        }
    })
    .forget();
}

/// Shrink-then-grow so the textarea never keeps a stale scrollbar
pub fn auto_resize(el: &HtmlTextAreaElement) {
    let el: &HtmlElement = el;
    set_height(el, "auto");
    set_height(el, &format!("{}px", el.scroll_height()));
}
