use std::fmt;
use std::rc::Rc;

use swipe_core::Easing;

use crate::button::ActionButton;
use crate::error::{Result, SwipeError};
use crate::gesture::DEFAULT_SWIPE_THRESHOLD;

/// Row behaviour flags. Everything has a default; only the buttons (held by
/// the controller) are required.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Parent-controlled open flag. Only a true -> false change has an effect.
    pub is_open: bool,
    /// Close the row after any button press.
    pub auto_close: bool,
    pub should_bounce_on_mount: bool,
    /// Release distance past which the swipe completes.
    pub swipe_threshold: f32,
    pub is_rtl: bool,
    pub easing: Easing,
    /// Fire `on_open` when a right swipe from closed is released into the
    /// bounce-back hint, even though the row never opens. Turn off to report
    /// nothing but `on_swipe_end` for the hint.
    pub bounce_reports_open: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            is_open: false,
            auto_close: false,
            should_bounce_on_mount: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            is_rtl: false,
            easing: Easing::EaseInOut,
            bounce_reports_open: true,
        }
    }
}

impl SwipeConfig {
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn with_bounce_on_mount(mut self, bounce: bool) -> Self {
        self.should_bounce_on_mount = bounce;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_bounce_reports_open(mut self, report: bool) -> Self {
        self.bounce_reports_open = report;
        self
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn validate(&self, buttons: &[ActionButton]) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(SwipeError::InvalidThreshold(self.swipe_threshold));
        }
        for (index, button) in buttons.iter().enumerate() {
            if let Some(width) = button.fixed_width {
                if !width.is_finite() || width < 0.0 {
                    return Err(SwipeError::InvalidFixedWidth { index, width });
                }
            }
        }
        Ok(())
    }
}

pub type Callback = Rc<dyn Fn()>;

/// Lifecycle hooks. Absent hooks are skipped.
#[derive(Clone, Default)]
pub struct SwipeCallbacks {
    pub on_open: Option<Callback>,
    pub on_close: Option<Callback>,
    pub on_swipe_start: Option<Callback>,
    pub on_swipe_end: Option<Callback>,
}

impl SwipeCallbacks {
    pub fn on_open(mut self, f: impl Fn() + 'static) -> Self {
        self.on_open = Some(Rc::new(f));
        self
    }

    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_start(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_start = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_end(mut self, f: impl Fn() + 'static) -> Self {
        self.on_swipe_end = Some(Rc::new(f));
        self
    }
}

pub(crate) fn emit(cb: &Option<Callback>) {
    if let Some(cb) = cb {
        cb();
    }
}

impl fmt::Debug for SwipeCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_swipe_start", &self.on_swipe_start.is_some())
            .field("on_swipe_end", &self.on_swipe_end.is_some())
            .finish()
    }
}
