//! The row's gesture/animation state machine.
//!
//! ```text
//!                grant                  release
//! ClosedResting ──────▶ Dragging ──────────────┬──▶ AnimatingToOpen ──▶ OpenResting
//! OpenResting   ──────▶   │  ▲ move            ├──▶ AnimatingToClosed ─▶ ClosedResting
//!                         └──┘                 └──▶ BounceBack ──▶ AnimatingToClosed
//! ```
//!
//! The host feeds pan callbacks in arrival order and calls [`SwipeController::tick`]
//! once per frame until it returns `false`. Lifecycle callbacks fire
//! synchronously from those calls.

use swipe_core::{Clock, Dispose, SharedClock, Size, Timeout, Vec2};
use web_time::Duration;

use crate::button::ActionButton;
use crate::config::{SwipeCallbacks, SwipeConfig, emit};
use crate::error::{Result, SwipeError};
use crate::gesture::{
    CLOSED_OFFSET, GestureSample, MoveIntent, ReleaseIntent, classify_move, classify_release,
    directional_dx, is_horizontal_swipe, open_duration_ms,
};
use crate::layout::{ButtonFrame, RowGeometry, RowLayout};
use crate::position::{PositionModel, Settled};

/// Length of the open/close tween, in ms.
pub const SWIPE_DURATION: f32 = 300.0;
/// Delay before the mount bounce, so it doesn't compete with initial loading.
pub const ON_MOUNT_BOUNCE_DELAY: Duration = Duration::from_millis(700);
pub const ON_MOUNT_BOUNCE_DURATION: f32 = 400.0;
/// How far past closed the row overshoots when bouncing back.
pub const RIGHT_SWIPE_BOUNCE_BACK_DISTANCE: f32 = 30.0;
pub const RIGHT_SWIPE_BOUNCE_BACK_DURATION: f32 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    ClosedResting,
    Dragging,
    AnimatingToOpen,
    AnimatingToClosed,
    OpenResting,
    BounceBack,
}

pub struct SwipeController {
    config: SwipeConfig,
    callbacks: SwipeCallbacks,
    buttons: Vec<ActionButton>,
    clock: SharedClock,
    position: PositionModel,
    layout: RowLayout,
    phase: SwipePhase,
    swipe_started: bool,
    /// Generation of the bounce tween whose settle chains into a close.
    bounce_generation: Option<u64>,
    mount_bounce: Option<Timeout>,
    teardown: Option<Dispose>,
}

impl SwipeController {
    pub fn new(
        config: SwipeConfig,
        buttons: Vec<ActionButton>,
        callbacks: SwipeCallbacks,
        clock: SharedClock,
    ) -> Result<Self> {
        config.validate(&buttons)?;
        Ok(Self {
            position: PositionModel::new(clock.clone(), config.easing),
            config,
            callbacks,
            buttons,
            clock,
            layout: RowLayout::new(),
            phase: SwipePhase::ClosedResting,
            swipe_started: false,
            bounce_generation: None,
            mount_bounce: None,
            teardown: None,
        })
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Current horizontal translation of the content row.
    pub fn offset(&self) -> f32 {
        self.position.offset()
    }

    pub fn previous_resting(&self) -> f32 {
        self.position.previous_resting()
    }

    pub fn position(&self) -> &PositionModel {
        &self.position
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    pub fn geometry(&self) -> RowGeometry {
        self.layout.geometry()
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn button_frames(&self) -> Vec<ButtonFrame> {
        self.layout.button_frames(self.config.is_rtl)
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }

    /// Index of the revealed button under `point` (row coordinates). Nothing
    /// is hit while the row is closed.
    pub fn button_at(&self, point: Vec2) -> Option<usize> {
        if self.phase == SwipePhase::ClosedResting {
            return None;
        }
        self.layout.button_at(point, self.config.is_rtl)
    }

    // --- lifecycle ------------------------------------------------------

    /// Arms the mount bounce if configured.
    pub fn mount(&mut self) {
        if !self.config.should_bounce_on_mount || self.mount_bounce.is_some() {
            return;
        }
        let timeout = Timeout::new(self.clock.now(), ON_MOUNT_BOUNCE_DELAY);
        self.teardown = Some(timeout.canceller());
        self.mount_bounce = Some(timeout);
        log::debug!("mount bounce armed");
    }

    /// Cancels the pending mount bounce, if it has not fired yet.
    pub fn unmount(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown.run();
        }
    }

    pub fn measure(&mut self, size: Size) -> bool {
        self.layout.measure(size, &self.buttons)
    }

    pub fn remeasure(&mut self, size: Size) -> bool {
        self.layout.remeasure(size, &self.buttons)
    }

    pub fn on_content_layout(&mut self, height: f32) {
        self.layout.on_content_layout(height);
    }

    /// Parent update of the `is_open` flag. Closing is the only programmatic
    /// transition; opening is driven by gestures alone.
    pub fn set_open(&mut self, is_open: bool) {
        let was_open = self.config.is_open;
        self.config.is_open = is_open;
        if was_open
            && !is_open
            && !matches!(
                self.phase,
                SwipePhase::AnimatingToClosed | SwipePhase::ClosedResting
            )
        {
            log::debug!("closing on parent request");
            self.animate_closed(SWIPE_DURATION);
        }
    }

    /// Parent update of the bounce flag. Returns whether the row needs to be
    /// redrawn; turning the bounce off never does.
    pub fn set_should_bounce_on_mount(&mut self, bounce: bool) -> bool {
        let was = self.config.should_bounce_on_mount;
        self.config.should_bounce_on_mount = bounce;
        !(was && !bounce)
    }

    // --- pan handling ---------------------------------------------------

    /// Whether the row should take the gesture from its children.
    pub fn should_capture(&self, sample: &GestureSample) -> bool {
        is_horizontal_swipe(sample)
    }

    /// The row never hands an in-progress gesture to another responder.
    pub fn on_termination_request(&self) -> bool {
        false
    }

    pub fn on_grant(&mut self) {
        self.swipe_started = false;
        self.set_phase(SwipePhase::Dragging);
    }

    pub fn on_move(&mut self, sample: GestureSample) {
        if self.phase != SwipePhase::Dragging {
            self.on_grant();
        }

        // A tween still in flight is judged by where it would have left the row.
        let previous = self.position.resting_target();
        match classify_move(previous, &sample, self.config.is_rtl) {
            MoveIntent::Suppressed => {}
            MoveIntent::SlowTrack => self.position.track_slow_speed(sample.dx),
            MoveIntent::FullTrack => {
                if !self.swipe_started {
                    self.swipe_started = true;
                    emit(&self.callbacks.on_swipe_start);
                }
                self.position.track_full_speed(sample.dx);
            }
        }
        log::trace!("move dx={} -> offset {}", sample.dx, self.position.offset());
    }

    pub fn on_release(&mut self, sample: GestureSample) {
        let previous = self.position.resting_target();
        let intent = classify_release(
            previous,
            &sample,
            self.config.swipe_threshold,
            self.config.is_rtl,
        );
        log::debug!("release dx={} vx={}: {intent:?}", sample.dx, sample.vx);

        match intent {
            ReleaseIntent::BounceBack => {
                if self.config.bounce_reports_open {
                    emit(&self.callbacks.on_open);
                }
                self.animate_bounce_back(RIGHT_SWIPE_BOUNCE_BACK_DURATION);
            }
            ReleaseIntent::Open => {
                emit(&self.callbacks.on_open);
                let moved = directional_dx(&sample, self.config.is_rtl);
                let duration =
                    open_duration_ms(self.layout.max_swipe_distance(), moved, sample.vx);
                self.animate_open(duration);
            }
            ReleaseIntent::Close => {
                emit(&self.callbacks.on_close);
                self.animate_closed(SWIPE_DURATION);
            }
            ReleaseIntent::SnapBack => {
                if previous == CLOSED_OFFSET {
                    self.animate_closed(SWIPE_DURATION);
                } else {
                    self.animate_open(SWIPE_DURATION);
                }
            }
        }

        self.swipe_started = false;
        emit(&self.callbacks.on_swipe_end);
    }

    /// Another responder took over; handled exactly like a release.
    pub fn on_terminate(&mut self, sample: GestureSample) {
        self.on_release(sample);
    }

    /// Runs the button's action, then closes the row if either the button or
    /// the row asks for it.
    pub fn press_button(&mut self, index: usize) -> Result<()> {
        let len = self.buttons.len();
        let button = self
            .buttons
            .get(index)
            .ok_or(SwipeError::ButtonOutOfRange { index, len })?;

        if let Some(on_press) = button.on_press.clone() {
            on_press();
        }
        if button.auto_close || self.config.auto_close {
            self.animate_closed(SWIPE_DURATION);
        }
        Ok(())
    }

    // --- frame loop -----------------------------------------------------

    /// Advance timers and the running tween. Returns `true` while more frames
    /// are needed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.mount_bounce.as_ref().is_some_and(|t| t.poll(now)) {
            log::debug!("mount bounce");
            self.mount_bounce = None;
            self.teardown = None;
            self.animate_bounce_back(ON_MOUNT_BOUNCE_DURATION);
        }

        if let Some(settled) = self.position.tick() {
            self.on_settled(settled);
        }

        self.position.is_animating() || self.mount_bounce.as_ref().is_some_and(Timeout::is_armed)
    }

    fn on_settled(&mut self, settled: Settled) {
        let bounced = self.bounce_generation.take() == Some(settled.generation);
        // A drag may have started since this tween was launched; its release
        // decides what happens next.
        if self.phase == SwipePhase::Dragging {
            return;
        }
        if bounced {
            self.animate_closed(RIGHT_SWIPE_BOUNCE_BACK_DURATION);
            return;
        }
        if settled.target == CLOSED_OFFSET {
            self.set_phase(SwipePhase::ClosedResting);
        } else {
            self.set_phase(SwipePhase::OpenResting);
        }
    }

    // --- animations -----------------------------------------------------

    fn open_offset(&self) -> f32 {
        let max = self.layout.max_swipe_distance();
        if self.config.is_rtl { max } else { -max }
    }

    fn animate_open(&mut self, duration_ms: f32) {
        let target = self.open_offset();
        self.bounce_generation = None;
        self.position.animate_to(target, duration_ms, None);
        self.set_phase(SwipePhase::AnimatingToOpen);
    }

    fn animate_closed(&mut self, duration_ms: f32) {
        self.bounce_generation = None;
        self.position.animate_to(CLOSED_OFFSET, duration_ms, None);
        self.set_phase(SwipePhase::AnimatingToClosed);
    }

    /// Overshoot towards the open side, then close.
    fn animate_bounce_back(&mut self, duration_ms: f32) {
        let distance = if self.config.is_rtl {
            -RIGHT_SWIPE_BOUNCE_BACK_DISTANCE
        } else {
            RIGHT_SWIPE_BOUNCE_BACK_DISTANCE
        };
        let generation = self
            .position
            .animate_overshoot(-distance, CLOSED_OFFSET, duration_ms);
        self.bounce_generation = Some(generation);
        self.set_phase(SwipePhase::BounceBack);
    }

    fn set_phase(&mut self, phase: SwipePhase) {
        if self.phase != phase {
            log::debug!("{:?} -> {phase:?}", self.phase);
            self.phase = phase;
        }
    }
}

impl Drop for SwipeController {
    fn drop(&mut self) {
        self.unmount();
    }
}
