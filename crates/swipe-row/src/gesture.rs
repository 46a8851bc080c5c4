//! Pure classification of pan samples into swipe intents.
//!
//! Every direction-sensitive decision goes through [`directional_dx`], so the
//! same thresholds work for left-to-right and right-to-left layouts. Raw `dx`
//! is only used where the magnitude alone matters (capture and the
//! "far enough" check on release).

/// Offset of the row when fully closed.
pub const CLOSED_OFFSET: f32 = 0.0;
/// Horizontal travel before the row claims the gesture from its children.
pub const HORIZONTAL_SWIPE_DISTANCE_THRESHOLD: f32 = 10.0;
/// Vertical travel past which the gesture is left to the enclosing scroller.
pub const VERTICAL_SWIPE_TOLERANCE: f32 = 10.0;
/// Release speed (units/ms) past which the swipe always completes.
pub const HORIZONTAL_FULL_SWIPE_SPEED_THRESHOLD: f32 = 0.3;
/// Divisor for damped tracking: 4 means a quarter of finger travel.
pub const SLOW_SPEED_SWIPE_FACTOR: f32 = 4.0;
/// Finger travel (not row travel) allowed when swiping right from closed.
pub const RIGHT_SWIPE_THRESHOLD: f32 = 30.0 * SLOW_SPEED_SWIPE_FACTOR;
/// Default release distance past which the swipe completes.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 30.0;

/// Cumulative pan displacement since the gesture began plus the current
/// horizontal velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
    pub vx: f32,
}

impl GestureSample {
    pub fn new(dx: f32, dy: f32, vx: f32) -> Self {
        Self { dx, dy, vx }
    }

    pub fn horizontal(dx: f32, vx: f32) -> Self {
        Self { dx, dy: 0.0, vx }
    }
}

/// How a move sample should drive the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveIntent {
    /// Right swipe from closed past [`RIGHT_SWIPE_THRESHOLD`]: leave the row where it is.
    Suppressed,
    /// Right swipe from closed inside the allowed band: damped tracking.
    SlowTrack,
    /// Everything else: the row follows the finger.
    FullTrack,
}

/// Where the row should go once the finger lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseIntent {
    /// Overshoot past closed and come back; the right swipe hint.
    BounceBack,
    Open,
    Close,
    /// Return to whichever resting state the drag started from.
    SnapBack,
}

pub fn is_horizontal_swipe(sample: &GestureSample) -> bool {
    sample.dx.abs() > HORIZONTAL_SWIPE_DISTANCE_THRESHOLD
        && sample.dy.abs() < VERTICAL_SWIPE_TOLERANCE
}

pub fn directional_dx(sample: &GestureSample, is_rtl: bool) -> f32 {
    if is_rtl { -sample.dx } else { sample.dx }
}

pub fn is_swiping_right_from_closed(
    previous_resting: f32,
    sample: &GestureSample,
    is_rtl: bool,
) -> bool {
    previous_resting == CLOSED_OFFSET && directional_dx(sample, is_rtl) > 0.0
}

pub fn is_excessive_right_from_closed(
    previous_resting: f32,
    sample: &GestureSample,
    is_rtl: bool,
) -> bool {
    is_swiping_right_from_closed(previous_resting, sample, is_rtl)
        && directional_dx(sample, is_rtl) > RIGHT_SWIPE_THRESHOLD
}

pub fn should_animate_remainder(sample: &GestureSample, swipe_threshold: f32) -> bool {
    sample.dx.abs() > swipe_threshold || sample.vx > HORIZONTAL_FULL_SWIPE_SPEED_THRESHOLD
}

pub fn classify_move(previous_resting: f32, sample: &GestureSample, is_rtl: bool) -> MoveIntent {
    if is_excessive_right_from_closed(previous_resting, sample, is_rtl) {
        MoveIntent::Suppressed
    } else if is_swiping_right_from_closed(previous_resting, sample, is_rtl) {
        MoveIntent::SlowTrack
    } else {
        MoveIntent::FullTrack
    }
}

pub fn classify_release(
    previous_resting: f32,
    sample: &GestureSample,
    swipe_threshold: f32,
    is_rtl: bool,
) -> ReleaseIntent {
    if is_swiping_right_from_closed(previous_resting, sample, is_rtl) {
        ReleaseIntent::BounceBack
    } else if should_animate_remainder(sample, swipe_threshold) {
        if directional_dx(sample, is_rtl) < 0.0 {
            ReleaseIntent::Open
        } else {
            ReleaseIntent::Close
        }
    } else {
        ReleaseIntent::SnapBack
    }
}

/// Milliseconds needed to cover the rest of the open travel at the release
/// speed, never slower than [`HORIZONTAL_FULL_SWIPE_SPEED_THRESHOLD`].
pub fn open_duration_ms(max_swipe_distance: f32, distance_moved: f32, vx: f32) -> f32 {
    let speed = if vx > HORIZONTAL_FULL_SWIPE_SPEED_THRESHOLD {
        vx
    } else {
        HORIZONTAL_FULL_SWIPE_SPEED_THRESHOLD
    };
    ((max_swipe_distance - distance_moved.abs()) / speed).abs()
}
