use swipe_core::{AnimatedValue, AnimationSpec, Clock, Easing, SharedClock};

use crate::gesture::{CLOSED_OFFSET, SLOW_SPEED_SWIPE_FACTOR};

/// Reported by [`PositionModel::tick`] when a tween reaches its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settled {
    pub target: f32,
    pub generation: u64,
}

/// Horizontal offset of the row's content plus the offset it last came to
/// rest at.
///
/// Each `animate_to` bumps a generation counter. Only the tween holding the
/// current generation may settle, so a superseded tween can never overwrite
/// `previous_resting` or run its completion.
///
/// `previous_resting` only ever holds a resting offset. A tween that passes
/// through an intermediate point (an overshoot) carries the offset it will
/// eventually rest at, and that is what gets recorded when it settles or is
/// interrupted by a drag.
pub struct PositionModel {
    clock: SharedClock,
    current: AnimatedValue<f32>,
    previous_resting: f32,
    /// Where the tween in flight leaves the row resting.
    rests_at: f32,
    easing: Easing,
    generation: u64,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl PositionModel {
    pub fn new(clock: SharedClock, easing: Easing) -> Self {
        Self {
            clock,
            current: AnimatedValue::new(CLOSED_OFFSET, AnimationSpec::default()),
            previous_resting: CLOSED_OFFSET,
            rests_at: CLOSED_OFFSET,
            easing,
            generation: 0,
            on_complete: None,
        }
    }

    pub fn offset(&self) -> f32 {
        *self.current.get()
    }

    pub fn previous_resting(&self) -> f32 {
        self.previous_resting
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.current.is_animating()
    }

    /// Target of the tween in flight, if any.
    pub fn animation_target(&self) -> Option<f32> {
        self.is_animating().then(|| *self.current.target())
    }

    /// The offset the row rests at once the tween in flight (if any) is done.
    pub fn resting_target(&self) -> f32 {
        if self.is_animating() {
            self.rests_at
        } else {
            self.previous_resting
        }
    }

    /// Write the offset directly. Any tween in flight is abandoned together
    /// with its completion.
    pub fn set_offset_immediate(&mut self, value: f32) {
        if self.current.is_animating() {
            self.supersede();
        }
        self.current.set_immediate(value);
    }

    /// Stop the tween in flight where it is and take its resting offset as
    /// the new `previous_resting`. Returns the resting offset.
    pub fn interrupt(&mut self) -> f32 {
        if self.current.is_animating() {
            log::trace!(
                "interrupted at {} (rests at {})",
                self.offset(),
                self.rests_at
            );
            self.previous_resting = self.rests_at;
            self.supersede();
            let here = self.offset();
            self.current.set_immediate(here);
        }
        self.previous_resting
    }

    pub fn track_full_speed(&mut self, dx: f32) {
        let base = self.interrupt();
        self.set_offset_immediate(base + dx);
    }

    pub fn track_slow_speed(&mut self, dx: f32) {
        let base = self.interrupt();
        self.set_offset_immediate(base + dx / SLOW_SPEED_SWIPE_FACTOR);
    }

    /// Start tweening to `target` over `duration_ms`, replacing whatever was
    /// running. Returns the generation that will be reported on settle.
    pub fn animate_to(
        &mut self,
        target: f32,
        duration_ms: f32,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> u64 {
        self.launch(target, target, duration_ms, on_complete)
    }

    /// Tween to `target` without treating it as a resting offset: when it
    /// settles, `previous_resting` becomes `rests_at`. Used for overshoots
    /// that are followed by another tween.
    pub fn animate_overshoot(&mut self, target: f32, rests_at: f32, duration_ms: f32) -> u64 {
        self.launch(target, rests_at, duration_ms, None)
    }

    fn launch(
        &mut self,
        target: f32,
        rests_at: f32,
        duration_ms: f32,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> u64 {
        self.supersede();
        self.on_complete = on_complete;
        self.rests_at = rests_at;
        let spec = AnimationSpec::millis(duration_ms, self.easing);
        log::trace!(
            "animate {} -> {target} over {:?} (gen {})",
            self.offset(),
            spec.duration,
            self.generation
        );
        self.current.animate_to(target, spec, self.clock.now());
        self.generation
    }

    /// Advance the tween. Returns the settle report on the frame it completes.
    pub fn tick(&mut self) -> Option<Settled> {
        if !self.current.is_animating() {
            return None;
        }
        if self.current.update(self.clock.now()) {
            return None;
        }

        let target = *self.current.get();
        self.previous_resting = self.rests_at;
        if let Some(done) = self.on_complete.take() {
            done();
        }
        Some(Settled {
            target,
            generation: self.generation,
        })
    }

    fn supersede(&mut self) {
        self.generation += 1;
        if self.on_complete.take().is_some() {
            log::trace!("dropped superseded completion");
        }
    }
}
