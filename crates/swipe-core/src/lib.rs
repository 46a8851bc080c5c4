//! # Time, tweens and timers
//!
//! `swipe-core` holds the small, UI-toolkit-agnostic pieces a swipeable row
//! needs to move over time:
//!
//! - [`Clock`] — where "now" comes from. [`SystemClock`] in production,
//!   [`TestClock`] when a test wants to step time by hand.
//! - [`AnimatedValue`] — a tween that can be retargeted or overwritten at any
//!   moment, advanced explicitly with `update(now)`.
//! - [`Timeout`] — a one-shot deadline polled from the same frame loop, with a
//!   [`Dispose`] guard for cancellation on teardown.
//!
//! ```rust
//! use swipe_core::*;
//! use web_time::Duration;
//!
//! let clock = TestClock::new();
//! let mut x = AnimatedValue::new(0.0f32, AnimationSpec::default());
//! x.animate_to(
//!     10.0,
//!     AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
//!     clock.now(),
//! );
//! clock.advance_ms(50);
//! assert!(x.update(clock.now()));
//! assert!((*x.get() - 5.0).abs() < 0.01);
//! ```
//!
//! Nothing here spawns threads or blocks: the host's frame callback calls
//! `update` / `poll` and reacts to the results.

pub mod animation;
pub mod effects;
pub mod geometry;

pub use animation::*;
pub use effects::*;
pub use geometry::*;
