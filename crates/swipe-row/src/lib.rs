//! # Swipeable rows
//!
//! A list row whose content slides sideways to reveal action buttons. The
//! crate owns the behaviour only; drawing the row, the buttons and capturing
//! pointer input are the host's job.
//!
//! - [`gesture`] — pure classification of pan samples (`dx`, `dy`, `vx`).
//! - [`position`] — the animated horizontal offset and the offset it last
//!   rested at.
//! - [`allocator`] — how the revealed width is split between buttons.
//! - [`layout`] — measurement in, geometry and button frames out.
//! - [`controller`] — the state machine tying them together and firing
//!   lifecycle callbacks.
//!
//! ```rust
//! use swipe_core::{Size, TestClock};
//! use swipe_row::*;
//!
//! let clock = TestClock::new();
//! let mut row = SwipeController::new(
//!     SwipeConfig::default(),
//!     vec![ActionButton::new("Archive"), ActionButton::new("Delete").kind(ButtonKind::Danger)],
//!     SwipeCallbacks::default(),
//!     clock.shared(),
//! )
//! .unwrap();
//! row.mount();
//! row.measure(Size::new(250.0, 60.0));
//!
//! row.on_grant();
//! row.on_move(GestureSample::horizontal(-60.0, 0.5));
//! row.on_release(GestureSample::horizontal(-60.0, 0.5));
//!
//! clock.advance_ms(1000);
//! while row.tick() {}
//! assert_eq!(row.offset(), -100.0);
//! assert_eq!(row.phase(), SwipePhase::OpenResting);
//! ```
//!
//! Everything runs on the host's UI thread: callbacks are `Rc`, and state is
//! owned by one [`SwipeController`] per row. Closing other rows when one
//! opens is left to the list, via `on_open`.

pub mod allocator;
pub mod button;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod position;

pub use allocator::{Allocation, SLOT_BUDGET, allocate};
pub use button::*;
pub use config::*;
pub use controller::*;
pub use error::SwipeError;
pub use gesture::*;
pub use layout::*;
pub use position::*;
