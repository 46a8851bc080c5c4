//! Splits the revealed width among the action buttons.
//!
//! Buttons with a fixed width keep it. The rest share a default width computed
//! against a budget of [`SLOT_BUDGET`] slots, not the actual button count, so a
//! row with two buttons reveals two fifths of its width rather than all of it.

use smallvec::SmallVec;

use crate::button::ActionButton;

/// Number of button slots the default width is normalised against.
pub const SLOT_BUDGET: usize = 5;

pub type Widths = SmallVec<[f32; SLOT_BUDGET]>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Allocation {
    /// Width given to every button without a fixed width.
    pub default_width: f32,
    /// Final width per button, in button order.
    pub widths: Widths,
    /// Sum of `widths`; how far the row may open.
    pub max_swipe_distance: f32,
}

pub fn allocate(width: f32, buttons: &[ActionButton]) -> Allocation {
    let fixed: SmallVec<[f32; SLOT_BUDGET]> =
        buttons.iter().filter_map(ActionButton::custom_width).collect();
    let custom_width_total: f32 = fixed.iter().sum();

    let remaining_slots = SLOT_BUDGET.saturating_sub(fixed.len());
    let default_width = if remaining_slots == 0 {
        0.0
    } else {
        let w = (width - custom_width_total) / remaining_slots as f32;
        if w.is_finite() && w >= 0.0 {
            w
        } else {
            log::warn!(
                "fixed button widths ({custom_width_total}) exceed row width ({width}); \
                 flexible buttons get no width"
            );
            0.0
        }
    };

    let default_widths_total = (buttons.len() - fixed.len()) as f32 * default_width;
    let widths = buttons
        .iter()
        .map(|b| b.custom_width().unwrap_or(default_width))
        .collect();

    Allocation {
        default_width,
        widths,
        max_swipe_distance: custom_width_total + default_widths_total,
    }
}
