use swipe_core::{Rect, Size, Vec2};

use crate::allocator::{Allocation, Widths, allocate};
use crate::button::ActionButton;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowGeometry {
    pub width: f32,
    pub height: f32,
    pub max_swipe_distance: f32,
}

/// Placement of one action button inside the row's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonFrame {
    pub index: usize,
    pub rect: Rect,
    /// Width hint for the label, rounded up to whole units.
    pub text_width: f32,
}

/// Turns measurements into geometry the controller can animate against.
///
/// Only the first usable measurement is taken; `remeasure` exists for hosts
/// that report explicit resizes.
#[derive(Debug, Default)]
pub struct RowLayout {
    geometry: RowGeometry,
    allocation: Allocation,
    measured: bool,
    content_height: Option<f32>,
}

impl RowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    pub fn max_swipe_distance(&self) -> f32 {
        self.geometry.max_swipe_distance
    }

    pub fn widths(&self) -> &Widths {
        &self.allocation.widths
    }

    pub fn default_width(&self) -> f32 {
        self.allocation.default_width
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Record the row's box. Returns `true` if the measurement was taken.
    ///
    /// A box without width is recorded but not treated as stable, so the next
    /// call is still honoured.
    pub fn measure(&mut self, size: Size, buttons: &[ActionButton]) -> bool {
        if self.measured {
            return false;
        }
        self.apply(size, buttons);
        true
    }

    pub fn remeasure(&mut self, size: Size, buttons: &[ActionButton]) -> bool {
        if self.measured && self.geometry.width == size.width && self.geometry.height == size.height
        {
            return false;
        }
        self.apply(size, buttons);
        true
    }

    /// The content row reported its own layout; buttons take its height.
    pub fn on_content_layout(&mut self, height: f32) {
        self.content_height = (height.is_finite() && height > 0.0).then_some(height);
    }

    /// Button placement, flush to the trailing edge the row opens towards.
    /// Empty until both the row and its content have been laid out.
    pub fn button_frames(&self, is_rtl: bool) -> Vec<ButtonFrame> {
        let Some(height) = self.content_height else {
            return Vec::new();
        };
        if !self.measured || self.allocation.widths.is_empty() {
            return Vec::new();
        }

        let mut x = if is_rtl {
            0.0
        } else {
            self.geometry.width - self.geometry.max_swipe_distance
        };
        self.allocation
            .widths
            .iter()
            .enumerate()
            .map(|(index, &w)| {
                let rect = Rect { x, y: 0.0, w, h: height };
                x += w;
                ButtonFrame {
                    index,
                    rect,
                    text_width: w.ceil(),
                }
            })
            .collect()
    }

    /// Hit-test the button frames.
    pub fn button_at(&self, point: Vec2, is_rtl: bool) -> Option<usize> {
        self.button_frames(is_rtl)
            .into_iter()
            .find(|frame| frame.rect.contains(point))
            .map(|frame| frame.index)
    }

    fn apply(&mut self, size: Size, buttons: &[ActionButton]) {
        if !size.has_width() {
            log::debug!("row measured without width ({size:?}); swiping disabled");
            self.geometry = RowGeometry {
                width: 0.0,
                height: size.height,
                max_swipe_distance: 0.0,
            };
            self.allocation = Allocation::default();
            self.measured = false;
            return;
        }

        self.allocation = allocate(size.width, buttons);
        self.geometry = RowGeometry {
            width: size.width,
            height: size.height,
            max_swipe_distance: self.allocation.max_swipe_distance,
        };
        self.measured = true;
        log::debug!(
            "row measured {}x{}: {} buttons, max swipe {}",
            size.width,
            size.height,
            buttons.len(),
            self.geometry.max_swipe_distance
        );
    }
}
