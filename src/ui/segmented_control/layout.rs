// SPDX-License-Identifier: MPL-2.0
//! Geometry of the segmented control.
//!
//! Everything here is a pure function of the control's size and tab count:
//! tab slots, icon areas, hit regions and the indicator rectangle are derived
//! on demand instead of being stored.

use iced::{Point, Rectangle, Size};

/// Fixed spacing constants of the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Gap between the control edge and the tabs.
    pub margin: f32,
    /// Gap between two adjacent tabs.
    pub spacing: f32,
    /// Inset of the icon inside its tab (top and bottom).
    pub image_padding: f32,
}

impl Metrics {
    pub const DEFAULT: Metrics = Metrics {
        margin: 6.0,
        spacing: 6.0,
        image_padding: 4.0,
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the radius that turns an element of the given height into a pill.
#[must_use]
pub fn corner_radius(height: f32) -> f32 {
    height / 2.0
}

/// Control heights at or below this leave no room for the tabs.
#[must_use]
pub fn minimum_height(metrics: Metrics) -> f32 {
    metrics.margin * 2.0
}

/// Smallest width that fits `tab_count` tabs at a 1:1 aspect ratio.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn minimum_width(height: f32, tab_count: usize, metrics: Metrics) -> f32 {
    let count = tab_count as f32;
    let square_side = height - metrics.image_padding * 2.0;
    count * square_side + (count - 1.0).max(0.0) * metrics.spacing + metrics.margin * 2.0
}

/// Widens `bounds` to [`minimum_width`] when it is too narrow.
///
/// Origin and height are always preserved.
#[must_use]
pub fn fit_bounds(bounds: Rectangle, tab_count: usize, metrics: Metrics) -> Rectangle {
    let min_width = minimum_width(bounds.height, tab_count, metrics);
    if bounds.width < min_width {
        Rectangle {
            width: min_width,
            ..bounds
        }
    } else {
        bounds
    }
}

/// Layout of a control of a given size.
///
/// The tab count must be at least one; [`SegmentedControl`] guarantees it.
///
/// [`SegmentedControl`]: super::SegmentedControl
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    size: Size,
    tab_count: usize,
    metrics: Metrics,
}

impl Layout {
    #[must_use]
    pub fn new(size: Size, tab_count: usize) -> Self {
        Self::with_metrics(size, tab_count, Metrics::DEFAULT)
    }

    #[must_use]
    pub fn with_metrics(size: Size, tab_count: usize, metrics: Metrics) -> Self {
        Self {
            size,
            tab_count,
            metrics,
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tab_width(&self) -> f32 {
        let count = self.tab_count as f32;
        (self.size.width - self.metrics.margin * 2.0 - self.metrics.spacing * (count - 1.0))
            / count
    }

    #[must_use]
    pub fn tab_height(&self) -> f32 {
        self.size.height - self.metrics.margin * 2.0
    }

    /// Horizontal offset of tab `index` from the control's left edge.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tab_x(&self, index: usize) -> f32 {
        self.metrics.margin + index as f32 * (self.tab_width() + self.metrics.spacing)
    }

    #[must_use]
    pub fn tab_slot(&self, index: usize) -> Rectangle {
        Rectangle {
            x: self.tab_x(index),
            y: self.metrics.margin,
            width: self.tab_width(),
            height: self.tab_height(),
        }
    }

    /// Area the glyph of tab `index` is fitted into.
    #[must_use]
    pub fn icon_area(&self, index: usize) -> Rectangle {
        let slot = self.tab_slot(index);
        Rectangle {
            y: slot.y + self.metrics.image_padding,
            height: (slot.height - self.metrics.image_padding * 2.0).max(0.0),
            ..slot
        }
    }

    /// Tappable area of tab `index`; spans the full control height.
    #[must_use]
    pub fn hit_region(&self, index: usize) -> Rectangle {
        Rectangle {
            x: self.tab_x(index),
            y: 0.0,
            width: self.tab_width(),
            height: self.size.height,
        }
    }

    /// Resting rectangle of the indicator when tab `index` is selected.
    #[must_use]
    pub fn indicator(&self, index: usize) -> Rectangle {
        self.tab_slot(index)
    }

    /// Left offset at which the indicator is drawn for an animated `x`.
    ///
    /// Keeps the whole pill inside the control so it is never narrowed;
    /// spring overshoot beyond the outer margins is cut at the edge.
    #[must_use]
    pub fn indicator_offset(&self, x: f32) -> f32 {
        x.clamp(0.0, (self.size.width - self.tab_width()).max(0.0))
    }

    /// Resolves a point in control coordinates to the tab under it.
    ///
    /// Points over the margin or between tabs resolve to nothing.
    #[must_use]
    pub fn index_at(&self, point: Point) -> Option<usize> {
        (0..self.tab_count).find(|&index| self.hit_region(index).contains(point))
    }

    /// Corner radius of the control background.
    #[must_use]
    pub fn control_radius(&self) -> f32 {
        corner_radius(self.size.height)
    }

    /// Corner radius of the indicator and of each tab.
    #[must_use]
    pub fn indicator_radius(&self) -> f32 {
        corner_radius(self.tab_height())
    }
}
