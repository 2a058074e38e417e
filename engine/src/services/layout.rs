//! Pixel-position calculator.
//!
//! Maps calendar dates onto the horizontal pixel axis of the timeline grid.
//! One grid column per business day; weekends have no columns at all, so all
//! positions go through [`business_day_offset`] rather than raw calendar
//! deltas. Clipping of off-screen geometry is the renderer's concern, not
//! ours: negative `left` values are valid output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time::{business_day_offset, BUSINESS_DAYS_PER_WEEK};
use crate::models::DateSpan;

/// Horizontal placement of one item on the grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    /// Distance from the grid origin to the item's left edge. Negative when
    /// the item starts before the origin.
    pub left: f64,
    /// Rendered width, gutter already subtracted.
    pub width: f64,
}

impl BlockGeometry {
    /// Pixel position of the right edge (left + width).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// The grid's fixed horizontal scale: where day zero sits and how wide each
/// business-day column is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Date rendered at pixel x = 0
    pub origin: NaiveDate,
    /// Width of one business-day column, px
    pub column_width: f64,
    /// Horizontal gap between adjacent items, px
    pub gutter: f64,
}

impl GridMetrics {
    pub fn new(origin: NaiveDate, column_width: f64, gutter: f64) -> Self {
        Self {
            origin,
            column_width,
            gutter,
        }
    }

    /// Pixel width of one full business week.
    pub fn week_width(&self) -> f64 {
        self.column_width * BUSINESS_DAYS_PER_WEEK as f64
    }

    /// Left edge of the column that renders `date`.
    pub fn x_of(&self, date: NaiveDate) -> f64 {
        business_day_offset(self.origin, date) as f64 * self.column_width
    }

    /// Compute the on-grid placement of an inclusive date range.
    ///
    /// Width is the occupied columns minus the gutter, clamped so that a
    /// single-day item is exactly one column minus the gutter wide and a
    /// degenerate range can never collapse to zero or go negative.
    pub fn geometry(&self, start: NaiveDate, end: NaiveDate) -> BlockGeometry {
        let left = self.x_of(start);
        let columns = business_day_offset(start, end) + 1;
        let min_width = self.column_width - self.gutter;
        let width = (columns as f64 * self.column_width - self.gutter).max(min_width);
        BlockGeometry { left, width }
    }

    /// Placement of a [`DateSpan`].
    pub fn span_geometry(&self, span: DateSpan) -> BlockGeometry {
        self.geometry(span.start, span.end)
    }

    /// Snap an accumulated horizontal drag distance to whole weeks. This is
    /// the inverse of the week-sized movement the collision resolver works
    /// in: half a week of pixels rounds to the nearest week slot.
    pub fn snap_pixels_to_weeks(&self, pixel_delta: f64) -> i64 {
        (pixel_delta / self.week_width()).round() as i64
    }
}
