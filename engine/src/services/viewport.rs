//! Viewport range calculator.
//!
//! Decides which slice of the calendar the grid renders. The range is kept in
//! business-day offsets from a pivot date (offset 0 = the pivot's column), so
//! the rest of the layout math never re-derives calendar positions. The range
//! covers every block, event and availability entry plus padding, is never
//! smaller than the configured base window, and always fills the live
//! viewport width.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TimelineSettings;
use crate::models::time::{add_business_days, business_day_offset, BUSINESS_DAYS_PER_WEEK};
use crate::models::Board;

/// Inclusive business-day offset window relative to the pivot date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportRange {
    /// First rendered column, offset from the pivot (may be negative)
    pub start_offset: i64,
    /// Last rendered column, offset from the pivot (inclusive)
    pub end_offset: i64,
}

impl ViewportRange {
    /// Number of rendered columns.
    pub fn columns(&self) -> i64 {
        self.end_offset - self.start_offset + 1
    }

    /// Calendar date of the first rendered column.
    pub fn start_date(&self, pivot: NaiveDate) -> NaiveDate {
        add_business_days(pivot, self.start_offset)
    }

    /// Calendar date of the last rendered column.
    pub fn end_date(&self, pivot: NaiveDate) -> NaiveDate {
        add_business_days(pivot, self.end_offset)
    }

    pub fn contains_offset(&self, offset: i64) -> bool {
        self.start_offset <= offset && offset <= self.end_offset
    }
}

/// Compute the rendered range for a board.
///
/// The base window runs from the pivot forward (`base_window_weeks` full
/// weeks). Content outside it widens the range, with `padding_business_days`
/// of breathing room on each side. When the result would still be narrower
/// than the live viewport, the end is extended so the grid has no blank
/// region to the right of its last column.
pub fn compute_range(
    board: &Board,
    pivot: NaiveDate,
    settings: &TimelineSettings,
    viewport_px: f64,
) -> ViewportRange {
    let base_days = settings.base_window_weeks as i64 * BUSINESS_DAYS_PER_WEEK;
    let mut start = 0i64;
    let mut end = base_days - 1;

    let padding = settings.padding_business_days as i64;
    let mut cover = |span_start: NaiveDate, span_end: NaiveDate| {
        start = start.min(business_day_offset(pivot, span_start) - padding);
        end = end.max(business_day_offset(pivot, span_end) + padding);
    };

    for project in &board.projects {
        for block in &project.blocks {
            cover(block.start_date, block.end_date);
        }
        for event in &project.events {
            let span = event.span();
            cover(span.start, span.end);
        }
    }
    for entry in &board.availability {
        let span = entry.week_span();
        cover(span.start, span.end);
    }

    if settings.column_width_px > 0.0 {
        let viewport_columns = (viewport_px / settings.column_width_px).ceil() as i64;
        end = end.max(start + viewport_columns - 1);
    }

    log::debug!(
        "viewport range [{start}, {end}] ({} columns) for board '{}'",
        end - start + 1,
        board.name
    );

    ViewportRange {
        start_offset: start,
        end_offset: end,
    }
}

/// Keep the same calendar date under the viewport's left edge across a range
/// recompute. When the range start moves left by `k` columns, everything on
/// the grid shifts right by `k * column_width`, so the scroll position must
/// grow by the same amount (and symmetrically shrink when the start moves
/// right). The result is clamped at zero.
pub fn anchor_scroll(
    prev: ViewportRange,
    next: ViewportRange,
    scroll_left: f64,
    column_width: f64,
) -> f64 {
    let shift = (prev.start_offset - next.start_offset) as f64 * column_width;
    (scroll_left + shift).max(0.0)
}
