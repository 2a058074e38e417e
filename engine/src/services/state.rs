//! Timeline state store.
//!
//! A thin state-owning shell around the pure layout engine. It holds the
//! current board snapshot, the session-scoped collapse set, the computed
//! viewport range and the horizontal scroll position, and keeps them mutually
//! consistent: every board or viewport change recomputes the range and
//! re-anchors the scroll so the visible dates do not jump.
//!
//! Persistence is the caller's concern. The optimistic path is
//! [`TimelineState::apply_group_move`] followed by a fire-and-forget request
//! built from the same result; on persistence failure the caller refetches
//! the snapshot and calls [`TimelineState::set_board`] again.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::api::{BlockId, GroupMoveResult, ProjectId};
use crate::config::TimelineSettings;
use crate::error::EngineResult;
use crate::models::time::{add_business_days, BUSINESS_DAYS_PER_WEEK};
use crate::models::Board;
use crate::services::drag::{DragMode, DragSession};
use crate::services::layout::GridMetrics;
use crate::services::viewport::{anchor_scroll, compute_range, ViewportRange};

#[derive(Debug, Clone)]
pub struct TimelineState {
    settings: TimelineSettings,
    pivot: NaiveDate,
    board: Board,
    collapsed: HashSet<ProjectId>,
    range: ViewportRange,
    scroll_left: f64,
    viewport_px: f64,
}

impl TimelineState {
    /// Fresh store with an empty board; the range starts at the base window.
    pub fn new(settings: TimelineSettings, pivot: NaiveDate) -> Self {
        let board = Board::default();
        let range = compute_range(&board, pivot, &settings, 0.0);
        Self {
            settings,
            pivot,
            board,
            collapsed: HashSet::new(),
            range,
            scroll_left: 0.0,
            viewport_px: 0.0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn range(&self) -> ViewportRange {
        self.range
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn set_scroll_left(&mut self, px: f64) {
        self.scroll_left = px.max(0.0);
    }

    /// Grid metrics for the current range. The origin is the first rendered
    /// column, so pixel x = 0 is always the range start.
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(
            self.range.start_date(self.pivot),
            self.settings.column_width_px,
            self.settings.gutter_px,
        )
    }

    /// Replace the board snapshot, recompute the range and re-anchor scroll.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.refresh_range();
    }

    /// Report the live viewport width so a too-narrow range can be extended.
    pub fn set_viewport_width(&mut self, px: f64) {
        self.viewport_px = px.max(0.0);
        self.refresh_range();
    }

    fn refresh_range(&mut self) {
        let next = compute_range(&self.board, self.pivot, &self.settings, self.viewport_px);
        self.scroll_left = anchor_scroll(
            self.range,
            next,
            self.scroll_left,
            self.settings.column_width_px,
        );
        self.range = next;
    }

    /// Toggle a project's collapse flag; returns the new state.
    pub fn toggle_collapsed(&mut self, project_id: ProjectId) -> bool {
        if self.collapsed.remove(&project_id) {
            false
        } else {
            self.collapsed.insert(project_id);
            true
        }
    }

    pub fn is_collapsed(&self, project_id: ProjectId) -> bool {
        self.collapsed.contains(&project_id)
    }

    /// Start a drag against the current board.
    pub fn begin_drag(&self, block_id: BlockId, mode: DragMode) -> EngineResult<DragSession> {
        DragSession::begin(&self.board, block_id, mode, self.metrics())
    }

    /// Optimistic local mutation: shift every resolved block by its week
    /// delta and every swept event by the matching count of business days,
    /// then refresh the range. The server sees the same result via the
    /// move-group request; on rejection the caller refetches and calls
    /// [`set_board`](Self::set_board).
    pub fn apply_group_move(&mut self, result: &GroupMoveResult) {
        if result.is_noop() {
            return;
        }

        for project in &mut self.board.projects {
            for block in &mut project.blocks {
                if let Some(delta) = result.delta_for(block.id) {
                    block.start_date += Duration::weeks(delta);
                    block.end_date += Duration::weeks(delta);
                }
            }
            for event in &mut project.events {
                if result.event_ids.contains(&event.id) {
                    let days = result.weeks_delta * BUSINESS_DAYS_PER_WEEK;
                    event.start_date = add_business_days(event.start_date, days);
                    event.end_date = event.end_date.map(|d| add_business_days(d, days));
                }
            }
        }

        log::debug!(
            "applied group move: {} blocks, {} events, {} weeks",
            result.block_moves.len(),
            result.event_ids.len(),
            result.weeks_delta
        );

        self.refresh_range();
    }
}
