//! Drag interaction controller.
//!
//! Three-phase contract independent of any input-event API: `begin` snapshots
//! the lane and decides the dragged set, `update` folds raw pixel movement
//! into a whole-week delta, `commit` resolves collisions and produces the
//! final move. A session is a plain value; dropping it without committing
//! abandons the drag with no mutation anywhere.

use std::collections::HashSet;

use crate::algorithms::{events_in_group_span, resolve_group_move};
use crate::api::{BlockId, BlockMove, GroupMoveResult};
use crate::error::{EngineError, EngineResult};
use crate::models::{Block, Board, TimelineEvent};
use crate::services::layout::GridMetrics;

/// Which blocks move together with the grabbed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Only the grabbed block
    #[default]
    Single,
    /// The grabbed block and every lane block starting at or after it
    TrailingBlocks,
    /// Every block in the lane
    WholeLane,
}

/// One in-flight drag over a single project lane.
#[derive(Debug, Clone)]
pub struct DragSession {
    lane: Vec<Block>,
    events: Vec<TimelineEvent>,
    dragged: HashSet<BlockId>,
    metrics: GridMetrics,
    pixel_delta: f64,
}

impl DragSession {
    /// Start a drag on `block_id`. Snapshots the owning lane and its events
    /// so the session stays coherent even if the board is swapped under it.
    pub fn begin(
        board: &Board,
        block_id: BlockId,
        mode: DragMode,
        metrics: GridMetrics,
    ) -> EngineResult<Self> {
        let project = board
            .project_of_block(block_id)
            .ok_or(EngineError::UnknownBlock(block_id))?;

        let lane = project.lane();
        let grabbed_start = lane
            .iter()
            .find(|b| b.id == block_id)
            .map(|b| b.start_date)
            .ok_or(EngineError::UnknownBlock(block_id))?;

        let dragged: HashSet<BlockId> = match mode {
            DragMode::Single => lane
                .iter()
                .filter(|b| b.id == block_id)
                .map(|b| b.id)
                .collect(),
            DragMode::TrailingBlocks => lane
                .iter()
                .filter(|b| b.start_date >= grabbed_start)
                .map(|b| b.id)
                .collect(),
            DragMode::WholeLane => lane.iter().map(|b| b.id).collect(),
        };

        log::debug!(
            "drag begin: block {block_id}, mode {mode:?}, {} of {} lane blocks dragged",
            dragged.len(),
            lane.len()
        );

        Ok(Self {
            lane,
            events: project.events.clone(),
            dragged,
            metrics,
            pixel_delta: 0.0,
        })
    }

    /// Record the total horizontal pixel movement since `begin` and return
    /// the week delta it snaps to. Callers pass the accumulated distance,
    /// not per-tick increments.
    pub fn update(&mut self, pixel_delta: f64) -> i64 {
        self.pixel_delta = pixel_delta;
        self.weeks_delta()
    }

    /// Current snapped week delta.
    pub fn weeks_delta(&self) -> i64 {
        self.metrics.snap_pixels_to_weeks(self.pixel_delta)
    }

    /// The dragged set decided at `begin`.
    pub fn dragged_ids(&self) -> Vec<BlockId> {
        let mut ids: Vec<BlockId> = self.dragged.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Finish the drag: resolve collisions and collect the events swept
    /// along with the dragged span. A drag that nets zero weeks resolves to
    /// an empty result and must cause no mutation.
    pub fn commit(self) -> GroupMoveResult {
        let weeks_delta = self.weeks_delta();
        if weeks_delta == 0 {
            return GroupMoveResult::default();
        }

        let deltas = resolve_group_move(&self.lane, &self.dragged, weeks_delta);
        let mut block_moves: Vec<BlockMove> = deltas
            .into_iter()
            .map(|(block_id, weeks_delta)| BlockMove {
                block_id,
                weeks_delta,
            })
            .collect();
        block_moves.sort_by_key(|m| m.block_id);

        let event_ids = events_in_group_span(&self.lane, &self.dragged, &self.events);

        GroupMoveResult {
            block_moves,
            event_ids,
            weeks_delta,
        }
    }
}
