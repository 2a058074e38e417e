//! Public API surface for the timeline engine.
//!
//! This file consolidates the DTO types crossing the JSON boundary between
//! the engine and the board REST service. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Timeline block identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockId(pub i64);

/// Timeline event identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub i64);

/// Project (lane) identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

/// User identifier, used by availability entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Block type identifier (the board's configurable block categories).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockTypeId(pub i64);

impl BlockId {
    pub fn new(value: i64) -> Self {
        BlockId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ProjectId {
    pub fn new(value: i64) -> Self {
        ProjectId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BlockTypeId {
    pub fn new(value: i64) -> Self {
        BlockTypeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for BlockTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BlockId> for i64 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

/// A single block's resolved movement, in whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMove {
    pub block_id: BlockId,
    pub weeks_delta: i64,
}

/// Complete result of resolving a group drag: every block that has to move
/// (dragged and pushed alike) plus the events swept along with the group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMoveResult {
    pub block_moves: Vec<BlockMove>,
    pub event_ids: Vec<EventId>,
    pub weeks_delta: i64,
}

impl GroupMoveResult {
    /// True when the drag resolves to no mutation at all.
    pub fn is_noop(&self) -> bool {
        self.block_moves.is_empty() && self.event_ids.is_empty()
    }

    /// Look up the resolved delta for a block, if it moves.
    pub fn delta_for(&self, block_id: BlockId) -> Option<i64> {
        self.block_moves
            .iter()
            .find(|m| m.block_id == block_id)
            .map(|m| m.weeks_delta)
    }
}

/// Request body for the board service's group-move endpoint
/// (`POST /boards/:id/timeline/blocks/move-group`). The endpoint schema is
/// owned by the board service; the engine only builds the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveGroupRequest {
    pub block_ids: Vec<BlockId>,
    pub weeks_delta: i64,
    pub block_moves: Vec<BlockMove>,
    pub event_ids: Vec<EventId>,
}

impl MoveGroupRequest {
    /// Build the request body from a resolved group move. `block_ids` carries
    /// the explicitly dragged set so the server can distinguish user intent
    /// from pushes.
    pub fn from_result(dragged: Vec<BlockId>, result: &GroupMoveResult) -> Self {
        Self {
            block_ids: dragged,
            weeks_delta: result.weeks_delta,
            block_moves: result.block_moves.clone(),
            event_ids: result.event_ids.clone(),
        }
    }
}

pub use crate::models::DateSpan;
