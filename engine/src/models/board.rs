//! Domain value types for the board timeline.
//!
//! All persisted entities are owned by the board service; the engine holds
//! transient copies for layout computation and emits proposed date mutations
//! for the service to persist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{BlockId, BlockTypeId, EventId, ProjectId, UserId};
use crate::models::time::{business_day_offset, friday_of, is_business_day, monday_of};

/// Inclusive calendar-date span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the span
    pub start: NaiveDate,
    /// Last day of the span (inclusive)
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Single-day span.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Check if a date lies inside this span (both endpoints inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Check if this span overlaps with another.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Inclusive length in business days. A span that lies entirely on a
    /// weekend reports zero.
    pub fn business_days(&self) -> i64 {
        let len = business_day_offset(self.start, self.end)
            + if is_business_day(self.start) { 1 } else { 0 };
        len.max(0)
    }
}

/// A scheduled block of work on a project lane.
///
/// The common case is a week block (Monday start, Friday end, five business
/// days), but arbitrary spans are tolerated everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Database ID for the block
    pub id: BlockId,
    /// Block category configured on the board
    pub block_type_id: BlockTypeId,
    /// Ordinal within the lane
    #[serde(default)]
    pub position: u32,
    /// First day of work
    pub start_date: NaiveDate,
    /// Last day of work (inclusive)
    pub end_date: NaiveDate,
}

impl Block {
    pub fn new(
        id: BlockId,
        block_type_id: BlockTypeId,
        position: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Option<Self> {
        if start_date <= end_date {
            Some(Self {
                id,
                block_type_id,
                position,
                start_date,
                end_date,
            })
        } else {
            None
        }
    }

    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Monday of the week the block starts in; collision resolution works in
    /// units of these week slots.
    pub fn start_week(&self) -> NaiveDate {
        monday_of(self.start_date)
    }

    /// True for the canonical five-day block convention (Monday through the
    /// Friday of the same week).
    pub fn is_week_aligned(&self) -> bool {
        self.start_date == monday_of(self.start_date) && self.end_date == friday_of(self.start_date)
    }
}

/// A point-in-time marker on the timeline (milestone, release, review).
/// Typically single-day; positioned like a block but never collides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EventId,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl TimelineEvent {
    pub fn new(id: EventId, start_date: NaiveDate) -> Self {
        Self {
            id,
            start_date,
            end_date: None,
        }
    }

    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date.unwrap_or(self.start_date).max(self.start_date),
        }
    }
}

/// Weekly dedication of a user to a project, anchored to a Monday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub user_id: UserId,
    /// Monday of the week this entry applies to
    pub week_start: NaiveDate,
    /// Dedication percentage, 0-100
    pub dedication: u8,
}

impl AvailabilityEntry {
    /// The business week this entry covers (Monday through Friday).
    pub fn week_span(&self) -> DateSpan {
        let monday = monday_of(self.week_start);
        DateSpan {
            start: monday,
            end: friday_of(monday),
        }
    }
}

/// A project lane on the timeline: its blocks (the lane, ordered by start
/// date) and its events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl Project {
    /// Lane blocks sorted by start date, the ordering collision resolution
    /// relies on.
    pub fn lane(&self) -> Vec<Block> {
        let mut lane = self.blocks.clone();
        lane.sort_by_key(|b| (b.start_date, b.position));
        lane
    }
}

/// Transient snapshot of everything the timeline view renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub name: String,
    /// SHA256 checksum of the snapshot JSON
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub availability: Vec<AvailabilityEntry>,
}

impl Board {
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project that owns a block, if any.
    pub fn project_of_block(&self, block_id: BlockId) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.blocks.iter().any(|b| b.id == block_id))
    }
}
