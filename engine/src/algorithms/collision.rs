//! Week-slot collision resolution for group drags.
//!
//! When the user drags one or more blocks by a whole number of weeks, every
//! stationary block that would end up sharing a week slot with a moving block
//! has to be pushed out of the way, and those pushes can cascade down the
//! lane. The resolver computes the complete set of movements up front so the
//! caller can apply them atomically and serialize them into one persistence
//! request.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};

use crate::api::{BlockId, EventId};
use crate::models::board::{Block, DateSpan, TimelineEvent};
use crate::models::time::monday_of;

/// Resolve a group drag into a complete `block id -> weeks delta` mapping.
///
/// Deltas of blocks in `dragged` are pinned at `weeks_delta`; stationary
/// blocks accumulate pushes one week at a time in the direction of travel
/// until no two blocks in the lane claim the same week slot. Blocks that end
/// up not moving are omitted from the result.
///
/// A zero `weeks_delta` or an empty dragged set is a no-op and returns an
/// empty map.
pub fn resolve_group_move(
    lane: &[Block],
    dragged: &HashSet<BlockId>,
    weeks_delta: i64,
) -> HashMap<BlockId, i64> {
    if weeks_delta == 0 || dragged.is_empty() {
        return HashMap::new();
    }

    let direction = weeks_delta.signum();

    // Working order: by start date, reversed when moving right so pushes
    // propagate in the direction of travel.
    let mut order: Vec<&Block> = lane.iter().collect();
    order.sort_by_key(|b| (b.start_date, b.position, b.id));
    if weeks_delta > 0 {
        order.reverse();
    }

    let mut deltas: HashMap<BlockId, i64> = lane
        .iter()
        .map(|b| {
            let delta = if dragged.contains(&b.id) {
                weeks_delta
            } else {
                0
            };
            (b.id, delta)
        })
        .collect();

    let candidate_week = |block: &Block, deltas: &HashMap<BlockId, i64>| -> NaiveDate {
        monday_of(block.start_date) + Duration::weeks(deltas[&block.id])
    };

    // Each pass adds at most one week of push per unresolved collision, and a
    // push chain cannot be longer than the lane, so the lane size bounds the
    // number of passes needed.
    for _pass in 0..lane.len() {
        let mut pushed = false;

        for i in 0..order.len() {
            for j in (i + 1)..order.len() {
                let (a, b) = (order[i], order[j]);
                if candidate_week(a, &deltas) != candidate_week(b, &deltas) {
                    continue;
                }

                let a_dragged = dragged.contains(&a.id);
                let b_dragged = dragged.contains(&b.id);

                let pushee = match (a_dragged, b_dragged) {
                    // The grabbed block lands exactly where the user dropped
                    // it; the stationary one yields.
                    (true, false) => Some(b.id),
                    (false, true) => Some(a.id),
                    // Two dragged blocks share a requested slot: their deltas
                    // are pinned, nothing to push.
                    (true, true) => None,
                    // Two stationary blocks (a push chain caught up with the
                    // next block): push whichever started further along the
                    // travel direction, so nothing moves backward into a
                    // second collision.
                    (false, false) => {
                        let a_further = if direction > 0 {
                            (a.start_date, a.position, a.id) > (b.start_date, b.position, b.id)
                        } else {
                            (a.start_date, a.position, a.id) < (b.start_date, b.position, b.id)
                        };
                        Some(if a_further { a.id } else { b.id })
                    }
                };

                if let Some(id) = pushee {
                    if let Some(delta) = deltas.get_mut(&id) {
                        *delta += direction;
                        pushed = true;
                    }
                }
            }
        }

        if !pushed {
            break;
        }
    }

    let resolved: HashMap<BlockId, i64> = deltas
        .into_iter()
        .filter(|(_, delta)| *delta != 0)
        .collect();

    log::debug!(
        "resolved group move: {} dragged, {} weeks, {} blocks moving",
        dragged.len(),
        weeks_delta,
        resolved.len()
    );

    resolved
}

/// The combined date span of the explicitly dragged blocks. Pushed blocks do
/// not widen the span.
pub fn group_span(lane: &[Block], dragged: &HashSet<BlockId>) -> Option<DateSpan> {
    let starts = lane
        .iter()
        .filter(|b| dragged.contains(&b.id))
        .map(|b| b.start_date)
        .min()?;
    let ends = lane
        .iter()
        .filter(|b| dragged.contains(&b.id))
        .map(|b| b.end_date)
        .max()?;
    DateSpan::new(starts, ends)
}

/// Events that travel with a dragged group: every event whose start date
/// falls inside the dragged blocks' combined span. These move by
/// `weeks_delta * 5` business days alongside the blocks.
pub fn events_in_group_span(
    lane: &[Block],
    dragged: &HashSet<BlockId>,
    events: &[TimelineEvent],
) -> Vec<EventId> {
    let Some(span) = group_span(lane, dragged) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|e| span.contains(e.start_date))
        .map(|e| e.id)
        .collect()
}
