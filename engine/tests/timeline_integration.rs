use chrono::{Duration, NaiveDate};

use tle_rust::api::{BlockId, BlockTypeId, EventId, MoveGroupRequest, ProjectId};
use tle_rust::config::TimelineSettings;
use tle_rust::models::{Block, Board, Project, TimelineEvent};
use tle_rust::parsing::parse_board_json_str;
use tle_rust::services::{DragMode, TimelineState};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pivot() -> NaiveDate {
    date(2025, 3, 3) // Monday
}

fn week_block(id: i64, weeks: i64) -> Block {
    let start = pivot() + Duration::weeks(weeks);
    Block::new(
        BlockId::new(id),
        BlockTypeId::new(1),
        0,
        start,
        start + Duration::days(4),
    )
    .unwrap()
}

fn single_lane_board(blocks: Vec<Block>, events: Vec<TimelineEvent>) -> Board {
    Board {
        name: "integration".to_string(),
        checksum: String::new(),
        projects: vec![Project {
            id: ProjectId::new(1),
            name: "alpha".to_string(),
            blocks,
            events,
        }],
        availability: vec![],
    }
}

#[test]
fn test_drag_cascade_end_to_end() {
    // Three adjacent week blocks; dragging the first by one week must push
    // the other two along.
    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_board(single_lane_board(
        vec![week_block(1, 0), week_block(2, 1), week_block(3, 2)],
        vec![],
    ));

    let mut session = state.begin_drag(BlockId::new(1), DragMode::Single).unwrap();
    assert_eq!(session.update(210.0), 1); // one 200 px week

    let result = session.commit();
    assert_eq!(result.weeks_delta, 1);
    assert_eq!(result.delta_for(BlockId::new(1)), Some(1));
    assert_eq!(result.delta_for(BlockId::new(2)), Some(1));
    assert_eq!(result.delta_for(BlockId::new(3)), Some(1));

    state.apply_group_move(&result);
    let blocks = &state.board().projects[0].blocks;
    assert_eq!(blocks[0].start_date, date(2025, 3, 10));
    assert_eq!(blocks[1].start_date, date(2025, 3, 17));
    assert_eq!(blocks[2].start_date, date(2025, 3, 24));

    // Final positions are distinct week slots
    let mut weeks: Vec<NaiveDate> = blocks.iter().map(|b| b.start_week()).collect();
    weeks.sort();
    weeks.dedup();
    assert_eq!(weeks.len(), 3);
}

#[test]
fn test_drag_sweeps_events_and_builds_request_body() {
    let events = vec![
        TimelineEvent::new(EventId::new(10), date(2025, 3, 5)),
        TimelineEvent::new(EventId::new(11), date(2025, 4, 16)),
    ];
    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_board(single_lane_board(vec![week_block(1, 0), week_block(2, 4)], events));

    let mut session = state.begin_drag(BlockId::new(1), DragMode::Single).unwrap();
    session.update(-200.0);
    let result = session.commit();

    assert_eq!(result.weeks_delta, -1);
    // Only the event inside the dragged block's span is swept
    assert_eq!(result.event_ids, vec![EventId::new(10)]);

    let request = MoveGroupRequest::from_result(vec![BlockId::new(1)], &result);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["block_ids"], serde_json::json!([1]));
    assert_eq!(body["weeks_delta"], serde_json::json!(-1));
    assert_eq!(body["event_ids"], serde_json::json!([10]));

    state.apply_group_move(&result);
    let project = &state.board().projects[0];
    assert_eq!(project.blocks[0].start_date, date(2025, 2, 24));
    assert_eq!(project.events[0].start_date, date(2025, 2, 26));
    assert_eq!(project.events[1].start_date, date(2025, 4, 16));
}

#[test]
fn test_abandoned_drag_mutates_nothing() {
    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_board(single_lane_board(vec![week_block(1, 0)], vec![]));

    let mut session = state.begin_drag(BlockId::new(1), DragMode::Single).unwrap();
    session.update(70.0); // under half a week, snaps to zero
    let result = session.commit();
    assert!(result.is_noop());

    state.apply_group_move(&result);
    assert_eq!(
        state.board().projects[0].blocks[0].start_date,
        date(2025, 3, 3)
    );
}

#[test]
fn test_trailing_drag_moves_suffix_only() {
    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_board(single_lane_board(
        vec![week_block(1, 0), week_block(2, 2), week_block(3, 3)],
        vec![],
    ));

    let mut session = state
        .begin_drag(BlockId::new(2), DragMode::TrailingBlocks)
        .unwrap();
    session.update(200.0);
    let result = session.commit();

    assert_eq!(result.delta_for(BlockId::new(1)), None);
    assert_eq!(result.delta_for(BlockId::new(2)), Some(1));
    assert_eq!(result.delta_for(BlockId::new(3)), Some(1));
}

#[test]
fn test_range_widens_and_scroll_anchor_holds() {
    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_viewport_width(800.0);
    state.set_board(single_lane_board(vec![week_block(1, 0)], vec![]));
    state.set_scroll_left(200.0);

    let metrics_before = state.metrics();
    let anchored_date = date(2025, 3, 10); // column under scroll_left = 200
    assert_eq!(metrics_before.x_of(anchored_date), state.scroll_left());

    // New snapshot reaching two weeks before the pivot pulls the range start
    // left; the anchored date must stay under the viewport's left edge.
    state.set_board(single_lane_board(
        vec![week_block(1, -2), week_block(2, 0)],
        vec![],
    ));
    let metrics_after = state.metrics();
    assert_eq!(metrics_after.x_of(anchored_date), state.scroll_left());
}

#[test]
fn test_parsed_snapshot_drives_layout() {
    let board_json = r#"{
        "name": "release-plan",
        "projects": [
            {
                "id": 1,
                "name": "alpha",
                "blocks": [
                    {
                        "id": 1,
                        "block_type_id": 1,
                        "position": 0,
                        "start_date": "2025-03-03",
                        "end_date": "2025-03-07"
                    },
                    {
                        "id": 2,
                        "block_type_id": 1,
                        "position": 1,
                        "start_date": "2025-03-10",
                        "end_date": "2025-03-14"
                    }
                ],
                "events": [
                    { "id": 7, "start_date": "2025-03-12" }
                ]
            }
        ]
    }"#;
    let availability_json = r#"{ "availability": [
        { "user_id": 3, "week_start": "2025-03-03", "dedication": 80 }
    ] }"#;

    let board = parse_board_json_str(board_json, Some(availability_json)).unwrap();
    assert!(!board.checksum.is_empty());
    assert_eq!(board.availability.len(), 1);

    let mut state = TimelineState::new(TimelineSettings::default(), pivot());
    state.set_board(board);

    // Drag the second block left onto the first: the first is pushed out
    let mut session = state.begin_drag(BlockId::new(2), DragMode::Single).unwrap();
    session.update(-230.0);
    let result = session.commit();

    assert_eq!(result.delta_for(BlockId::new(2)), Some(-1));
    assert_eq!(result.delta_for(BlockId::new(1)), Some(-1));
    // The event rode along with block 2's span
    assert_eq!(result.event_ids, vec![EventId::new(7)]);

    state.apply_group_move(&result);
    let project = &state.board().projects[0];
    assert_eq!(project.blocks[1].start_date, date(2025, 3, 3));
    assert_eq!(project.blocks[0].start_date, date(2025, 2, 24));
    assert_eq!(project.events[0].start_date, date(2025, 3, 5));
}
