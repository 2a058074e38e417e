// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// These functions provide convenient file-based and string-based parsing of
// board snapshots, with support for merging a separately-fetched availability
// blob when the data is split across multiple endpoints.

use anyhow::{Context, Result};
use std::path::Path;

use crate::error::EngineError;
use crate::models::{AvailabilityEntry, Board};

fn validate_input_board(board_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(board_json).context("Invalid board JSON")?;
    let has_projects = value
        .as_object()
        .and_then(|obj| obj.get("projects"))
        .is_some();
    if !has_projects {
        anyhow::bail!("Missing required 'projects' field");
    }
    Ok(())
}

/// Parse a board snapshot from a JSON string with optional merging of a
/// separate availability blob.
///
/// The snapshot is deserialized through `serde_path_to_error` so malformed
/// input reports the exact JSON path that failed. Blocks with inverted date
/// spans are rejected rather than silently tolerated. When the snapshot
/// carries no checksum, one is computed over the raw JSON.
///
/// # Arguments
///
/// * `board_json` - Main board snapshot JSON (snake_case field names)
/// * `availability_json` - Optional JSON with availability entries, either a
///   wrapper `{"availability": [ ... ]}` or a direct array `[ ... ]`
pub fn parse_board_json_str(
    board_json: &str,
    availability_json: Option<&str>,
) -> Result<Board> {
    validate_input_board(board_json)?;

    let deserializer = &mut serde_json::Deserializer::from_str(board_json);
    let mut board: Board = serde_path_to_error::deserialize(deserializer)
        .context("Failed to deserialize board JSON using Serde")?;

    for project in &board.projects {
        for block in &project.blocks {
            if block.start_date > block.end_date {
                return Err(EngineError::InvalidSpan {
                    block_id: block.id,
                    start: block.start_date,
                    end: block.end_date,
                }
                .into());
            }
        }
    }

    if board.checksum.is_empty() {
        board.checksum = compute_board_checksum(board_json);
    }

    // If availability is supplied separately, merge it in. Accept either a
    // wrapper `{"availability": [ ... ]}` or a direct array `[ ... ]`.
    if let Some(av_json) = availability_json {
        let trimmed = av_json.trim();
        if !trimmed.is_empty() {
            #[derive(serde::Deserialize)]
            struct AvailabilityWrapper {
                availability: Vec<AvailabilityEntry>,
            }

            let maybe_entries: Option<Vec<AvailabilityEntry>> =
                match serde_json::from_str::<AvailabilityWrapper>(trimmed) {
                    Ok(wrapper) => Some(wrapper.availability),
                    Err(_) => serde_json::from_str::<Vec<AvailabilityEntry>>(trimmed).ok(),
                };

            if let Some(entries) = maybe_entries {
                board.availability = entries;
            }
        }
    }

    Ok(board)
}

/// Read and parse a board snapshot from a file.
pub fn parse_board_json_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    parse_board_json_str(&content, None)
        .with_context(|| format!("Failed to parse board file {}", path.display()))
}

/// Compute a checksum for the board JSON
fn compute_board_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================
