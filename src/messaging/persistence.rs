//! Board persistence: load/save the full snapshot with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::board::{BoardSnapshot, MessageBoard};
use crate::directory::default_data_dir;
use crate::error::BackendError;

const BOARD_FILENAME: &str = "messages.json";

/// Platform-default location of the persisted board
/// (`<data dir>/skillswap/messages.json`).
pub fn default_board_path() -> Result<PathBuf> {
    Ok(default_data_dir()?.join(BOARD_FILENAME))
}

/// Load a board from disk. A missing file loads as an empty board.
pub fn load_board(path: &Path) -> Result<MessageBoard, BackendError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "board file missing, starting empty");
        return Ok(MessageBoard::new());
    }
    let json = fs::read_to_string(path)?;
    let snapshot: BoardSnapshot = serde_json::from_str(&json)?;
    Ok(MessageBoard::from_snapshot(snapshot))
}

/// Save the board snapshot atomically (temp file + rename), creating the
/// parent directory if missing.
pub fn save_board(path: &Path, board: &MessageBoard) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).context("Failed to create board data dir")?;
    }

    let json = serde_json::to_string_pretty(&board.snapshot())
        .context("Failed to serialize board snapshot")?;
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, json).context("Failed to write board temp file")?;
    fs::rename(&temp, path).context("Failed to rename board temp file")?;

    Ok(())
}
