#![allow(dead_code)]

use std::{fs, path::PathBuf};

use focusboard_core::{BoardBuilder, FocusBoard};
use tempfile::TempDir;

/// A small board with one task per column.
pub const SEED_JSON: &str = r#"[
    {
        "id": "write",
        "title": "Write report",
        "impactStars": 3,
        "column": "todo",
        "nextSteps": [
            {"id": "w1", "text": "Collect numbers", "completed": false},
            {"id": "w2", "text": "Draft summary", "completed": false}
        ]
    },
    {
        "id": "review",
        "title": "Review pull request",
        "impactStars": 2,
        "column": "inProgress",
        "nextSteps": [
            {"id": "step-1", "text": "Read the diff", "completed": false}
        ],
        "completedSteps": [
            {"id": "step-2", "text": "Check out the branch", "completed": true}
        ]
    },
    {
        "id": "ship",
        "title": "Ship release",
        "impactStars": 1,
        "column": "done"
    }
]"#;

/// Writes `json` to a seed file inside a fresh temporary directory.
pub fn write_seed(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("seed.json");
    fs::write(&path, json).expect("Failed to write seed file");
    (temp_dir, path)
}

/// Helper function to create a board from [`SEED_JSON`]
pub async fn create_test_board() -> (TempDir, FocusBoard) {
    let (temp_dir, path) = write_seed(SEED_JSON);
    let board = BoardBuilder::new()
        .with_seed_file(Some(&path))
        .build()
        .await
        .expect("Failed to create board");
    (temp_dir, board)
}
