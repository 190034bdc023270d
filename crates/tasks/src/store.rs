//! Task storage and filtering

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
        }
    }
}

/// Load tasks from a JSON file. A missing file is an empty list, not an
/// error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, String> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
}

/// Save the task list to a JSON file.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(tasks).map_err(|e| format!("Failed to serialize: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
}

/// Indices of the tasks matching the completion filter (`None` keeps
/// everything), in list order. Menu input is numbered against this view.
pub fn filtered_indices(tasks: &[Task], completed: Option<bool>) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| completed.map_or(true, |done| task.completed == done))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
