//! Sauvegarde et relecture des coordonnées du scénario.
//!
//! The coordinates file is deliberately flat text, one position per line.
//! Obstacles are written in set-iteration order, which is unspecified: the
//! file format treats the obstacle list as a set, not a sequence.

use crate::scenario::Scenario;
use crate::types::{GridError, Position};
use chrono::Local;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Timestamp suffix shared by the text and image files of one run.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Write the scenario coordinates to `path` as flat text.
pub fn save_coordinates(scenario: &Scenario, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_coordinates(scenario, file)
}

fn write_coordinates(scenario: &Scenario, mut out: impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Robot position: ({}, {})",
        scenario.robot.0, scenario.robot.1
    )?;
    writeln!(
        out,
        "Goal position: ({}, {})",
        scenario.goal.0, scenario.goal.1
    )?;
    writeln!(out, "Obstacle positions:")?;
    for &(row, col) in &scenario.obstacles {
        writeln!(out, "({}, {})", row, col)?;
    }
    Ok(())
}

/// Parse a coordinates file back into (robot, goal, obstacles).
///
/// The grid size is not recorded in the file, so only the positions are
/// recovered.
pub fn parse_coordinates(
    contents: &str,
) -> Result<(Position, Position, HashSet<Position>), GridError> {
    let mut lines = contents.lines();

    let robot = parse_labeled(lines.next(), "Robot position: ")?;
    let goal = parse_labeled(lines.next(), "Goal position: ")?;

    match lines.next() {
        Some("Obstacle positions:") => {}
        other => {
            return Err(GridError::Parse(format!(
                "expected obstacle header, got {other:?}"
            )));
        }
    }

    let mut obstacles = HashSet::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        obstacles.insert(parse_pair(line)?);
    }

    Ok((robot, goal, obstacles))
}

fn parse_labeled(line: Option<&str>, label: &str) -> Result<Position, GridError> {
    let line = line.ok_or_else(|| GridError::Parse(format!("missing '{label}' line")))?;
    let rest = line
        .strip_prefix(label)
        .ok_or_else(|| GridError::Parse(format!("expected '{label}' prefix in '{line}'")))?;
    parse_pair(rest)
}

fn parse_pair(text: &str) -> Result<Position, GridError> {
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| GridError::Parse(format!("malformed coordinate pair '{text}'")))?;
    let (row, col) = inner
        .split_once(',')
        .ok_or_else(|| GridError::Parse(format!("malformed coordinate pair '{text}'")))?;

    let row = row
        .trim()
        .parse()
        .map_err(|_| GridError::Parse(format!("invalid row in '{text}'")))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| GridError::Parse(format!("invalid column in '{text}'")))?;
    Ok((row, col))
}
