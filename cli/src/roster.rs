use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SummaryError};
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub id: u64,
    pub full_name: String,
}

#[derive(Default, Deserialize)]
struct RosterEntry {
    #[serde(rename = "PERSON_ID")]
    person_id: Option<u64>,
    #[serde(rename = "DISPLAY_FIRST_LAST")]
    display_first_last: Option<String>,
}

/// Players from a `commonallplayers` table. Rows without an id or a
/// name are skipped.
pub fn players_from_table(table: &Table) -> Vec<Player> {
    table
        .rows_as::<RosterEntry>()
        .into_iter()
        .filter_map(|entry| match (entry.person_id, entry.display_first_last) {
            (Some(id), Some(full_name)) => Some(Player { id, full_name }),
            _ => None,
        })
        .collect()
}

/// Read a static roster: a JSON array of `{"id": .., "full_name": ..}`.
pub fn load_roster_file(path: &Path) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path).map_err(|source| SummaryError::Roster {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Find the player whose full name equals `name` exactly (case-sensitive).
///
/// When several players share the name, the one listed first in the roster
/// wins. No attempt is made to tell them apart by era or team.
pub fn resolve_player(roster: &[Player], name: &str) -> Result<Player> {
    roster
        .iter()
        .find(|player| player.full_name == name)
        .cloned()
        .ok_or_else(|| SummaryError::PlayerNotFound(name.to_string()))
}
