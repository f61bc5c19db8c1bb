use serde::Serialize;
use tracing::info;

use crate::aggregate::{self, AwardCounts, CareerTotals, UNTRACKED_CHAMPIONSHIPS};
use crate::error::Result;
use crate::provider::StatsProvider;
use crate::roster::{self, Player};
use crate::table::Table;

/// Flat per-player record printed by the CLI. Field order is output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub id: u64,
    pub full_name: String,
    /// The raw career table, JSON-encoded as an array of row objects
    pub career_stats: String,
    pub nba_games_played: i64,
    pub nba_career_start: Option<i32>,
    pub nba_career_end: Option<i32>,
    pub nba_all_star_selections: usize,
    pub nba_all_nba_selections: usize,
    pub nba_mvps: usize,
    pub nba_rookie_of_the_year: bool,
    pub nba_dpoy: bool,
    pub nba_mip: bool,
    pub nba_sixth_man: bool,
    pub nba_championships: u32,
}

impl PlayerSummary {
    pub fn new(player: Player, career: &Table, awards: &Table) -> Result<Self> {
        let CareerTotals {
            games_played,
            career_start,
            career_end,
        } = aggregate::career_totals(career);
        let counts: AwardCounts = aggregate::award_counts(awards);

        Ok(Self {
            id: player.id,
            full_name: player.full_name,
            career_stats: serde_json::to_string(&career.records())?,
            nba_games_played: games_played,
            nba_career_start: career_start,
            nba_career_end: career_end,
            nba_all_star_selections: counts.all_star_selections,
            nba_all_nba_selections: counts.all_nba_selections,
            nba_mvps: counts.mvps,
            nba_rookie_of_the_year: counts.rookie_of_the_year,
            nba_dpoy: counts.defensive_player_of_the_year,
            nba_mip: counts.most_improved_player,
            nba_sixth_man: counts.sixth_man_of_the_year,
            nba_championships: UNTRACKED_CHAMPIONSHIPS,
        })
    }

    /// Single-line JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Resolve `name`, fetch both tables and build the summary, one step after another.
pub async fn summarize_player<P>(provider: &P, name: &str) -> Result<PlayerSummary>
where
    P: StatsProvider + ?Sized,
{
    let players = provider.roster().await?;
    info!(players = players.len(), "roster loaded");

    let player = roster::resolve_player(&players, name)?;
    info!(id = player.id, full_name = %player.full_name, "player resolved");

    let career = provider.career_stats(player.id).await?;
    info!(seasons = career.len(), "career stats fetched");

    let awards = provider.awards(player.id).await?;
    info!(awards = awards.len(), "awards fetched");

    let summary = PlayerSummary::new(player, &career, &awards)?;
    info!(
        games_played = summary.nba_games_played,
        career_start = ?summary.nba_career_start,
        career_end = ?summary.nba_career_end,
        "summary built"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn player() -> Player {
        Player {
            id: 1,
            full_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn empty_tables_give_defaults_and_empty_career_array() {
        let summary = PlayerSummary::new(player(), &Table::default(), &Table::default()).unwrap();
        let value: Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(value["career_stats"], json!("[]"));
        assert_eq!(value["nba_games_played"], json!(0));
        assert_eq!(value["nba_career_start"], Value::Null);
        assert_eq!(value["nba_career_end"], Value::Null);
        assert_eq!(value["nba_dpoy"], json!(false));
        assert_eq!(value["nba_championships"], json!(0));
    }

    #[test]
    fn keys_follow_output_order() {
        let summary = PlayerSummary::new(player(), &Table::default(), &Table::default()).unwrap();
        let value: Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            [
                "id",
                "full_name",
                "career_stats",
                "nba_games_played",
                "nba_career_start",
                "nba_career_end",
                "nba_all_star_selections",
                "nba_all_nba_selections",
                "nba_mvps",
                "nba_rookie_of_the_year",
                "nba_dpoy",
                "nba_mip",
                "nba_sixth_man",
                "nba_championships",
            ]
        );
    }

    #[test]
    fn output_is_a_single_line() {
        let career = Table::new(
            vec!["SEASON_ID".to_string(), "GP".to_string()],
            vec![vec![json!("2010-11"), json!(70)]],
        );
        let summary = PlayerSummary::new(player(), &career, &Table::default()).unwrap();
        assert!(!summary.to_json().unwrap().contains('\n'));
    }
}
