use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{Result, SummaryError};
use crate::roster::{self, Player};
use crate::table::{StatsResponse, Table};

/// Source of roster and per-player tables.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Every known player, in provider order.
    async fn roster(&self) -> Result<Vec<Player>>;

    /// Per-season career statistics, one row per season.
    async fn career_stats(&self, player_id: u64) -> Result<Table>;

    /// Awards received, one row per award.
    async fn awards(&self, player_id: u64) -> Result<Table>;
}

/// Client for the public NBA stats service
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    config: ProviderConfig,
}

impl NbaStatsClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    async fn fetch_table(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Table> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, ?query, "requesting stats table");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Referer", "https://www.nba.com/")
            .header("Origin", "https://www.nba.com")
            .header("x-nba-stats-origin", "stats")
            .header("x-nba-stats-token", "true")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SummaryError::Status {
                url,
                status: response.status(),
            });
        }

        let body: StatsResponse = response.json().await?;
        Ok(body.into_first_table())
    }

    fn roster_season(&self) -> String {
        self.config
            .roster_season
            .clone()
            .unwrap_or_else(|| season_containing(Utc::now().date_naive()))
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn roster(&self) -> Result<Vec<Player>> {
        if let Some(path) = &self.config.roster_file {
            info!(path = %path.display(), "loading static roster");
            return roster::load_roster_file(path);
        }

        let season = self.roster_season();
        info!(%season, "fetching roster");
        let table = self
            .fetch_table(
                "commonallplayers",
                &[
                    ("LeagueID", self.config.league_id.clone()),
                    ("Season", season),
                    ("IsOnlyCurrentSeason", "0".to_string()),
                ],
            )
            .await?;
        Ok(roster::players_from_table(&table))
    }

    async fn career_stats(&self, player_id: u64) -> Result<Table> {
        self.fetch_table(
            "playercareerstats",
            &[
                ("PlayerID", player_id.to_string()),
                ("PerMode", self.config.per_mode.clone()),
                ("LeagueID", self.config.league_id.clone()),
            ],
        )
        .await
    }

    async fn awards(&self, player_id: u64) -> Result<Table> {
        self.fetch_table("playerawards", &[("PlayerID", player_id.to_string())])
            .await
    }
}

/// The "YYYY-YY" season in progress on `date`. Seasons open in October.
pub fn season_containing(date: NaiveDate) -> String {
    let start = if date.month() >= 10 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{:02}", start, (start + 1).rem_euclid(100))
}
