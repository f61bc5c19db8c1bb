//! Career totals and award counts derived from the provider tables.

use crate::table::{AwardRow, CareerStatsRow, Table};

/// Championships are not present in the awards data, so the count is
/// always reported as zero. It marks an untracked value, not a real total.
pub const UNTRACKED_CHAMPIONSHIPS: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerTotals {
    pub games_played: i64,
    pub career_start: Option<i32>,
    pub career_end: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwardCounts {
    pub all_star_selections: usize,
    pub all_nba_selections: usize,
    pub mvps: usize,
    pub rookie_of_the_year: bool,
    pub defensive_player_of_the_year: bool,
    pub most_improved_player: bool,
    pub sixth_man_of_the_year: bool,
}

pub fn career_totals(career: &Table) -> CareerTotals {
    let rows: Vec<CareerStatsRow> = career.rows_as();

    // Summed as-is, then truncated toward zero
    let games_played = rows
        .iter()
        .filter_map(|row| row.games_played)
        .sum::<f64>() as i64;

    // "YYYY-YY" strings sort chronologically, so string min/max is the span
    let seasons = rows.iter().filter_map(|row| row.season_id.as_deref());
    let career_start = seasons.clone().min().and_then(season_start_year);
    let career_end = seasons.max().and_then(season_start_year);

    CareerTotals {
        games_played,
        career_start,
        career_end,
    }
}

pub fn award_counts(awards: &Table) -> AwardCounts {
    let rows: Vec<AwardRow> = awards.rows_as();
    let count = |keyword: &str| count_matching(&rows, keyword);

    AwardCounts {
        all_star_selections: count("all-star"),
        all_nba_selections: count("all-nba"),
        mvps: count("mvp"),
        rookie_of_the_year: count("rookie-of-the-year") > 0,
        defensive_player_of_the_year: count("defensive-player-of-the-year") > 0,
        most_improved_player: count("most-improved-player") > 0,
        sixth_man_of_the_year: count("sixth-man-of-the-year") > 0,
    }
}

/// Rows whose slug contains `keyword` (case-sensitive). Missing slugs never match.
fn count_matching(rows: &[AwardRow], keyword: &str) -> usize {
    rows.iter()
        .filter(|row| {
            row.award_slug
                .as_deref()
                .is_some_and(|slug| slug.contains(keyword))
        })
        .count()
}

/// Year before the first '-' of a season id, e.g. 2010 for "2010-11".
fn season_start_year(season_id: &str) -> Option<i32> {
    let (year, _) = season_id.split_once('-')?;
    match year.trim().parse() {
        Ok(year) => Some(year),
        Err(_) => {
            tracing::debug!(season_id, "season id without a numeric year");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn table(columns: &[&str], rows: Vec<Vec<Value>>) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    fn awards(slugs: &[&str]) -> Table {
        table(
            &["AWARD_SLUG"],
            slugs.iter().map(|s| vec![json!(s)]).collect(),
        )
    }

    #[test]
    fn games_played_sums_the_column() {
        let career = table(
            &["SEASON_ID", "GP"],
            vec![
                vec![json!("2010-11"), json!(70)],
                vec![json!("2011-12"), json!(82)],
            ],
        );
        let totals = career_totals(&career);
        assert_eq!(totals.games_played, 152);
        assert_eq!(totals.career_start, Some(2010));
        assert_eq!(totals.career_end, Some(2011));
    }

    #[test]
    fn games_played_keeps_negative_and_fractional_cells() {
        let career = table(
            &["SEASON_ID", "GP"],
            vec![
                vec![json!("2010-11"), json!(70)],
                vec![json!("2011-12"), json!(-3)],
                vec![json!("2012-13"), json!(10.5)],
                vec![json!("2013-14"), json!("n/a")],
            ],
        );
        assert_eq!(career_totals(&career).games_played, 77);
    }

    #[test]
    fn empty_table_yields_defaults() {
        assert_eq!(career_totals(&Table::default()), CareerTotals::default());
        assert_eq!(award_counts(&Table::default()), AwardCounts::default());
    }

    #[test]
    fn missing_columns_yield_defaults() {
        let career = table(&["PTS"], vec![vec![json!(2000)], vec![json!(1800)]]);
        assert_eq!(career_totals(&career), CareerTotals::default());

        let awards = table(&["DESCRIPTION"], vec![vec![json!("NBA All-Star")]]);
        assert_eq!(award_counts(&awards), AwardCounts::default());
    }

    #[test]
    fn span_uses_earliest_and_latest_season_regardless_of_row_order() {
        let career = table(
            &["SEASON_ID", "GP"],
            vec![
                vec![json!("2005-06"), json!(10)],
                vec![json!("1998-99"), json!(50)],
                vec![json!("2002-03"), json!(82)],
            ],
        );
        let totals = career_totals(&career);
        assert_eq!(totals.career_start, Some(1998));
        assert_eq!(totals.career_end, Some(2005));
        assert!(totals.career_start <= totals.career_end);
    }

    #[test]
    fn malformed_seasons_are_skipped_or_null() {
        let career = table(
            &["SEASON_ID", "GP"],
            vec![
                vec![json!(2010), json!(70)],
                vec![Value::Null, json!(12)],
                vec![json!("2011-12"), Value::Null],
            ],
        );
        let totals = career_totals(&career);
        assert_eq!(totals.games_played, 82);
        assert_eq!(totals.career_start, Some(2011));
        assert_eq!(totals.career_end, Some(2011));

        let no_dash = table(&["SEASON_ID"], vec![vec![json!("2011")]]);
        let totals = career_totals(&no_dash);
        assert_eq!(totals.career_start, None);
        assert_eq!(totals.career_end, None);
    }

    #[test]
    fn award_keywords_match_as_substrings() {
        let counts = award_counts(&awards(&[
            "all-star",
            "all-star",
            "all-star-mvp",
            "all-nba-first-team",
            "mvp",
            "finals-mvp",
            "rookie-of-the-year",
            "sixth-man-of-the-year",
        ]));

        assert_eq!(counts.all_star_selections, 3);
        assert_eq!(counts.all_nba_selections, 1);
        assert_eq!(counts.mvps, 3);
        assert!(counts.rookie_of_the_year);
        assert!(counts.sixth_man_of_the_year);
        assert!(!counts.defensive_player_of_the_year);
        assert!(!counts.most_improved_player);
    }

    #[test]
    fn award_matching_is_case_sensitive_and_null_safe() {
        let table = table(
            &["AWARD_SLUG"],
            vec![vec![json!("All-Star")], vec![Value::Null], vec![json!(3)]],
        );
        let counts = award_counts(&table);
        assert_eq!(counts.all_star_selections, 0);
        assert_eq!(counts, AwardCounts::default());
    }

    #[test]
    fn adding_a_matching_row_never_lowers_a_count() {
        let mut slugs = vec!["all-star", "mvp"];
        let before = award_counts(&awards(&slugs));
        slugs.push("all-star");
        let after = award_counts(&awards(&slugs));
        assert_eq!(after.all_star_selections, before.all_star_selections + 1);
        assert_eq!(after.mvps, before.mvps);
    }

    #[test]
    fn season_start_year_reads_the_prefix() {
        assert_eq!(season_start_year("1996-97"), Some(1996));
        assert_eq!(season_start_year("abcd-ef"), None);
        assert_eq!(season_start_year("1996"), None);
    }
}
