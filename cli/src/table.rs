//! Tabular result sets returned by the stats service.
//!
//! Every endpoint answers with a list of named result sets, each a header
//! row plus rows of loosely typed cells. [`Table`] keeps that shape intact
//! so the raw rows can be passed through untouched, and [`Table::rows_as`]
//! reads rows into typed records whose fields default to `None` when a
//! column is missing or a cell has the wrong type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// The first result set as a table; empty when the response has none.
    pub fn into_first_table(self) -> Table {
        self.result_sets
            .into_iter()
            .next()
            .map(Table::from)
            .unwrap_or_default()
    }
}

/// Rows of named columns, in the order the provider sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl From<ResultSet> for Table {
    fn from(set: ResultSet) -> Self {
        Table::new(set.headers, set.row_set)
    }
}

impl Table {
    /// Build a table, padding short rows with null and dropping extra cells
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table from JSON objects; columns follow first appearance.
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each row as a JSON object keyed by column name, in column order.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Read every row into `T`. A row that still fails to deserialize is
    /// replaced by `T::default()`.
    pub fn rows_as<T>(&self) -> Vec<T>
    where
        T: DeserializeOwned + Default,
    {
        self.records()
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(Value::Object(record)).unwrap_or_else(|e| {
                    tracing::debug!(row = index, error = %e, "unreadable row, using defaults");
                    T::default()
                })
            })
            .collect()
    }
}

/// One season of career statistics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CareerStatsRow {
    /// Any numeric cell, including negative or fractional values
    #[serde(rename = "GP", default, deserialize_with = "lenient_number")]
    pub games_played: Option<f64>,

    /// Season formatted "YYYY-YY"
    #[serde(rename = "SEASON_ID", default, deserialize_with = "lenient_string")]
    pub season_id: Option<String>,
}

/// One award received by a player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AwardRow {
    #[serde(rename = "AWARD_SLUG", default, deserialize_with = "lenient_string")]
    pub award_slug: Option<String>,
}

// Strings only; null or any other type reads as None
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

// Numbers only; null, strings and anything else read as None
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}
