//! Transform pipeline entry: resolve column names from the header row,
//! infer each column's schema, and build the typed frame the charting
//! layer consumes. Grid loading goes through the fetch cache so repeated
//! queries against an unchanged range skip the remote round trip.

pub(crate) mod builder;
pub(crate) mod filter;

use crate::cache::FetchCache;
use crate::error::FrameError;
use crate::frame::column::ColumnProfile;
use crate::frame::naming::resolve_names;
use crate::frame::Frame;
use crate::grid::Grid;
use crate::transform::builder::FrameBuilder;
use crate::transform::filter::filter_frame;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Query configuration supplied by the hosting plugin layer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryModel {
    pub spreadsheet_id: String,
    pub range: String,
    /// Cache time-to-live in seconds; 0 disables caching for this query
    pub cache_duration_seconds: u64,
    pub ref_id: String,
    /// Optional window the frame is trimmed to, inclusive start
    pub time_from: Option<NaiveDateTime>,
    /// Exclusive end of the window
    pub time_to: Option<NaiveDateTime>,
}

impl QueryModel {
    /// Parses the raw JSON query payload the plugin transport delivers.
    /// Unknown fields are ignored; absent fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Cache key scoping this query's fetched grid.
    pub fn cache_key(&self) -> String {
        FetchCache::key(&self.spreadsheet_id, &self.range)
    }

    /// Cache time-to-live for this query.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_duration_seconds)
    }
}

/// Loads the query's grid through the fetch cache. A live entry is
/// reused; otherwise `fetch` runs and its result is stored under the
/// query's ttl. The returned flag reports whether the load was a hit.
pub fn load_grid<F, E>(
    cache: &FetchCache,
    query: &QueryModel,
    fetch: F,
) -> Result<(Arc<Grid>, bool), E>
where
    F: FnOnce() -> Result<Grid, E>,
{
    let key = query.cache_key();
    if let Some(hit) = cache.get(&key) {
        return Ok((hit.grid, true));
    }
    tracing::debug!(%key, "fetch cache miss");
    let grid = Arc::new(fetch()?);
    cache.set(&key, Arc::clone(&grid), query.cache_ttl());
    Ok((grid, false))
}

/// Converts a fetched grid into a typed frame according to the query.
///
/// Row 0 supplies the column names; every later row is data. The only
/// fatal conditions are an empty grid and a missing header row; every
/// other anomaly is downgraded to a warning on the frame's metadata.
/// `hit` records whether the grid came from the cache.
pub fn transform(grid: &Grid, query: &QueryModel, hit: bool) -> Result<Frame, FrameError> {
    let header = grid.header_row().ok_or(FrameError::EmptyGrid)?;
    if header.cells.is_empty() {
        return Err(FrameError::MissingHeaderRow);
    }
    let names = resolve_names(header);
    tracing::debug!(
        spreadsheet_id = %query.spreadsheet_id,
        range = %query.range,
        columns = names.len(),
        rows = grid.data_row_count(),
        "transforming grid"
    );
    let profiles = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| ColumnProfile::scan(name, index, grid))
        .collect::<Vec<_>>();
    let frame = FrameBuilder::new(grid, profiles, query, hit).build();
    Ok(filter_frame(frame, query.time_from, query.time_to))
}
