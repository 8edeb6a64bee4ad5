use polars::prelude::*;
use std::fs;
use std::path::Path;

use super::error::{DataError, DataResult};
use crate::models::{
    parse_timestamp, MetricsDocument, TripRecord, TripTable, DROPOFF_DATETIME, FARE_AMOUNT,
    PICKUP_DATETIME, PICKUP_ZONE, SEASON,
};

fn ensure_exists(path: &Path) -> DataResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(DataError::NotFound(path.to_path_buf()))
    }
}

/// Load the trip dataset from a CSV file.
pub fn load_dataset(path: &Path) -> DataResult<TripTable> {
    let df = read_trip_frame(path)?;
    let table = dataframe_to_trips(&df)?;
    log::info!(
        "Loaded {} trips from {} ({} seasons, {} zones)",
        table.len(),
        path.display(),
        table.seasons().len(),
        table.zones().len()
    );
    Ok(table)
}

/// Load the metrics document from a JSON file.
pub fn load_metrics(path: &Path) -> DataResult<MetricsDocument> {
    ensure_exists(path)?;
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let metrics = MetricsDocument::from_json_str(&content)?;
    log::info!("Loaded {} metrics from {}", metrics.len(), path.display());
    Ok(metrics)
}

/// Parse the trip CSV into a Polars DataFrame.
///
/// Every column is read as text. Inferring dtypes from a leading sample would
/// reject files whose first rows look integral (`20`, `101`) and later rows
/// don't (`12.5`, `SoHo`); [`dataframe_to_trips`] casts to the real types.
pub fn read_trip_frame(path: &Path) -> DataResult<DataFrame> {
    ensure_exists(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;
    Ok(df)
}

/// Look up a required column and cast it to `dtype`.
///
/// The cast is non-strict: cells that don't parse become null and surface as
/// [`DataError::InvalidRow`].
fn required_column(df: &DataFrame, name: &str, dtype: &DataType) -> DataResult<Column> {
    let column = df
        .column(name)
        .map_err(|_| DataError::MissingColumn(name.to_string()))?;
    Ok(column.cast(dtype)?)
}

fn invalid(row: usize, column: &str, message: impl Into<String>) -> DataError {
    DataError::InvalidRow {
        row,
        column: column.to_string(),
        message: message.into(),
    }
}

fn text_cell<'a>(values: &'a StringChunked, row: usize, column: &str) -> DataResult<&'a str> {
    values
        .get(row)
        .ok_or_else(|| invalid(row, column, "missing value"))
}

fn timestamp_cell(
    values: &StringChunked,
    row: usize,
    column: &str,
) -> DataResult<chrono::NaiveDateTime> {
    let raw = text_cell(values, row, column)?;
    parse_timestamp(raw).ok_or_else(|| invalid(row, column, format!("invalid timestamp '{}'", raw)))
}

/// Convert a trip DataFrame into typed records.
pub fn dataframe_to_trips(df: &DataFrame) -> DataResult<TripTable> {
    let pickup_col = required_column(df, PICKUP_DATETIME, &DataType::String)?;
    let dropoff_col = required_column(df, DROPOFF_DATETIME, &DataType::String)?;
    let fare_col = required_column(df, FARE_AMOUNT, &DataType::Float64)?;
    let zone_col = required_column(df, PICKUP_ZONE, &DataType::String)?;
    let season_col = required_column(df, SEASON, &DataType::String)?;

    let pickups = pickup_col.str()?;
    let dropoffs = dropoff_col.str()?;
    let fares = fare_col.f64()?;
    let zones = zone_col.str()?;
    let seasons = season_col.str()?;

    let height = df.height();
    let mut trips = Vec::with_capacity(height);

    for row in 0..height {
        let fare_amount = fares
            .get(row)
            .ok_or_else(|| invalid(row, FARE_AMOUNT, "missing or non-numeric fare"))?;

        trips.push(TripRecord {
            pickup_datetime: timestamp_cell(pickups, row, PICKUP_DATETIME)?,
            dropoff_datetime: timestamp_cell(dropoffs, row, DROPOFF_DATETIME)?,
            fare_amount,
            pickup_zone: text_cell(zones, row, PICKUP_ZONE)?.to_string(),
            season: text_cell(seasons, row, SEASON)?.to_string(),
        });
    }

    Ok(TripTable::new(trips))
}

#[cfg(test)]
#[path = "loaders_tests.rs"]
mod loaders_tests;
