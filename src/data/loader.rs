use std::borrow::Cow;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DatasetError;
use super::model::{ContentType, Dataset, TitleRecord};

pub const COL_TITLE: &str = "Title";
pub const COL_TYPE: &str = "Type";
pub const COL_GENRE: &str = "Genre";
pub const COL_PREMIERE: &str = "Premiere";
pub const COL_WATCHTIME: &str = "Watchtime in Million";

const REQUIRED_COLUMNS: [&str; 5] = [COL_TITLE, COL_TYPE, COL_GENRE, COL_PREMIERE, COL_WATCHTIME];

/// Cell texts treated as missing, mirroring the usual data-frame defaults.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a title dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the five required columns
/// * `.json`    – `[{ "Title": ..., "Type": ..., ... }, ...]`
/// * `.parquet` – same column names, any scalar Arrow types
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DatasetError::UnsupportedFormat(other.to_string()).into()),
    };
    dataset.with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// Cell parsing shared by every format
// ---------------------------------------------------------------------------

/// Whether a cell holds one of the missing-value markers.
pub fn is_na(cell: &str) -> bool {
    NA_TOKENS.contains(&cell.trim())
}

/// Coerce a premiere cell to a year; anything unparsable becomes `None`.
pub fn parse_premiere(cell: &str) -> Option<i32> {
    let s = cell.trim();
    if is_na(s) {
        return None;
    }
    s.parse::<i32>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
            .map(|f| f as i32)
    })
}

/// Parse `"<number>M"` into millions. Missing markers give `Ok(None)`,
/// anything else that fails to parse is fatal.
pub fn parse_watchtime(row: usize, cell: &str) -> Result<Option<f64>, DatasetError> {
    let s = cell.trim();
    if is_na(s) {
        return Ok(None);
    }
    let number = s.strip_suffix('M').unwrap_or(s).trim();
    number
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DatasetError::InvalidWatchtime {
            row,
            value: cell.to_string(),
        })
}

/// One source row before coercion. `None` means the cell was absent/null.
struct RawRow<'a> {
    title: Option<Cow<'a, str>>,
    kind: Option<Cow<'a, str>>,
    genre: Option<Cow<'a, str>>,
    premiere: Option<Cow<'a, str>>,
    watchtime: Option<Cow<'a, str>>,
}

/// Counters for values that were silently coerced to missing.
#[derive(Default)]
struct LoadStats {
    bad_premiere: usize,
    unknown_type: usize,
}

impl LoadStats {
    fn report(&self) {
        if self.bad_premiere > 0 {
            log::warn!(
                "{} row(s) had an unparsable '{COL_PREMIERE}' and are treated as missing",
                self.bad_premiere
            );
        }
        if self.unknown_type > 0 {
            log::warn!(
                "{} row(s) had a '{COL_TYPE}' other than Movie/TV Show",
                self.unknown_type
            );
        }
    }
}

fn build_record(row: usize, raw: RawRow<'_>, stats: &mut LoadStats) -> Result<TitleRecord> {
    let premiere = raw.premiere.as_deref().and_then(|cell| {
        let year = parse_premiere(cell);
        if year.is_none() && !is_na(cell) {
            stats.bad_premiere += 1;
        }
        year
    });

    let content_type = raw.kind.as_deref().and_then(|cell| {
        let kind = ContentType::from_source(cell);
        if kind.is_none() && !is_na(cell) {
            stats.unknown_type += 1;
        }
        kind
    });

    let watchtime = match raw.watchtime.as_deref() {
        Some(cell) => parse_watchtime(row, cell)?,
        None => None,
    };

    Ok(TitleRecord {
        title: raw.title.map(Cow::into_owned).unwrap_or_default(),
        content_type,
        genre: raw.genre.filter(|g| !is_na(g)).map(Cow::into_owned),
        premiere,
        watchtime,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Header row with column names; extra columns are ignored. Short rows are
/// accepted and their absent trailing cells read as missing.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(DatasetError::MissingColumn(name))?;
    }
    let [title_idx, type_idx, genre_idx, premiere_idx, watch_idx] = indices;

    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for (row_no, result) in (1..).zip(reader.records()) {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).map(Cow::Borrowed);
        let raw = RawRow {
            title: cell(title_idx),
            kind: cell(type_idx),
            genre: cell(genre_idx),
            premiere: cell(premiere_idx),
            watchtime: cell(watch_idx),
        };
        records.push(build_record(row_no, raw, &mut stats)?);
    }

    stats.report();
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Title": "A", "Type": "Movie", "Genre": "Drama",
///     "Premiere": 2015, "Watchtime in Million": "50M" },
///   ...
/// ]
/// ```
///
/// A key missing from one object is a missing cell; a key missing from every
/// object is a missing column.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().ok_or(DatasetError::NotAnArray)?;

    let mut seen_columns: BTreeSet<&str> = BTreeSet::new();
    let mut stats = LoadStats::default();
    let mut records = Vec::with_capacity(rows.len());

    for (row_no, row) in (1..).zip(rows) {
        let obj = row.as_object().ok_or(DatasetError::NotAnObject(row_no))?;
        for name in REQUIRED_COLUMNS {
            if obj.contains_key(name) {
                seen_columns.insert(name);
            }
        }
        let cell = |name: &str| obj.get(name).and_then(json_cell);
        let raw = RawRow {
            title: cell(COL_TITLE),
            kind: cell(COL_TYPE),
            genre: cell(COL_GENRE),
            premiere: cell(COL_PREMIERE),
            watchtime: cell(COL_WATCHTIME),
        };
        records.push(build_record(row_no, raw, &mut stats)?);
    }

    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|name| !seen_columns.contains(name))
    {
        return Err(DatasetError::MissingColumn(missing).into());
    }

    stats.report();
    Ok(Dataset::from_records(records))
}

fn json_cell(val: &JsonValue) -> Option<Cow<'_, str>> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the required columns.
///
/// Cells are read through their Arrow display form, so numeric `Premiere` /
/// `Watchtime in Million` columns work as well as text ones.  Works with
/// files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    // Resolved from the file schema so that a file without rows is still checked.
    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = builder
            .schema()
            .index_of(name)
            .map_err(|_| DatasetError::MissingColumn(name))?;
    }

    let reader = builder.build().context("building parquet reader")?;

    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns: Vec<&ArrayRef> = indices.iter().map(|&idx| batch.column(idx)).collect();

        for row in 0..batch.num_rows() {
            let row_no = records.len() + 1;
            let cell = |col: usize| -> Result<Option<Cow<'static, str>>> {
                let array: &dyn Array = columns[col].as_ref();
                if array.is_null(row) {
                    return Ok(None);
                }
                let text = array_value_to_string(array, row).with_context(|| {
                    format!("Row {row_no}: reading '{}'", REQUIRED_COLUMNS[col])
                })?;
                Ok(Some(Cow::Owned(text)))
            };
            let raw = RawRow {
                title: cell(0)?,
                kind: cell(1)?,
                genre: cell(2)?,
                premiere: cell(3)?,
                watchtime: cell(4)?,
            };
            records.push(build_record(row_no, raw, &mut stats)?);
        }
    }

    stats.report();
    Ok(Dataset::from_records(records))
}
