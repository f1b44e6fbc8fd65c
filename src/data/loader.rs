//! CSV Data Loader Module
//! Reads a Reel metrics export with Polars and validates each row.

use crate::data::reel::{RawReel, COMMENTS_COL, LIKES_COL, REEL_COL, REQUIRED_COLUMNS, VIEWS_COL};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Load worker stopped before reporting a result")]
    WorkerDisconnected,
}

/// Why a single row was left out of the dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    #[error("missing Reel URL")]
    MissingReel,
    #[error("missing or non-numeric {0}")]
    MissingValue(&'static str),
    #[error("negative {0}")]
    Negative(&'static str),
    #[error("Views must be greater than zero")]
    ZeroViews,
    #[error("{0} is too large to count")]
    TooLarge(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row, same numbering as `RawReel::id`.
    pub row: usize,
    pub issue: RowIssue,
}

/// Result of a single load: accepted rows plus the rows that failed validation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub source: Option<PathBuf>,
    pub columns: Vec<String>,
    pub rows: Vec<RawReel>,
    pub rejected: Vec<RejectedRow>,
}

pub type LoadOutcome = Result<Dataset, LoadError>;

/// Handles CSV parsing with Polars.
pub struct ReelLoader;

impl ReelLoader {
    /// Load and validate a CSV file.
    pub fn load_csv(path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dataset = Self::parse_csv(&text)?;
        dataset.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            rows = dataset.rows.len(),
            rejected = dataset.rejected.len(),
            "loaded reel export"
        );
        Ok(dataset)
    }

    /// Parse CSV text that has a header row. Blank lines are skipped.
    pub fn parse_csv(text: &str) -> LoadOutcome {
        let df = Self::read_frame(text)?;

        for required in REQUIRED_COLUMNS {
            if df.column(required).is_err() {
                return Err(LoadError::MissingColumn(required));
            }
        }

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (rows, rejected) = Self::extract_rows(&df, &columns)?;
        for rejected_row in &rejected {
            warn!(row = rejected_row.row, issue = %rejected_row.issue, "rejected reel row");
        }

        Ok(Dataset {
            source: None,
            columns,
            rows,
            rejected,
        })
    }

    fn read_frame(text: &str) -> Result<DataFrame, LoadError> {
        let cleaned: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        debug!(lines = cleaned.len(), "parsing csv");
        let bytes = cleaned.join("\n").into_bytes();

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Ok(df)
    }

    fn extract_rows(
        df: &DataFrame,
        columns: &[String],
    ) -> Result<(Vec<RawReel>, Vec<RejectedRow>), LoadError> {
        let reel_col = df.column(REEL_COL)?.cast(&DataType::String)?;
        let reel_ca = reel_col.as_materialized_series().str()?.clone();

        let views_col = df.column(VIEWS_COL)?.cast(&DataType::Float64)?;
        let likes_col = df.column(LIKES_COL)?.cast(&DataType::Float64)?;
        let comments_col = df.column(COMMENTS_COL)?.cast(&DataType::Float64)?;
        let views_ca = views_col.f64()?;
        let likes_ca = likes_col.f64()?;
        let comments_ca = comments_col.f64()?;

        let extra_cols: Vec<&Column> = columns
            .iter()
            .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
            .filter_map(|name| df.column(name).ok())
            .collect();

        let mut rows = Vec::with_capacity(df.height());
        let mut rejected = Vec::new();

        for i in 0..df.height() {
            let id = i + 1;
            let parsed = Self::validate_row(
                reel_ca.get(i),
                views_ca.get(i),
                likes_ca.get(i),
                comments_ca.get(i),
            );

            match parsed {
                Ok((reel, views, likes, comments)) => rows.push(RawReel {
                    id,
                    reel,
                    views,
                    likes,
                    comments,
                    extra: Self::extra_values(&extra_cols, i),
                }),
                Err(issue) => rejected.push(RejectedRow { row: id, issue }),
            }
        }

        Ok((rows, rejected))
    }

    /// Check one row's required fields; `Views` must be positive.
    fn validate_row(
        reel: Option<&str>,
        views: Option<f64>,
        likes: Option<f64>,
        comments: Option<f64>,
    ) -> Result<(String, u64, u64, u64), RowIssue> {
        let reel = reel
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RowIssue::MissingReel)?;
        let views = Self::count(views, VIEWS_COL)?;
        let likes = Self::count(likes, LIKES_COL)?;
        let comments = Self::count(comments, COMMENTS_COL)?;
        if views == 0 {
            return Err(RowIssue::ZeroViews);
        }
        Ok((reel.to_string(), views, likes, comments))
    }

    fn count(value: Option<f64>, column: &'static str) -> Result<u64, RowIssue> {
        let v = value
            .filter(|v| v.is_finite())
            .ok_or(RowIssue::MissingValue(column))?;
        if v < 0.0 {
            return Err(RowIssue::Negative(column));
        }
        // u64::MAX as f64 rounds up to 2^64, which no u64 can hold
        let rounded = v.round();
        if rounded >= u64::MAX as f64 {
            return Err(RowIssue::TooLarge(column));
        }
        Ok(rounded as u64)
    }

    fn extra_values(extra_cols: &[&Column], i: usize) -> Vec<(String, String)> {
        extra_cols
            .iter()
            .map(|col| {
                let text = match col.get(i) {
                    Ok(val) if !val.is_null() => val.to_string().trim_matches('"').to_string(),
                    _ => String::new(),
                };
                (col.name().to_string(), text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_and_extra_columns() {
        let csv = "Reel,Views,Likes,Comments,Caption\n\
                   https://x/y/aaa111,1000,100,10,hello\n\
                   \n\
                   https://x/z/bbb222,50,5,1,world\n";
        let dataset = ReelLoader::parse_csv(csv).unwrap();

        assert_eq!(dataset.rows.len(), 2);
        assert!(dataset.rejected.is_empty());
        assert_eq!(dataset.columns, vec!["Reel", "Views", "Likes", "Comments", "Caption"]);

        let first = &dataset.rows[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.reel, "https://x/y/aaa111");
        assert_eq!((first.views, first.likes, first.comments), (1000, 100, 10));
        assert_eq!(first.extra, vec![("Caption".to_string(), "hello".to_string())]);
        assert_eq!(dataset.rows[1].id, 2);
    }

    #[test]
    fn rejects_rows_that_cannot_be_derived() {
        let csv = "Reel,Views,Likes,Comments\n\
                   https://x/a/one,0,1,1\n\
                   https://x/b/two,-5,1,1\n\
                   https://x/c/three,abc,1,1\n\
                   https://x/d/four,10,2,\n\
                   https://x/e/five,10,2,3\n";
        let dataset = ReelLoader::parse_csv(csv).unwrap();

        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.rows[0].id, 5);
        assert_eq!(
            dataset.rejected,
            vec![
                RejectedRow { row: 1, issue: RowIssue::ZeroViews },
                RejectedRow { row: 2, issue: RowIssue::Negative(VIEWS_COL) },
                RejectedRow { row: 3, issue: RowIssue::MissingValue(VIEWS_COL) },
                RejectedRow { row: 4, issue: RowIssue::MissingValue(COMMENTS_COL) },
            ]
        );
    }

    #[test]
    fn fractional_counts_round_to_nearest() {
        let csv = "Reel,Views,Likes,Comments\n\
                   https://x/a/one,10.6,0.4,2.5\n";
        let dataset = ReelLoader::parse_csv(csv).unwrap();

        let row = &dataset.rows[0];
        assert_eq!((row.views, row.likes, row.comments), (11, 0, 3));
    }

    #[test]
    fn counts_beyond_u64_are_rejected() {
        let csv = "Reel,Views,Likes,Comments\n\
                   https://x/a/b,1e19,1,1\n\
                   https://x/c/d,100,2e19,1\n\
                   https://x/e/f,100,1,1\n";
        let dataset = ReelLoader::parse_csv(csv).unwrap();

        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.rows[0].id, 3);
        assert_eq!(
            dataset.rejected,
            vec![
                RejectedRow { row: 1, issue: RowIssue::TooLarge(VIEWS_COL) },
                RejectedRow { row: 2, issue: RowIssue::TooLarge(LIKES_COL) },
            ]
        );
    }

    #[test]
    fn empty_extra_cell_becomes_empty_text() {
        let csv = "Reel,Views,Likes,Comments,Caption\n\
                   https://x/a/one,100,1,1,\n\
                   https://x/b/two,100,1,1,hi\n";
        let dataset = ReelLoader::parse_csv(csv).unwrap();

        assert_eq!(dataset.rows[0].extra, vec![("Caption".to_string(), String::new())]);
        assert_eq!(dataset.rows[1].extra, vec![("Caption".to_string(), "hi".to_string())]);
    }

    #[test]
    fn missing_column_fails_the_load() {
        let err = ReelLoader::parse_csv("Reel,Views,Likes\nhttps://x/y/z,1,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Comments")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReelLoader::load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
