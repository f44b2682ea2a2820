//! Importer for the competition record CSV.
//!
//! The source file uses Chinese column labels and two date formats; every
//! malformed value degrades to a fallback instead of aborting the run.

use std::path::Path;

use chrono::NaiveDate;
use sea_orm::*;
use serde::Deserialize;
use tracing::{error, info};

use super::ImportReport;
use crate::entity::achievement::{self, Category};

/// One row of the competition CSV.
#[derive(Debug, Default, Deserialize)]
pub struct CompetitionRow {
    #[serde(rename = "類型", default)]
    pub kind: String,
    #[serde(rename = "競賽名稱", default)]
    pub event_name: String,
    #[serde(rename = "作品名稱", default)]
    pub work_title: String,
    #[serde(rename = "名次/獲得獎項", default)]
    pub award: String,
    #[serde(rename = "時間", default)]
    pub date: String,
}

/// Read the CSV at `path` and upsert one achievement per valid row.
///
/// A missing file is reported and treated as a no-op rather than an error,
/// so a scheduled import cannot crash the process. The reader is flexible:
/// a ragged row leaves its absent columns empty, and a row missing its type
/// or event name is skipped like any other incomplete row.
pub async fn run(db: &DatabaseConnection, path: &Path) -> anyhow::Result<ImportReport> {
    if !path.exists() {
        error!("Competition CSV not found at {}", path.display());
        return Ok(ImportReport::default());
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: CompetitionRow = record?;
        rows.push(row);
    }

    Ok(import_rows(db, rows).await?)
}

/// Upsert achievements keyed on (event_name, work_title).
///
/// Existing matches are left untouched; only new rows receive the category,
/// award, date, and description derived from the CSV.
pub async fn import_rows(
    db: &DatabaseConnection,
    rows: Vec<CompetitionRow>,
) -> Result<ImportReport, DbErr> {
    let mut report = ImportReport::default();

    for row in rows {
        let kind = row.kind.trim();
        let event_name = row.event_name.trim();
        if kind.is_empty() || event_name.is_empty() {
            report.skipped += 1;
            continue;
        }

        let work_title = row.work_title.trim();

        let txn = db.begin().await?;
        let existing = achievement::Entity::find()
            .filter(achievement::Column::EventName.eq(event_name))
            .filter(achievement::Column::WorkTitle.eq(work_title))
            .one(&txn)
            .await?;

        match existing {
            Some(found) => {
                info!(
                    "Matched existing achievement: {} - {}",
                    found.event_name, found.work_title
                );
                report.matched += 1;
            }
            None => {
                let now = chrono::Utc::now();
                let created = achievement::ActiveModel {
                    category: Set(Category::from_source_label(kind)),
                    event_name: Set(event_name.to_string()),
                    work_title: Set(work_title.to_string()),
                    award: Set(row.award.trim().to_string()),
                    event_date: Set(coerce_event_date(&row.date)),
                    certificate_image: Set(None),
                    description: Set(format!("類別: {kind}")),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                info!(
                    "Created achievement: {} - {}",
                    created.event_name, created.work_title
                );
                report.created += 1;
            }
        }
        txn.commit().await?;
    }

    Ok(report)
}

/// Date used whenever the source value cannot be understood.
fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Coerce a raw date value into a date, never failing.
///
/// Accepts ISO `YYYY-MM-DD` or the localized `<year>年<month>月<day>日`
/// form; anything else resolves to the fallback date.
pub fn coerce_event_date(raw: &str) -> NaiveDate {
    let raw = raw.trim();
    if raw.contains('年') && raw.contains('月') && raw.contains('日') {
        return extract_cjk_date(raw).unwrap_or_else(fallback_date);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| fallback_date())
}

/// Pull `<year>年<month>月<day>日` out of a localized date token. The year
/// is the trailing digit run before `年` and must be exactly four digits.
fn extract_cjk_date(raw: &str) -> Option<NaiveDate> {
    let (before_year, rest) = raw.split_once('年')?;
    let (month, rest) = rest.split_once('月')?;
    let (day, _) = rest.split_once('日')?;

    let year: String = before_year
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    if year.len() != 4 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(coerce_event_date("2025-03-05"), date(2025, 3, 5));
        assert_eq!(coerce_event_date(" 2023-11-30 "), date(2023, 11, 30));
    }

    #[test]
    fn parses_localized_dates_with_zero_padding() {
        assert_eq!(coerce_event_date("2025年3月5日"), date(2025, 3, 5));
        assert_eq!(coerce_event_date("2025年12月7日"), date(2025, 12, 7));
    }

    #[test]
    fn localized_date_with_surrounding_text_still_parses() {
        assert_eq!(coerce_event_date("於2024年6月18日舉行"), date(2024, 6, 18));
    }

    #[test]
    fn garbage_falls_back_to_default_date() {
        assert_eq!(coerce_event_date("garbage"), date(2024, 1, 1));
        assert_eq!(coerce_event_date(""), date(2024, 1, 1));
        assert_eq!(coerce_event_date("2025/03/05"), date(2024, 1, 1));
    }

    #[test]
    fn malformed_localized_date_falls_back() {
        // Separators present but no usable year.
        assert_eq!(coerce_event_date("去年年3月5日"), date(2024, 1, 1));
        // Out-of-range month.
        assert_eq!(coerce_event_date("2025年13月5日"), date(2024, 1, 1));
    }

    #[test]
    fn invalid_iso_date_falls_back() {
        assert_eq!(coerce_event_date("2025-02-30"), date(2024, 1, 1));
    }

    #[test]
    fn category_labels_map_exactly() {
        assert_eq!(Category::from_source_label("競賽"), Category::Competition);
        assert_eq!(Category::from_source_label("論文發表"), Category::Paper);
        assert_eq!(Category::from_source_label("論文獲獎"), Category::Award);
    }

    #[test]
    fn unknown_category_defaults_to_competition() {
        assert_eq!(
            Category::from_source_label("something else"),
            Category::Competition
        );
        assert_eq!(Category::from_source_label(""), Category::Competition);
    }
}
