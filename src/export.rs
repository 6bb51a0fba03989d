//! CSV export with a fixed column set: every row has the same arity, absent
//! values render as the NA marker.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::constants::{CSV_HEADER, NOT_APPLICABLE};
use crate::error::Result;
use crate::flatten::FlatOddsRecord;

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one CSV row, quoting per RFC 4180.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn fmt_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render one record as cells in header order.
pub fn record_row(r: &FlatOddsRecord) -> Vec<String> {
    let na = || NOT_APPLICABLE.to_string();
    vec![
        r.event_id.clone(),
        r.sport_key.clone(),
        r.home_team.clone().unwrap_or_else(na),
        r.away_team.clone().unwrap_or_else(na),
        fmt_time(r.commence_time),
        r.bookmaker_key.clone(),
        r.bookmaker_title.clone(),
        r.market.clone(),
        r.outcome_name.clone(),
        r.outcome_price.to_string(),
        r.outcome_point.map(|p| p.to_string()).unwrap_or_else(na),
        fmt_time(r.last_update),
        fmt_time(r.scraped_at),
    ]
}

/// Write header + one row per record, in encounter order. Returns the number
/// of data rows written.
pub fn write_records<'a, W, I>(mut w: W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a FlatOddsRecord>,
{
    let header: Vec<String> = CSV_HEADER.iter().map(|s| s.to_string()).collect();
    write_row(&mut w, &header)?;

    let mut count = 0usize;
    for record in records {
        write_row(&mut w, &record_row(record))?;
        count += 1;
    }
    w.flush()?;
    Ok(count)
}

/// Export to a file path, creating parent directories as needed.
pub fn export_to_path(path: &str, records: &[FlatOddsRecord]) -> Result<usize> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = BufWriter::new(File::create(path)?);
    Ok(write_records(file, records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> FlatOddsRecord {
        FlatOddsRecord {
            event_id: "e1".into(),
            sport_key: "basketball_nba".into(),
            home_team: Some("Boston Celtics".into()),
            away_team: Some("Miami Heat".into()),
            commence_time: Utc.with_ymd_and_hms(2026, 1, 16, 0, 10, 0).unwrap(),
            bookmaker_key: "draftkings".into(),
            bookmaker_title: "DraftKings".into(),
            market: "h2h".into(),
            outcome_name: "Boston Celtics".into(),
            outcome_price: 1.57,
            outcome_point: None,
            last_update: Utc.with_ymd_and_hms(2026, 1, 15, 11, 59, 0).unwrap(),
            scraped_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn header_matches_fixed_column_set() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out.trim_end(),
            "event_id,sport,home_team,away_team,commence_time,bookmaker_key,bookmaker_title,\
             market,outcome_name,outcome_price,outcome_point,last_update,scraped_at"
        );
    }

    #[test]
    fn every_row_has_header_arity_with_na_markers() {
        let mut r = record();
        r.home_team = None;
        r.away_team = None;
        let row = record_row(&r);
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(row[2], "NA");
        assert_eq!(row[3], "NA");
        assert_eq!(row[10], "NA"); // outcome_point on h2h
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let mut buf = Vec::new();
        write_row(
            &mut buf,
            &["plain".into(), "a,b".into(), "say \"hi\"".into()],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            r#"plain,"a,b","say ""hi""""#
        );
    }

    #[test]
    fn writes_one_row_per_record_and_reports_count() {
        let records = vec![record(), record()];
        let mut buf = Vec::new();
        let n = write_records(&mut buf, &records).unwrap();
        assert_eq!(n, 2);
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 3);
        let first = out.lines().nth(1).unwrap();
        assert!(first.starts_with("e1,basketball_nba,Boston Celtics,Miami Heat,"));
        assert!(first.contains(",1.57,NA,"));
        assert!(first.ends_with("2026-01-15T12:00:00Z"));
    }

    #[test]
    fn american_prices_render_as_signed_integers() {
        let mut r = record();
        r.outcome_price = -110.0;
        assert_eq!(record_row(&r)[9], "-110");
    }
}
