use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::EngineError;
use crate::models::SectionRecord;
use crate::normalize::{self, RawCounts};

const EXPECTED_COLUMNS: [&str; 12] = [
    "INSTRUCTOR",
    "CLASS",
    "A",
    "B",
    "C",
    "D",
    "F",
    "P",
    "NP",
    "IX",
    "EW",
    "W",
];

#[derive(Debug, Deserialize)]
struct RawSectionRow {
    #[serde(rename = "INSTRUCTOR")]
    instructor: String,
    #[serde(rename = "CLASS")]
    class: String,
    #[serde(rename = "A")]
    a: Option<String>,
    #[serde(rename = "B")]
    b: Option<String>,
    #[serde(rename = "C")]
    c: Option<String>,
    #[serde(rename = "D")]
    d: Option<String>,
    #[serde(rename = "F")]
    f: Option<String>,
    #[serde(rename = "P")]
    p: Option<String>,
    #[serde(rename = "NP")]
    np: Option<String>,
    #[serde(rename = "IX")]
    ix: Option<String>,
    #[serde(rename = "EW")]
    ew: Option<String>,
    #[serde(rename = "W")]
    w: Option<String>,
}

/// Reads and normalizes the section CSV. With `strict` set, the first
/// malformed row aborts the load; otherwise bad rows are skipped with a
/// warning. Rows are never mutated after this returns.
pub fn load_records(csv_path: &Path, strict: bool) -> anyhow::Result<Vec<SectionRecord>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("opening {}", csv_path.display()))?;
    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.deserialize::<RawSectionRow>().enumerate() {
        // Header occupies line 1.
        let line = idx as u64 + 2;
        let row = result.with_context(|| format!("reading row at line {line}"))?;
        match normalize_row(&row, line) {
            Ok(record) => records.push(record),
            Err(err) if strict => return Err(err.into()),
            Err(err) => {
                log::warn!("skipping row: {err}");
                skipped += 1;
            }
        }
    }

    log::debug!(
        "loaded {} records from {} ({} skipped)",
        records.len(),
        csv_path.display(),
        skipped
    );
    Ok(records)
}

/// A file that cannot carry the raw sub-categories is rejected up front
/// rather than silently zero-filled.
fn validate_headers(headers: &csv::StringRecord) -> anyhow::Result<()> {
    for expected in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == expected) {
            anyhow::bail!(
                "input is missing the \"{expected}\" column; expected header columns {}",
                EXPECTED_COLUMNS.join(", ")
            );
        }
    }
    Ok(())
}

fn normalize_row(row: &RawSectionRow, line: u64) -> Result<SectionRecord, EngineError> {
    let professor =
        normalize::professor_key(&row.instructor).ok_or_else(|| EngineError::MalformedRecord {
            line,
            reason: "instructor field is empty".to_string(),
        })?;

    let raw = RawCounts {
        a: normalize::coerce_count(row.a.as_deref()),
        b: normalize::coerce_count(row.b.as_deref()),
        c: normalize::coerce_count(row.c.as_deref()),
        d: normalize::coerce_count(row.d.as_deref()),
        f: normalize::coerce_count(row.f.as_deref()),
        p: normalize::coerce_count(row.p.as_deref()),
        np: normalize::coerce_count(row.np.as_deref()),
        ix: normalize::coerce_count(row.ix.as_deref()),
        ew: normalize::coerce_count(row.ew.as_deref()),
        w: normalize::coerce_count(row.w.as_deref()),
    };

    Ok(SectionRecord {
        professor,
        course: row.class.trim().to_string(),
        tally: normalize::collapse(&raw),
    })
}
