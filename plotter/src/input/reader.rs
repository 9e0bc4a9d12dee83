use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, Trim};
use deedcore::{DistanceUnit, SurveyRecord};
use log::debug;
use std::path::Path;

const REQUIRED_HEADERS: [&str; 2] = ["bearing", "distance"];

/// Tab separated unless the file ends in `.csv`.
fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => b',',
        _ => b'\t',
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

/// Reads deed calls from a delimited file, converting distances to feet.
///
/// Lines starting with `#` are comments. The header must name `bearing` and
/// `distance` exactly once each; other columns are ignored.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    units: DistanceUnit,
) -> anyhow::Result<Vec<SurveyRecord>> {
    let path = path.as_ref();
    let tab_separated = delimiter_for(path) == b'\t';
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .comment(Some(b'#'))
        .flexible(true)
        .quoting(!tab_separated)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening deed file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?
        .clone();
    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|name| column_index(&headers, name).is_none())
        .collect();
    if !missing.is_empty() {
        bail!(
            "deed file {} is missing headers {:?} (found {:?})",
            path.display(),
            missing,
            headers.iter().collect::<Vec<_>>()
        );
    }
    let duplicated: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|name| {
            headers
                .iter()
                .filter(|header| header.trim().eq_ignore_ascii_case(name))
                .count()
                > 1
        })
        .collect();
    if !duplicated.is_empty() {
        bail!(
            "deed file {} has duplicate headers {:?}",
            path.display(),
            duplicated
        );
    }
    let bearing_col = column_index(&headers, "bearing").unwrap_or_default();
    let distance_col = column_index(&headers, "distance").unwrap_or_default();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("reading {}", path.display()))?;
        let line = row.position().map_or(0, |pos| pos.line());

        let bearing = row.get(bearing_col).unwrap_or_default();
        let distance_text = row.get(distance_col).unwrap_or_default();
        let distance: f64 = distance_text.parse().with_context(|| {
            format!(
                "line {} of {}: invalid distance {:?}",
                line,
                path.display(),
                distance_text
            )
        })?;
        if !distance.is_finite() || distance <= 0.0 {
            bail!(
                "line {} of {}: distance must be positive, got {}",
                line,
                path.display(),
                distance
            );
        }

        records.push(SurveyRecord::new(bearing, units.to_feet(distance)));
    }

    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
