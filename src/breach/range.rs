//! Parsing of range responses and the local membership check.

/// One `SUFFIX:COUNT` line of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    pub suffix: String,
    pub count: u64,
}

/// Outcome of a completed breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreachQueryResult {
    pub is_breached: bool,
    pub occurrence_count: u64,
}

impl BreachQueryResult {
    pub fn breached(occurrence_count: u64) -> Self {
        Self {
            is_breached: true,
            occurrence_count,
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Parses a single record, splitting on the first colon.
pub fn parse_record(line: &str) -> Option<RangeRecord> {
    let (suffix, count) = line.trim().split_once(':')?;
    let suffix = suffix.trim();
    if suffix.is_empty() {
        return None;
    }
    let count = count.trim().parse::<u64>().ok()?;
    Some(RangeRecord {
        suffix: suffix.to_ascii_uppercase(),
        count,
    })
}

/// Parses a newline separated response body.
///
/// Blank lines are ignored. Malformed records (no colon, non-numeric count)
/// are skipped one by one and never fail the whole body.
pub fn parse_range_body(body: &str) -> Vec<RangeRecord> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = parse_record(line);
            #[cfg(feature = "tracing")]
            {
                if record.is_none() {
                    tracing::warn!("skipping malformed range record {:?}", line);
                }
            }
            record
        })
        .collect()
}

/// Looks for `suffix` among `records`; the first exact match wins.
pub fn find_suffix(records: &[RangeRecord], suffix: &str) -> BreachQueryResult {
    records
        .iter()
        .find(|record| record.suffix.eq_ignore_ascii_case(suffix))
        .map(|record| BreachQueryResult::breached(record.count))
        .unwrap_or_else(BreachQueryResult::not_found)
}
