use crate::errors::AppResult;
use crate::utils::date::parse_date_with_format;
use chrono::NaiveDate;

pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// Sort date strings chronologically, keeping their original spelling.
/// Equal dates keep their input order.
pub fn sort_dates(dates: &[String], fmt: &str) -> AppResult<Vec<String>> {
    let mut parsed = dates
        .iter()
        .map(|d| -> AppResult<(NaiveDate, String)> {
            Ok((parse_date_with_format(d, fmt)?, d.clone()))
        })
        .collect::<AppResult<Vec<_>>>()?;

    parsed.sort_by_key(|(date, _)| *date);

    Ok(parsed.into_iter().map(|(_, d)| d).collect())
}
