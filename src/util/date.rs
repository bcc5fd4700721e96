/// Reduce an ISO-8601 timestamp to its calendar date.
///
/// Values without a `T` separator are assumed to already be bare dates and
/// are returned unchanged.
pub fn normalize_date(value: Option<&str>) -> Option<String> {
    let value = value?;
    match value.split_once('T') {
        Some((date, _)) => Some(date.to_string()),
        None => Some(value.to_string()),
    }
}
