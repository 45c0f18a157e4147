//! Form validation rules
//!
//! Pure predicates used before any network call is made. URL format checking
//! is left to the server: anything that is not blank is accepted here.

/// Smallest number of memes a campaign may request
pub const MIN_MEMES: u8 = 1;

/// Largest number of memes a campaign may request
pub const MAX_MEMES: u8 = 5;

/// Returns `true` iff the trimmed URL is non-empty.
pub fn validate_url(url: &str) -> bool {
    !url.trim().is_empty()
}

/// Returns `true` iff `MIN_MEMES <= count <= MAX_MEMES`.
pub fn validate_count(count: i64) -> bool {
    (i64::from(MIN_MEMES)..=i64::from(MAX_MEMES)).contains(&count)
}

/// Constrain any integer into the allowed meme count range.
pub fn clamp_count(count: i64) -> u8 {
    // Bounds fit in u8 so the cast after clamping is lossless
    count.clamp(i64::from(MIN_MEMES), i64::from(MAX_MEMES)) as u8
}

/// Parse the raw text of the count control and clamp it.
///
/// Blank or non-numeric input is read as `0`, which clamps to [`MIN_MEMES`].
/// Fractional input is truncated toward zero before clamping.
pub fn parse_count(raw: &str) -> u8 {
    let raw = raw.trim();
    let value = raw
        .parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        })
        .unwrap_or(0);
    clamp_count(value)
}

/// Error shown when the count falls outside the allowed range.
pub fn count_error_message() -> String {
    format!("Number of memes must be between {MIN_MEMES} and {MAX_MEMES}")
}
