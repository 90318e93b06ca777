/// Length of one `DailyClaim` bucket, in seconds
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Day bucket a block timestamp (UTC epoch seconds) falls into.
///
/// Depends only on the chain timestamp, never on wall-clock time or a timezone.
pub fn day_bucket(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}
