//! Frecency scoring: usage rank weighted by recency of last access.

const HOUR_SECS: f64 = 3_600.0;
const DAY_SECS: f64 = 86_400.0;
const WEEK_SECS: f64 = 604_800.0;

/// Decay multiplier for a record last accessed `delta_secs` ago.
///
/// Buckets are evaluated in order, first match wins. A negative delta means
/// the record's clock ran ahead of ours; it is still "recent", so it lands
/// in the under-an-hour bucket.
pub fn decay_multiplier(delta_secs: f64) -> f64 {
    if delta_secs < HOUR_SECS {
        4.0
    } else if delta_secs < DAY_SECS {
        2.0
    } else if delta_secs < WEEK_SECS {
        0.5
    } else {
        0.25
    }
}

/// Calculate frecency from a usage rank and last access time, both in unix
/// seconds. Pure and deterministic given `now`.
pub fn frecency(rank: f64, last_access: f64, now: f64) -> f64 {
    rank * decay_multiplier(now - last_access)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000.0;

    #[test]
    fn recent_access_quadruples_rank() {
        assert_eq!(frecency(10.0, NOW - 1_800.0, NOW), 40.0);
        assert_eq!(frecency(2.5, NOW - 1_800.0, NOW), 10.0);
    }

    #[test]
    fn same_day_access_doubles_rank() {
        assert_eq!(frecency(10.0, NOW - 7_200.0, NOW), 20.0);
    }

    #[test]
    fn same_week_access_halves_rank() {
        assert_eq!(frecency(10.0, NOW - 200_000.0, NOW), 5.0);
    }

    #[test]
    fn stale_access_quarters_rank() {
        assert_eq!(frecency(10.0, NOW - 1_000_000.0, NOW), 2.5);
    }

    #[test]
    fn skewed_clock_counts_as_recent() {
        // last access recorded "in the future" by another machine
        assert_eq!(frecency(3.0, NOW + 500.0, NOW), 12.0);
    }

    #[test]
    fn zero_rank_stays_zero_in_every_bucket() {
        for delta in [0.0, 5_000.0, 100_000.0, 10_000_000.0] {
            assert_eq!(frecency(0.0, NOW - delta, NOW), 0.0);
        }
    }

    #[test]
    fn bucket_boundaries_are_exclusive() {
        // exactly one hour old falls into the one-day bucket
        assert_eq!(decay_multiplier(3_600.0), 2.0);
        assert_eq!(decay_multiplier(86_400.0), 0.5);
        assert_eq!(decay_multiplier(604_800.0), 0.25);
    }
}
