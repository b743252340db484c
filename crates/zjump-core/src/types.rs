//! Record types for the z database.

/// One line of the z database: an absolute directory path, its accumulated
/// usage rank, and the unix time of its last recorded access.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub path: String,
    pub rank: f64,
    pub last_access: f64,
}

impl Record {
    /// Parse one database line. Returns `None` for malformed lines (missing
    /// separators, non-numeric rank or timestamp).
    ///
    /// Fields are split from the right so a path containing `|` still parses:
    /// the last two separators delimit rank and timestamp, everything before
    /// them is the path.
    pub fn parse(line: &str) -> Option<Record> {
        let mut fields = line.rsplitn(3, '|');
        let last_access = fields.next()?.trim_end().parse::<f64>().ok()?;
        let rank = fields.next()?.parse::<f64>().ok()?;
        let path = fields.next()?;
        if path.is_empty() {
            return None;
        }
        Some(Record {
            path: path.to_string(),
            rank,
            last_access,
        })
    }

    /// Serialize back to the on-disk field layout, without a line terminator.
    ///
    /// The timestamp is persisted as whole seconds and an integral rank is
    /// written without a decimal point, matching what the external tracking
    /// agent itself writes.
    pub fn to_line(&self) -> String {
        format!("{}|{}|{}", self.path, self.rank, self.last_access as i64)
    }
}

/// A search hit carrying its computed frecency. Ephemeral: produced per
/// search and handed back as the selection payload for a later touch.
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub record: Record,
    pub frecency: f64,
}

/// Whether a touch found its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    Updated,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let record = Record::parse("/home/alice/projects|10|1700000000").unwrap();
        assert_eq!(record.path, "/home/alice/projects");
        assert_eq!(record.rank, 10.0);
        assert_eq!(record.last_access, 1_700_000_000.0);
    }

    #[test]
    fn parses_fractional_rank_and_timestamp() {
        let record = Record::parse("/srv/data|1.5|1700000000.25").unwrap();
        assert_eq!(record.rank, 1.5);
        assert_eq!(record.last_access, 1_700_000_000.25);
    }

    #[test]
    fn separator_inside_path_splits_from_the_right() {
        let record = Record::parse("/home/alice/odd|name|3|1650000000").unwrap();
        assert_eq!(record.path, "/home/alice/odd|name");
        assert_eq!(record.rank, 3.0);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Record::parse("garbage").is_none());
        assert!(Record::parse("/only/two/fields|7").is_none());
        assert!(Record::parse("/bad/rank|abc|1700000000").is_none());
        assert!(Record::parse("/bad/time|3|yesterday").is_none());
        assert!(Record::parse("|3|1700000000").is_none());
        assert!(Record::parse("").is_none());
    }

    #[test]
    fn integral_rank_serializes_without_decimal_point() {
        let record = Record {
            path: "/home/alice/projects".to_string(),
            rank: 11.0,
            last_access: 1_700_000_100.7,
        };
        assert_eq!(record.to_line(), "/home/alice/projects|11|1700000100");
    }

    #[test]
    fn fractional_rank_keeps_its_digits() {
        let record = Record {
            path: "/srv/data".to_string(),
            rank: 2.5,
            last_access: 1_700_000_000.0,
        };
        assert_eq!(record.to_line(), "/srv/data|2.5|1700000000");
    }
}
