//! Result formatter
//!
//! Turns search records into selector candidates. Each record becomes one
//! [`DisplayLine`]; lines are bucketed by refereed status so the selector
//! can swap candidate sets through its reload bindings without being
//! relaunched.

mod buckets;
mod line;

pub use buckets::{BUCKET_HEADER, Buckets, ScratchFiles};
pub use line::{DELIMITER, DIM, DecodedLine, DisplayLine, LineStyle, RESET, Selection, decode};

use crate::query::ArticleRecord;

/// Encode every record, in backend order, and partition the lines
#[must_use]
pub fn format_records(records: &[ArticleRecord], style: &LineStyle) -> Buckets {
    Buckets::partition(
        records
            .iter()
            .map(|record| DisplayLine::encode(record, style))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;

    #[test]
    fn test_smith_2020_scenario() {
        let records = sample_records();
        let buckets = format_records(&records, &LineStyle::new(8));

        assert_eq!(buckets.all.len(), 2);
        assert_eq!(buckets.refereed.len(), 1);
        assert_eq!(buckets.nonrefereed.len(), 1);

        let untagged = &buckets.nonrefereed[0];
        assert!(untagged.as_str().starts_with(DIM));
        assert!(untagged.as_str().contains(RESET));
        assert!(!buckets.refereed[0].as_str().contains(DIM));
    }

    #[test]
    fn test_every_record_round_trips_through_its_line() {
        let records = sample_records();
        let buckets = format_records(&records, &LineStyle::default());

        for (record, line) in records.iter().zip(&buckets.all) {
            let decoded = decode(line.as_str(), DELIMITER).unwrap();
            assert_eq!(decoded.bibcode, record.bibcode);
            assert_eq!(decoded.title, record.display_title());
        }
    }

    #[test]
    fn test_empty_results_produce_empty_buckets() {
        let buckets = format_records(&[], &LineStyle::default());
        assert!(buckets.all.is_empty());
        assert!(buckets.refereed.is_empty());
        assert!(buckets.nonrefereed.is_empty());
    }
}
