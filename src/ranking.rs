use crate::error::EngineError;
use crate::models::{Bucket, BucketShare, GradeTally, GroupTally, RankingEntry};

/// Per-bucket counts and percentages in bucket order. A zero-total tally
/// reports 0.0 for every bucket rather than failing.
pub fn distribution(tally: &GradeTally) -> Vec<BucketShare> {
    let total = tally.total();
    Bucket::ALL
        .iter()
        .map(|&bucket| {
            let count = tally.count(bucket);
            let percent = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            BucketShare {
                bucket,
                count,
                percent,
            }
        })
        .collect()
}

/// Ranks groups descending by A ratio. Groups with no graded students are
/// excluded outright. The sort is stable, so ties keep the order the
/// aggregator produced.
pub fn rank(groups: &[GroupTally]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = groups
        .iter()
        .filter(|group| group.total() > 0)
        .map(|group| {
            let total = group.total();
            RankingEntry {
                key: group.key.clone(),
                a_count: group.tally.a,
                a_ratio: group.tally.a as f64 / total as f64 * 100.0,
                total,
            }
        })
        .collect();

    entries.sort_by(|x, y| {
        y.a_ratio
            .partial_cmp(&x.a_ratio)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}

/// First and last entries of a ranked sequence.
pub fn extremes(ranked: &[RankingEntry]) -> Result<(RankingEntry, RankingEntry), EngineError> {
    let best = ranked.first().ok_or(EngineError::InsufficientData)?;
    let worst = ranked.last().ok_or(EngineError::InsufficientData)?;
    Ok((best.clone(), worst.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(key: &str, a: u32, rest: u32) -> GroupTally {
        GroupTally {
            key: key.to_string(),
            tally: GradeTally {
                a,
                b: rest,
                ..GradeTally::default()
            },
        }
    }

    #[test]
    fn distribution_percentages_sum_to_one_hundred() {
        let tally = GradeTally {
            a: 10,
            b: 5,
            c: 5,
            d: 0,
            f: 2,
            w: 5,
        };
        let shares = distribution(&tally);
        assert_eq!(shares.len(), 6);
        let sum: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 0.01);
        assert!((shares[0].percent - 37.037).abs() < 0.01);
    }

    #[test]
    fn distribution_of_empty_tally_is_all_zero() {
        let shares = distribution(&GradeTally::default());
        assert!(shares.iter().all(|s| s.count == 0 && s.percent == 0.0));
    }

    #[test]
    fn rank_sorts_descending_and_drops_zero_totals() {
        let groups = vec![
            group("Low", 1, 9),
            group("Empty", 0, 0),
            group("High", 9, 1),
        ];
        let ranked = rank(&groups);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "High");
        assert_eq!(ranked[1].key, "Low");
        for pair in ranked.windows(2) {
            assert!(pair[0].a_ratio >= pair[1].a_ratio);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let groups = vec![
            group("First", 5, 5),
            group("Second", 50, 50),
            group("Third", 1, 1),
        ];
        let ranked = rank(&groups);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn extremes_picks_first_and_last() {
        let ranked = rank(&[group("Top", 3, 1), group("Bottom", 1, 3)]);
        let (best, worst) = extremes(&ranked).unwrap();
        assert_eq!(best.key, "Top");
        assert_eq!(worst.key, "Bottom");
        assert!((best.a_ratio - 75.0).abs() < 1e-9);
        assert!((worst.a_ratio - 25.0).abs() < 1e-9);
    }

    #[test]
    fn extremes_on_empty_ranking_is_insufficient_data() {
        let ranked = rank(&[group("Empty", 0, 0)]);
        assert!(matches!(
            extremes(&ranked),
            Err(EngineError::InsufficientData)
        ));
    }
}
