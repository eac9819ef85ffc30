use std::collections::HashMap;

use crate::models::{GradeTally, GroupTally, SectionRecord};

/// Which record field acts as the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Professor,
    Course,
}

impl GroupBy {
    fn key<'r>(&self, record: &'r SectionRecord) -> &'r str {
        match self {
            GroupBy::Professor => &record.professor,
            GroupBy::Course => &record.course,
        }
    }
}

/// Sums bucket counts per distinct key, optionally restricted to records
/// whose key equals `filter` exactly. Groups come back in first-occurrence
/// order; an unmatched filter yields an empty vec and the caller decides
/// whether that is a not-found condition.
pub fn aggregate(
    records: &[SectionRecord],
    group_by: GroupBy,
    filter: Option<&str>,
) -> Vec<GroupTally> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupTally> = Vec::new();

    for record in records {
        let key = group_by.key(record);
        if let Some(wanted) = filter {
            if key != wanted {
                continue;
            }
        }
        match index.get(key) {
            Some(&slot) => groups[slot].tally.merge(&record.tally),
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push(GroupTally {
                    key: key.to_string(),
                    tally: record.tally,
                });
            }
        }
    }

    groups
}

/// Grand-total tally over the whole record set.
pub fn overall(records: &[SectionRecord]) -> GradeTally {
    let mut total = GradeTally::default();
    for record in records {
        total.merge(&record.tally);
    }
    total
}
