use serde::Serialize;

/// Canonical grade outcome categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bucket {
    A,
    B,
    C,
    D,
    F,
    W,
}

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::A,
        Bucket::B,
        Bucket::C,
        Bucket::D,
        Bucket::F,
        Bucket::W,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::A => "A",
            Bucket::B => "B",
            Bucket::C => "C",
            Bucket::D => "D",
            Bucket::F => "F",
            Bucket::W => "W",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Student counts for the six canonical buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTally {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub f: u32,
    pub w: u32,
}

impl GradeTally {
    pub fn total(&self) -> u32 {
        self.a + self.b + self.c + self.d + self.f + self.w
    }

    pub fn count(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::A => self.a,
            Bucket::B => self.b,
            Bucket::C => self.c,
            Bucket::D => self.d,
            Bucket::F => self.f,
            Bucket::W => self.w,
        }
    }

    pub fn merge(&mut self, other: &GradeTally) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
        self.d += other.d;
        self.f += other.f;
        self.w += other.w;
    }
}

/// One normalized course section. Immutable once ingested.
#[derive(Debug, Clone)]
pub struct SectionRecord {
    pub professor: String,
    pub course: String,
    pub tally: GradeTally,
}

/// Summed tally for one grouping key (professor or course).
#[derive(Debug, Clone)]
pub struct GroupTally {
    pub key: String,
    pub tally: GradeTally,
}

impl GroupTally {
    pub fn total(&self) -> u32 {
        self.tally.total()
    }
}

/// One bucket's slice of a group: count and percentage of the group total.
#[derive(Debug, Clone, Serialize)]
pub struct BucketShare {
    pub bucket: Bucket,
    pub count: u32,
    pub percent: f64,
}

/// A group eligible for ranking (total > 0), with its derived A ratio.
#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    pub key: String,
    pub a_count: u32,
    pub a_ratio: f64,
    pub total: u32,
}

/// Bucket breakdown for one key (a professor, or the whole data set).
#[derive(Debug, Clone, Serialize)]
pub struct DistributionSummary {
    pub key: String,
    pub total: u32,
    pub buckets: Vec<BucketShare>,
}

/// Best and worst ranked entries by A ratio.
#[derive(Debug, Clone, Serialize)]
pub struct ExtremesSummary {
    pub best: RankingEntry,
    pub worst: RankingEntry,
}
