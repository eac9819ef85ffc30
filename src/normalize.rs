use crate::models::GradeTally;

/// Raw per-section counts as they appear in the source data, before
/// equivalent categories are folded together.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCounts {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub f: u32,
    pub p: u32,
    pub np: u32,
    pub ix: u32,
    pub ew: u32,
    pub w: u32,
}

/// Total mapping from a raw count cell to a count. Blank, missing, and
/// unparsable values (including negatives) all coerce to zero.
pub fn coerce_count(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Derives the grouping key from the instructor field: first whitespace
/// token of the trimmed text, first letter upper-cased, rest lower-cased.
/// Returns `None` when the field is empty after trimming.
pub fn professor_key(instructor: &str) -> Option<String> {
    let token = instructor.split_whitespace().next()?;
    let mut chars = token.chars();
    let first = chars.next()?;
    let mut key = String::with_capacity(token.len());
    key.extend(first.to_uppercase());
    key.push_str(&chars.as_str().to_lowercase());
    Some(key)
}

/// Folds equivalent categories into the six canonical buckets: P counts as
/// a C, NP and IX as an F, EW as a W. Consumes the raw sub-fields, so the
/// result carries no P/NP/IX/EW to fold twice. Must be applied exactly once
/// per record, to raw (uncollapsed) counts.
pub fn collapse(raw: &RawCounts) -> GradeTally {
    GradeTally {
        a: raw.a,
        b: raw.b,
        c: raw.c + raw.p,
        d: raw.d,
        f: raw.f + raw.np + raw.ix,
        w: raw.w + raw.ew,
    }
}
