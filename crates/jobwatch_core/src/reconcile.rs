use crate::record::JobRecord;

/// Merges a freshly fetched batch into the existing collection and orders the
/// result for display: newest first, then highest match score.
///
/// This is a multiset union; duplicates are not detected here (repost
/// suppression is the collaborator's claim, not this function's). The sort is
/// stable, so records equal on both keys keep their relative order, incoming
/// batch ahead of the existing collection.
pub fn reconcile(incoming: Vec<JobRecord>, existing: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut merged = Vec::with_capacity(incoming.len() + existing.len());
    merged.extend(incoming);
    merged.extend(existing);
    // Recency dominates relevance: a fresher, lower-scored posting always
    // ranks above an older, higher-scored one.
    merged.sort_by(|a, b| {
        b.published_at_utc
            .cmp(&a.published_at_utc)
            .then_with(|| b.match_score.cmp(&a.match_score))
    });
    merged
}
