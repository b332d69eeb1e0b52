use chrono::{DateTime, Utc};
use jobwatch_core::{reconcile, EmploymentType, JobRecord, Seniority};

fn record(title: &str, published: &str, score: i32) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        company: "Acme".to_string(),
        primary_role: "Data Engineering".to_string(),
        location: "Stockholm".to_string(),
        employment_type: EmploymentType::Permanent,
        seniority: Seniority::Senior,
        published_at_utc: published.parse::<DateTime<Utc>>().unwrap(),
        age_hours: 5.0,
        match_score: score,
        skills: vec!["Rust".to_string()],
        source: "LinkedIn".to_string(),
        apply_url: "https://careers.acme.se/1".to_string(),
        alert_message_en: "New role".to_string(),
        alert_message_sv: "Ny roll".to_string(),
    }
}

fn assert_display_order(collection: &[JobRecord]) {
    for pair in collection.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.published_at_utc > b.published_at_utc
                || (a.published_at_utc == b.published_at_utc && a.match_score >= b.match_score),
            "order invariant violated: {} before {}",
            a.title,
            b.title
        );
    }
}

#[test]
fn union_is_complete_and_records_are_unchanged() {
    let incoming = vec![
        record("a", "2026-08-20T08:00:00Z", 70),
        record("b", "2026-08-22T08:00:00Z", 95),
    ];
    let existing = vec![
        record("c", "2026-08-21T08:00:00Z", 80),
        record("d", "2026-08-19T08:00:00Z", 99),
        record("e", "2026-08-23T08:00:00Z", 60),
    ];

    let merged = reconcile(incoming.clone(), existing.clone());

    assert_eq!(merged.len(), incoming.len() + existing.len());
    for original in incoming.iter().chain(existing.iter()) {
        assert!(merged.contains(original), "missing record {}", original.title);
    }
    assert_display_order(&merged);
}

#[test]
fn recency_dominates_relevance() {
    let fresher_low = record("fresh", "2026-08-23T08:00:00Z", 10);
    let older_high = record("stale", "2026-08-01T08:00:00Z", 100);

    let merged = reconcile(vec![older_high], vec![fresher_low]);

    assert_eq!(merged[0].title, "fresh");
    assert_eq!(merged[1].title, "stale");
}

#[test]
fn equal_instants_fall_back_to_score() {
    let instant = "2026-08-20T12:00:00Z";
    let merged = reconcile(
        vec![record("low", instant, 40), record("high", instant, 90)],
        vec![record("mid", instant, 75)],
    );

    let titles: Vec<_> = merged.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["high", "mid", "low"]);
}

#[test]
fn sort_is_stable_on_full_ties() {
    let instant = "2026-08-20T12:00:00Z";
    let merged = reconcile(
        vec![record("first", instant, 80), record("second", instant, 80)],
        vec![record("third", instant, 80)],
    );

    // Incoming batch ahead of the existing collection, original order kept.
    let titles: Vec<_> = merged.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn empty_incoming_reorders_existing_without_membership_change() {
    let existing = vec![
        record("old", "2026-08-10T08:00:00Z", 99),
        record("new", "2026-08-23T08:00:00Z", 50),
    ];

    let merged = reconcile(Vec::new(), existing.clone());

    assert_eq!(merged.len(), existing.len());
    assert_eq!(merged[0].title, "new");
    assert!(existing.iter().all(|r| merged.contains(r)));
}

#[test]
fn both_empty_yields_empty() {
    assert!(reconcile(Vec::new(), Vec::new()).is_empty());
}

#[test]
fn duplicates_are_kept() {
    let repost = record("repost", "2026-08-22T08:00:00Z", 85);
    let merged = reconcile(vec![repost.clone()], vec![repost.clone()]);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0], repost);
    assert_eq!(merged[1], repost);
}
