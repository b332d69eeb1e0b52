use chrono::{DateTime, Utc};
use jobwatch_core::{resolve_apply_url, EmploymentType, JobRecord, Seniority};

fn record(apply_url: &str, source: &str) -> JobRecord {
    JobRecord {
        title: "Data Engineer".to_string(),
        company: "Acme".to_string(),
        primary_role: "Data Engineering".to_string(),
        location: "Stockholm".to_string(),
        employment_type: EmploymentType::Permanent,
        seniority: Seniority::Mid,
        published_at_utc: "2026-08-20T08:00:00Z".parse::<DateTime<Utc>>().unwrap(),
        age_hours: 12.0,
        match_score: 88,
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        source: source.to_string(),
        apply_url: apply_url.to_string(),
        alert_message_en: "New role".to_string(),
        alert_message_sv: "Ny roll".to_string(),
    }
}

#[test]
fn trusted_url_passes_through_verbatim() {
    let job = record("https://company.example/apply/123", "LinkedIn");
    assert_eq!(resolve_apply_url(&job), "https://company.example/apply/123");
}

#[test]
fn resolver_is_idempotent() {
    let job = record("", "LinkedIn");
    assert_eq!(resolve_apply_url(&job), resolve_apply_url(&job));
}

#[test]
fn empty_url_falls_back_to_linkedin_search() {
    let job = record("", "LinkedIn");
    let url = resolve_apply_url(&job);

    assert!(url.starts_with("https://www.linkedin.com/jobs/search/"));
    assert!(url.contains("keywords=Data+Engineer+Acme"), "{url}");
    assert!(url.contains("location=Stockholm"), "{url}");
}

#[test]
fn source_match_is_case_insensitive() {
    let job = record("", "jobs via LINKEDIN premium");
    assert!(resolve_apply_url(&job).starts_with("https://www.linkedin.com/"));
}

#[test]
fn platsbanken_branch_ignores_location() {
    for source in ["Platsbanken", "Arbetsförmedlingen"] {
        let job = record("n/a", source);
        let url = resolve_apply_url(&job);

        assert!(
            url.starts_with("https://arbetsformedlingen.se/platsbanken/annonser"),
            "{url}"
        );
        assert!(url.contains("q=Data+Engineer+Acme"), "{url}");
        assert!(!url.contains("Stockholm"), "{url}");
    }
}

#[test]
fn indeed_branch_uses_query_and_location() {
    let job = record("", "Indeed");
    let url = resolve_apply_url(&job);

    assert!(url.starts_with("https://se.indeed.com/jobs"), "{url}");
    assert!(url.contains("q=Data+Engineer+Acme"), "{url}");
    assert!(url.contains("l=Stockholm"), "{url}");
}

#[test]
fn placeholder_url_with_unknown_source_gets_generic_search() {
    let job = record("https://example.com/jobs/1", "Unknown Board");
    let url = resolve_apply_url(&job);

    assert!(url.starts_with("https://www.google.com/search?q="), "{url}");
    assert!(url.contains("Data+Engineer+Acme+job+Stockholm"), "{url}");
    assert!(!url.contains("linkedin"), "{url}");
    assert!(!url.contains("platsbanken"), "{url}");
    assert!(!url.contains("indeed"), "{url}");
}

#[test]
fn short_url_is_not_trusted() {
    let job = record("n/a", "Indeed");
    assert!(resolve_apply_url(&job).starts_with("https://se.indeed.com/"));
}

#[test]
fn empty_location_defaults_to_region() {
    let mut job = record("", "LinkedIn");
    job.location = String::new();
    let url = resolve_apply_url(&job);

    assert!(url.contains("location=Sweden"), "{url}");
}

#[test]
fn resolver_never_returns_empty() {
    let mut job = record("", "");
    job.title = String::new();
    job.company = String::new();
    job.location = String::new();

    assert!(!resolve_apply_url(&job).is_empty());
}
