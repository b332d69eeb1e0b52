use url::form_urlencoded;

use crate::record::JobRecord;

/// Region used when a record carries no location.
const FALLBACK_REGION: &str = "Sweden";

/// Returns a URL the user can open to apply for, or search for, the role.
///
/// A supplied `apply_url` of at least 5 characters that does not contain
/// `example.com` is trusted and returned verbatim. Anything else gets a
/// deterministic search URL derived from title, company, location, and the
/// source platform. Total and idempotent: every input yields some URL, so an
/// "Apply" action is never disabled by missing data.
pub fn resolve_apply_url(job: &JobRecord) -> String {
    if job.apply_url.len() >= 5 && !job.apply_url.contains("example.com") {
        return job.apply_url.clone();
    }

    let query = format!("{} {}", job.title, job.company);
    let location = if job.location.is_empty() {
        FALLBACK_REGION
    } else {
        job.location.as_str()
    };
    let source = job.source.to_lowercase();

    if source.contains("linkedin") {
        format!(
            "https://www.linkedin.com/jobs/search/?keywords={}&location={}",
            encode(&query),
            encode(location)
        )
    } else if source.contains("arbetsförmedlingen") || source.contains("platsbanken") {
        // The Platsbanken search URL takes no location parameter.
        format!(
            "https://arbetsformedlingen.se/platsbanken/annonser?q={}",
            encode(&query)
        )
    } else if source.contains("indeed") {
        format!(
            "https://se.indeed.com/jobs?q={}&l={}",
            encode(&query),
            encode(location)
        )
    } else {
        format!(
            "https://www.google.com/search?q={}",
            encode(&format!("{query} job {location}"))
        )
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
