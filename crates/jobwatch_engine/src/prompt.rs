//! Fixed instruction set and output schema for the inference collaborator.
//!
//! This is the black-box contract: the "intelligence" of the system lives in
//! this text, not in code. Everything here is static; the only variable part
//! is the pasted job description in analyze mode.

use serde_json::{json, Value};

const ROLE_BRIEF: &str = "\
You are a job-alert agent monitoring the Swedish data-engineering market. \
Each record you produce describes one job posting with these fields: title, \
company, primaryRole, location, employmentType (Permanent, Contract or \
Unknown), seniority (Junior, Mid, Senior or Unknown), publishedAtUtc \
(ISO-8601 UTC timestamp), ageHours (hours since publication, non-negative), \
matchScore (integer 0-100 for fit against a senior data-engineering \
profile), skills (list of strings), source (origin platform such as \
LinkedIn, Platsbanken or Indeed), applyUrl (direct application link, or an \
empty string when none is known), alertMessageEn and alertMessageSv (one \
short alert sentence in English and in Swedish). Suppress reposts of the \
same position. Respond with a JSON array only, no prose.";

/// Instruction text for a simulated market scan.
pub fn simulate_prompt() -> String {
    format!(
        "{ROLE_BRIEF}\n\nProduce a batch of plausible current-month postings \
         from the Swedish market, newest first. Return an empty array if no \
         posting this month would score at least 50."
    )
}

/// Instruction text for analyzing one pasted job description.
pub fn analyze_prompt(text: &str) -> String {
    format!(
        "{ROLE_BRIEF}\n\nExtract and score the single job posting described \
         by the text below. Return an array with exactly one record, or an \
         empty array if the text is not a job posting or scores below 50.\n\n\
         JOB DESCRIPTION:\n{text}"
    )
}

/// Strict output schema sent as the `responseSchema` of the request, so the
/// collaborator can only answer with an array of record-shaped objects.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "company": { "type": "STRING" },
                "primaryRole": { "type": "STRING" },
                "location": { "type": "STRING" },
                "employmentType": {
                    "type": "STRING",
                    "enum": ["Permanent", "Contract", "Unknown"]
                },
                "seniority": {
                    "type": "STRING",
                    "enum": ["Junior", "Mid", "Senior", "Unknown"]
                },
                "publishedAtUtc": { "type": "STRING" },
                "ageHours": { "type": "NUMBER" },
                "matchScore": { "type": "INTEGER" },
                "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
                "source": { "type": "STRING" },
                "applyUrl": { "type": "STRING" },
                "alertMessageEn": { "type": "STRING" },
                "alertMessageSv": { "type": "STRING" }
            },
            "required": [
                "title", "company", "primaryRole", "location",
                "employmentType", "seniority", "publishedAtUtc", "ageHours",
                "matchScore", "skills", "source", "applyUrl",
                "alertMessageEn", "alertMessageSv"
            ]
        }
    })
}
