use jobwatch_core::{EmploymentType, JobRecord, Seniority};

fn wire_record(published: &str, employment: &str) -> String {
    format!(
        r#"{{
            "title": "Data Engineer",
            "company": "Acme",
            "primaryRole": "Data Engineering",
            "location": "Stockholm",
            "employmentType": "{employment}",
            "seniority": "Senior",
            "publishedAtUtc": "{published}",
            "ageHours": 12.5,
            "matchScore": 91,
            "skills": ["Rust", "SQL"],
            "source": "LinkedIn",
            "applyUrl": "https://careers.acme.se/123",
            "alertMessageEn": "Strong match",
            "alertMessageSv": "Stark träff"
        }}"#
    )
}

#[test]
fn camel_case_wire_fields_deserialize() {
    let record: JobRecord =
        serde_json::from_str(&wire_record("2026-08-20T08:00:00Z", "Permanent")).unwrap();

    assert_eq!(record.primary_role, "Data Engineering");
    assert_eq!(record.employment_type, EmploymentType::Permanent);
    assert_eq!(record.seniority, Seniority::Senior);
    assert_eq!(record.age_hours, 12.5);
    assert_eq!(record.match_score, 91);
    assert_eq!(record.skills, vec!["Rust", "SQL"]);
}

#[test]
fn off_schema_employment_type_degrades_to_unknown() {
    let record: JobRecord =
        serde_json::from_str(&wire_record("2026-08-20T08:00:00Z", "Freelance")).unwrap();

    assert_eq!(record.employment_type, EmploymentType::Unknown);
}

#[test]
fn unparsable_timestamp_rejects_the_record() {
    let result: Result<JobRecord, _> =
        serde_json::from_str(&wire_record("sometime last week", "Contract"));

    assert!(result.is_err());
}
