use jobwatch_core::{Activity, AppViewModel, JobCardView, ScoreTier};

pub fn print_banner() {
    println!("jobwatch — Swedish data-engineering job alerts");
    print_help();
}

pub fn print_help() {
    println!("commands:");
    println!("  scan                start a simulated market scan");
    println!("  analyze <text>      extract and score a pasted job description");
    println!("  text <text>         fill the analysis input without submitting");
    println!("  open <n>            show the apply link for job card n");
    println!("  quit                exit");
}

pub fn render(view: &AppViewModel) {
    let activity = match view.activity {
        Activity::Idle => "idle",
        Activity::Scanning => "scanning",
        Activity::Analyzing => "analyzing",
    };

    println!();
    println!("Status: {activity} | {} job alert(s)", view.job_count);
    for (index, card) in view.cards.iter().enumerate() {
        println!("{}", format_card_row(index + 1, card));
        println!("        {} | skills: {}", card.alert_en, card.skills.join(", "));
    }
    for line in &view.log {
        println!("  [{}] {}", line.timestamp, line.text);
    }
}

fn format_card_row(index: usize, card: &JobCardView) -> String {
    let marker = match card.score_tier {
        ScoreTier::High => "***",
        ScoreTier::Medium => "**",
        ScoreTier::Low => "*",
    };
    format!(
        "[#{index}] {marker} {score:>3} — {title} @ {company}, {seniority} {employment} ({location}, {age}) [{source}]",
        score = card.match_score,
        title = card.title,
        company = card.company,
        seniority = card.seniority_label,
        employment = card.employment_label,
        location = card.location,
        age = card.age_label,
        source = card.source,
    )
}

/// The "open in browser" side effect: the resolved URL is printed for the
/// user's terminal to open, never empty thanks to the resolver's fallback.
pub fn print_apply_url(view: &AppViewModel, index: usize) {
    match index.checked_sub(1).and_then(|i| view.cards.get(i)) {
        Some(card) => println!("Open in browser: {}", card.apply_url),
        None => println!("No job card #{index}"),
    }
}
