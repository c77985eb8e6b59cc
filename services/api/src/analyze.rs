use chrono::{Local, NaiveDate};
use clap::Args;
use credit_dispute::config::AppConfig;
use credit_dispute::disputes::{scoring_rubric, DisputeAnalysis, DisputeAnalyzer, RubricEntry};
use credit_dispute::error::AppError;
use credit_dispute::telemetry;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON credit report with consumer_info, tradelines and collections
    #[arg(long)]
    pub(crate) report: PathBuf,
    /// Evaluation date for age rules (defaults to APP_EVALUATION_DATE, then today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print a dispute letter for every ranked item
    #[arg(long)]
    pub(crate) letters: bool,
    /// Emit the full analysis as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        report,
        today,
        letters,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let today = today
        .or(config.scoring.evaluation_date)
        .unwrap_or_else(|| Local::now().date_naive());
    let analysis = DisputeAnalyzer::new(today).analyze_path(report)?;

    if json {
        let payload = serde_json::to_string_pretty(&analysis).map_err(AppError::Render)?;
        println!("{payload}");
        return Ok(());
    }

    print!("{}", render_recommendations(&analysis));
    if letters {
        print!("{}", render_letters(&analysis));
    }

    Ok(())
}

pub(crate) fn run_rubric() {
    print!("{}", render_rubric(&scoring_rubric()));
}

pub(crate) fn render_recommendations(analysis: &DisputeAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", analysis.headline());

    for item in &analysis.recommendations {
        let _ = writeln!(out, "\n{}. {}", item.rank, item.creditor);
        let _ = writeln!(out, "   Status: {}", item.status);
        let _ = writeln!(out, "   Balance: ${}", item.balance);
        let _ = writeln!(out, "   Score: {}", item.score);
        let _ = writeln!(out, "   Scoring Breakdown: {}", item.breakdown_line());
        let _ = writeln!(out, "   Dispute Reasons: {}", item.reasons_line());
    }

    out
}

pub(crate) fn render_letters(analysis: &DisputeAnalysis) -> String {
    let mut out = String::new();
    if analysis.letters.is_empty() {
        return out;
    }

    let _ = writeln!(out, "\nDispute Letters");
    for letter in &analysis.letters {
        let _ = writeln!(out, "\n--- Letter {}: {} ---", letter.rank, letter.creditor);
        out.push_str(&letter.letter);
    }

    out
}

pub(crate) fn render_rubric(rubric: &[RubricEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "How we score your credit report");
    let _ = writeln!(
        out,
        "Points from every matching rule are added together; higher scores are disputed first."
    );

    let mut current_group = None;
    for entry in rubric {
        if current_group != Some(entry.applies_to_label) {
            current_group = Some(entry.applies_to_label);
            let _ = writeln!(out, "\n{}", entry.applies_to_label);
        }
        let _ = writeln!(
            out,
            "- {} (+{}): {}",
            entry.reason, entry.points, entry.criterion
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn analysis() -> DisputeAnalysis {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
        DisputeAnalyzer::new(today)
            .analyze_reader(Cursor::new(
                r#"{
                    "consumer_info": { "name": "Jordan Avery", "address": "221 Maple Street" },
                    "tradelines": [
                        { "creditor_name": "Capital Bank", "status": "Charged Off", "balance": 500,
                          "credit_limit": 400, "last_reported": "2022-01-01" }
                    ],
                    "collections": [
                        { "agency_name": "Midland Credit", "status": "Open", "amount": 845.5,
                          "last_reported": "2025-04-01" }
                    ]
                }"#,
            ))
            .expect("report analyzed")
    }

    #[test]
    fn recommendations_render_in_rank_order() {
        let rendered = render_recommendations(&analysis());

        assert!(rendered.starts_with("Report received. Found 2 dispute-worthy items:\n"));
        let capital = rendered.find("1. Capital Bank").expect("first item");
        let midland = rendered.find("2. Midland Credit").expect("second item");
        assert!(capital < midland);
        assert!(rendered.contains("   Balance: $845.5\n"));
        assert!(rendered.contains(
            "   Scoring Breakdown: +2: Older than 12 months | +2: Balance exceeds limit | +3: Account charged off\n"
        ));
        assert!(rendered.contains(
            "   Dispute Reasons: Recent negative reporting, Collection account, Recently added\n"
        ));
    }

    #[test]
    fn letters_render_with_headers() {
        let rendered = render_letters(&analysis());

        assert!(rendered.contains("--- Letter 1: Capital Bank ---"));
        assert!(rendered.contains("--- Letter 2: Midland Credit ---"));
        assert_eq!(rendered.matches("To Whom It May Concern,").count(), 2);
    }

    #[test]
    fn rubric_groups_rules_by_account_type() {
        let rendered = render_rubric(&scoring_rubric());

        let all = rendered.find("\nAll accounts\n").expect("shared group");
        let tradeline = rendered.find("\nTradeline\n").expect("tradeline group");
        let collection = rendered.find("\nCollection\n").expect("collection group");
        assert!(all < tradeline && tradeline < collection);
        assert!(rendered.contains("- Account charged off (+3):"));
    }
}
