mod rubric;
mod rules;

pub use rubric::{scoring_rubric, RubricEntry};
pub use rules::ScoringRule;

use super::domain::{Category, RawAccountRecord, ScoredItem};
use chrono::NaiveDate;
use rules::{months_between, triggered_rules, AccountFacts};
use serde::Serialize;

/// Failure to score a single account entry.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("record is missing {0}")]
    MissingField(&'static str),
    #[error("last_reported '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Points one rule added to a score, kept for the breakdown trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u32,
}

impl ScoreComponent {
    fn from_rule(rule: ScoringRule) -> Self {
        Self {
            rule,
            points: rule.points(),
        }
    }

    pub fn breakdown_entry(&self) -> String {
        format!("+{}: {}", self.points, self.rule.reason())
    }
}

/// Stateless scorer pinned to the evaluation date used for age rules.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    today: NaiveDate,
}

impl ScoringEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn score(
        &self,
        record: &RawAccountRecord,
        category: Category,
    ) -> Result<ScoredItem, ScoringError> {
        score_item(record, category, self.today)
    }
}

/// Applies the dispute rubric to one account entry as of `today`.
pub fn score_item(
    record: &RawAccountRecord,
    category: Category,
    today: NaiveDate,
) -> Result<ScoredItem, ScoringError> {
    let creditor = record
        .creditor()
        .ok_or(ScoringError::MissingField("creditor_name/agency_name"))?
        .to_string();
    let balance = record
        .reported_balance()
        .cloned()
        .ok_or(ScoringError::MissingField("balance/amount"))?;
    let reported_on = NaiveDate::parse_from_str(record.last_reported.trim(), "%Y-%m-%d")
        .map_err(|source| ScoringError::InvalidDate {
            value: record.last_reported.clone(),
            source,
        })?;

    let facts = AccountFacts {
        months_old: months_between(reported_on, today),
        balance: balance.as_f64(),
        record,
    };

    let components: Vec<ScoreComponent> = triggered_rules(category, &facts)
        .into_iter()
        .map(ScoreComponent::from_rule)
        .collect();

    Ok(ScoredItem {
        category,
        creditor,
        status: record.status.clone(),
        balance,
        score: components.iter().map(|component| component.points).sum(),
        reasons: components
            .iter()
            .map(|component| component.rule.reason().to_string())
            .collect(),
        breakdown: components
            .iter()
            .map(ScoreComponent::breakdown_entry)
            .collect(),
    })
}
