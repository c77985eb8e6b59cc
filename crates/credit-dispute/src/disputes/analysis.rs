use super::domain::ConsumerInfo;
use super::letter::{generate_dispute_letter, LETTER_TEMPLATE_VERSION};
use super::ranking::{rank, RankedItem};
use super::report::{CreditReport, ReportError};
use super::scoring::ScoringEngine;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Generated letter grouped with the recommendation it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterView {
    pub rank: usize,
    pub creditor: String,
    pub letter: String,
}

/// Ranked recommendations and their letters for one credit report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisputeAnalysis {
    pub evaluated_on: NaiveDate,
    pub consumer: ConsumerInfo,
    pub letter_template_version: u32,
    pub recommendations: Vec<RankedItem>,
    pub letters: Vec<LetterView>,
}

impl DisputeAnalysis {
    pub fn headline(&self) -> String {
        format!(
            "Report received. Found {} dispute-worthy items:",
            self.recommendations.len()
        )
    }

    pub fn letter_for(&self, rank: usize) -> Option<&LetterView> {
        self.letters.iter().find(|letter| letter.rank == rank)
    }
}

/// Runs a whole report through scoring, ranking and letter generation.
///
/// Any entry that fails to score rejects the entire report.
#[derive(Debug, Clone, Copy)]
pub struct DisputeAnalyzer {
    engine: ScoringEngine,
}

impl DisputeAnalyzer {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            engine: ScoringEngine::new(today),
        }
    }

    pub fn evaluated_on(&self) -> NaiveDate {
        self.engine.today()
    }

    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> Result<DisputeAnalysis, ReportError> {
        let report = CreditReport::from_path(path).inspect_err(log_rejection)?;
        self.analyze(&report)
    }

    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<DisputeAnalysis, ReportError> {
        let report = CreditReport::from_reader(reader).inspect_err(log_rejection)?;
        self.analyze(&report)
    }

    pub fn analyze(&self, report: &CreditReport) -> Result<DisputeAnalysis, ReportError> {
        let mut scored = Vec::with_capacity(report.entry_count());

        for (category, index, record) in report.entries() {
            let item = self
                .engine
                .score(record, category)
                .map_err(|source| ReportError::Scoring {
                    category,
                    index,
                    source,
                })
                .inspect_err(log_rejection)?;
            debug!(%category, index, creditor = %item.creditor, score = item.score, "scored account entry");
            scored.push(item);
        }

        let consumer = report.consumer_info.clone();
        let mut recommendations = Vec::with_capacity(scored.len());
        let mut letters = Vec::with_capacity(scored.len());

        for (position, item) in rank(scored).into_iter().enumerate() {
            let rank = position + 1;
            letters.push(LetterView {
                rank,
                creditor: item.creditor.clone(),
                letter: generate_dispute_letter(&consumer, &item),
            });
            recommendations.push(RankedItem::new(rank, item));
        }

        info!(
            evaluated_on = %self.evaluated_on(),
            items = recommendations.len(),
            top_score = recommendations.first().map(|item| item.score),
            "credit report analyzed"
        );

        Ok(DisputeAnalysis {
            evaluated_on: self.evaluated_on(),
            consumer,
            letter_template_version: LETTER_TEMPLATE_VERSION,
            recommendations,
            letters,
        })
    }
}

fn log_rejection(err: &ReportError) {
    warn!(error = %err, "credit report rejected");
}
