//! Dispute prioritization for negative credit report entries.
//!
//! Each tradeline and collection is scored against a fixed rubric, the
//! results are ranked by score, and an FCRA dispute letter is drafted for
//! every ranked entry.

pub mod analysis;
pub mod domain;
pub mod letter;
pub mod ranking;
pub mod report;
pub mod router;
pub mod scoring;

pub use analysis::{DisputeAnalysis, DisputeAnalyzer, LetterView};
pub use domain::{
    Amount, Category, ConsumerInfo, RawAccountRecord, ScoredItem, DEFAULT_CREDIT_LIMIT,
};
pub use letter::{generate_dispute_letter, LETTER_TEMPLATE, LETTER_TEMPLATE_VERSION};
pub use ranking::{rank, RankedItem};
pub use report::{CreditReport, ReportError};
pub use router::{dispute_router, DisputeRouterState};
pub use scoring::{
    score_item, scoring_rubric, RubricEntry, ScoreComponent, ScoringEngine, ScoringError,
    ScoringRule,
};
