use super::domain::{Amount, Category, ScoredItem};
use serde::Serialize;

/// Display record for one prioritized dispute; `rank` starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub rank: usize,
    pub category: Category,
    pub creditor: String,
    pub status: String,
    pub balance: Amount,
    pub score: u32,
    pub reasons: Vec<String>,
    pub breakdown: Vec<String>,
}

impl RankedItem {
    pub fn new(rank: usize, item: ScoredItem) -> Self {
        Self {
            rank,
            category: item.category,
            creditor: item.creditor,
            status: item.status,
            balance: item.balance,
            score: item.score,
            reasons: item.reasons,
            breakdown: item.breakdown,
        }
    }

    pub fn reasons_line(&self) -> String {
        self.reasons.join(", ")
    }

    pub fn breakdown_line(&self) -> String {
        self.breakdown.join(" | ")
    }
}

/// Orders scored items by descending score. Equal scores keep their input order.
pub fn rank(mut items: Vec<ScoredItem>) -> Vec<ScoredItem> {
    items.sort_by(|left, right| right.score.cmp(&left.score));
    items
}
