use super::super::domain::{Category, RawAccountRecord};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Every rule that can contribute points to a dispute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    OlderThanTwelveMonths,
    RecentNegativeReporting,
    BalanceExceedsLimit,
    ChargedOff,
    MultipleLatePayments,
    CollectionAccount,
    RecentlyAdded,
}

impl ScoringRule {
    /// Rules in evaluation order.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::OlderThanTwelveMonths,
            Self::RecentNegativeReporting,
            Self::BalanceExceedsLimit,
            Self::ChargedOff,
            Self::MultipleLatePayments,
            Self::CollectionAccount,
            Self::RecentlyAdded,
        ]
    }

    pub const fn points(self) -> u32 {
        match self {
            Self::OlderThanTwelveMonths => 2,
            Self::RecentNegativeReporting => 1,
            Self::BalanceExceedsLimit => 2,
            Self::ChargedOff => 3,
            Self::MultipleLatePayments => 2,
            Self::CollectionAccount => 3,
            Self::RecentlyAdded => 1,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::OlderThanTwelveMonths => "Older than 12 months",
            Self::RecentNegativeReporting => "Recent negative reporting",
            Self::BalanceExceedsLimit => "Balance exceeds limit",
            Self::ChargedOff => "Account charged off",
            Self::MultipleLatePayments => "Multiple late payments",
            Self::CollectionAccount => "Collection account",
            Self::RecentlyAdded => "Recently added",
        }
    }

    /// `None` when the rule applies to both report sections.
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::OlderThanTwelveMonths | Self::RecentNegativeReporting => None,
            Self::BalanceExceedsLimit | Self::ChargedOff | Self::MultipleLatePayments => {
                Some(Category::Tradeline)
            }
            Self::CollectionAccount | Self::RecentlyAdded => Some(Category::Collection),
        }
    }

    pub const fn criterion(self) -> &'static str {
        match self {
            Self::OlderThanTwelveMonths => "last reported more than 12 months ago",
            Self::RecentNegativeReporting => "last reported 12 months ago or less",
            Self::BalanceExceedsLimit => {
                "balance above the credit limit (a missing limit counts as 1)"
            }
            Self::ChargedOff => "status mentions \"charge\" or \"off\"",
            Self::MultipleLatePayments => "status mentions \"late\"",
            Self::CollectionAccount => "every collection account",
            Self::RecentlyAdded => "collection last reported less than 6 months ago",
        }
    }
}

pub(crate) struct AccountFacts<'a> {
    pub months_old: i32,
    pub balance: f64,
    pub record: &'a RawAccountRecord,
}

/// Whole calendar months between two dates; the day of month is ignored.
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

pub(crate) fn triggered_rules(category: Category, facts: &AccountFacts<'_>) -> Vec<ScoringRule> {
    let mut rules = Vec::new();

    if facts.months_old > 12 {
        rules.push(ScoringRule::OlderThanTwelveMonths);
    } else {
        rules.push(ScoringRule::RecentNegativeReporting);
    }

    match category {
        Category::Tradeline => {
            if facts.balance > facts.record.credit_limit_or_default() {
                rules.push(ScoringRule::BalanceExceedsLimit);
            }

            let status = facts.record.status.to_lowercase();
            if status.contains("charge") || status.contains("off") {
                rules.push(ScoringRule::ChargedOff);
            }
            if status.contains("late") {
                rules.push(ScoringRule::MultipleLatePayments);
            }
        }
        Category::Collection => {
            rules.push(ScoringRule::CollectionAccount);
            if facts.months_old < 6 {
                rules.push(ScoringRule::RecentlyAdded);
            }
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn months_between_ignores_day_of_month() {
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_between(date(2024, 2, 1), date(2024, 2, 29)), 0);
        assert_eq!(months_between(date(2022, 11, 15), date(2024, 2, 1)), 15);
    }

    #[test]
    fn months_between_is_negative_for_future_dates() {
        assert_eq!(months_between(date(2025, 3, 1), date(2025, 1, 1)), -2);
    }

    #[test]
    fn rule_categories_match_rule_blocks() {
        let tradeline_only: Vec<_> = ScoringRule::ordered()
            .into_iter()
            .filter(|rule| rule.category() == Some(Category::Tradeline))
            .collect();
        assert_eq!(
            tradeline_only,
            vec![
                ScoringRule::BalanceExceedsLimit,
                ScoringRule::ChargedOff,
                ScoringRule::MultipleLatePayments
            ]
        );
    }

    #[test]
    fn status_matching_is_case_insensitive_and_substring_based() {
        let record = RawAccountRecord {
            status: "PAYOFF PENDING, 60 DAYS LATE".to_string(),
            credit_limit: Some(crate::disputes::domain::Amount::from(1000)),
            ..RawAccountRecord::default()
        };
        let facts = AccountFacts {
            months_old: 3,
            balance: 250.0,
            record: &record,
        };

        let rules = triggered_rules(Category::Tradeline, &facts);

        assert_eq!(
            rules,
            vec![
                ScoringRule::RecentNegativeReporting,
                ScoringRule::ChargedOff,
                ScoringRule::MultipleLatePayments
            ]
        );
    }
}
