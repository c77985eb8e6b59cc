use super::super::domain::Category;
use super::rules::ScoringRule;
use serde::Serialize;

/// Published description of one scoring rule.
#[derive(Debug, Clone, Serialize)]
pub struct RubricEntry {
    pub rule: ScoringRule,
    pub reason: &'static str,
    pub points: u32,
    pub applies_to: Option<Category>,
    pub applies_to_label: &'static str,
    pub criterion: &'static str,
}

/// The full rubric in evaluation order, for "how we score" explanations.
pub fn scoring_rubric() -> Vec<RubricEntry> {
    ScoringRule::ordered()
        .into_iter()
        .map(|rule| RubricEntry {
            rule,
            reason: rule.reason(),
            points: rule.points(),
            applies_to: rule.category(),
            applies_to_label: rule.category().map(Category::label).unwrap_or("All accounts"),
            criterion: rule.criterion(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_lists_every_rule_once_in_order() {
        let rubric = scoring_rubric();

        assert_eq!(rubric.len(), ScoringRule::ordered().len());
        assert_eq!(rubric[0].reason, "Older than 12 months");
        assert_eq!(rubric[0].applies_to_label, "All accounts");
        let charge_off = rubric
            .iter()
            .find(|entry| entry.rule == ScoringRule::ChargedOff)
            .expect("charge-off rule present");
        assert_eq!(charge_off.points, 3);
        assert_eq!(charge_off.applies_to, Some(Category::Tradeline));
    }
}
