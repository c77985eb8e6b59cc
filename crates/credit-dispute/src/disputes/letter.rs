use super::domain::{ConsumerInfo, ScoredItem};

/// Revision of [`LETTER_TEMPLATE`]; bump whenever the wording changes.
pub const LETTER_TEMPLATE_VERSION: u32 = 1;

/// FCRA dispute letter. Placeholders are `{name}`, `{address}`, `{creditor}`,
/// `{status}`, `{balance}` and `{reasons}`.
pub const LETTER_TEMPLATE: &str = "To Whom It May Concern,

My name is {name}, and I am writing to formally dispute an item on my credit report. I have reviewed the information on my report and have identified the following account that I believe is inaccurate or requires further verification:

Creditor: {creditor}\x20\x20
Status: {status}\x20\x20
Reported Balance: ${balance}\x20\x20

Reason for Dispute: {reasons}.

Under the Fair Credit Reporting Act (FCRA), I am requesting that you conduct a thorough investigation and provide verification of this account. If you cannot verify the accuracy, I respectfully request that the item be deleted from my credit file.

Please mail me a copy of the results of your investigation to the address listed below:

{address}

Thank you for your time and attention to this matter.

Sincerely,\x20\x20
{name}
";

/// Renders the dispute letter for one scored account.
pub fn generate_dispute_letter(consumer: &ConsumerInfo, item: &ScoredItem) -> String {
    let balance = item.balance.to_string();
    let reasons = item.reasons_line();

    render_template(LETTER_TEMPLATE, |key| match key {
        "name" => Some(consumer.name.as_str()),
        "address" => Some(consumer.address.as_str()),
        "creditor" => Some(item.creditor.as_str()),
        "status" => Some(item.status.as_str()),
        "balance" => Some(balance.as_str()),
        "reasons" => Some(reasons.as_str()),
        _ => None,
    })
}

/// Single pass substitution; values are never re-scanned for placeholders and
/// unknown `{keys}` are copied through untouched.
fn render_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut output = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let key = &after_open[..close];
                match lookup(key) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push('{');
                        output.push_str(key);
                        output.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disputes::domain::{Amount, Category};

    fn consumer() -> ConsumerInfo {
        ConsumerInfo {
            name: "Jordan Avery".to_string(),
            address: "221 Maple Street, Des Moines, IA 50309".to_string(),
        }
    }

    fn item() -> ScoredItem {
        ScoredItem {
            category: Category::Tradeline,
            creditor: "Capital Bank".to_string(),
            status: "Charged Off".to_string(),
            balance: Amount::from_f64(512.75).expect("finite"),
            score: 7,
            reasons: vec![
                "Older than 12 months".to_string(),
                "Balance exceeds limit".to_string(),
                "Account charged off".to_string(),
            ],
            breakdown: vec![
                "+2: Older than 12 months".to_string(),
                "+2: Balance exceeds limit".to_string(),
                "+3: Account charged off".to_string(),
            ],
        }
    }

    #[test]
    fn letter_reproduces_template_wording() {
        let letter = generate_dispute_letter(&consumer(), &item());

        let expected = "To Whom It May Concern,

My name is Jordan Avery, and I am writing to formally dispute an item on my credit report. I have reviewed the information on my report and have identified the following account that I believe is inaccurate or requires further verification:

Creditor: Capital Bank\x20\x20
Status: Charged Off\x20\x20
Reported Balance: $512.75\x20\x20

Reason for Dispute: Older than 12 months, Balance exceeds limit, Account charged off.

Under the Fair Credit Reporting Act (FCRA), I am requesting that you conduct a thorough investigation and provide verification of this account. If you cannot verify the accuracy, I respectfully request that the item be deleted from my credit file.

Please mail me a copy of the results of your investigation to the address listed below:

221 Maple Street, Des Moines, IA 50309

Thank you for your time and attention to this matter.

Sincerely,\x20\x20
Jordan Avery
";
        assert_eq!(letter, expected);
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let mut consumer = consumer();
        consumer.name = "{address}".to_string();

        let letter = generate_dispute_letter(&consumer, &item());

        assert!(letter.starts_with("To Whom It May Concern,\n\nMy name is {address}, and"));
        assert!(letter.ends_with("Sincerely,  \n{address}\n"));
    }

    #[test]
    fn template_helper_keeps_unknown_and_unclosed_braces() {
        let rendered = render_template("a {known} {other} {open", |key| match key {
            "known" => Some("1"),
            _ => None,
        });
        assert_eq!(rendered, "a 1 {other} {open");
    }
}
