use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Limit assumed for a tradeline that reports no `credit_limit`.
///
/// Any positive balance on such an account counts as over the limit.
pub const DEFAULT_CREDIT_LIMIT: f64 = 1.0;

/// Report section an account entry came from; selects the rule block applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "tradelines")]
    Tradeline,
    #[serde(rename = "collections")]
    Collection,
}

impl Category {
    pub const fn ordered() -> [Self; 2] {
        [Self::Tradeline, Self::Collection]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Tradeline => "tradelines",
            Self::Collection => "collections",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tradeline => "Tradeline",
            Self::Collection => "Collection",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Monetary figure kept exactly as the report wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl Amount {
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerInfo {
    pub name: String,
    pub address: String,
}

/// Account entry as it appears in either report section.
///
/// Tradelines name a `creditor_name` and `balance`; collections name an
/// `agency_name` and `amount`. The scorer resolves whichever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAccountRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Amount>,
    pub last_reported: String,
}

impl RawAccountRecord {
    pub fn creditor(&self) -> Option<&str> {
        self.creditor_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.agency_name.as_deref().filter(|name| !name.is_empty()))
    }

    pub fn reported_balance(&self) -> Option<&Amount> {
        self.balance.as_ref().or(self.amount.as_ref())
    }

    pub fn credit_limit_or_default(&self) -> f64 {
        self.credit_limit
            .as_ref()
            .map(Amount::as_f64)
            .unwrap_or(DEFAULT_CREDIT_LIMIT)
    }
}

/// Scored account entry; `breakdown[i]` records the points behind `reasons[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub category: Category,
    pub creditor: String,
    pub status: String,
    pub balance: Amount,
    pub score: u32,
    pub reasons: Vec<String>,
    pub breakdown: Vec<String>,
}

impl ScoredItem {
    pub fn reasons_line(&self) -> String {
        self.reasons.join(", ")
    }

    pub fn breakdown_line(&self) -> String {
        self.breakdown.join(" | ")
    }
}
