//! crates/finmate_core/src/transactions.rs
//!
//! Keyword categorization of statement transactions and the per-category
//! summary built from it.
//!
//! A description is matched case-insensitively against each category's
//! keywords in [`Category::ALL`] order and the first category with any
//! substring hit wins. Descriptions matching nothing fall into
//! [`Category::Other`].

use chrono::NaiveDate;

/// A spending or income bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Entertainment,
    Transportation,
    Shopping,
    Utilities,
    Housing,
    Healthcare,
    Income,
    Other,
}

impl Category {
    /// Every category, in matching precedence order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Entertainment,
        Category::Transportation,
        Category::Shopping,
        Category::Utilities,
        Category::Housing,
        Category::Healthcare,
        Category::Income,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Transportation => "TRANSPORTATION",
            Category::Shopping => "SHOPPING",
            Category::Utilities => "UTILITIES",
            Category::Housing => "HOUSING",
            Category::Healthcare => "HEALTHCARE",
            Category::Income => "INCOME",
            Category::Other => "OTHER",
        }
    }

    /// Lowercase keywords that select this category. `Other` has none.
    ///
    /// Some keywords overlap (`"gas"` is both transportation and a utility,
    /// `"amazon prime"` contains `"amazon"`); precedence settles them.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Food => &[
                "whole foods",
                "trader joe's",
                "safeway",
                "restaurant",
                "cafe",
                "coffee",
            ],
            Category::Entertainment => &[
                "netflix",
                "spotify",
                "hulu",
                "amazon prime",
                "movie",
                "theater",
            ],
            Category::Transportation => &["uber", "lyft", "taxi", "gas", "fuel", "parking"],
            Category::Shopping => &["amazon", "target", "walmart", "costco"],
            Category::Utilities => &["electricity", "water", "gas", "internet", "phone"],
            Category::Housing => &["rent", "mortgage", "property tax", "home insurance"],
            Category::Healthcare => &["pharmacy", "doctor", "hospital", "medical"],
            Category::Income => &["salary", "deposit", "transfer in"],
            Category::Other => &[],
        }
    }
}

/// One statement line.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Signed: spending is negative, income positive.
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedTransaction {
    pub transaction: Transaction,
    pub category: Category,
}

/// Totals for one category. Amounts are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub total_amount: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
}

/// Picks the category for a statement description.
pub fn classify(description: &str) -> Category {
    let description = description.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| description.contains(keyword))
        })
        .unwrap_or(Category::Other)
}

/// Tags every transaction with its category, keeping statement order.
pub fn categorize(transactions: &[Transaction]) -> Vec<CategorizedTransaction> {
    transactions
        .iter()
        .map(|transaction| CategorizedTransaction {
            category: classify(&transaction.description),
            transaction: transaction.clone(),
        })
        .collect()
}

/// One summary per category in [`Category::ALL`] order, including categories
/// with no transactions, which report zeros.
///
/// The average is taken over the unrounded total and then rounded.
pub fn summarize(categorized: &[CategorizedTransaction]) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let (total, count) = categorized
                .iter()
                .filter(|c| c.category == category)
                .fold((0.0, 0usize), |(total, count), c| {
                    (total + c.transaction.amount, count + 1)
                });
            let average = if count == 0 { 0.0 } else { total / count as f64 };

            CategorySummary {
                category,
                total_amount: round_cents(total),
                transaction_count: count,
                average_amount: round_cents(average),
            }
        })
        .collect()
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
