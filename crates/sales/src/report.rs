//! Structured reports and their console rendering.
//!
//! The processor only builds `Report` values; printing them (or shipping them
//! elsewhere) is left to the caller.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use msgproc_core::money::DEFAULT_CURRENCY_SYMBOL;
use msgproc_core::Money;

use crate::adjustment::{AdjustmentAmount, Operation};

/// Running total of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Totals of every category holding at least one sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Message number this summary was produced after.
    pub sequence: u64,
    pub totals: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub operation: Operation,
    pub amount: AdjustmentAmount,
}

/// Adjustment history of one category, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAdjustments {
    pub category: String,
    pub adjustments: Vec<AdjustmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentSummary {
    pub categories: Vec<CategoryAdjustments>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Report {
    SaleSummary(SaleSummary),
    AdjustmentSummary(AdjustmentSummary),
    LimitReached { limit: u64 },
}

/// Renders reports as console text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRenderer {
    currency_symbol: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl ReportRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Render one report; every line ends with `\n`.
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out, report);
        out
    }

    pub fn render_all<'a>(&self, reports: impl IntoIterator<Item = &'a Report>) -> String {
        reports.into_iter().map(|r| self.render(r)).collect()
    }

    fn write_report(&self, out: &mut String, report: &Report) -> core::fmt::Result {
        match report {
            Report::SaleSummary(summary) => {
                writeln!(out, "Sale summary:")?;
                for line in &summary.totals {
                    writeln!(
                        out,
                        "    Sale type: {}; Total value: {}",
                        line.category,
                        line.total.format_with(&self.currency_symbol)
                    )?;
                }
            }
            Report::AdjustmentSummary(summary) => {
                writeln!(out, "Adjustment summary:")?;
                for category in &summary.categories {
                    writeln!(out, "    Sale type: {}", category.category)?;
                    for record in &category.adjustments {
                        writeln!(
                            out,
                            "        Operation: {}; Amount: {}",
                            record.operation, record.amount
                        )?;
                    }
                }
            }
            Report::LimitReached { limit } => {
                writeln!(
                    out,
                    "Limit of {limit} messages reached. System will now terminate."
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_summary() -> Report {
        Report::SaleSummary(SaleSummary {
            sequence: 10,
            totals: vec![
                CategoryTotal {
                    category: "apple".to_string(),
                    total: Money::from_cents(12),
                },
                CategoryTotal {
                    category: "banana".to_string(),
                    total: Money::from_cents(-1_500),
                },
            ],
        })
    }

    #[test]
    fn renders_sale_summary() {
        let text = ReportRenderer::default().render(&sale_summary());
        assert_eq!(
            text,
            concat!(
                "Sale summary:\n",
                "    Sale type: apple; Total value: $0.12\n",
                "    Sale type: banana; Total value: -$15.00\n",
            )
        );
    }

    #[test]
    fn renders_adjustment_summary_and_limit() {
        let reports = vec![
            Report::AdjustmentSummary(AdjustmentSummary {
                categories: vec![CategoryAdjustments {
                    category: "cucumber".to_string(),
                    adjustments: vec![
                        AdjustmentRecord {
                            operation: Operation::Multiply,
                            amount: 10,
                        },
                        AdjustmentRecord {
                            operation: Operation::Subtract,
                            amount: 11,
                        },
                    ],
                }],
            }),
            Report::LimitReached { limit: 50 },
        ];

        let text = ReportRenderer::default().render_all(&reports);
        assert_eq!(
            text,
            concat!(
                "Adjustment summary:\n",
                "    Sale type: cucumber\n",
                "        Operation: MULTIPLY; Amount: 10\n",
                "        Operation: SUBTRACT; Amount: 11\n",
                "Limit of 50 messages reached. System will now terminate.\n",
            )
        );
    }

    #[test]
    fn currency_symbol_is_configurable() {
        let text = ReportRenderer::new("£").render(&sale_summary());
        assert!(text.contains("Total value: £0.12"));
        assert!(text.contains("Total value: -£15.00"));
    }

    #[test]
    fn empty_summary_prints_header_only() {
        let report = Report::SaleSummary(SaleSummary {
            sequence: 10,
            totals: Vec::new(),
        });
        assert_eq!(ReportRenderer::default().render(&report), "Sale summary:\n");
    }

    #[test]
    fn reports_serialize_with_type_tag() {
        let json = serde_json::to_value(Report::LimitReached { limit: 50 }).unwrap();
        assert_eq!(json["type"], "limit_reached");
        assert_eq!(json["limit"], 50);

        let json = serde_json::to_value(sale_summary()).unwrap();
        assert_eq!(json["type"], "sale_summary");
        assert_eq!(json["totals"][1]["total"], -1_500);
    }
}
