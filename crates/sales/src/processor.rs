//! The stateful message processor.
//!
//! Each accepted message is decided into `ProcessorEvent`s, applied in order,
//! and then counted. Every `summary_interval` messages a sale summary is
//! produced; at `message_limit` the adjustment summary follows and the
//! processor stops accepting input for good.

use tracing::{debug, info, warn};

use msgproc_core::{Aggregate, DomainError, DomainResult, Money, MoneyCents};
use msgproc_events::execute;

use crate::adjustment::{Adjustment, AdjustmentAmount, Operation};
use crate::category::CategoryMap;
use crate::config::ProcessorConfig;
use crate::message::{LimitReached, Message, MessageCounted, ProcessorEvent, SalesRecorded};
use crate::report::{
    AdjustmentRecord, AdjustmentSummary, CategoryAdjustments, CategoryTotal, Report, SaleSummary,
};
use crate::sale::Sale;

/// Result of offering one message to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutcome {
    /// `false` when the processor had already terminated.
    pub accepted: bool,
    pub events: Vec<ProcessorEvent>,
    pub reports: Vec<Report>,
}

impl ProcessOutcome {
    fn ignored() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageProcessor {
    config: ProcessorConfig,
    message_count: u64,
    terminated: bool,
    sales: CategoryMap<Sale>,
    adjustments: CategoryMap<Adjustment>,
    version: u64,
}

impl Default for MessageProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl MessageProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            message_count: 0,
            terminated: false,
            sales: CategoryMap::new(),
            adjustments: CategoryMap::new(),
            version: 0,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Categories holding sales, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sales.categories()
    }

    pub fn sales(&self, category: &str) -> &[Sale] {
        self.sales.get(category)
    }

    pub fn adjustments(&self, category: &str) -> &[Adjustment] {
        self.adjustments.get(category)
    }

    /// Sum of all sale prices under `category`; 0 for an unknown category.
    pub fn total_value(&self, category: &str) -> MoneyCents {
        self.total(category).cents()
    }

    fn total(&self, category: &str) -> Money {
        self.sales(category)
            .iter()
            .map(|s| Money::from_cents(s.price()))
            .sum()
    }

    pub fn process_single_sale(
        &mut self,
        category: impl Into<String>,
        price: MoneyCents,
    ) -> DomainResult<ProcessOutcome> {
        self.process(&Message::single_sale(category, price))
    }

    pub fn process_multiple_sales(
        &mut self,
        category: impl Into<String>,
        price: MoneyCents,
        count: i64,
    ) -> DomainResult<ProcessOutcome> {
        self.process(&Message::multiple_sales(category, price, count))
    }

    pub fn process_single_sale_and_price_adjustment(
        &mut self,
        sale_category: impl Into<String>,
        sale_price: MoneyCents,
        adjustment_category: impl Into<String>,
        operation: Operation,
        amount: AdjustmentAmount,
    ) -> DomainResult<ProcessOutcome> {
        let adjustment = Adjustment::new(adjustment_category, operation, amount);
        self.process(&Message::sale_with_adjustment(
            sale_category,
            sale_price,
            adjustment,
        ))
    }

    /// Apply one message and produce whatever reports it triggers.
    ///
    /// Once terminated, messages are ignored (`accepted == false`). A
    /// rejected message returns an error and changes nothing.
    pub fn process(&mut self, message: &Message) -> DomainResult<ProcessOutcome> {
        let events = match execute(self, message) {
            Ok(events) => events,
            Err(err) => {
                warn!(kind = message.kind(), error = %err, "message rejected");
                return Err(err);
            }
        };

        if events.is_empty() {
            warn!(
                kind = message.kind(),
                limit = self.config.message_limit(),
                "message ignored: processor terminated"
            );
            return Ok(ProcessOutcome::ignored());
        }

        debug!(
            sequence = self.message_count,
            kind = message.kind(),
            events = events.len(),
            "message accepted"
        );

        let reports = self.reports_for(&events);
        Ok(ProcessOutcome {
            accepted: true,
            events,
            reports,
        })
    }

    /// Current totals of every category with at least one sale.
    pub fn sale_summary(&self) -> SaleSummary {
        let totals = self
            .sales
            .iter()
            .filter(|(_, sales)| !sales.is_empty())
            .map(|(category, _)| CategoryTotal {
                category: category.to_string(),
                total: self.total(category),
            })
            .collect();

        SaleSummary {
            sequence: self.message_count,
            totals,
        }
    }

    /// Adjustment history per category, in arrival order.
    pub fn adjustment_summary(&self) -> AdjustmentSummary {
        let categories = self
            .adjustments
            .iter()
            .map(|(category, adjustments)| CategoryAdjustments {
                category: category.to_string(),
                adjustments: adjustments
                    .iter()
                    .map(|a| AdjustmentRecord {
                        operation: a.operation(),
                        amount: a.amount(),
                    })
                    .collect(),
            })
            .collect();

        AdjustmentSummary { categories }
    }

    fn reports_for(&self, events: &[ProcessorEvent]) -> Vec<Report> {
        let mut reports = Vec::new();

        let Some(sequence) = events.iter().find_map(|ev| match ev {
            ProcessorEvent::MessageCounted(c) => Some(c.sequence),
            _ => None,
        }) else {
            return reports;
        };

        if self.config.is_summary_point(sequence) {
            info!(sequence, categories = self.sales.len(), "sale summary");
            reports.push(Report::SaleSummary(self.sale_summary()));
        }

        for ev in events {
            if let ProcessorEvent::LimitReached(reached) = ev {
                info!(limit = reached.limit, "message limit reached; terminating");
                reports.push(Report::AdjustmentSummary(self.adjustment_summary()));
                reports.push(Report::LimitReached {
                    limit: reached.limit,
                });
            }
        }

        reports
    }

    fn handle_sales(
        &self,
        category: &str,
        price: MoneyCents,
        count: u64,
    ) -> Vec<ProcessorEvent> {
        if count == 0 {
            return Vec::new();
        }
        vec![ProcessorEvent::SalesRecorded(SalesRecorded {
            category: category.to_string(),
            price,
            count,
        })]
    }
}

impl Aggregate for MessageProcessor {
    type Command = Message;
    type Event = ProcessorEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            ProcessorEvent::SalesRecorded(e) => {
                let sales = self.sales.entry(&e.category);
                sales.extend((0..e.count).map(|_| Sale::new(e.category.clone(), e.price)));
            }
            ProcessorEvent::PriceAdjusted(adjustment) => {
                // Only sales present right now are touched.
                if let Some(sales) = self.sales.get_mut(adjustment.category()) {
                    for sale in sales.iter_mut() {
                        sale.adjust(adjustment);
                    }
                }
                self.adjustments
                    .push(adjustment.category(), adjustment.clone());
            }
            ProcessorEvent::MessageCounted(e) => {
                self.message_count = e.sequence;
            }
            ProcessorEvent::LimitReached(_) => {
                self.terminated = true;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        // Validation runs even after termination.
        if let Message::MultipleSales { count, .. } = command {
            if *count < 0 {
                return Err(DomainError::invalid_argument(format!(
                    "number of sales must not be negative (got {count})"
                )));
            }
        }

        if self.terminated {
            return Ok(Vec::new());
        }

        let mut events = match command {
            Message::SingleSale { category, price } => self.handle_sales(category, *price, 1),
            Message::MultipleSales {
                category,
                price,
                count,
            } => self.handle_sales(category, *price, count.unsigned_abs()), // checked above
            Message::SaleWithAdjustment {
                sale_category,
                sale_price,
                adjustment,
            } => {
                let mut events = self.handle_sales(sale_category, *sale_price, 1);
                events.push(ProcessorEvent::PriceAdjusted(adjustment.clone()));
                events
            }
        };

        let sequence = self.message_count + 1;
        events.push(ProcessorEvent::MessageCounted(MessageCounted { sequence }));

        if self.config.is_limit(sequence) {
            events.push(ProcessorEvent::LimitReached(LimitReached {
                limit: self.config.message_limit(),
            }));
        }

        Ok(events)
    }
}
