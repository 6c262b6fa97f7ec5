use serde::{Deserialize, Serialize};

use msgproc_core::MoneyCents;
use msgproc_events::Event;

use crate::adjustment::Adjustment;

/// An already-decoded input message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// One sale.
    SingleSale { category: String, price: MoneyCents },
    /// `count` identical sales. A negative count is rejected.
    MultipleSales {
        category: String,
        price: MoneyCents,
        count: i64,
    },
    /// One sale followed by an adjustment of every sale under the
    /// adjustment's category (including the new sale when categories match).
    SaleWithAdjustment {
        sale_category: String,
        sale_price: MoneyCents,
        adjustment: Adjustment,
    },
}

impl Message {
    pub fn single_sale(category: impl Into<String>, price: MoneyCents) -> Self {
        Message::SingleSale {
            category: category.into(),
            price,
        }
    }

    pub fn multiple_sales(category: impl Into<String>, price: MoneyCents, count: i64) -> Self {
        Message::MultipleSales {
            category: category.into(),
            price,
            count,
        }
    }

    pub fn sale_with_adjustment(
        sale_category: impl Into<String>,
        sale_price: MoneyCents,
        adjustment: Adjustment,
    ) -> Self {
        Message::SaleWithAdjustment {
            sale_category: sale_category.into(),
            sale_price,
            adjustment,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Message::SingleSale { .. } => "single_sale",
            Message::MultipleSales { .. } => "multiple_sales",
            Message::SaleWithAdjustment { .. } => "sale_with_adjustment",
        }
    }
}

/// Event: SalesRecorded. `count` identical sales appended under `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecorded {
    pub category: String,
    pub price: MoneyCents,
    pub count: u64,
}

/// Event: MessageCounted. `sequence` is the 1-based number of the accepted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCounted {
    pub sequence: u64,
}

/// Event: LimitReached. No message is accepted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitReached {
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessorEvent {
    SalesRecorded(SalesRecorded),
    PriceAdjusted(Adjustment),
    MessageCounted(MessageCounted),
    LimitReached(LimitReached),
}

impl Event for ProcessorEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProcessorEvent::SalesRecorded(_) => "sales.recorded",
            ProcessorEvent::PriceAdjusted(_) => "sales.price_adjusted",
            ProcessorEvent::MessageCounted(_) => "processor.message_counted",
            ProcessorEvent::LimitReached(_) => "processor.limit_reached",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}
