use serde::{Deserialize, Serialize};

use msgproc_core::MoneyCents;

use crate::adjustment::Adjustment;

/// One recorded sale. The price changes only when a later adjustment targets
/// its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    category: String,
    /// Price in smallest currency unit (cents).
    price: MoneyCents,
}

impl Sale {
    pub fn new(category: impl Into<String>, price: MoneyCents) -> Self {
        Self {
            category: category.into(),
            price,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> MoneyCents {
        self.price
    }

    pub(crate) fn adjust(&mut self, adjustment: &Adjustment) {
        debug_assert_eq!(self.category(), adjustment.category());
        self.price = adjustment.adjusted(self.price);
    }
}
