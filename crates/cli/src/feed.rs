//! Built-in scripted message feed.
//!
//! Input decoding is out of scope; the binary drives the processor with a
//! deterministic synthetic sequence instead.

use msgproc_sales::{Adjustment, Message, Operation};

const CATEGORIES: [&str; 5] = ["apple", "banana", "cucumber", "dandelion", "eclair"];

/// Deterministic mix of all three message kinds across a handful of categories.
pub fn demo_feed(len: usize) -> impl Iterator<Item = Message> {
    (0..len).map(|i| {
        let category = CATEGORIES[(i * 7) % CATEGORIES.len()];
        // Spread prices around with a little skew (cents).
        let price = 100 + ((i % 10) as i64) * 25;

        match i % 6 {
            0 | 3 => Message::single_sale(category, price),
            1 => Message::multiple_sales(category, price, (i % 4) as i64),
            2 => Message::single_sale(category, -price / 5),
            4 => {
                let target = CATEGORIES[(i / 6) % CATEGORIES.len()];
                let operation = match (i / 6) % 3 {
                    0 => Operation::Add,
                    1 => Operation::Subtract,
                    _ => Operation::Multiply,
                };
                let amount = if operation == Operation::Multiply { 2 } else { 15 };
                Message::sale_with_adjustment(
                    category,
                    price,
                    Adjustment::new(target, operation, amount),
                )
            }
            _ => Message::multiple_sales(category, price / 2, 3),
        }
    })
}
