//! End-to-end runs: messages in, rendered console text out.
//!
//! Verifies:
//! - The report stream of a full 50-message run, in order
//! - Rendered text matches the console format
//! - Nothing is reported once the processor has terminated

#[cfg(test)]
mod tests {
    use crate::{Message, MessageProcessor, Operation, Report, ReportRenderer};
    use crate::adjustment::Adjustment;

    /// The five-message loop from the reference run.
    fn loop_messages() -> Vec<Message> {
        vec![
            Message::single_sale("apple", 1),
            Message::multiple_sales("banana", 1, 5),
            Message::sale_with_adjustment(
                "cucumber",
                3,
                Adjustment::new("dandelion", Operation::Multiply, 1),
            ),
            Message::multiple_sales("eclair", 100, 0),
            Message::single_sale("fondue", 2),
        ]
    }

    fn run(processor: &mut MessageProcessor, iterations: usize) -> Vec<Report> {
        let mut reports = Vec::new();
        for _ in 0..iterations {
            for message in loop_messages() {
                reports.extend(processor.process(&message).unwrap().reports);
            }
        }
        reports
    }

    #[test]
    fn full_run_reports_five_summaries_then_stops() {
        let mut processor = MessageProcessor::default();
        let reports = run(&mut processor, 100);

        let kinds: Vec<&str> = reports
            .iter()
            .map(|r| match r {
                Report::SaleSummary(_) => "sale",
                Report::AdjustmentSummary(_) => "adjustment",
                Report::LimitReached { .. } => "limit",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["sale", "sale", "sale", "sale", "sale", "adjustment", "limit"]
        );
        assert_eq!(processor.message_count(), 50);
    }

    #[test]
    fn rendered_first_summary_matches_console_format() {
        let mut processor = MessageProcessor::default();
        let reports = run(&mut processor, 2);

        let text = ReportRenderer::default().render_all(&reports);
        assert_eq!(
            text,
            "Sale summary:\n\
             \x20   Sale type: apple; Total value: $0.02\n\
             \x20   Sale type: banana; Total value: $0.10\n\
             \x20   Sale type: cucumber; Total value: $0.06\n\
             \x20   Sale type: fondue; Total value: $0.04\n"
        );
    }

    #[test]
    fn rendered_final_reports_match_console_format() {
        let mut processor = MessageProcessor::default();
        let reports = run(&mut processor, 10);

        let tail = ReportRenderer::default().render_all(&reports[reports.len() - 3..]);
        let mut expected = String::from(
            "Sale summary:\n\
             \x20   Sale type: apple; Total value: $0.10\n\
             \x20   Sale type: banana; Total value: $0.50\n\
             \x20   Sale type: cucumber; Total value: $0.30\n\
             \x20   Sale type: fondue; Total value: $0.20\n\
             Adjustment summary:\n\
             \x20   Sale type: dandelion\n",
        );
        for _ in 0..10 {
            expected.push_str("        Operation: MULTIPLY; Amount: 1\n");
        }
        expected.push_str("Limit of 50 messages reached. System will now terminate.\n");

        assert_eq!(tail, expected);
    }

    #[test]
    fn reports_round_trip_through_json() {
        let mut processor = MessageProcessor::default();
        let reports = run(&mut processor, 10);

        let json = serde_json::to_string(&reports).unwrap();
        let back: Vec<Report> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reports);
    }
}
