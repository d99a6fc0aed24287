//! Property-based tests for colorlog using proptest

mod common;

use colorlog::prelude::*;
use common::capturing_builder;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::Trace),
        Just(LogLevel::Unknown),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_ordering_follows_rank(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a == b, a.rank() == b.rank());
    }

    #[test]
    fn test_from_rank_saturates_to_unknown(rank in 6u8..=u8::MAX) {
        prop_assert_eq!(LogLevel::from_rank(rank), LogLevel::Unknown);
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// A line is written exactly when the level ranks at or above the threshold
    #[test]
    fn test_line_written_iff_at_or_above_threshold(
        threshold in any_level(),
        level in any_level(),
        message in "[a-zA-Z0-9 ]{1,40}",
    ) {
        let (builder, buffer) = capturing_builder(threshold);
        let logger = builder.build();
        logger.log(level, "", 0, message.as_str());

        let lines = buffer.lines();
        if level.rank() >= threshold.rank() {
            prop_assert_eq!(lines, vec![format!("[{}] {}", level.to_str(), message)]);
        } else {
            prop_assert!(lines.is_empty());
            prop_assert_eq!(logger.metrics().filtered_count(), 1);
        }
    }

    /// The raw message always survives formatting
    #[test]
    fn test_message_is_substring_of_line(
        message in "\\PC{0,64}",
        file in "[a-z_]{0,12}\\.rs",
        line in 0u32..10_000,
    ) {
        let (builder, buffer) = capturing_builder(LogLevel::Debug);
        let logger = builder.build();
        logger.log(LogLevel::Error, &file, line, message.as_str());
        prop_assert!(buffer.contents().contains(&message));
    }
}

// ============================================================================
// Message Rendering Tests
// ============================================================================

proptest! {
    #[test]
    fn test_sequence_renders_as_concatenation(items in prop::collection::vec("[a-z0-9]{0,8}", 0..16)) {
        prop_assert_eq!(items.render(), items.concat());
    }

    #[test]
    fn test_numeric_sequence_has_no_separator(items in prop::collection::vec(any::<u16>(), 0..16)) {
        let expected: String = items.iter().map(|n| n.to_string()).collect();
        prop_assert_eq!(items.as_slice().render(), expected);
    }

    #[test]
    fn test_optional_renders_value_or_marker(value in prop::option::of(any::<i64>())) {
        let expected = match value {
            Some(n) => n.to_string(),
            None => "<none>".to_string(),
        };
        prop_assert_eq!(value.render(), expected);
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    #[test]
    fn test_default_formatter_location_prefix(
        level in any_level(),
        file in "[a-z/]{0,16}",
        line in 0u32..1_000,
        message in "[ -~]{0,32}",
    ) {
        let formatted = DefaultFormatter.format(level, &file, line, &message);
        if !file.is_empty() && line > 0 {
            prop_assert_eq!(formatted, format!("{}:{} {}", file, line, message));
        } else {
            prop_assert_eq!(formatted, message);
        }
    }
}
