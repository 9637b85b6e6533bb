use dotevent_events::{EventError, EventId, EventPattern, EventRegistry, Grammar};
use proptest::prelude::*;

const SEGMENT: &str = "[A-Za-z_][A-Za-z0-9_]{0,8}";

fn identifier() -> impl Strategy<Value = String> {
    prop::collection::vec(SEGMENT, 1..5).prop_map(|segments| segments.join("."))
}

fn assert_identifier_rejected(input: &str) -> Result<(), TestCaseError> {
    let registry: EventRegistry = EventRegistry::new();
    let err = registry.on(input, |_| Ok(())).expect_err("rejected");
    let is_identifier_format = matches!(
        err,
        EventError::InvalidFormat { grammar: Grammar::Identifier, .. }
    );
    prop_assert!(is_identifier_format);
    prop_assert!(registry.is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn on_accepts_every_grammatical_identifier(input in identifier()) {
        let registry: EventRegistry = EventRegistry::new();
        prop_assert!(registry.on(input.as_str(), |_| Ok(())).is_ok());
        prop_assert_eq!(registry.event_ids().len(), 1);
    }

    #[test]
    fn on_rejects_strings_with_foreign_characters(
        prefix in identifier(),
        bad in "[-!@#$%^&()+=/:;,*]",
    ) {
        assert_identifier_rejected(&format!("{prefix}{bad}"))?;
    }

    #[test]
    fn on_rejects_empty_segments(
        left in identifier(),
        right in identifier(),
        shape in 0..3_usize,
    ) {
        let input = match shape {
            0 => format!("{left}..{right}"),
            1 => format!(".{left}"),
            _ => format!("{left}."),
        };
        assert_identifier_rejected(&input)?;
    }

    #[test]
    fn on_rejects_segments_led_by_a_digit(
        prefix in identifier(),
        digit in "[0-9]",
        rest in "[A-Za-z0-9_]{0,6}",
        leading in any::<bool>(),
    ) {
        let segment = format!("{digit}{rest}");
        let input = if leading {
            format!("{segment}.{prefix}")
        } else {
            format!("{prefix}.{segment}")
        };
        assert_identifier_rejected(&input)?;
    }

    #[test]
    fn wildcard_is_rejected_past_the_first_segment(prefix in identifier(), suffix in identifier()) {
        let input = format!("{prefix}.*.{suffix}");
        let err = EventPattern::parse(&input).expect_err("inner wildcard");
        let is_pattern_format = matches!(
            err,
            EventError::InvalidFormat { grammar: Grammar::Pattern, .. }
        );
        prop_assert!(is_pattern_format);
        let trailing = format!("{prefix}.*");
        prop_assert!(EventPattern::parse(&trailing).is_err());

        let registry: EventRegistry = EventRegistry::new();
        prop_assert!(registry.trigger(input.as_str()).is_err());
        prop_assert!(registry.off(trailing.as_str()).is_err());
        assert_identifier_rejected(&format!("*.{suffix}"))?;
    }

    #[test]
    fn literal_pattern_matches_only_itself(left in identifier(), right in identifier()) {
        let left_id = EventId::parse(&left).expect("left");
        let right_id = EventId::parse(&right).expect("right");
        let pattern = EventPattern::parse(&left).expect("pattern");
        prop_assert!(pattern.matches(&left_id));
        prop_assert_eq!(pattern.matches(&right_id), left == right);
    }

    #[test]
    fn wildcard_matches_any_prefixed_suffix(prefix in identifier(), suffix in identifier()) {
        let full = EventId::parse(&format!("{prefix}.{suffix}")).expect("full");
        let bare = EventId::parse(&suffix).expect("bare");
        let pattern = EventPattern::parse(&format!("*.{suffix}")).expect("pattern");
        prop_assert!(pattern.matches(&full));
        prop_assert!(!pattern.matches(&bare));
        prop_assert!(EventPattern::parse("*").expect("universal").matches(&full));
    }
}
