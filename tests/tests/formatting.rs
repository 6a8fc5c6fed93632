//! Formatting integration tests.

use numerus_tests::prelude::*;
use pretty_assertions::assert_eq;

mod canonical_output {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_formats_as_n() {
        assert_eq!(to_roman(0).unwrap(), "N");
        assert_eq!(Numeral::new(0).to_roman().unwrap(), "N");
    }

    #[test]
    fn test_greedy_table_coverage() {
        let expected = [
            (1, "I"),
            (4, "IV"),
            (5, "V"),
            (9, "IX"),
            (10, "X"),
            (40, "XL"),
            (50, "L"),
            (90, "XC"),
            (100, "C"),
            (400, "CD"),
            (500, "D"),
            (900, "CM"),
            (1000, "M"),
        ];
        for (value, text) in expected {
            assert_eq!(to_roman(value).unwrap(), text, "formatting {}", value);
        }
    }

    #[test]
    fn test_never_emits_additive_forms() {
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(1100).unwrap(), "MC");
        assert_eq!(to_roman(2000).unwrap(), "MM");
        assert_eq!(to_roman(999).unwrap(), "CMXCIX");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        for value in [0, 1, 444, 1443, 3999] {
            assert_eq!(to_roman(value).unwrap(), to_roman(value).unwrap());
        }
    }
}

mod negative_values {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negative_fails_with_dedicated_error() {
        assert_eq!(to_roman(-1), Err(FormatError::NegativeValue(-1)));
        assert_eq!(
            Numeral::new(-1443).to_roman(),
            Err(FormatError::NegativeValue(-1443))
        );
    }

    #[test]
    fn test_negative_error_message_names_the_value() {
        let msg = to_roman(-7).unwrap_err().to_string();
        assert!(msg.contains("-7"));
    }
}

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_of_format_is_identity() {
        for value in 0..=4000 {
            let text = to_roman(value).unwrap();
            assert_eq!(
                parse(&text).unwrap().value(),
                value,
                "round-tripping {} via {}",
                value,
                text
            );
        }
    }

    #[test]
    fn test_format_of_parse_canonicalizes() {
        // Additive spellings parse but re-format canonically.
        for (input, canonical) in [("IIII", "IV"), ("MC", "MC"), ("VIIII", "IX")] {
            let value = parse(input).unwrap();
            assert_eq!(value.to_roman().unwrap(), canonical);
        }
    }
}
