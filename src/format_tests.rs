use super::*;

mod format_value_tests {
    use super::*;

    #[test]
    fn number_format_groups_thousands() {
        assert_eq!(
            format_value(&CellValue::Number(1_500_000.0), Some(DataFormat::Number)),
            "1,500,000"
        );
    }

    #[test]
    fn percentage_of_fraction() {
        assert_eq!(
            format_value(&CellValue::Number(0.4567), Some(DataFormat::Percentage)),
            "45.67%"
        );
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(
            format_value(&CellValue::Number(1234.5), Some(DataFormat::Currency)),
            "$1,234.50"
        );
    }

    #[test]
    fn non_numeric_values_pass_through_for_every_format() {
        for format in [
            Some(DataFormat::Number),
            Some(DataFormat::Currency),
            Some(DataFormat::Percentage),
            Some(DataFormat::Text),
            None,
        ] {
            assert_eq!(format_value(&CellValue::from("n/a"), format), "n/a");
            assert_eq!(format_value(&CellValue::Null, format), "");
        }
    }

    #[test]
    fn text_format_uses_plain_form() {
        assert_eq!(
            format_value(&CellValue::Number(1_500_000.0), Some(DataFormat::Text)),
            "1500000"
        );
        assert_eq!(format_value(&CellValue::Bool(true), None), "true");
    }
}

mod number_tests {
    use super::*;

    #[test]
    fn fraction_digits_capped_at_three() {
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(2.0), "2");
    }

    #[test]
    fn negatives_keep_sign() {
        assert_eq!(format_number(-9876.5), "-9,876.5");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn currency_negatives() {
        assert_eq!(format_currency(-5.0), "-$5.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_000_000.126), "$1,000,000.13");
    }

    #[test]
    fn percentage_edge_cases() {
        assert_eq!(format_percentage(1.0), "100.00%");
        assert_eq!(format_percentage(-0.125), "-12.50%");
        assert_eq!(format_percentage(-0.00001), "0.00%");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_currency(1.125), "$1.13");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(-2.675), "-$2.68");
        assert_eq!(format_number(0.0625), "0.063");
        assert_eq!(format_number(-0.0625), "-0.063");
        assert_eq!(format_percentage(0.5), "50.00%");
    }

    #[test]
    fn rounds_the_written_decimal() {
        assert_eq!(format_currency(1.005), "$1.01");
        assert_eq!(format_number(2.0005), "2.001");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_currency(9.995), "$10.00");
        assert_eq!(format_currency(999_999.999), "$1,000,000.00");
        assert_eq!(format_number(999.9995), "1,000");
        assert_eq!(format_number(0.9999), "1");
    }

    #[test]
    fn plain_number_matches_string_form() {
        assert_eq!(plain_number(1_500_000.0), "1500000");
        assert_eq!(plain_number(5.2), "5.2");
        assert_eq!(plain_number(-0.0), "0");
        assert_eq!(plain_number(f64::NAN), "NaN");
        assert_eq!(plain_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }
}

mod truncation_tests {
    use super::*;

    #[test]
    fn tick_label_at_limit_is_unchanged() {
        let label = "a".repeat(20);
        assert_eq!(truncate_tick_label(&label), label);
    }

    #[test]
    fn tick_label_over_limit_keeps_seventeen() {
        let label = "abcdefghijklmnopqrstu";
        assert_eq!(truncate_tick_label(label), "abcdefghijklmnopq...");
        assert_eq!(truncate_tick_label(label).chars().count(), 20);
    }

    #[test]
    fn cell_truncation() {
        let short = "x".repeat(30);
        assert_eq!(truncate_cell(&short), short);

        let long = "y".repeat(31);
        assert_eq!(truncate_cell(&long), format!("{}...", "y".repeat(27)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let label = "é".repeat(21);
        assert_eq!(truncate_tick_label(&label), format!("{}...", "é".repeat(17)));
    }
}
