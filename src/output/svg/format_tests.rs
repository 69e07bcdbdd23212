//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("Acme & Sons"), "Acme &amp; Sons");
    }

    #[test]
    fn escapes_angle_brackets_and_quotes() {
        assert_eq!(
            html_escape("<b title=\"x\">'y'</b>"),
            "&lt;b title=&quot;x&quot;&gt;&#39;y&#39;&lt;/b&gt;"
        );
    }
}

mod compact_number_tests {
    use super::*;

    #[test]
    fn small_numbers_use_grouping() {
        assert_eq!(compact_number(0.0), "0");
        assert_eq!(compact_number(9_999.0), "9,999");
        assert_eq!(compact_number(12.5), "12.5");
    }

    #[test]
    fn thousands_show_k() {
        assert_eq!(compact_number(10_000.0), "10K");
        assert_eq!(compact_number(15_500.0), "15.5K");
    }

    #[test]
    fn larger_magnitudes() {
        assert_eq!(compact_number(2_500_000.0), "2.5M");
        assert_eq!(compact_number(1_200_000_000.0), "1.2B");
        assert_eq!(compact_number(-45_000.0), "-45K");
    }
}
