use super::*;

#[test]
fn small_amounts_have_no_separator() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(999), "₹999");
}

#[test]
fn thousands_use_one_separator() {
    assert_eq!(format_inr(1_000), "₹1,000");
    assert_eq!(format_inr(25_000), "₹25,000");
    assert_eq!(format_inr(99_999), "₹99,999");
}

#[test]
fn lakhs_and_crores_group_by_two() {
    assert_eq!(format_inr(100_000), "₹1,00,000");
    assert_eq!(format_inr(1_234_567), "₹12,34,567");
    assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
}

#[test]
fn timestamps_format_as_day_month_year() {
    assert_eq!(format_date("2024-01-15T10:30:00Z"), "15 Jan 2024");
    assert_eq!(format_date("2024-01-08T16:45:00+05:30"), "8 Jan 2024");
}

#[test]
fn plain_dates_are_accepted() {
    assert_eq!(format_date("2024-07-31"), "31 Jul 2024");
    assert_eq!(format_date_long("2024-02-01"), "1 February 2024");
}

#[test]
fn unparsable_dates_pass_through() {
    assert_eq!(format_date("next week"), "next week");
    assert_eq!(format_date(""), "");
}

#[test]
fn counts_share_the_grouping() {
    assert_eq!(format_count(355), "355");
    assert_eq!(format_count(1247), "1,247");
    assert_eq!(format_count(3891), "3,891");
    assert_eq!(format_count(123_456), "1,23,456");
}
