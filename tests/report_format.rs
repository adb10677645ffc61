use meanstd::report::{format_value, render, DEFAULT_DECIMAL_SEPARATOR};
use meanstd::statistics::Summary;

#[test]
fn two_fraction_digits_with_comma() {
    assert_eq!(DEFAULT_DECIMAL_SEPARATOR, ',');
    assert_eq!(format_value(55.0, ','), "55,00");
    assert_eq!(format_value(30.276503540974915, ','), "30,28");
    assert_eq!(format_value(-0.5, ','), "-0,50");
}

#[test]
fn dot_separator() {
    assert_eq!(format_value(1234.5678, '.'), "1234.57");
}

#[test]
fn special_values() {
    assert_eq!(format_value(f64::NAN, ','), "NaN");
    assert_eq!(format_value(f64::INFINITY, ','), "Infinity");
    assert_eq!(format_value(f64::NEG_INFINITY, '.'), "-Infinity");
}

#[test]
fn renders_two_lines() {
    let summary = Summary::new(55.0, 30.2765);
    assert_eq!(render(&summary, ','), "Mean: 55,00\nStandard Deviation: 30,28\n");
    let degenerate = Summary::new(42.0, f64::NAN);
    assert_eq!(render(&degenerate, ','), "Mean: 42,00\nStandard Deviation: NaN\n");
}

#[test]
fn ties_round_half_up_on_decimal_digits() {
    assert_eq!(format_value(0.125, ','), "0,13");
    assert_eq!(format_value(2.675, ','), "2,68");
    assert_eq!(format_value(1.005, ','), "1,01");
    assert_eq!(format_value(0.045, ','), "0,05");
    assert_eq!(format_value(-0.125, '.'), "-0.13");
    assert_eq!(format_value(0.124, ','), "0,12");
}

#[test]
fn negative_values_rounding_to_zero_keep_sign() {
    assert_eq!(format_value(-0.001, ','), "-0,00");
    assert_eq!(format_value(0.001, ','), "0,00");
}

#[test]
fn tie_in_a_summary_rounds_up() {
    let summary = Summary::new(0.125, f64::NAN);
    assert_eq!(render(&summary, ','), "Mean: 0,13\nStandard Deviation: NaN\n");
}
