use assert2::check;
use deltastat_format::{Canonical, FormatMode, decimal_or_nan, format, whole_or_decimal};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

#[test]
fn decimal_or_nan_values() {
    check!(decimal_or_nan(f64::NAN) == "NaN");
    check!(decimal_or_nan(123456.1234567) == "123456.123457");
}

#[test]
fn whole_or_decimal_values() {
    check!(whole_or_decimal(123456.1234567) == "123456.123457");
    check!(whole_or_decimal(1.0) == "1");
    check!(whole_or_decimal(f64::NAN) == "NaN");
}

#[test]
fn no_scientific_notation() {
    check!(whole_or_decimal(4.6875392E7) == "46875392");
    check!(decimal_or_nan(4.6875392E7) == "46875392");
    check!(whole_or_decimal(46875392.25) == "46875392.25");
    check!(decimal_or_nan(4.68753925E7) == "46875392.5");
}

#[rstest]
#[case(FormatMode::Plain)]
#[case(FormatMode::FixedPrecision)]
fn infinities_have_literal_text(#[case] mode: FormatMode) {
    check!(format(f64::INFINITY, mode) == "Infinity");
    check!(format(f64::NEG_INFINITY, mode) == "-Infinity");
}

#[rstest]
#[case(0.0, "0")]
#[case(1.0, "1")]
#[case(-1.0, "-1")]
#[case(0.5, "0.5")]
#[case(0.1, "0.1")]
#[case(2.50, "2.5")]
#[case(1.000_000_4, "1")]
#[case(1.000_000_6, "1.000001")]
#[case(0.000_000_1, "0")]
#[case(-123.456_789_9, "-123.45679")]
#[case(1e-7, "0")]
#[case(1e15, "1000000000000000")]
#[case(1.5e15, "1500000000000000")]
#[case(1e21, "1000000000000000000000")]
#[case(f64::MAX, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368")]
#[case(f64::MIN_POSITIVE, "0")]
fn canonical_text(#[case] value: f64, #[case] expected: &str) {
    check!(format(value, FormatMode::Plain) == expected);
    check!(format(value, FormatMode::FixedPrecision) == expected);
}

#[rstest]
// 1/128 and 3/128 sit exactly on a tie at the seventh fractional digit
#[case(0.0078125, "0.007812")]
#[case(0.0234375, "0.023438")]
#[case(-0.0078125, "-0.007812")]
fn ties_round_to_even(#[case] value: f64, #[case] expected: &str) {
    check!(format(value, FormatMode::Plain) == expected);
    check!(format(value, FormatMode::FixedPrecision) == expected);
}

#[test]
fn display_adapter_matches_format() {
    for value in [0.0, 1.25, 46875392.0, 123456.1234567, f64::NAN, -f64::INFINITY] {
        check!(Canonical::new(value).to_string() == whole_or_decimal(value));
        check!(
            Canonical::with_mode(value, FormatMode::FixedPrecision).to_string()
                == decimal_or_nan(value)
        );
    }
}

#[test]
fn random_values_are_plain_and_accurate() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for i in 0..20_000 {
        let value = if i % 2 == 0 {
            f64::from_bits(rng.random::<u64>())
        } else {
            rng.random_range(-1e9..1e9)
        };
        if !value.is_finite() {
            continue;
        }
        for mode in [FormatMode::Plain, FormatMode::FixedPrecision] {
            let text = format(value, mode);
            check!(
                text.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'-'),
                "{value:e} rendered as {text}"
            );
            check!(!text.ends_with('.') && !text.ends_with(".0"));
            if text.contains('.') {
                check!(!text.ends_with('0'));
                check!(text.split('.').nth(1).map_or(0, str::len) <= 6);
            }

            let parsed: f64 = text.parse().unwrap();
            if value.fract() == 0.0 {
                check!(parsed == value);
            } else {
                check!((parsed - value).abs() <= 5e-7 + value.abs() * f64::EPSILON);
            }

            // same input, same text
            check!(format(value, mode) == text);
        }
    }
}
