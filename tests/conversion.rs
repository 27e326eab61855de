use approx::assert_abs_diff_eq;
use lengths::conversion::{convert, parse_length_unit, try_length_from, ConversionError};
use lengths::units::{convert_length, from_whole_units, to_whole_units, LengthUnit};
use lengths::{Length, FOOT, INCH, KILOMETER, METER, MILLIMETER};

#[test]
fn unit_table_matches_constants() {
    for unit in LengthUnit::ALL {
        assert_eq!(Length::from_unit(1.0, unit), unit.length(), "{unit:?}");
        assert_abs_diff_eq!(unit.length().to_unit(unit), 1.0);
    }
    assert_eq!(LengthUnit::Micrometer.symbol(), "μm");
    assert_eq!(LengthUnit::Foot.to_string(), "ft");
}

#[test]
fn whole_unit_helpers_truncate() {
    assert_eq!(from_whole_units(10, LengthUnit::Meter), 10 * METER);
    assert_eq!(to_whole_units(10 * METER, LengthUnit::Millimeter), 10_000);
    assert_eq!(to_whole_units(FOOT - MILLIMETER, LengthUnit::Foot), 0);
    assert_eq!(to_whole_units(FOOT + INCH, LengthUnit::Inch), 13);
    assert_eq!(to_whole_units(KILOMETER, LengthUnit::Kilometer), 1);
}

#[test]
fn convert_length_between_systems() {
    assert_abs_diff_eq!(
        convert_length(1.0, LengthUnit::Foot, LengthUnit::Inch),
        12.0
    );
    assert_abs_diff_eq!(
        convert_length(1.0, LengthUnit::Inch, LengthUnit::Millimeter),
        25.4,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        convert_length(2.5, LengthUnit::Kilometer, LengthUnit::Meter),
        2_500.0
    );
    assert_abs_diff_eq!(
        convert_length(1.0, LengthUnit::Meter, LengthUnit::Foot),
        3.280_839_895_013_123,
        epsilon = 1e-12
    );
}

#[test]
fn parse_unit_names_and_symbols() {
    let cases = [
        ("nm", LengthUnit::Nanometer),
        ("um", LengthUnit::Micrometer),
        ("μm", LengthUnit::Micrometer),
        ("microns", LengthUnit::Micrometer),
        ("MM", LengthUnit::Millimeter),
        ("centimetre", LengthUnit::Centimeter),
        ("m", LengthUnit::Meter),
        (" Meters ", LengthUnit::Meter),
        ("km", LengthUnit::Kilometer),
        ("in", LengthUnit::Inch),
        ("inches", LengthUnit::Inch),
        ("ft", LengthUnit::Foot),
        ("feet", LengthUnit::Foot),
    ];
    for (s, want) in cases {
        assert_eq!(parse_length_unit(s), Ok(want), "{s}");
    }
    assert_eq!(
        parse_length_unit("5ft 3in"),
        Err(ConversionError::UnknownUnit("5ft 3in".to_string()))
    );
}

#[test]
fn try_length_from_rejects_out_of_domain() {
    assert_eq!(try_length_from(1.5, LengthUnit::Meter), Ok(1_500 * MILLIMETER));
    assert_eq!(try_length_from(0.0, LengthUnit::Foot), Ok(Length::ZERO));
    assert_eq!(
        try_length_from(-1.0, LengthUnit::Meter),
        Err(ConversionError::Negative(-1.0))
    );
    assert!(matches!(
        try_length_from(f64::NAN, LengthUnit::Meter),
        Err(ConversionError::NotFinite(_))
    ));
    assert_eq!(
        try_length_from(f64::INFINITY, LengthUnit::Inch),
        Err(ConversionError::NotFinite(f64::INFINITY))
    );
    assert_eq!(
        try_length_from(1e8, LengthUnit::Kilometer),
        Err(ConversionError::Overflow {
            value: 1e8,
            unit: LengthUnit::Kilometer
        })
    );
    // 약 18 기가미터까지는 표현 가능하다.
    assert!(try_length_from(18e6, LengthUnit::Kilometer).is_ok());
}

#[test]
fn convert_by_unit_strings() {
    let inches = convert(1.0, "ft", "in").expect("ft -> in");
    assert_abs_diff_eq!(inches, 12.0);
    let mm = convert(3.0, "cm", "mm").expect("cm -> mm");
    assert_abs_diff_eq!(mm, 30.0);
    assert_eq!(
        convert(1.0, "ft", "parsec"),
        Err(ConversionError::UnknownUnit("parsec".to_string()))
    );
    assert_eq!(
        convert(-2.0, "m", "ft"),
        Err(ConversionError::Negative(-2.0))
    );
}

#[test]
fn error_messages_name_the_input() {
    let err = ConversionError::UnknownUnit("furlong".to_string());
    assert!(err.to_string().contains("furlong"));
    let err = ConversionError::Overflow {
        value: 1e8,
        unit: LengthUnit::Kilometer,
    };
    assert!(err.to_string().contains("km"));
}
