//! 길이 변환 테이블 회귀 테스트.
use length_converter::conversion::{convert, convert_length};
use length_converter::units::LengthUnit;

const KNOWN: [(&str, &str, f64); 12] = [
    ("meters", "feet", 3.280839895),
    ("meters", "kilometers", 0.001),
    ("meters", "miles", 0.0006213689),
    ("feet", "meters", 0.3048),
    ("feet", "kilometers", 0.0003048),
    ("feet", "miles", 0.0001893932),
    ("kilometers", "meters", 1000.0),
    ("kilometers", "feet", 3280.839895),
    ("kilometers", "miles", 0.6213688756),
    ("miles", "meters", 1609.35),
    ("miles", "feet", 5280.019685),
    ("miles", "kilometers", 1.60935),
];

#[test]
fn every_supported_pair_multiplies() {
    for (from, to, multiplier) in KNOWN {
        let value = 42.5;
        assert_eq!(convert(value, from, to), Some(value * multiplier), "{from}->{to}");
    }
}

#[test]
fn unknown_units_fail() {
    assert_eq!(convert(1.0, "yards", "meters"), None);
    assert_eq!(convert(1.0, "meters", "inches"), None);
    assert_eq!(convert(1.0, "METERS", "feet"), None);
}

#[test]
fn same_unit_is_not_identity() {
    // 동일 단위 변환은 값 그대로가 아니라 실패로 처리된다.
    for unit in LengthUnit::ALL {
        assert_eq!(convert(5.0, unit.name(), unit.name()), None);
        assert_eq!(convert_length(5.0, unit, unit), None);
    }
}

#[test]
fn zero_meters_is_zero_feet() {
    assert_eq!(convert(0.0, "meters", "feet"), Some(0.0));
}

#[test]
fn one_kilometer_in_feet() {
    assert_eq!(convert(1.0, "kilometers", "feet"), Some(3280.839895));
}

#[test]
fn sample_kilometers_to_feet() {
    let feet = convert(1223.0, "kilometers", "feet").expect("supported pair");
    assert!((feet - 4012467.191585).abs() < 1e-6, "got {feet}");
}

#[test]
fn meters_feet_round_trip_is_approximate() {
    let x = 25.0;
    let feet = convert(x, "meters", "feet").expect("meters->feet");
    let back = convert(feet, "feet", "meters").expect("feet->meters");
    assert!((back - x).abs() / x < 1e-8, "round trip drifted: {back}");
}

#[test]
fn unit_names_match_serde_names() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        unit: LengthUnit,
    }
    for unit in LengthUnit::ALL {
        let text = toml::to_string(&Wrapper { unit }).expect("serialize");
        assert_eq!(text.trim(), format!("unit = \"{}\"", unit.name()));
        let parsed: Wrapper = toml::from_str(&text).expect("deserialize");
        assert_eq!(parsed.unit, unit);
    }
}
