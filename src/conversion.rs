use crate::length::Length;
use crate::units::LengthUnit;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 음수 길이
    Negative(f64),
    /// NaN 또는 무한대
    NotFinite(f64),
    /// 나노미터 `u64` 범위를 넘는 값
    Overflow { value: f64, unit: LengthUnit },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::Negative(v) => write!(f, "길이는 음수일 수 없습니다: {v}"),
            ConversionError::NotFinite(v) => write!(f, "유한한 숫자가 아닙니다: {v}"),
            ConversionError::Overflow { value, unit } => {
                write!(f, "표현 가능한 최대 길이를 넘습니다: {value}{unit}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 단위 이름 또는 기호를 [`LengthUnit`]으로 변환한다. 대소문자는 구분하지 않는다.
///
/// 단위 이름만 해석하며 `5ft 3in` 같은 길이 표현식은 받지 않는다.
pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "nm" | "nanometer" | "nanometers" | "nanometre" | "nanometres" => {
            Ok(LengthUnit::Nanometer)
        }
        "um" | "μm" | "µm" | "micrometer" | "micrometers" | "micrometre" | "micrometres"
        | "micron" | "microns" => Ok(LengthUnit::Micrometer),
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
            Ok(LengthUnit::Millimeter)
        }
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
            Ok(LengthUnit::Centimeter)
        }
        "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
            Ok(LengthUnit::Kilometer)
        }
        "in" | "inch" | "inches" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" | "'" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 실수 개수의 단위를 길이로 환산하되 범위 밖 입력은 오류로 돌려준다.
///
/// [`Length::from_unit`]은 음수를 0으로, 너무 큰 값을 최대값으로 고정하지만 이
/// 함수는 그런 입력을 거부한다. 나노미터 미만은 똑같이 버린다.
pub fn try_length_from(value: f64, unit: LengthUnit) -> Result<Length, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NotFinite(value));
    }
    if value < 0.0 {
        return Err(ConversionError::Negative(value));
    }
    if value * unit.length().nanometers() as f64 >= u64::MAX as f64 {
        return Err(ConversionError::Overflow { value, unit });
    }
    Ok(Length::from_unit(value, unit))
}

/// 문자열로 전달된 단위명을 해석한 뒤 값을 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mm`, `m`, `km`, `in`, `ft` 등을 사용할 수 있다.
pub fn convert(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_length_unit(from_unit_str)?;
    let to = parse_length_unit(to_unit_str)?;
    Ok(try_length_from(value, from)?.to_unit(to))
}
