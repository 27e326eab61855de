use serde::{Deserialize, Serialize};

use crate::length::{
    Length, CENTIMETER, FOOT, INCH, KILOMETER, METER, MICROMETER, MILLIMETER, NANOMETER,
};

/// 길이 단위. 내부 기준은 나노미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    /// 해당 단위 하나에 해당하는 길이 상수.
    pub const fn length(self) -> Length {
        match self {
            LengthUnit::Nanometer => NANOMETER,
            LengthUnit::Micrometer => MICROMETER,
            LengthUnit::Millimeter => MILLIMETER,
            LengthUnit::Centimeter => CENTIMETER,
            LengthUnit::Meter => METER,
            LengthUnit::Kilometer => KILOMETER,
            LengthUnit::Inch => INCH,
            LengthUnit::Foot => FOOT,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "μm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Length {
    /// 길이를 `unit`의 실수 개수로 환산한다.
    pub fn to_unit(self, unit: LengthUnit) -> f64 {
        self.ratio_of(unit.length())
    }

    /// `unit`의 실수 개수를 길이로 환산한다. 나노미터 미만은 버린다.
    pub fn from_unit(value: f64, unit: LengthUnit) -> Length {
        Length::scaled(value, unit.length())
    }
}

/// 정수 개수의 단위를 길이로 바꾼다. `count * unit` 과 같다.
pub fn from_whole_units(count: u64, unit: LengthUnit) -> Length {
    count * unit.length()
}

/// 길이에 든 단위의 정수 개수를 센다. 나머지는 버린다.
pub fn to_whole_units(length: Length, unit: LengthUnit) -> u64 {
    length / unit.length()
}

/// 길이를 다른 단위로 변환한다. 나노미터 정수 값을 거치므로 결과는 나노미터
/// 단위로 내림된다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    Length::from_unit(value, from).to_unit(to)
}
