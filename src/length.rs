//! 나노미터 정수 기반의 길이 값 타입과 단위 상수.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use log::debug;

/// 끝에서 끝까지의 길이를 나노미터 개수(`u64`)로 표현한다.
///
/// 길이는 음수가 될 수 없으므로 부호 없는 정수를 쓴다. 표현 가능한 최대 길이는
/// 약 18 기가미터(지구-달 거리의 40배 이상)이다.
///
/// 정수 개수의 단위를 길이로 바꾸려면 단위 상수에 곱하고, 길이에 든 단위 개수를
/// 세려면 단위 상수로 나눈다(나머지는 버린다).
///
/// ```
/// use lengths::{Length, METER, MILLIMETER};
///
/// let l: Length = 10 * METER;
/// assert_eq!(l / MILLIMETER, 10_000);
/// assert_eq!(l.to_string(), "10m");
/// ```
///
/// 사칙연산은 `u64`와 같은 규칙을 따른다. 디버그 빌드에서는 오버플로 시 패닉하고
/// 릴리스 빌드에서는 감싸진다. 결과가 정의되어야 하면 `checked_*`/`saturating_*`를 쓴다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(u64);

pub const NANOMETER: Length = Length(1);
pub const MICROMETER: Length = Length(1_000);
pub const MILLIMETER: Length = Length(1_000_000);
pub const CENTIMETER: Length = Length(10_000_000);
pub const METER: Length = Length(1_000_000_000);
pub const KILOMETER: Length = Length(1_000_000_000_000);
/// 국제 인치. 정확히 25.4 mm.
pub const INCH: Length = Length(25_400_000);
/// 국제 피트. 정확히 12 in = 304.8 mm.
pub const FOOT: Length = Length(304_800_000);

impl Length {
    pub const ZERO: Length = Length(0);
    pub const MAX: Length = Length(u64::MAX);

    /// 나노미터 개수로부터 길이를 만든다.
    pub const fn from_nanometers(nanometers: u64) -> Self {
        Length(nanometers)
    }

    /// 나노미터 개수를 그대로 반환한다.
    pub const fn nanometers(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// 길이를 `unit` 단위의 실수 개수로 환산한다.
    ///
    /// 몫과 나머지를 나누어 계산한다. 정수 부분은 정확하고 단위보다 작은 나머지만
    /// 부동소수 나눗셈을 거치므로 큰 나노미터 값도 하위 비트를 잃지 않는다.
    pub(crate) fn ratio_of(self, unit: Length) -> f64 {
        let whole = self.0 / unit.0;
        let rest = self.0 % unit.0;
        whole as f64 + rest as f64 / unit.0 as f64
    }

    /// 실수 개수의 `unit`을 길이로 환산한다. 나노미터 미만은 버린다.
    ///
    /// 음수와 NaN은 0으로, `u64` 범위를 넘는 값은 [`Length::MAX`]로 고정된다.
    pub(crate) fn scaled(value: f64, unit: Length) -> Self {
        let nanos = value * unit.0 as f64;
        if nanos.is_nan() || nanos < 0.0 {
            debug!("길이 {value} x {}nm 가 음수/NaN 이므로 0으로 고정", unit.0);
        } else if nanos >= u64::MAX as f64 {
            debug!("길이 {value} x {}nm 가 범위를 넘어 최대값으로 고정", unit.0);
        }
        // f64 -> u64 캐스트는 0 방향 절삭이며 범위 밖은 포화된다.
        Length(nanos as u64)
    }

    /// 길이를 마이크로미터 실수 값으로 반환한다.
    pub fn micrometers(self) -> f64 {
        self.ratio_of(MICROMETER)
    }

    /// 길이를 밀리미터 실수 값으로 반환한다.
    pub fn millimeters(self) -> f64 {
        self.ratio_of(MILLIMETER)
    }

    /// 길이를 센티미터 실수 값으로 반환한다.
    pub fn centimeters(self) -> f64 {
        self.ratio_of(CENTIMETER)
    }

    /// 길이를 미터 실수 값으로 반환한다.
    pub fn meters(self) -> f64 {
        self.ratio_of(METER)
    }

    /// 길이를 킬로미터 실수 값으로 반환한다.
    pub fn kilometers(self) -> f64 {
        self.ratio_of(KILOMETER)
    }

    /// 길이를 인치 실수 값으로 반환한다.
    pub fn inches(self) -> f64 {
        self.ratio_of(INCH)
    }

    /// 길이를 피트 실수 값으로 반환한다.
    pub fn feet(self) -> f64 {
        self.ratio_of(FOOT)
    }

    /// 길이를 피트와 인치로 나눈다.
    ///
    /// 피트는 항상 정수이지만 인치와 맞추기 위해 실수로 반환한다. 인치는 피트로
    /// 나눈 나머지이므로 `0 <= inches < 12`이다.
    pub fn feet_and_inches(self) -> (f64, f64) {
        let feet = self / FOOT;
        let rest = self % FOOT;
        (feet as f64, rest.inches())
    }

    /// 마이크로미터 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_micrometers(f: f64) -> Self {
        Self::scaled(f, MICROMETER)
    }

    /// 밀리미터 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_millimeters(f: f64) -> Self {
        Self::scaled(f, MILLIMETER)
    }

    /// 센티미터 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_centimeters(f: f64) -> Self {
        Self::scaled(f, CENTIMETER)
    }

    /// 미터 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_meters(f: f64) -> Self {
        Self::scaled(f, METER)
    }

    /// 킬로미터 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_kilometers(f: f64) -> Self {
        Self::scaled(f, KILOMETER)
    }

    /// 인치 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_inches(f: f64) -> Self {
        Self::scaled(f, INCH)
    }

    /// 피트 실수 값으로부터 길이를 만든다. 나노미터 단위로 내림한다.
    pub fn from_feet(f: f64) -> Self {
        Self::scaled(f, FOOT)
    }

    pub fn checked_add(self, rhs: Length) -> Option<Length> {
        self.0.checked_add(rhs.0).map(Length)
    }

    pub fn checked_sub(self, rhs: Length) -> Option<Length> {
        self.0.checked_sub(rhs.0).map(Length)
    }

    pub fn checked_mul(self, rhs: u64) -> Option<Length> {
        self.0.checked_mul(rhs).map(Length)
    }

    pub fn saturating_add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }

    /// 뺄셈 결과가 음수이면 0을 반환한다.
    pub fn saturating_sub(self, rhs: Length) -> Length {
        Length(self.0.saturating_sub(rhs.0))
    }
}

pub fn millimeters(f: f64) -> Length {
    Length::from_millimeters(f)
}

pub fn centimeters(f: f64) -> Length {
    Length::from_centimeters(f)
}

pub fn meters(f: f64) -> Length {
    Length::from_meters(f)
}

pub fn kilometers(f: f64) -> Length {
    Length::from_kilometers(f)
}

pub fn inches(f: f64) -> Length {
    Length::from_inches(f)
}

pub fn feet(f: f64) -> Length {
    Length::from_feet(f)
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Mul<u64> for Length {
    type Output = Length;

    fn mul(self, rhs: u64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for u64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}

impl MulAssign<u64> for Length {
    fn mul_assign(&mut self, rhs: u64) {
        self.0 *= rhs;
    }
}

impl Div<u64> for Length {
    type Output = Length;

    fn div(self, rhs: u64) -> Length {
        Length(self.0 / rhs)
    }
}

impl DivAssign<u64> for Length {
    fn div_assign(&mut self, rhs: u64) {
        self.0 /= rhs;
    }
}

/// 길이를 단위로 나누면 그 단위가 몇 개 들어 있는지(나머지 버림)를 얻는다.
impl Div for Length {
    type Output = u64;

    fn div(self, rhs: Length) -> u64 {
        self.0 / rhs.0
    }
}

impl Rem for Length {
    type Output = Length;

    fn rem(self, rhs: Length) -> Length {
        Length(self.0 % rhs.0)
    }
}

impl RemAssign for Length {
    fn rem_assign(&mut self, rhs: Length) {
        self.0 %= rhs.0;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Length> for Length {
    fn sum<I: Iterator<Item = &'a Length>>(iter: I) -> Length {
        iter.copied().sum()
    }
}

/// 크기에 맞는 표시 단위를 골라 최소 자릿수로 출력한다.
///
/// 1 μm 미만은 정수 나노미터(`0nm` 포함), 그 위로는 μm, mm, cm, m, km 순으로
/// 값이 1 이상이 되는 가장 큰 단위를 쓴다. 숫자는 `f64`의 최단 왕복 표현이다.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = *self;
        let text = if l < MICROMETER {
            format!("{}nm", l.0)
        } else {
            let (value, symbol) = if l < MILLIMETER {
                (l.micrometers(), "μm")
            } else if l < CENTIMETER {
                (l.millimeters(), "mm")
            } else if l < METER {
                (l.centimeters(), "cm")
            } else if l < KILOMETER {
                (l.meters(), "m")
            } else {
                (l.kilometers(), "km")
            };
            format!("{value}{symbol}")
        };
        f.pad(&text)
    }
}
