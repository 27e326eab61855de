//! 나노미터 정수로 길이를 표현하는 값 타입과 단위 변환, 표시 형식.
//!
//! 핵심 타입은 [`Length`]이며 CLI는 라이브러리 위에 얇게 올린다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod length;
pub mod ui_cli;
pub mod units;

pub use length::{
    centimeters, feet, inches, kilometers, meters, millimeters, Length, CENTIMETER, FOOT, INCH,
    KILOMETER, METER, MICROMETER, MILLIMETER, NANOMETER,
};
pub use units::LengthUnit;
