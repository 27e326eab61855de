use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::AppError;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::conversion::{parse_length_unit, try_length_from};
use crate::length::Length;
use crate::units::LengthUnit;

/// 나노미터 정밀도의 길이 변환기.
#[derive(Debug, Parser)]
#[command(name = "lengths_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// 지원하는 하위 명령.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// 길이를 자동 단위와 모든 단위로 표시한다.
    Show {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// 입력 단위 (생략 시 설정의 기본 단위)
        #[arg(short, long, value_parser = parse_length_unit)]
        unit: Option<LengthUnit>,
    },
    /// 값을 한 단위에서 다른 단위로 변환한다.
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, value_parser = parse_length_unit)]
        from: LengthUnit,
        #[arg(long, value_parser = parse_length_unit)]
        to: LengthUnit,
    },
    /// 길이를 피트와 인치로 나누어 표시한다.
    FeetInches {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(short, long, value_parser = parse_length_unit)]
        unit: Option<LengthUnit>,
    },
}

/// 명령 하나를 실행하고 출력할 문자열을 돌려준다.
pub fn execute(command: &Command, cfg: &Config) -> Result<String, AppError> {
    let input_unit = |unit: &Option<LengthUnit>| unit.unwrap_or(cfg.display.default_input_unit);
    match command {
        Command::Show { value, unit } => {
            let length = try_length_from(*value, input_unit(unit))?;
            Ok(render_show(length, cfg.display.imperial))
        }
        Command::Convert { value, from, to } => {
            let length = try_length_from(*value, *from)?;
            Ok(format!("{} {}", length.to_unit(*to), to))
        }
        Command::FeetInches { value, unit } => {
            let length = try_length_from(*value, input_unit(unit))?;
            Ok(render_feet_and_inches(length))
        }
    }
}

/// `show` 명령의 출력. 첫 줄은 자동 단위 표기, 이어서 단위별 값을 나열한다.
pub fn render_show(length: Length, imperial: bool) -> String {
    let mut lines = vec![length.to_string(), format!("  {:>3}: {}", "nm", length.nanometers())];
    for unit in LengthUnit::ALL.into_iter().skip(1) {
        lines.push(format!("  {:>3}: {}", unit.symbol(), length.to_unit(unit)));
    }
    if imperial {
        lines.push(format!("  {}", render_feet_and_inches(length)));
    }
    lines.join("\n")
}

/// `5ft 10.07874in` 형식. 인치는 소수 다섯째 자리까지 표시한다.
pub fn render_feet_and_inches(length: Length) -> String {
    let (feet, inches) = length.feet_and_inches();
    format!("{feet}ft {inches:.5}in")
}
