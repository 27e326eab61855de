use std::io::{self, Write};
use std::path::Path;

use log::{debug, LevelFilter};

use crate::config::{self, Config};
use crate::conversion;
use crate::ui_cli::{self, Cli};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 설정 파일을 읽기 전 로거에 적용할 수준. `-v`이면 디버그까지 출력한다.
pub fn bootstrap_log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// 설정을 읽은 뒤의 로그 수준. `-v`가 설정 값보다 우선한다.
pub fn configured_log_level(verbose: bool, config: &Config) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        config.log_level.into()
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만든다.
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    Ok(config::load_or_default(path)?)
}

/// 파싱된 명령을 실행하고 결과를 `out`에 쓴다.
pub fn run_to<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<(), AppError> {
    debug!("명령 실행: {:?}", cli.command);
    let output = ui_cli::execute(&cli.command, config)?;
    writeln!(out, "{output}")?;
    Ok(())
}

/// 파싱된 명령을 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    run_to(cli, config, &mut io::stdout().lock())
}
