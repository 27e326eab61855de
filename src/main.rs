use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use lengths::{app, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 로거를 먼저 띄우고 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // 로거 자체는 모두 통과시키고 실제 수준은 전역 최대 수준으로 조절한다.
    TermLogger::init(
        LevelFilter::Trace,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    log::set_max_level(app::bootstrap_log_level(cli.verbose));
    let cfg = app::load_config(&cli.config)?;
    log::set_max_level(app::configured_log_level(cli.verbose, &cfg));
    app::run(cli, &cfg)?;
    Ok(())
}
