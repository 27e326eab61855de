//! 설정 로드/저장 로그 테스트. 전역 로거를 쓰므로 별도 테스트 바이너리로 둔다.
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use lengths::app;
use lengths::config::Config;

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn captured() -> Vec<(Level, String)> {
    LOGGER.lines.lock().expect("lock").drain(..).collect()
}

#[test]
fn config_load_and_save_are_logged_after_bootstrap() {
    log::set_logger(&LOGGER).expect("set_logger");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lengths.toml");

    // `-v`: 설정 생성/저장 로그가 모두 보인다.
    log::set_max_level(app::bootstrap_log_level(true));
    let cfg = app::load_config(&path).expect("create default");
    let lines = captured();
    assert!(
        lines.iter().any(|(l, m)| *l == Level::Debug && m.contains("설정 저장")),
        "{lines:?}"
    );
    assert!(
        lines.iter().any(|(l, m)| *l == Level::Info && m.contains("기본 설정 파일 생성")),
        "{lines:?}"
    );

    // 기존 파일을 읽으면 로드 로그가 남는다.
    app::load_config(&path).expect("reload");
    let lines = captured();
    assert!(lines.iter().any(|(l, m)| *l == Level::Debug && m.contains("설정 로드")));

    // `-v` 없이 시작하면 생성 안내(info)는 보이고 디버그는 걸러진다.
    std::fs::remove_file(&path).expect("remove");
    log::set_max_level(app::bootstrap_log_level(false));
    app::load_config(&path).expect("create again");
    let lines = captured();
    assert!(lines.iter().any(|(l, _)| *l == Level::Info));
    assert!(lines.iter().all(|(l, _)| *l != Level::Debug), "{lines:?}");

    assert_eq!(app::configured_log_level(false, &cfg), LevelFilter::Warn);
    assert_eq!(app::configured_log_level(true, &cfg), LevelFilter::Debug);
}
