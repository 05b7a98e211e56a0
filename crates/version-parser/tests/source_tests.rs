//! 버전 텍스트 소스 통합 테스트
//!
//! 실제 JDK 대신 `sh`로 실행되는 스크립트가 배너를 출력합니다.

#![cfg(unix)]

use std::time::Duration;

use jdkver_parser::{
    Build, DetectError, JavaCommandSource, ProbeError, VersionParseError, VersionSource, detect,
};
use tempfile::TempDir;

/// `sh <script>` 형태로 실행될 가짜 java 스크립트를 만듭니다.
fn fake_java(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("java-version.sh");
    std::fs::write(&path, body).expect("should write script");
    path.display().to_string()
}

#[tokio::test]
async fn banner_on_stderr_is_captured() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = fake_java(
        &dir,
        r#"echo 'openjdk version "11.0.2" 2019-01-15' >&2
echo 'OpenJDK Runtime Environment AdoptOpenJDK (build 11.0.2+7)' >&2
echo 'OpenJDK 64-Bit Server VM AdoptOpenJDK (build 11.0.2+7, mixed mode)' >&2
"#,
    );

    let source = JavaCommandSource::new("sh", script, Duration::from_secs(10));
    let version = detect(&source, 5).await.expect("should detect");
    assert_eq!(version.to_string(), "11, 0, 2, 7, None, 11.0.2+7.5");
}

#[tokio::test]
async fn banner_on_stdout_is_captured() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = fake_java(
        &dir,
        r#"echo 'openjdk 1.8.0_202'
echo 'OpenJDK Runtime Environment (build 1.8.0_202-b08)'
"#,
    );

    let source = JavaCommandSource::new("sh", script, Duration::from_secs(10));
    let version = detect(&source, 1).await.expect("should detect");
    assert_eq!(version.build(), &Build::Tag("08".to_owned()));
}

#[tokio::test]
async fn failing_exit_status_still_parses_output() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = fake_java(
        &dir,
        r#"echo 'openjdk version "17.0.9"' >&2
echo 'OpenJDK Runtime Environment (build 17.0.9+9)' >&2
exit 3
"#,
    );

    let source = JavaCommandSource::new("sh", script, Duration::from_secs(10));
    let version = detect(&source, 1).await.expect("should detect");
    assert_eq!(version.semver(), "17.0.9+9.1");
}

#[tokio::test]
async fn unrelated_output_is_malformed_input() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = fake_java(&dir, "echo 'Unrecognized option: -version' >&2\nexit 1\n");

    let source = JavaCommandSource::new("sh", script, Duration::from_secs(10));
    let err = detect(&source, 1).await.expect_err("should fail");
    assert!(matches!(
        err,
        DetectError::Parse(VersionParseError::MalformedInput { .. })
    ));
}

#[tokio::test]
async fn slow_runtime_times_out() {
    let dir = TempDir::new().expect("should create temp dir");
    let script = fake_java(&dir, "sleep 5\n");

    let source = JavaCommandSource::new("sh", script, Duration::from_millis(200));
    let err = source.read_version_text().await.expect_err("should time out");
    assert!(matches!(err, ProbeError::Timeout { .. }));
}
