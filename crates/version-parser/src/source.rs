//! 버전 텍스트 소스 -- 런타임 실행 또는 리터럴 문자열
//!
//! [`VersionSource`] trait은 파서에 넘길 배너 텍스트를 어디서 가져올지 추상화합니다.
//! 운영 코드는 [`JavaCommandSource`]로 `java -version`을 실행하고, 테스트나
//! CI는 [`LiteralSource`]로 미리 캡처한 텍스트를 주입합니다.
//!
//! ```text
//! VersionSource ──read_version_text()──▶ String ──parse(text, build_num)──▶ ParsedVersion
//! ```

use std::future::Future;
use std::process::Stdio;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{DetectError, ProbeError};
use crate::version::{ParsedVersion, parse};

/// 버전 배너 텍스트 공급자
pub trait VersionSource: Send + Sync {
    /// 소스 설명 (로그용)
    fn describe(&self) -> String;

    /// 두 줄 이상의 버전 배너 텍스트를 반환합니다.
    ///
    /// # Errors
    ///
    /// 텍스트를 얻지 못하면 [`ProbeError`]를 반환합니다.
    fn read_version_text(&self) -> impl Future<Output = Result<String, ProbeError>> + Send;
}

/// 미리 주어진 텍스트를 그대로 돌려주는 소스
#[derive(Debug, Clone)]
pub struct LiteralSource {
    text: String,
}

impl LiteralSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// 환경변수 값을 텍스트로 쓰는 소스를 만듭니다. 변수가 없으면 `None`.
    pub fn from_env(key: &str) -> Option<Self> {
        std::env::var(key).ok().map(Self::new)
    }
}

impl VersionSource for LiteralSource {
    fn describe(&self) -> String {
        "literal text".to_owned()
    }

    async fn read_version_text(&self) -> Result<String, ProbeError> {
        Ok(self.text.clone())
    }
}

/// 자바 런타임을 실행해 버전 배너를 캡처하는 소스
///
/// JVM은 `-version` 배너를 stderr에 쓰므로 stderr 뒤에 stdout을 이어붙여 반환합니다.
/// 종료 코드가 0이 아니어도 출력은 그대로 파서에 넘기고 경고만 남깁니다.
#[derive(Debug, Clone)]
pub struct JavaCommandSource {
    java_cmd: String,
    version_flag: String,
    timeout: Duration,
}

impl JavaCommandSource {
    pub fn new(java_cmd: impl Into<String>, version_flag: impl Into<String>, timeout: Duration) -> Self {
        Self {
            java_cmd: java_cmd.into(),
            version_flag: version_flag.into(),
            timeout,
        }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.java_cmd, self.version_flag)
    }
}

impl VersionSource for JavaCommandSource {
    fn describe(&self) -> String {
        self.command_line()
    }

    async fn read_version_text(&self) -> Result<String, ProbeError> {
        let command = self.command_line();
        debug!(command = %command, timeout = ?self.timeout, "running java runtime");

        let child = tokio::process::Command::new(&self.java_cmd)
            .arg(&self.version_flag)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                command: command.clone(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ProbeError::Timeout {
                command: command.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| ProbeError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!(command = %command, status = %output.status, "java runtime exited with failure status");
        }

        let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stdout));
        Ok(text)
    }
}

/// 소스에서 텍스트를 읽어 파싱합니다.
///
/// # Errors
///
/// - [`DetectError::Probe`]: 텍스트 수집 실패
/// - [`DetectError::Parse`]: 파싱 실패
pub async fn detect<S: VersionSource>(
    source: &S,
    build_num: u64,
) -> Result<ParsedVersion, DetectError> {
    let text = source.read_version_text().await?;
    debug!(source = %source.describe(), bytes = text.len(), "version text acquired");
    Ok(parse(&text, build_num)?)
}
