//! 버전 파서 에러 타입
//!
//! - [`VersionParseError`]: 배너 텍스트 파싱 실패 (`parse`)
//! - [`ProbeError`]: 버전 텍스트 수집 실패 (`VersionSource`)
//! - [`DetectError`]: 수집 + 파싱을 묶은 `detect`의 에러
//!
//! 모두 `From` 구현을 통해 [`JdkverError`]로 `?` 전파됩니다.

use std::time::Duration;

use jdkver_core::error::{JdkverError, SourceError, VersionError};

/// 버전 배너 파싱 에러
///
/// 두 가지 경우만 존재하며 호출자가 구분할 수 있어야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    /// `build <version>)` 마커가 없음 -- 버전 출력이 아님
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// 실패 사유
        reason: String,
    },

    /// 마커는 있으나 버전 토큰을 분해할 수 없음
    #[error("malformed version '{token}': {reason}")]
    MalformedVersion {
        /// 추출된 버전 토큰
        token: String,
        /// 실패 사유
        reason: String,
    },
}

impl VersionParseError {
    pub(crate) fn input(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn version(token: &str, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            token: token.to_owned(),
            reason: reason.into(),
        }
    }
}

/// 버전 텍스트 수집 에러
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// 런타임 프로세스 실행 실패
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// 실행한 명령
        command: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },

    /// 제한 시간 초과
    #[error("'{command}' did not finish within {timeout:?}")]
    Timeout {
        /// 실행한 명령
        command: String,
        /// 적용된 제한 시간
        timeout: Duration,
    },
}

/// `detect` 에러 -- 수집 실패 또는 파싱 실패
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// 버전 텍스트 수집 실패
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// 버전 텍스트 파싱 실패
    #[error(transparent)]
    Parse(#[from] VersionParseError),
}

impl From<VersionParseError> for JdkverError {
    fn from(err: VersionParseError) -> Self {
        match err {
            VersionParseError::MalformedInput { .. } => {
                JdkverError::Version(VersionError::MalformedInput(err.to_string()))
            }
            VersionParseError::MalformedVersion { .. } => {
                JdkverError::Version(VersionError::MalformedVersion(err.to_string()))
            }
        }
    }
}

impl From<ProbeError> for JdkverError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Spawn { .. } => JdkverError::Source(SourceError::Spawn(err.to_string())),
            ProbeError::Timeout { .. } => {
                JdkverError::Source(SourceError::Timeout(err.to_string()))
            }
        }
    }
}

impl From<DetectError> for JdkverError {
    fn from(err: DetectError) -> Self {
        match err {
            DetectError::Probe(e) => e.into(),
            DetectError::Parse(e) => e.into(),
        }
    }
}
