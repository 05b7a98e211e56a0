//! 에러 타입: 도메인별 에러 정의

/// jdkver 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum JdkverError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 버전 문자열 파싱 에러
    #[error("version error: {0}")]
    Version(#[from] VersionError),

    /// 버전 텍스트 수집 에러 (런타임 실행 등)
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 버전 파싱 에러
///
/// 입력 자체가 버전 출력이 아닌 경우와, 버전 토큰은 찾았지만
/// 분해할 수 없는 경우를 구분합니다.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// `build ...)` 마커가 없음
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// 버전 토큰 분해 실패
    #[error("malformed version: {0}")]
    MalformedVersion(String),
}

/// 버전 텍스트 수집 에러
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// 프로세스 실행 실패
    #[error("spawn failed: {0}")]
    Spawn(String),

    /// 제한 시간 초과
    #[error("timed out: {0}")]
    Timeout(String),
}
