//! 설정 관리: jdkver.toml 파싱 및 런타임 설정
//!
//! [`JdkverConfig`]는 모든 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`JDKVER_PROBE_JAVA_CMD=/opt/jdk/bin/java` 형식)
//! 3. 설정 파일 (`jdkver.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! 설정 파일은 선택 사항입니다. 경로가 주어지지 않으면 기본값에
//! 환경변수 오버라이드만 적용합니다.
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), jdkver_core::error::JdkverError> {
//! use jdkver_core::config::JdkverConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = JdkverConfig::load("jdkver.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = JdkverConfig::parse("[probe]\ntimeout_secs = 10")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, JdkverError};

/// jdkver 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JdkverConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 런타임 실행 설정
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl JdkverConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, JdkverError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 경로가 있으면 [`load`](Self::load), 없으면 기본값 + 환경변수로 설정을 만듭니다.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, JdkverError> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, JdkverError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JdkverError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                JdkverError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, JdkverError> {
        toml::from_str(toml_str).map_err(|e| {
            JdkverError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `JDKVER_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "JDKVER_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "JDKVER_GENERAL_LOG_FORMAT");

        // Probe
        override_string(&mut self.probe.java_cmd, "JDKVER_PROBE_JAVA_CMD");
        override_string(&mut self.probe.version_flag, "JDKVER_PROBE_VERSION_FLAG");
        override_u64(&mut self.probe.timeout_secs, "JDKVER_PROBE_TIMEOUT_SECS");
        override_string(&mut self.probe.literal_env, "JDKVER_PROBE_LITERAL_ENV");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), JdkverError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.probe.java_cmd.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "probe.java_cmd".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        if self.probe.version_flag.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "probe.version_flag".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        if self.probe.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "probe.timeout_secs".to_owned(),
                reason: "must be greater than 0".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            // stdout은 버전 레코드 전용이고 로그는 stderr로 나가지만,
            // CI 로그를 조용하게 유지하기 위해 warn이 기본값
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 런타임 실행 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// 실행할 java 바이너리
    pub java_cmd: String,
    /// 버전 출력 플래그
    pub version_flag: String,
    /// 실행 제한 시간 (초)
    pub timeout_secs: u64,
    /// 이 환경변수가 설정되어 있으면 런타임 실행 대신 그 값을 버전 텍스트로 사용
    pub literal_env: String,
}

impl ProbeConfig {
    /// 실행 제한 시간을 [`Duration`]으로 반환합니다.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            java_cmd: "java".to_owned(),
            version_flag: "-version".to_owned(),
            timeout_secs: 30,
            literal_env: "TEST".to_owned(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_u64(target: &mut u64, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<u64>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse u64 from env var, ignoring"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config_has_sane_values() {
        let config = JdkverConfig::default();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.log_format, "pretty");
        assert_eq!(config.probe.java_cmd, "java");
        assert_eq!(config.probe.version_flag, "-version");
        assert_eq!(config.probe.timeout(), Duration::from_secs(30));
        assert_eq!(config.probe.literal_env, "TEST");
    }

    #[test]
    fn default_config_passes_validation() {
        let config = JdkverConfig::default();
        config.validate().unwrap();
    }

    #[test]
    fn from_str_empty_toml_uses_defaults() {
        let config = JdkverConfig::parse("").unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.probe.timeout_secs, 30);
    }

    #[test]
    fn from_str_partial_toml_merges_with_defaults() {
        let toml = r#"
[probe]
java_cmd = "/opt/jdk-11/bin/java"
"#;
        let config = JdkverConfig::parse(toml).unwrap();
        assert_eq!(config.probe.java_cmd, "/opt/jdk-11/bin/java");
        // 나머지는 기본값 유지
        assert_eq!(config.probe.version_flag, "-version");
        assert_eq!(config.general.log_format, "pretty");
    }

    #[test]
    fn from_str_full_toml() {
        let toml = r#"
[general]
log_level = "debug"
log_format = "json"

[probe]
java_cmd = "/usr/lib/jvm/java-8/bin/java"
version_flag = "-fullversion"
timeout_secs = 5
literal_env = "JDK_VERSION_TEXT"
"#;
        let config = JdkverConfig::parse(toml).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.log_format, "json");
        assert_eq!(config.probe.version_flag, "-fullversion");
        assert_eq!(config.probe.timeout_secs, 5);
        assert_eq!(config.probe.literal_env, "JDK_VERSION_TEXT");
    }

    #[test]
    fn from_str_invalid_toml_returns_error() {
        let err = JdkverConfig::parse("invalid = [[[toml").unwrap_err();
        assert!(matches!(
            err,
            JdkverError::Config(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut config = JdkverConfig::default();
        config.general.log_level = "verbose".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn validate_rejects_invalid_log_format() {
        let mut config = JdkverConfig::default();
        config.general.log_format = "xml".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_format"));
    }

    #[test]
    fn validate_rejects_empty_java_cmd() {
        let mut config = JdkverConfig::default();
        config.probe.java_cmd = "  ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("java_cmd"));
    }

    #[test]
    fn validate_rejects_empty_version_flag() {
        let mut config = JdkverConfig::default();
        config.probe.version_flag = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("version_flag"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = JdkverConfig::default();
        config.probe.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    #[serial]
    fn env_override_string() {
        let mut val = "original".to_owned();
        // SAFETY: serial 테스트에서만 환경변수를 조작합니다.
        unsafe { std::env::set_var("TEST_JDKVER_STR", "overridden") };
        override_string(&mut val, "TEST_JDKVER_STR");
        assert_eq!(val, "overridden");
        unsafe { std::env::remove_var("TEST_JDKVER_STR") };
    }

    #[test]
    #[serial]
    fn env_override_u64_invalid_keeps_original() {
        let mut val = 30;
        // SAFETY: serial 테스트에서만 환경변수를 조작합니다.
        unsafe { std::env::set_var("TEST_JDKVER_U64_BAD", "thirty") };
        override_u64(&mut val, "TEST_JDKVER_U64_BAD");
        assert_eq!(val, 30); // 원래 값 유지
        unsafe { std::env::remove_var("TEST_JDKVER_U64_BAD") };
    }

    #[test]
    #[serial]
    fn env_override_missing_var_keeps_original() {
        let mut val = "keep".to_owned();
        override_string(&mut val, "TEST_JDKVER_DOES_NOT_EXIST");
        assert_eq!(val, "keep");
    }

    #[test]
    #[serial]
    fn apply_env_overrides_updates_probe_section() {
        let mut config = JdkverConfig::default();
        // SAFETY: serial 테스트에서만 환경변수를 조작합니다.
        unsafe {
            std::env::set_var("JDKVER_PROBE_JAVA_CMD", "/opt/jdk/bin/java");
            std::env::set_var("JDKVER_PROBE_TIMEOUT_SECS", "7");
        }
        config.apply_env_overrides();
        unsafe {
            std::env::remove_var("JDKVER_PROBE_JAVA_CMD");
            std::env::remove_var("JDKVER_PROBE_TIMEOUT_SECS");
        }
        assert_eq!(config.probe.java_cmd, "/opt/jdk/bin/java");
        assert_eq!(config.probe.timeout_secs, 7);
    }
}
