//! 파싱 결과 -- [`ParsedVersion`]과 진입점 [`parse`]

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::decompose::{Fields, decompose};
use crate::error::VersionParseError;
use crate::extract::extract_token;
use crate::scheme::{Scheme, classify};

/// 필드가 없을 때 쉼표 구분 출력에 쓰는 표시
pub const ABSENT_MARKER: &str = "None";

/// 빌드 식별자
///
/// JDK 9 이후 체계는 정수, JDK 8 이전 체계는 문자열입니다.
/// `b08`의 `08`처럼 선행 0이 의미를 가지므로 숫자로 변환하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Build {
    /// 정수 빌드 번호 (`+7`)
    Numeric(u32),
    /// 원문 그대로의 빌드 태그 (`-b08`)
    Tag(String),
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// 구조화된 자바 런타임 버전
///
/// 생성 후 변경되지 않습니다. 같은 입력은 항상 같은 값을 만듭니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedVersion {
    scheme: Scheme,
    major: u32,
    minor: u32,
    security: u32,
    build: Build,
    opt: Option<String>,
    semver: String,
}

impl ParsedVersion {
    fn from_fields(scheme: Scheme, fields: Fields, build_num: u64) -> Self {
        let Fields {
            major,
            minor,
            security,
            build,
            opt,
        } = fields;
        let semver = format!("{major}.{minor}.{security}+{build}.{build_num}");
        Self {
            scheme,
            major,
            minor,
            security,
            build,
            opt,
            semver,
        }
    }

    /// 판별된 번호 체계
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// 보안 패치 / 업데이트 번호
    pub fn security(&self) -> u32 {
        self.security
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    /// 빌드 뒤의 타임스탬프 / 사전 릴리스 태그
    pub fn opt(&self) -> Option<&str> {
        self.opt.as_deref()
    }

    /// `{major}.{minor}.{security}+{build}.{build_num}`
    pub fn semver(&self) -> &str {
        &self.semver
    }

    /// 파생 semver 문자열을 [`semver::Version`]으로 변환합니다.
    ///
    /// [`parse`]가 돌려준 값은 빌드가 숫자이거나 ASCII 영숫자이므로 항상 변환됩니다.
    /// 실패는 파싱 에러와 구분되도록 [`semver::Error`] 그대로 전달합니다.
    pub fn to_semver(&self) -> Result<semver::Version, semver::Error> {
        semver::Version::parse(&self.semver)
    }
}

/// `{major}, {minor}, {security}, {build}, {opt}, {semver}`
///
/// 하위 소비자가 고정된 필드 수를 기대하므로 `opt`가 없으면 [`ABSENT_MARKER`]를 씁니다.
impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.major,
            self.minor,
            self.security,
            self.build,
            self.opt.as_deref().unwrap_or(ABSENT_MARKER),
            self.semver
        )
    }
}

/// 자바 런타임 버전 배너를 파싱합니다.
///
/// `build_num`은 CI 빌드 번호처럼 외부에서 주어지는 값으로, 파생 semver
/// 문자열의 마지막 빌드 메타데이터에 붙습니다.
///
/// # Errors
///
/// - [`VersionParseError::MalformedInput`]: 두 번째 줄 이후에 `build ...)` 마커가 없음
/// - [`VersionParseError::MalformedVersion`]: 토큰을 어떤 체계로도 분해할 수 없음
///
/// # Examples
///
/// ```
/// let text = "openjdk version \"11.0.2\" 2019-01-15\n\
///             OpenJDK Runtime Environment AdoptOpenJDK (build 11.0.2+7)\n";
/// let version = jdkver_parser::parse(text, 5).unwrap();
/// assert_eq!(version.semver(), "11.0.2+7.5");
/// assert_eq!(version.to_string(), "11, 0, 2, 7, None, 11.0.2+7.5");
/// ```
pub fn parse(version_text: &str, build_num: u64) -> Result<ParsedVersion, VersionParseError> {
    let token = extract_token(version_text)?;
    let classified = classify(token)?;
    let fields = decompose(&classified)?;
    let version = ParsedVersion::from_fields(classified.scheme, fields, build_num);

    debug!(
        token,
        scheme = %version.scheme,
        semver = version.semver.as_str(),
        "java version parsed"
    );

    Ok(version)
}
