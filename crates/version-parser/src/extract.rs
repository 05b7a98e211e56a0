//! 배너 텍스트에서 원시 버전 토큰 추출
//!
//! `java -version` 출력의 두 번째 줄은 다음과 같은 형태입니다.
//!
//! ```text
//! OpenJDK Runtime Environment AdoptOpenJDK (build 11.0.2+7)
//! ```
//!
//! 첫 줄바꿈 이후의 텍스트(정보 줄)에서 `build ` 다음부터 첫 `)` 전까지가 토큰입니다.

use crate::error::VersionParseError;

/// 토큰 시작 마커
pub const BUILD_MARKER: &str = "build ";

/// 버전 배너에서 원시 버전 토큰을 추출합니다.
///
/// # Errors
///
/// 줄바꿈, `build ` 마커, 닫는 `)` 중 하나라도 없으면
/// [`VersionParseError::MalformedInput`]을 반환합니다.
pub fn extract_token(version_text: &str) -> Result<&str, VersionParseError> {
    let (_, info_line) = version_text
        .split_once('\n')
        .ok_or_else(|| VersionParseError::input("expected at least two lines of version output"))?;

    let (_, after_marker) = info_line
        .split_once(BUILD_MARKER)
        .ok_or_else(|| VersionParseError::input("no 'build ' marker after the first line"))?;

    let (token, _) = after_marker
        .split_once(')')
        .ok_or_else(|| VersionParseError::input("no closing ')' after 'build ' marker"))?;

    Ok(token)
}
