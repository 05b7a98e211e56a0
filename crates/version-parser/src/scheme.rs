//! 버전 번호 체계 분류
//!
//! 토큰을 `.`으로 나눈 첫 구성요소가 숫자가 아니면 `+`로 다시 나눕니다
//! (`17+35`처럼 점으로 구분된 선두 구성요소가 없는 토큰). 선두 값이 1보다 크면
//! JDK 9 이후 체계, 그 외에는 JDK 8 이전 체계입니다.

use serde::Serialize;

use crate::error::VersionParseError;

/// 버전 번호 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// JDK 9 이후: `MAJOR.MINOR.SECURITY+BUILD[-OPT]`
    Modern,
    /// JDK 8 이전: `1.MAJOR.MINOR_SECURITY-bBUILD[-OPT]`
    Legacy,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modern => write!(f, "modern"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// 분류 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    /// 원시 토큰
    pub token: &'a str,
    /// 판별된 체계
    pub scheme: Scheme,
    /// 선두 구성요소 값
    pub leading: u32,
    /// 토큰을 나눈 구분자 (`.` 또는 `+`)
    pub separator: char,
    /// 구분자로 나눈 구성요소
    pub segments: Vec<&'a str>,
}

impl Classified<'_> {
    /// `index`번째 구성요소부터 토큰 끝까지의 원문을 반환합니다.
    pub fn rest_from(&self, index: usize) -> Option<&str> {
        self.token.splitn(index + 1, self.separator).nth(index)
    }
}

/// 토큰의 번호 체계를 판별합니다.
///
/// # Errors
///
/// `.`과 `+` 어느 쪽으로 나눠도 선두 구성요소가 숫자가 아니면
/// [`VersionParseError::MalformedVersion`]을 반환합니다.
pub fn classify(token: &str) -> Result<Classified<'_>, VersionParseError> {
    let (separator, segments, leading) = ['.', '+']
        .into_iter()
        .find_map(|separator| {
            let segments: Vec<&str> = token.split(separator).collect();
            let leading = parse_number(segments.first()?)?;
            Some((separator, segments, leading))
        })
        .ok_or_else(|| VersionParseError::version(token, "leading component is not a number"))?;

    let scheme = if leading > 1 {
        Scheme::Modern
    } else {
        Scheme::Legacy
    };

    Ok(Classified {
        token,
        scheme,
        leading,
        separator,
        segments,
    })
}

/// ASCII 숫자만으로 이루어진 구성요소를 `u32`로 변환합니다.
///
/// 부호, 공백, 빈 문자열은 거부합니다.
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_dotted_token() {
        let c = classify("11.0.2+7").unwrap();
        assert_eq!(c.scheme, Scheme::Modern);
        assert_eq!(c.leading, 11);
        assert_eq!(c.separator, '.');
        assert_eq!(c.segments, vec!["11", "0", "2+7"]);
    }

    #[test]
    fn legacy_dotted_token() {
        let c = classify("1.8.0_202-b08").unwrap();
        assert_eq!(c.scheme, Scheme::Legacy);
        assert_eq!(c.leading, 1);
        assert_eq!(c.segments, vec!["1", "8", "0_202-b08"]);
    }

    #[test]
    fn plus_fallback_for_undotted_token() {
        let c = classify("17+35").unwrap();
        assert_eq!(c.scheme, Scheme::Modern);
        assert_eq!(c.separator, '+');
        assert_eq!(c.segments, vec!["17", "35"]);
    }

    #[test]
    fn leading_zero_is_legacy() {
        assert_eq!(classify("0.9.1").unwrap().scheme, Scheme::Legacy);
    }

    #[test]
    fn non_numeric_leading_component_fails() {
        for token in ["", "ea.1", "9-ea+19", "+7", " 11.0.2+7"] {
            let err = classify(token).unwrap_err();
            assert!(
                matches!(err, VersionParseError::MalformedVersion { .. }),
                "token {token:?} should be malformed"
            );
        }
    }

    #[test]
    fn rest_from_keeps_later_separators() {
        let c = classify("1.8.0_212-internal-2019.04-b03").unwrap();
        assert_eq!(c.rest_from(2), Some("0_212-internal-2019.04-b03"));
        assert_eq!(c.rest_from(5), None);
    }

    #[test]
    fn parse_number_rejects_signs_and_blanks() {
        assert_eq!(parse_number("08"), Some(8));
        assert_eq!(parse_number("+8"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("4294967296"), None);
    }
}
