//! 체계별 토큰 분해
//!
//! 각 체계는 순서가 있는 분해 전략 목록을 가집니다. 전략은 자기 조건이 맞을 때만
//! 결과를 돌려주고, 처음 성공한 전략이 채택됩니다. 모두 실패하면
//! [`VersionParseError::MalformedVersion`] 하나로 끝납니다.

use tracing::debug;

use crate::error::VersionParseError;
use crate::scheme::{Classified, Scheme, parse_number};
use crate::version::Build;

/// 분해된 필드
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields {
    pub major: u32,
    pub minor: u32,
    pub security: u32,
    pub build: Build,
    pub opt: Option<String>,
}

type Strategy = fn(&Classified<'_>) -> Option<Fields>;

/// JDK 9 이후 체계 전략 (시도 순서대로)
const MODERN_STRATEGIES: &[(&str, Strategy)] = &[
    ("plus-build", plus_build),
    ("dash-build", dash_build),
    ("feature-only", feature_only),
];

/// JDK 8 이전 체계 전략
const LEGACY_STRATEGIES: &[(&str, Strategy)] = &[("update-build", update_build)];

/// 분류된 토큰을 필드로 분해합니다.
pub(crate) fn decompose(classified: &Classified<'_>) -> Result<Fields, VersionParseError> {
    let (strategies, expected) = match classified.scheme {
        Scheme::Modern => (MODERN_STRATEGIES, "MAJOR.MINOR.SECURITY+BUILD[-OPT]"),
        Scheme::Legacy => (LEGACY_STRATEGIES, "1.MAJOR.MINOR_SECURITY-bBUILD[-OPT]"),
    };

    strategies
        .iter()
        .find_map(|(name, strategy)| {
            let fields = strategy(classified)?;
            debug!(token = classified.token, strategy = *name, "version token decomposed");
            Some(fields)
        })
        .ok_or_else(|| {
            VersionParseError::version(
                classified.token,
                format!("does not match the {} scheme ({expected})", classified.scheme),
            )
        })
}

/// `11.0.2+7`, `21.0.1+12-LTS`
fn plus_build(c: &Classified<'_>) -> Option<Fields> {
    let minor = parse_number(c.segments.get(1)?)?;
    let (security, rest) = c.segments.get(2)?.split_once('+')?;
    let security = parse_number(security)?;
    let mut pieces = rest.split('-');
    let build = parse_number(pieces.next()?)?;

    Some(Fields {
        major: c.leading,
        minor,
        security,
        build: Build::Numeric(build),
        opt: non_empty(pieces.next()),
    })
}

/// `11.0.2-7` -- 일부 배포판이 `+` 대신 `-`로 빌드 번호를 붙이는 형태
fn dash_build(c: &Classified<'_>) -> Option<Fields> {
    let minor = parse_number(c.segments.get(1)?)?;
    let tail = c.segments.get(2)?;
    if tail.contains('+') {
        return None;
    }
    let mut pieces = tail.split('-');
    let security = parse_number(pieces.next()?)?;
    let build = parse_number(pieces.next()?)?;

    Some(Fields {
        major: c.leading,
        minor,
        security,
        build: Build::Numeric(build),
        opt: non_empty(pieces.next()),
    })
}

/// `17+35`, `17+35-2021091411`, `11.0.x+7` -- minor/security를 숫자로 읽을 수 없는 토큰
///
/// minor와 security가 모두 숫자로 읽히면 적용되지 않습니다. 그 경우 빌드가
/// 잘못된 토큰은 [`VersionParseError::MalformedVersion`]이 됩니다.
fn feature_only(c: &Classified<'_>) -> Option<Fields> {
    if has_numeric_triplet(c) {
        return None;
    }
    let mut pieces = c.segments.get(1)?.split('-');
    let build = parse_number(pieces.next()?)?;

    Some(Fields {
        major: c.leading,
        minor: 0,
        security: 0,
        build: Build::Numeric(build),
        opt: non_empty(pieces.next()),
    })
}

/// minor(`segments[1]`)와 security(`segments[2]`의 `+`/`-` 앞부분)가 모두 숫자인지
fn has_numeric_triplet(c: &Classified<'_>) -> bool {
    let minor = c.segments.get(1).and_then(|m| parse_number(m));
    let security = c
        .segments
        .get(2)
        .and_then(|s| s.split(['+', '-']).next())
        .and_then(parse_number);
    minor.is_some() && security.is_some()
}

/// `1.8.0_202-b08`, `1.8.0_212-internal-201904201225-b03`
///
/// 빌드는 문자열 그대로 보존합니다 (`08`의 선행 0 유지).
fn update_build(c: &Classified<'_>) -> Option<Fields> {
    let major = parse_number(c.segments.get(1)?)?;
    let rest = c.rest_from(2)?;

    let head = rest.split('-').next()?;
    let (minor, security) = match head.split_once('_') {
        Some((minor, security)) => (parse_number(minor)?, parse_number(security)?),
        None => (parse_number(head)?, 0),
    };

    // 숫자가 뒤따르는 마지막 `-b`가 빌드 번호. 없으면 첫 `-b`를 사용
    let after = rest
        .rmatch_indices("-b")
        .map(|(i, _)| &rest[i + 2..])
        .find(|after| after.starts_with(|ch: char| ch.is_ascii_digit()))
        .or_else(|| rest.split_once("-b").map(|(_, after)| after))?;
    // semver 빌드 메타데이터로 쓰이므로 ASCII 영숫자만 허용
    let build = after
        .split('-')
        .next()
        .filter(|b| !b.is_empty() && b.chars().all(|ch| ch.is_ascii_alphanumeric()))?;

    let opt = c
        .token
        .split_once("internal-")
        .and_then(|(_, after)| non_empty(after.split('-').next()));

    Some(Fields {
        major,
        minor,
        security,
        build: Build::Tag(build.to_owned()),
        opt,
    })
}

fn non_empty(piece: Option<&str>) -> Option<String> {
    piece.filter(|p| !p.is_empty()).map(str::to_owned)
}
