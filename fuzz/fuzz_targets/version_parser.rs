#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // 크래시나 패닉 없이 Ok 또는 Err을 반환해야 한다
    if let Ok(version) = jdkver_parser::parse(text, 1) {
        // 성공한 결과는 항상 semver로 다시 읽을 수 있어야 한다
        assert!(
            version.to_semver().is_ok(),
            "derived semver does not parse: {}",
            version.semver()
        );
    }
});
