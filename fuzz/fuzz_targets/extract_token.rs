#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(token) = jdkver_parser::extract_token(text) {
            // 토큰은 닫는 괄호를 포함하지 않는다
            assert!(!token.contains(')'));
        }
    }
});
