// Console output for the demo binary

use crate::is_iso8859_1;

/// 인코딩 가능한 예제 (악센트 문자는 ISO-8859-1 범위 안에 있음)
pub const SAMPLE_VALID: &str = "çã";
/// 인코딩 불가능한 예제 (이모지는 범위 밖)
pub const SAMPLE_INVALID: &str = "Health Care 👋";

pub const SAMPLES: [&str; 2] = [SAMPLE_VALID, SAMPLE_INVALID];

/// `'<string>' is ISO-8859-1? <True|False>` 형식의 한 줄을 만듭니다.
pub fn format_result(text: &str, valid: bool) -> String {
    let verdict = if valid { "True" } else { "False" };
    format!("'{}' is ISO-8859-1? {}", text, verdict)
}

pub fn check_and_format(text: &str) -> String {
    format_result(text, is_iso8859_1(text))
}
