use crate::Latin1Error;

/// ISO-8859-1이 표현할 수 있는 가장 큰 코드포인트
pub const LATIN1_MAX: u32 = 0xFF;

/// 인코딩할 수 없는 첫 번째 문자와 그 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unencodable {
    pub character: char,
    /// UTF-8 입력 기준 바이트 오프셋 (항상 char 경계)
    pub byte_offset: usize,
    /// 앞에 있는 문자 수
    pub char_index: usize,
}

/// 문자 하나가 ISO-8859-1 범위(U+0000-U+00FF)에 있는지 판별
#[inline]
pub const fn is_latin1_char(c: char) -> bool {
    c as u32 <= LATIN1_MAX
}

/// 문자열 전체를 ISO-8859-1로 손실 없이 인코딩할 수 있는지 확인합니다.
///
/// ISO-8859-1은 U+0000-U+00FF를 같은 값의 바이트로 그대로 매핑하므로
/// 모든 코드포인트가 0xFF 이하인지만 보면 됩니다. Windows-1252와 달리
/// U+0080-U+009F(C1 제어 문자)는 허용되고 '€' 같은 문자는 허용되지 않습니다.
///
/// 빈 문자열은 `true`.
#[inline]
pub fn is_iso8859_1(text: &str) -> bool {
    encoding_rs::mem::is_str_latin1(text)
}

/// 인코딩할 수 없는 첫 번째 문자를 찾습니다. 모두 인코딩 가능하면 `None`.
pub fn find_unencodable(text: &str) -> Option<Unencodable> {
    // 대부분의 입력은 통과하므로 빠른 경로로 먼저 확인
    if is_iso8859_1(text) {
        return None;
    }
    scan_unencodable(text)
}

fn scan_unencodable(text: &str) -> Option<Unencodable> {
    text.char_indices()
        .enumerate()
        .find(|(_, (_, c))| !is_latin1_char(*c))
        .map(|(char_index, (byte_offset, character))| Unencodable {
            character,
            byte_offset,
            char_index,
        })
}

/// 문자열을 ISO-8859-1 바이트로 변환합니다. 문자 하나당 1바이트.
pub fn encode(text: &str) -> Result<Vec<u8>, Latin1Error> {
    if let Some(bad) = find_unencodable(text) {
        return Err(bad.into());
    }

    // 위에서 범위를 확인했으므로 lossy 변환이어도 손실이 없음
    Ok(encoding_rs::mem::encode_latin1_lossy(text).into_owned())
}
