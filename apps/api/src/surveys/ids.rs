use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 9;

pub const SURVEY_ID_PREFIX: &str = "survey";
pub const RESPONSE_ID_PREFIX: &str = "resp";

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short public identifier: `<prefix>-` followed by 9 characters of `[0-9a-z]`.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", encode_suffix(Uuid::new_v4().as_u128()))
}

/// Base-36 digits of `bits`, least significant first. The low bits of a v4
/// UUID are random, so 9 digits carry about 46 bits of entropy.
fn encode_suffix(mut bits: u128) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| {
            let digit = ALPHABET[(bits % 36) as usize] as char;
            bits /= 36;
            digit
        })
        .collect()
}

pub fn new_survey_id() -> String {
    generate_id(SURVEY_ID_PREFIX)
}

pub fn new_response_id() -> String {
    generate_id(RESPONSE_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_id_format() {
        let id = new_survey_id();
        let suffix = id.strip_prefix("survey-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_response_id_prefix() {
        assert!(new_response_id().starts_with("resp-"));
    }

    #[test]
    fn test_ids_differ() {
        assert_ne!(new_survey_id(), new_survey_id());
    }

    #[test]
    fn test_suffix_uses_full_base36_alphabet() {
        assert_eq!(encode_suffix(0), "000000000");
        assert_eq!(encode_suffix(35), "z00000000");
        assert_eq!(encode_suffix(36 + 10), "a10000000");
    }

    #[test]
    fn test_suffix_keeps_only_nine_digits() {
        assert_eq!(encode_suffix(u128::MAX).len(), 9);
    }
}
