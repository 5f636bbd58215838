//! Name validation against a length limit and an allow-list.

use thiserror::Error;

use crate::allow_list::AllowList;

/// Why a candidate name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// More characters than the limit allows
    #[error("name has {len} characters, at most {max} allowed")]
    TooLong { len: usize, max: usize },
    /// Character at `index` (in chars) is not renderable
    #[error("character {ch:?} (U+{code:04X}) at position {index} is not allowed", code = codepoint(.ch))]
    Disallowed { index: usize, ch: char },
}

fn codepoint(ch: &char) -> u32 {
    u32::from(*ch)
}

/// Pure validator: `len <= max_length` and every char in the allow-list.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct NameValidator {
    allow_list: AllowList,
    max_length: usize,
}

impl NameValidator {
    pub fn new(allow_list: AllowList, max_length: usize) -> Self {
        Self {
            allow_list,
            max_length,
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Pass/fail check. The empty string is valid.
    pub fn validate(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }

    /// Like `validate`, but reports the first problem found.
    ///
    /// Length is checked before content.
    pub fn check(&self, candidate: &str) -> Result<(), Rejection> {
        let len = candidate.chars().count();
        if len > self.max_length {
            return Err(Rejection::TooLong {
                len,
                max: self.max_length,
            });
        }

        match candidate
            .chars()
            .enumerate()
            .find(|&(_, ch)| !self.allow_list.contains(ch))
        {
            Some((index, ch)) => Err(Rejection::Disallowed { index, ch }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allow_list::CodepointRange;

    fn kana_validator(max: usize) -> NameValidator {
        NameValidator::new(
            AllowList::from_ranges(&[
                CodepointRange::new('\u{3041}', '\u{308D}'),
                CodepointRange::single('★'),
            ]),
            max,
        )
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(kana_validator(10).validate(""));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let v = kana_validator(3);
        // 9 bytes, 3 chars
        assert!(v.validate("あいう"));
        assert_eq!(
            v.check("あいうえ"),
            Err(Rejection::TooLong { len: 4, max: 3 })
        );
    }

    #[test]
    fn test_length_checked_before_content() {
        let v = kana_validator(2);
        assert_eq!(v.check("abc"), Err(Rejection::TooLong { len: 3, max: 2 }));
    }

    #[test]
    fn test_reports_first_disallowed_char() {
        let v = kana_validator(10);
        assert_eq!(
            v.check("あ★xy"),
            Err(Rejection::Disallowed { index: 2, ch: 'x' })
        );
    }

    #[test]
    fn test_rejection_display() {
        let msg = Rejection::Disallowed { index: 0, ch: 'A' }.to_string();
        assert!(msg.contains("U+0041"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_rejection_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Rejection::TooLong { len: 11, max: 10 });
        assert_eq!(err.to_string(), "name has 11 characters, at most 10 allowed");
        assert!(err.source().is_none());

        let wide = Rejection::Disallowed { index: 3, ch: '\u{30FD}' }.to_string();
        assert_eq!(wide, "character '\u{30fd}' (U+30FD) at position 3 is not allowed");
    }
}
