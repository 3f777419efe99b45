//! Family invite codes.
//!
//! An invite code is a 6-character token drawn from `[A-Z0-9]`, handed to a
//! prospective member out of band.  This layer generates and validates the
//! format only; uniqueness across families is the backend's concern.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{INVITE_ALPHABET, INVITE_CODE_LEN};

/// A family join token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct InviteCode(String);

impl InviteCode {
    /// Generate a fresh random code.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code: String = (0..INVITE_CODE_LEN)
            .map(|_| INVITE_ALPHABET[rng.gen_range(0..INVITE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Validate user input as an invite code.  Lowercase letters are
    /// accepted and uppercased; anything else malformed is rejected.
    pub fn parse(input: &str) -> Result<Self, InviteError> {
        let code = input.trim().to_ascii_uppercase();

        if code.len() != INVITE_CODE_LEN {
            return Err(InviteError::WrongLength(code.len()));
        }

        if let Some(bad) = code
            .chars()
            .find(|c| !c.is_ascii_uppercase() && !c.is_ascii_digit())
        {
            return Err(InviteError::InvalidCharacter(bad));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InviteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    #[error("Invite code must be {INVITE_CODE_LEN} characters, got {0}")]
    WrongLength(usize),

    #[error("Invite code contains invalid character '{0}'")]
    InvalidCharacter(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_have_the_right_shape() {
        for _ in 0..100 {
            let code = InviteCode::generate();
            assert_eq!(code.as_str().len(), 6);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn parse_uppercases_and_trims() {
        let code = InviteCode::parse("  ab12cd ").unwrap();
        assert_eq!(code.as_str(), "AB12CD");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            InviteCode::parse("ABC"),
            Err(InviteError::WrongLength(3))
        ));
    }

    #[test]
    fn parse_rejects_punctuation() {
        assert!(matches!(
            InviteCode::parse("AB-12C"),
            Err(InviteError::InvalidCharacter('-'))
        ));
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let code = InviteCode::parse("AB12CD").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AB12CD\"");
    }
}
