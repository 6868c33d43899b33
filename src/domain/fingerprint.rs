use sha2::{Digest, Sha256};

/// Number of leading prompt characters that participate in the duplicate
/// test. Two prompts with an identical prefix of this length are considered
/// the same template.
pub const FINGERPRINT_PREFIX_CHARS: usize = 100;

/// Content fingerprint of a prompt, used to detect duplicates.
///
/// Built as the SHA-256 digest of the first [`FINGERPRINT_PREFIX_CHARS`]
/// characters, so fingerprint equality matches prefix equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptFingerprint([u8; 32]);

impl PromptFingerprint {
    pub fn of(prompt: &str) -> Self {
        let prefix: String = prompt.chars().take(FINGERPRINT_PREFIX_CHARS).collect();
        let digest = Sha256::digest(prefix.as_bytes());
        Self(digest.into())
    }
}
