//! Prompt fingerprints for tracking which prompt version produced a reply.

use sha2::{Digest, Sha256};
use std::fmt::Write;

use crate::message::Message;

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    to_hex(&Sha256::digest(prompt.as_bytes()))
}

/// Fingerprint an ordered message list (role and content of every turn).
pub fn hash_messages(messages: &[Message]) -> String {
    let mut hasher = Sha256::new();
    for msg in messages {
        hasher.update(msg.role.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(msg.content.as_bytes());
        hasher.update([0u8]);
    }
    to_hex(&hasher.finalize())
}

fn to_hex(digest: &[u8]) -> String {
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("Analise o desenho");
        let second = hash_prompt("Analise o desenho");
        let different = hash_prompt("Classifique o e-mail");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_hash_messages_depends_on_role() {
        let as_user = hash_messages(&[Message::user("hi")]);
        let as_system = hash_messages(&[Message::system("hi")]);
        assert_ne!(as_user, as_system);
    }

    #[test]
    fn test_hash_messages_turn_boundaries() {
        let split = hash_messages(&[Message::user("ab"), Message::user("c")]);
        let joined = hash_messages(&[Message::user("a"), Message::user("bc")]);
        assert_ne!(split, joined);
    }
}
