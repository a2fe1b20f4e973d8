use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use toolbox_core::HashAlgorithm;

/// Returns the lowercase hex digest of the UTF-8 bytes of `text`.
pub fn hash_text(algorithm: HashAlgorithm, text: &str) -> String {
    let bytes = text.as_bytes();
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", Md5::digest(bytes)),
        HashAlgorithm::Sha1 => format!("{:x}", Sha1::digest(bytes)),
        HashAlgorithm::Sha256 => format!("{:x}", Sha256::digest(bytes)),
        HashAlgorithm::Sha512 => format!("{:x}", Sha512::digest(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests_of_hello() {
        assert_eq!(
            hash_text(HashAlgorithm::Md5, "hello"),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert_eq!(
            hash_text(HashAlgorithm::Sha1, "hello"),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
        assert_eq!(
            hash_text(HashAlgorithm::Sha256, "hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(
            hash_text(HashAlgorithm::Sha512, "hello"),
            "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca7\
             2323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043"
        );
    }

    #[test]
    fn test_digest_lengths() {
        for (algo, hex_len) in [
            (HashAlgorithm::Md5, 32),
            (HashAlgorithm::Sha1, 40),
            (HashAlgorithm::Sha256, 64),
            (HashAlgorithm::Sha512, 128),
        ] {
            let digest = hash_text(algo, "");
            assert_eq!(digest.len(), hex_len, "{algo}");
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_hash_uses_utf8_bytes() {
        assert_eq!(
            hash_text(HashAlgorithm::Sha256, "é"),
            format!("{:x}", Sha256::digest([0xc3u8, 0xa9]))
        );
    }
}
