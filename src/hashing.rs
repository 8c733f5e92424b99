//! Streaming digest computation.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::algo::Algorithm;

/// Stream a reader through an incremental hasher and hex-encode the result.
///
/// `buffer_size` must be non-zero; the CLI layer enforces this.
fn hash_reader<D: Digest, R: Read>(mut reader: R, buffer_size: usize) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; buffer_size];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hash a reader's full content and return a lowercase hex string.
pub(crate) fn digest_reader<R: Read>(
    reader: R,
    algorithm: Algorithm,
    buffer_size: usize,
) -> io::Result<String> {
    match algorithm {
        Algorithm::Md5 => hash_reader::<Md5, _>(reader, buffer_size),
        Algorithm::Sha1 => hash_reader::<Sha1, _>(reader, buffer_size),
        Algorithm::Sha256 => hash_reader::<Sha256, _>(reader, buffer_size),
        Algorithm::Sha512 => hash_reader::<Sha512, _>(reader, buffer_size),
    }
}

/// Hash a file by streaming it in `buffer_size` chunks.
///
/// Any open or read failure aborts the computation; no partial digest is
/// ever returned.
pub(crate) fn digest_file(
    path: &Path,
    algorithm: Algorithm,
    buffer_size: usize,
) -> io::Result<String> {
    let file = fs::File::open(path)?;
    digest_reader(file, algorithm, buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ALGORITHMS: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    #[test]
    fn known_vectors_for_hello() {
        let cases = [
            (Algorithm::Md5, "5d41402abc4b2a76b9719d911017c592"),
            (Algorithm::Sha1, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"),
            (
                Algorithm::Sha256,
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            ),
            (
                Algorithm::Sha512,
                "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca7\
                 2323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
            ),
        ];
        for (algorithm, expected) in cases {
            let digest = digest_reader(Cursor::new(b"hello"), algorithm, 8192).expect("digest");
            assert_eq!(digest, expected, "{}", algorithm.name());
        }
    }

    #[test]
    fn known_vectors_for_empty_input() {
        let cases = [
            (Algorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e"),
            (Algorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (
                Algorithm::Sha256,
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                Algorithm::Sha512,
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                 47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
            ),
        ];
        for (algorithm, expected) in cases {
            let digest = digest_reader(Cursor::new(b""), algorithm, 8192).expect("digest");
            assert_eq!(digest, expected, "{}", algorithm.name());
        }
    }

    #[test]
    fn chunk_size_does_not_affect_digest() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for algorithm in ALGORITHMS {
            let one_byte = digest_reader(Cursor::new(data), algorithm, 1).expect("digest");
            let oversized =
                digest_reader(Cursor::new(data), algorithm, data.len() + 1).expect("digest");
            assert_eq!(one_byte, oversized, "{}", algorithm.name());
        }
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = digest_reader(Cursor::new(b"hello"), Algorithm::Sha1, 4).expect("digest");
        assert_eq!(digest.len(), 40);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn file_digest_matches_reader_digest_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("input.bin");
        std::fs::write(&path, b"hello").expect("write fixture");

        let from_reader =
            digest_reader(Cursor::new(b"hello"), Algorithm::Sha256, 3).expect("digest");
        let first = digest_file(&path, Algorithm::Sha256, 8192).expect("digest");
        let second = digest_file(&path, Algorithm::Sha256, 8192).expect("digest");
        assert_eq!(first, from_reader);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent");
        assert!(digest_file(&path, Algorithm::Md5, 8192).is_err());
    }
}
