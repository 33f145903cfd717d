//! Text compression: UTF-8 → gzip → base64, and back.

use crate::error::CodecError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Compress `text` into a base64 string.
pub fn compress(text: &str) -> Result<String, CodecError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .map_err(CodecError::Deflate)?;
    let bytes = encoder.finish().map_err(CodecError::Deflate)?;
    Ok(STANDARD.encode(bytes))
}

/// Inverse of [`compress`]. Leading and trailing whitespace is ignored.
pub fn decompress(text: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(text.trim())?;
    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(CodecError::Inflate)?;
    Ok(String::from_utf8(inflated)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_roundtrip() {
        let long = "repeat ".repeat(500);
        let samples: [&str; 6] = [
            "",
            "a",
            "{\"$type\":\"e\"}",
            "multi\nline\r\ncommand",
            "ünïcödé ⚔ 漢字 🎲",
            long.as_str(),
        ];
        for s in samples {
            let packed = compress(s).unwrap();
            assert_eq!(decompress(&packed).unwrap(), s);
        }
    }

    #[test]
    fn test_compression_shrinks_repetitive_text() {
        let text = "/macro \"Sprint\" <me>\n".repeat(50);
        assert!(compress(&text).unwrap().len() < text.len());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let packed = compress("hello").unwrap();
        assert_eq!(decompress(&format!("  {}\r\n", packed)).unwrap(), "hello");
    }

    #[test]
    fn test_invalid_base64() {
        let err = decompress("not base64 at all!").unwrap_err();
        assert!(matches!(err, CodecError::Base64(_)));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_valid_base64_but_not_gzip() {
        let err = decompress(&STANDARD.encode(b"plain bytes")).unwrap_err();
        assert!(matches!(err, CodecError::Inflate(_)));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_truncated_stream() {
        let packed = compress(&"truncate me ".repeat(40)).unwrap();
        let bytes = STANDARD.decode(&packed).unwrap();
        let cut = STANDARD.encode(&bytes[..bytes.len() / 2]);
        let err = decompress(&cut).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
