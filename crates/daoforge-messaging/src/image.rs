use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Encodes a logo into the inline data-URI form the messaging backend
/// accepts. Returns an empty string when there is no image to encode.
pub fn encode_inline_image(image: Option<&[u8]>) -> String {
    match image {
        Some(bytes) if !bytes.is_empty() => {
            format!("data:{};base64,{}", detect_mime(bytes), BASE64.encode(bytes))
        }
        _ => String::new(),
    }
}

fn detect_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_image_encodes_empty() {
        assert_eq!(encode_inline_image(None), "");
        assert_eq!(encode_inline_image(Some(&[])), "");
    }

    #[test]
    fn test_png_gets_data_uri() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let encoded = encode_inline_image(Some(&png));
        assert!(encoded.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_bytes_still_encode() {
        let encoded = encode_inline_image(Some(b"not an image"));
        assert!(encoded.starts_with("data:application/octet-stream;base64,"));
    }
}
