//! RIFF chunk and container header decoding.

use std::io::Read;

use crate::error::{GuanoError, Result};

/// Tag of the top-level RIFF container.
pub const RIFF_TAG: [u8; 4] = *b"RIFF";
/// Format designator expected directly after the container tag and size.
pub const WAVE_FORMAT: [u8; 4] = *b"WAVE";
/// Tag of the mandatory format-description chunk.
pub const FMT_TAG: [u8; 4] = *b"fmt ";
/// Tag of the GUANO metadata chunk.
pub const GUANO_TAG: [u8; 4] = *b"guan";

/// Size of an encoded chunk header: 4-byte tag plus 4-byte payload length.
pub const CHUNK_HEADER_LEN: usize = 8;
/// Size of the encoded RIFF container prologue, format designator included.
pub const RIFF_HEADER_LEN: usize = 12;

/// One RIFF subchunk header: a 4-byte tag and the payload size that follows.
///
/// The size counts payload bytes only, excluding the header itself, and is
/// authoritative for how many bytes the chunk occupies regardless of how
/// many actually remain in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkHeader {
    pub tag: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// The chunk tag as a readable string. Tags are not guaranteed to be
    /// printable ASCII, so invalid bytes are replaced.
    pub fn tag_string(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

/// The 12-byte prologue of a RIFF file: tag, declared size, format.
#[derive(Clone, Copy, Debug)]
pub struct RiffHeader {
    pub header: ChunkHeader,
    pub format: [u8; 4],
}

/// Fill `buf` from the reader, stopping early at end of stream.
/// Returns the number of bytes actually read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read one chunk header from a stream positioned at a chunk boundary.
///
/// Returns `Ok(None)` when the stream is already exhausted at the boundary,
/// the normal termination condition for a chunk walk. A partial header
/// (at least one byte but fewer than eight) is a malformed stream.
pub fn read_chunk_header<R: Read>(reader: &mut R) -> Result<Option<ChunkHeader>> {
    let mut buf = [0u8; CHUNK_HEADER_LEN];
    let read = read_full(reader, &mut buf)?;
    if read == 0 {
        return Ok(None);
    }
    if read < buf.len() {
        return Err(GuanoError::TruncatedHeader {
            context: "chunk",
            expected: buf.len(),
            read,
        });
    }
    Ok(Some(ChunkHeader {
        tag: [buf[0], buf[1], buf[2], buf[3]],
        size: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
    }))
}

/// Read and validate the RIFF container header at the start of the stream.
///
/// On success the cursor sits at the first subchunk. The declared container
/// size in the returned header is informational only; the chunk walk is
/// bounded by the actual stream length, not by this value.
pub fn read_riff_header<R: Read>(reader: &mut R) -> Result<RiffHeader> {
    let mut buf = [0u8; RIFF_HEADER_LEN];
    let read = read_full(reader, &mut buf)?;
    if read < buf.len() {
        return Err(GuanoError::TruncatedHeader {
            context: "RIFF container",
            expected: buf.len(),
            read,
        });
    }
    let header = ChunkHeader {
        tag: [buf[0], buf[1], buf[2], buf[3]],
        size: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
    };
    if header.tag != RIFF_TAG {
        return Err(GuanoError::BadSignature {
            found: header.tag_string(),
        });
    }
    let format = [buf[8], buf[9], buf[10], buf[11]];
    if format != WAVE_FORMAT {
        return Err(GuanoError::BadFormat {
            found: String::from_utf8_lossy(&format).into_owned(),
        });
    }
    Ok(RiffHeader { header, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_chunk_header() {
        let mut cursor = Cursor::new(b"data\x04\x00\x00\x00rest".to_vec());
        let header = read_chunk_header(&mut cursor)
            .expect("read ok")
            .expect("header present");
        assert_eq!(header.tag, *b"data");
        assert_eq!(header.size, 4);
        assert_eq!(cursor.position(), 8, "cursor should sit at the payload");
    }

    #[test]
    fn test_clean_eof_is_not_an_error() {
        let mut cursor = Cursor::new(Vec::new());
        let header = read_chunk_header(&mut cursor).expect("read ok");
        assert!(header.is_none());
    }

    #[test]
    fn test_partial_header_is_truncated() {
        let mut cursor = Cursor::new(b"dat".to_vec());
        let err = read_chunk_header(&mut cursor).unwrap_err();
        match err {
            GuanoError::TruncatedHeader { read, expected, .. } => {
                assert_eq!(read, 3);
                assert_eq!(expected, CHUNK_HEADER_LEN);
            }
            other => panic!("expected TruncatedHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_riff_header_ok() {
        let mut cursor = Cursor::new(b"RIFF\x24\x00\x00\x00WAVE".to_vec());
        let riff = read_riff_header(&mut cursor).expect("valid header");
        assert_eq!(riff.header.tag, RIFF_TAG);
        assert_eq!(riff.header.size, 36);
        assert_eq!(riff.format, WAVE_FORMAT);
    }

    #[test]
    fn test_riff_header_rejects_bad_signature() {
        let mut cursor = Cursor::new(b"RIFX\x24\x00\x00\x00WAVE".to_vec());
        match read_riff_header(&mut cursor).unwrap_err() {
            GuanoError::BadSignature { found } => assert_eq!(found, "RIFX"),
            other => panic!("expected BadSignature, got {other:?}"),
        }
    }

    #[test]
    fn test_riff_header_rejects_bad_format() {
        let mut cursor = Cursor::new(b"RIFF\x24\x00\x00\x00AVI ".to_vec());
        match read_riff_header(&mut cursor).unwrap_err() {
            GuanoError::BadFormat { found } => assert_eq!(found, "AVI "),
            other => panic!("expected BadFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_short_riff_header_is_truncated() {
        let mut cursor = Cursor::new(b"RIFF\x24\x00".to_vec());
        match read_riff_header(&mut cursor).unwrap_err() {
            GuanoError::TruncatedHeader { read, expected, .. } => {
                assert_eq!(read, 6);
                assert_eq!(expected, RIFF_HEADER_LEN);
            }
            other => panic!("expected TruncatedHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_string_replaces_unprintable_bytes() {
        let header = ChunkHeader {
            tag: [0xFF, b'a', b'b', b'c'],
            size: 0,
        };
        assert_eq!(header.tag_string(), "\u{FFFD}abc");
    }
}
