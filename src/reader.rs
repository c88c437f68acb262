//! Walks the subchunks of a WAV file to locate and decode GUANO metadata.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, trace};

use crate::chunk::{self, ChunkHeader, CHUNK_HEADER_LEN, FMT_TAG, GUANO_TAG};
use crate::error::{GuanoError, Result};
use crate::text::parse_guano_text;
use crate::types::GuanoMetadata;

/// Read the named WAV file and parse its GUANO metadata.
pub fn read_file(path: impl AsRef<Path>) -> Result<GuanoMetadata> {
    let path = path.as_ref();
    debug!("reading GUANO metadata from {}", path.display());
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Parse GUANO metadata from an already-open byte stream.
///
/// The stream must start at the RIFF container header. Every subchunk is
/// scanned to the end of the stream; if the "guan" tag appears more than
/// once, the last occurrence wins.
///
/// Payloads are consumed exactly as declared, with no word-alignment pad
/// byte after odd-sized chunks. Files from writers that pad odd payloads
/// to an even boundary will not parse.
pub fn read_from<R: Read>(mut reader: R) -> Result<GuanoMetadata> {
    let riff = chunk::read_riff_header(&mut reader)?;
    trace!("RIFF container, declared size {}", riff.header.size);

    // The format chunk is mandatory and always first; its payload is not
    // interpreted here.
    let fmt = require_chunk_header(&mut reader)?;
    if fmt.tag != FMT_TAG {
        return Err(GuanoError::BadFormatChunk {
            found: fmt.tag_string(),
        });
    }
    skip_payload(&mut reader, &fmt)?;

    let mut guano_payload: Option<Vec<u8>> = None;
    while let Some(header) = chunk::read_chunk_header(&mut reader)? {
        trace!("chunk {:?}, {} payload bytes", header.tag_string(), header.size);
        if header.tag == GUANO_TAG {
            // Last occurrence wins.
            guano_payload = Some(read_payload(&mut reader, &header)?);
        } else {
            skip_payload(&mut reader, &header)?;
        }
    }

    let payload = guano_payload.ok_or(GuanoError::MissingMetadataChunk)?;
    let text = std::str::from_utf8(&payload)?;
    parse_guano_text(text)
}

/// Read a chunk header that must be present. End of stream here is a
/// truncation, not a clean termination.
fn require_chunk_header<R: Read>(reader: &mut R) -> Result<ChunkHeader> {
    chunk::read_chunk_header(reader)?.ok_or(GuanoError::TruncatedHeader {
        context: "chunk",
        expected: CHUNK_HEADER_LEN,
        read: 0,
    })
}

/// Read exactly the declared payload of `header` into memory.
fn read_payload<R: Read>(reader: &mut R, header: &ChunkHeader) -> Result<Vec<u8>> {
    let declared = u64::from(header.size);
    let mut data = Vec::new();
    let got = reader.by_ref().take(declared).read_to_end(&mut data)?;
    if (got as u64) < declared {
        return Err(GuanoError::TruncatedChunk {
            tag: header.tag_string(),
            declared: header.size,
            available: got as u64,
        });
    }
    Ok(data)
}

/// Consume and discard exactly the declared payload of `header`.
fn skip_payload<R: Read>(reader: &mut R, header: &ChunkHeader) -> Result<()> {
    let declared = u64::from(header.size);
    let got = io::copy(&mut reader.by_ref().take(declared), &mut io::sink())?;
    if got < declared {
        return Err(GuanoError::TruncatedChunk {
            tag: header.tag_string(),
            declared: header.size,
            available: got,
        });
    }
    Ok(())
}
