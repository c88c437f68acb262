//! # guano
//!
//! Reader for GUANO metadata embedded in WAV recordings.
//!
//! GUANO (Grand Unified Acoustic Notation Ontology) stores free-text
//! `key: value` metadata in a "guan" subchunk of the RIFF container,
//! alongside the audio data. This crate walks the container's subchunks,
//! extracts that payload, and decodes it into string fields.
//!
//! Metadata is read-only; there is no write path.

pub mod chunk;
pub mod error;
pub mod reader;
pub mod text;
pub mod types;

pub use error::{GuanoError, Result};
pub use reader::{read_file, read_from};
pub use text::parse_guano_text;
pub use types::GuanoMetadata;
