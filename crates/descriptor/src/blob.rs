//! Binary blob format for grammar descriptors.
//!
//! Layout: 8 magic bytes, the descriptor version as a little-endian `u32`,
//! then the postcard-encoded [`GrammarDescriptor`]. The header is readable on
//! its own so a consumer can reject an unknown version before attempting to
//! decode a payload whose layout it does not know.

use std::mem::size_of;

use thiserror::Error;

use crate::descriptor::GrammarDescriptor;

/// Magic bytes identifying a grammar descriptor blob.
pub const MAGIC: &[u8; 8] = b"GRAMDESC";

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = MAGIC.len() + size_of::<u32>();

/// Errors produced while reading or writing a blob.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	#[error("blob is empty")]
	Empty,

	#[error("blob does not start with the descriptor magic")]
	BadMagic,

	#[error("blob is truncated ({0} bytes)")]
	Truncated(usize),

	#[error("payload version {payload} does not match header version {header}")]
	VersionMismatch { header: u32, payload: u32 },

	#[error("{0} unexpected bytes after the payload")]
	TrailingBytes(usize),

	#[error("invalid descriptor payload: {0}")]
	Payload(String),
}

impl From<postcard::Error> for DecodeError {
	fn from(err: postcard::Error) -> Self {
		Self::Payload(err.to_string())
	}
}

/// Serializes a descriptor with its header.
pub fn encode(descriptor: &GrammarDescriptor) -> Result<Vec<u8>, DecodeError> {
	let payload = postcard::to_stdvec(descriptor)?;
	let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
	out.extend_from_slice(MAGIC);
	out.extend_from_slice(&descriptor.version.to_le_bytes());
	out.extend_from_slice(&payload);
	Ok(out)
}

/// Validates the header and returns the version tag and the payload slice.
pub fn split_header(data: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
	if data.is_empty() {
		return Err(DecodeError::Empty);
	}
	if data.len() < HEADER_SIZE {
		return Err(DecodeError::Truncated(data.len()));
	}
	if &data[..MAGIC.len()] != MAGIC {
		return Err(DecodeError::BadMagic);
	}
	let mut version = [0u8; 4];
	version.copy_from_slice(&data[MAGIC.len()..HEADER_SIZE]);
	Ok((u32::from_le_bytes(version), &data[HEADER_SIZE..]))
}

/// Decodes a payload previously split off by [`split_header`].
pub fn decode_payload(version: u32, payload: &[u8]) -> Result<GrammarDescriptor, DecodeError> {
	let (descriptor, rest): (GrammarDescriptor, _) = postcard::take_from_bytes(payload)?;
	if !rest.is_empty() {
		return Err(DecodeError::TrailingBytes(rest.len()));
	}
	if descriptor.version != version {
		return Err(DecodeError::VersionMismatch {
			header: version,
			payload: descriptor.version,
		});
	}
	Ok(descriptor)
}

/// Convenience for [`split_header`] followed by [`decode_payload`].
pub fn decode(data: &[u8]) -> Result<GrammarDescriptor, DecodeError> {
	let (version, payload) = split_header(data)?;
	decode_payload(version, payload)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::descriptor::{LexState, Symbol, Transition};
	use crate::ids::StateId;

	fn sample(version: u32) -> GrammarDescriptor {
		let mut b = GrammarDescriptor::builder("sample", version);
		b.symbol(Symbol::end());
		let plus = b.symbol(Symbol::literal("+"));
		b.state(LexState::new(vec![Transition::single('+', StateId(1))]));
		b.state(LexState::accepting(plus, Vec::new()));
		b.build()
	}

	#[test]
	fn test_header_layout() {
		let bytes = encode(&sample(3)).unwrap();
		assert_eq!(&bytes[..8], MAGIC);
		assert_eq!(&bytes[8..12], &3u32.to_le_bytes());
		let (version, payload) = split_header(&bytes).unwrap();
		assert_eq!(version, 3);
		assert_eq!(payload.len(), bytes.len() - HEADER_SIZE);
	}

	#[test]
	fn test_decode_restores_tables() {
		let desc = sample(1);
		let bytes = encode(&desc).unwrap();
		assert_eq!(decode(&bytes).unwrap(), desc);
	}

	#[test]
	fn test_header_errors() {
		assert_eq!(split_header(&[]), Err(DecodeError::Empty));
		assert_eq!(split_header(b"GRAM"), Err(DecodeError::Truncated(4)));
		assert_eq!(split_header(b"NOTAGRAMMAR!"), Err(DecodeError::BadMagic));
	}

	#[test]
	fn test_header_payload_version_mismatch() {
		let mut bytes = encode(&sample(1)).unwrap();
		bytes[8..12].copy_from_slice(&2u32.to_le_bytes());
		assert_eq!(
			decode(&bytes),
			Err(DecodeError::VersionMismatch {
				header: 2,
				payload: 1
			})
		);
	}

	#[test]
	fn test_trailing_junk_is_rejected() {
		let mut bytes = encode(&sample(1)).unwrap();
		bytes.extend_from_slice(b"JUNKJUNKJUNK");
		assert_eq!(decode(&bytes), Err(DecodeError::TrailingBytes(12)));
	}

	#[test]
	fn test_garbage_payload() {
		let mut bytes = MAGIC.to_vec();
		bytes.extend_from_slice(&1u32.to_le_bytes());
		bytes.extend_from_slice(&[0xff, 0xff, 0xff]);
		assert!(matches!(decode(&bytes), Err(DecodeError::Payload(_))));
	}
}
