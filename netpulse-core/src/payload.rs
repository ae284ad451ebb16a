//! Random payload generation for upload attempts.
//!
//! Upload bodies are random so intermediaries cannot compress or dedupe
//! them into a flattering throughput number.

use bytes::Bytes;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;

/// Largest slice handed to a [`RandomFill`] source in one call
pub const MAX_FILL_CHUNK: usize = 65_536;

/// Source of random bytes for upload payloads.
///
/// Implementations advertise the largest buffer they fill in a single
/// call; [`random_payload`] never passes a slice longer than
/// `max_chunk()`, capped at [`MAX_FILL_CHUNK`].
pub trait RandomFill: Send + Sync + fmt::Debug {
    /// Largest buffer this source fills in one call
    fn max_chunk(&self) -> usize;

    /// Fill `buf` with random bytes
    fn fill(&self, buf: &mut [u8]);
}

/// Random bytes from the operating system's entropy source
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomFill;

impl RandomFill for OsRandomFill {
    fn max_chunk(&self) -> usize {
        MAX_FILL_CHUNK
    }

    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Build a random payload of `len` bytes, filling in bounded chunks
pub fn random_payload(filler: &dyn RandomFill, len: usize) -> Bytes {
    let mut buf = vec![0u8; len];
    let chunk = filler.max_chunk().min(MAX_FILL_CHUNK).max(1);
    for slice in buf.chunks_mut(chunk) {
        filler.fill(slice);
    }
    Bytes::from(buf)
}
