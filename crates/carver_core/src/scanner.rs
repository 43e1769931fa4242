//! `StreamScanner`: slides a bounded window over a `RandomReader` and
//! yields ascending-offset signature candidates.

use crate::catalogue::SignatureCatalogue;
use crate::error::{CoreError, Result};
use crate::reader::RandomReader;
use crate::types::Signature;
use crate::window::ScanWindow;

/// Default chunk size used when refilling the window: 64 MiB, per §4.2.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Outcome of one `next_match` call.
pub enum NextMatch {
    /// A candidate hit, already adjusted for `magic_offset_in_file`.
    Found(u64, Signature),
    /// The source is exhausted; no more candidates will ever be produced.
    Eof,
    /// Cooperative cancellation was observed before a match could be found.
    Cancelled,
}

pub struct StreamScanner {
    window: ScanWindow,
    chunk_size: usize,
    /// Bytes retained across a refill: `max_signature_length - 1`.
    tail_len: usize,
    /// The longest lookahead any catalogue entry might need.
    max_signature_length: usize,
    /// Next absolute offset to read from the reader.
    read_cursor: u64,
    /// Next absolute offset to resume scanning from.
    scan_pos: u64,
    eof_reached: bool,
}

impl StreamScanner {
    #[must_use]
    pub fn new(catalogue: &SignatureCatalogue) -> Self {
        Self::with_chunk_size(catalogue, DEFAULT_CHUNK_SIZE)
    }

    #[must_use]
    pub fn with_chunk_size(catalogue: &SignatureCatalogue, chunk_size: usize) -> Self {
        let max_signature_length = catalogue.max_signature_length().max(1);
        Self {
            window: ScanWindow::new(),
            chunk_size: chunk_size.max(1),
            tail_len: max_signature_length.saturating_sub(1),
            max_signature_length,
            read_cursor: 0,
            scan_pos: 0,
            eof_reached: false,
        }
    }

    /// Bumps the scan resume point forward. Mirrors `step_past` in the
    /// component design: the coordinator calls this after every decision
    /// (skip a false positive by one byte, or skip past a carved range).
    /// Never moves backward.
    pub fn step_past(&mut self, offset: u64) {
        self.scan_pos = self.scan_pos.max(offset);
    }

    /// Scans forward from the internal `scan_pos`, refilling the window
    /// from `reader` as needed, until a signature is found, the source is
    /// exhausted, or `is_cancelled` reports true.
    pub fn next_match(
        &mut self,
        reader: &mut dyn RandomReader,
        catalogue: &SignatureCatalogue,
        is_cancelled: &dyn Fn() -> bool,
    ) -> Result<NextMatch> {
        loop {
            if is_cancelled() {
                return Ok(NextMatch::Cancelled);
            }

            if self.window.index_of(self.scan_pos).is_none() {
                self.seek_and_fill(reader, self.scan_pos)?;
            }

            let start_idx = match self.window.index_of(self.scan_pos) {
                Some(idx) => idx,
                None => {
                    // scan_pos is beyond everything the reader has (EOF).
                    debug_assert!(self.eof_reached);
                    return Ok(NextMatch::Eof);
                }
            };

            let mut idx = start_idx;
            while idx < self.window.len() {
                let remaining = self.window.len() - idx;
                if remaining < self.max_signature_length && !self.eof_reached {
                    break;
                }
                if let Some((sig, absolute_hit_offset)) = catalogue.lookup_at(self.window.data(), idx)
                {
                    self.scan_pos = self.window.base() + idx as u64;
                    return Ok(NextMatch::Found(absolute_hit_offset, sig.clone()));
                }
                idx += 1;
            }

            self.scan_pos = self.window.base() + idx as u64;

            if idx == self.window.len() && self.eof_reached {
                return Ok(NextMatch::Eof);
            }

            self.refill(reader)?;
        }
    }

    fn seek_and_fill(&mut self, reader: &mut dyn RandomReader, cursor: u64) -> Result<()> {
        self.window = ScanWindow::new();
        // ScanWindow::new() starts with base 0; align it to `cursor` once
        // the first chunk lands, via refill()'s new_base computation below.
        self.read_cursor = cursor;
        self.eof_reached = cursor >= reader.size();
        self.refill_from(reader, cursor)
    }

    fn refill(&mut self, reader: &mut dyn RandomReader) -> Result<()> {
        let new_base = self.window.base() + self.window.len() as u64;
        self.refill_from(reader, new_base)
    }

    fn refill_from(&mut self, reader: &mut dyn RandomReader, base_hint: u64) -> Result<()> {
        if self.eof_reached {
            return Ok(());
        }
        let fresh = reader
            .read_at(self.read_cursor, self.chunk_size)
            .map_err(|e| CoreError::TransientRead {
                offset: self.read_cursor,
                source: e,
            })?;

        if fresh.is_empty() {
            self.eof_reached = true;
            if self.window.is_empty() {
                // Establish the (empty) window at the requested base so
                // `index_of` resolves for callers probing exactly at EOF.
                self.window.refill(base_hint, 0, &[]);
            }
            return Ok(());
        }

        let tail_len = self.tail_len.min(self.window.len());
        let new_base = if self.window.is_empty() {
            base_hint
        } else {
            self.window.base() + self.window.len() as u64 - tail_len as u64
        };

        self.read_cursor += fresh.len() as u64;
        self.window.refill(new_base, tail_len, &fresh);
        Ok(())
    }
}
