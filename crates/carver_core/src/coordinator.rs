//! `CarveCoordinator`: drives scanner -> extractor -> filter -> sink.

use tracing::{debug, error, warn};

use crate::catalogue::SignatureCatalogue;
use crate::config::CarveConfig;
use crate::error::{CoreError, Result};
use crate::extractors::{self, ExtractResult};
use crate::filter::Filter;
use crate::naming::{synth_name, Clock};
use crate::progress::ProgressObserver;
use crate::reader::RandomReader;
use crate::scanner::{NextMatch, StreamScanner};
use crate::sink::Sink;

/// Counters accumulated over one session. Non-fatal failures are recorded
/// here rather than by returning `Err` from `run`, per §7.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionStats {
    pub recovered_count: u64,
    pub transient_read_errors: u64,
    pub malformed_containers: u64,
    pub sink_errors: u64,
    pub rejected_by_filter: u64,
}

/// Outcome of a completed (or cancelled) session.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOutcome {
    pub stats: SessionStats,
    pub cancelled: bool,
}

pub struct CarveCoordinator<'a> {
    reader: &'a mut dyn RandomReader,
    catalogue: SignatureCatalogue,
    filter: &'a dyn Filter,
    sink: &'a mut dyn Sink,
    progress: &'a mut dyn ProgressObserver,
    clock: &'a dyn Clock,
    config: CarveConfig,
}

impl<'a> CarveCoordinator<'a> {
    #[must_use]
    pub fn new(
        reader: &'a mut dyn RandomReader,
        filter: &'a dyn Filter,
        sink: &'a mut dyn Sink,
        progress: &'a mut dyn ProgressObserver,
        clock: &'a dyn Clock,
        config: CarveConfig,
    ) -> Self {
        Self {
            reader,
            catalogue: SignatureCatalogue::standard(),
            filter,
            sink,
            progress,
            clock,
            config,
        }
    }

    /// Runs the main loop to completion, or until `is_cancelled` reports
    /// true. `FatalSetupError` is the only variant this can return as
    /// `Err`; every other failure is recorded in `SessionStats` and logged.
    pub fn run(&mut self, is_cancelled: &dyn Fn() -> bool) -> Result<RunOutcome> {
        if self.reader.size() == 0 && self.config.start_offset > 0 {
            return Err(CoreError::FatalSetup(
                "start offset is past an empty source".into(),
            ));
        }

        let mut scanner = StreamScanner::with_chunk_size(&self.catalogue, self.config.chunk_size);
        scanner.step_past(self.config.start_offset);

        let mut stats = SessionStats::default();
        let mut skip_to = self.config.start_offset;
        let mut counter = 0u64;
        let source_size = self.reader.size();

        loop {
            let hit = match scanner.next_match(self.reader, &self.catalogue, is_cancelled) {
                Ok(NextMatch::Found(offset, sig)) => (offset, sig),
                Ok(NextMatch::Eof) => break,
                Ok(NextMatch::Cancelled) => {
                    return Ok(RunOutcome {
                        stats,
                        cancelled: true,
                    })
                }
                Err(CoreError::TransientRead { offset, source }) => {
                    warn!(offset, error = %source, "transient read error, skipping chunk");
                    stats.transient_read_errors += 1;
                    scanner.step_past(offset + self.config.chunk_size as u64);
                    self.progress.on_progress(offset, source_size);
                    continue;
                }
                Err(other) => return Err(other),
            };

            self.progress.on_progress(hit.0, source_size);

            let (abs_offset, signature) = hit;
            if abs_offset < skip_to {
                scanner.step_past(abs_offset + 1);
                continue;
            }

            let range = extractors::extract(
                self.reader,
                signature.format,
                abs_offset,
                signature.size_ceiling,
                &self.config.extract,
            );
            let (resolved_format, extracted): (_, ExtractResult) = range;

            let Some(byte_range) = extracted else {
                let err = CoreError::MalformedContainer {
                    offset: abs_offset,
                    reason: format!("{} signature did not validate as a container", signature.format),
                };
                debug!("{err}");
                stats.malformed_containers += 1;
                scanner.step_past(abs_offset + 1);
                continue;
            };

            let bytes = match self.reader.read_at(byte_range.start, byte_range.len() as usize) {
                Ok(b) => b,
                Err(e) => {
                    warn!(offset = byte_range.start, error = %e, "read failed before emission");
                    stats.transient_read_errors += 1;
                    scanner.step_past(byte_range.start + 1);
                    continue;
                }
            };

            let name = synth_name(self.clock, byte_range.start, resolved_format, counter);
            if self.filter.accept(&name, bytes.len() as u64) {
                match self.sink.emit(&name, &bytes) {
                    Ok(()) => {
                        counter += 1;
                        stats.recovered_count += 1;
                        self.progress.on_carved(stats.recovered_count);
                    }
                    Err(reason) => {
                        let err = CoreError::SinkEmit {
                            name: name.clone(),
                            reason,
                        };
                        error!("{err}");
                        stats.sink_errors += 1;
                    }
                }
            } else {
                stats.rejected_by_filter += 1;
            }

            skip_to = byte_range.end;
            scanner.step_past(byte_range.end);
        }

        Ok(RunOutcome {
            stats,
            cancelled: false,
        })
    }
}
