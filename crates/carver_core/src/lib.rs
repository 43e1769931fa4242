//! The carving engine: signature detection, format-specific extent
//! determination, and the coordinator loop that drives a scan from a
//! `RandomReader` to a `Sink`, subject to a `Filter`.
//!
//! Everything outside this crate (file-system access, CLI, progress UI,
//! logging setup) lives in `carver_io` and `carver_app`; this crate only
//! defines the ports (`RandomReader`, `Filter`, `Sink`, `ProgressObserver`)
//! those adapters implement.

pub mod catalogue;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod naming;
pub mod progress;
pub mod reader;
pub mod scanner;
pub mod sink;
pub mod types;
pub mod window;

pub use catalogue::SignatureCatalogue;
pub use config::CarveConfig;
pub use coordinator::{CarveCoordinator, RunOutcome, SessionStats};
pub use error::{CoreError, Result};
pub use filter::{AcceptAll, Filter, StandardFilter};
pub use naming::{Clock, SystemClock};
pub use progress::{NoopProgress, ProgressObserver};
pub use reader::RandomReader;
pub use sink::{CollectingSink, Sink};
pub use types::{ByteRange, CarvedItem, FormatTag, Signature};
