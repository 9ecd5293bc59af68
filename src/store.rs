//! Loading interview events from a JSON file.
//!
//! The event source supplies one finite, already-loaded collection; this
//! module does no fetching or pagination.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::CalendarEvent;

/// Load a JSON array of events from `path`.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    debug!(file = %path.display(), "loading events");

    let file = File::open(path).map_err(|source| Error::EventFile {
        path: path.to_path_buf(),
        source,
    })?;

    let events: Vec<CalendarEvent> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::EventParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = events.len(), "loaded events");
    Ok(events)
}
