//! Line harvester: reads `\n`-terminated lines from a file, starting at
//! a resume offset, and turns each into an [`EventDescriptor`].

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::errors::{HarvestError, HarvestResult};
use super::status::{StreamState, StreamStatus};
use crate::event::{Event, EventDescriptor, Stream};
use crate::observability::{Logger, ObservationScope};

/// A file used as an event stream; its identity is the path as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStream {
    path: PathBuf,
    identity: String,
}

impl FileStream {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let identity = path.display().to_string();
        Self { path, identity }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Stream for FileStream {
    fn identity(&self) -> &str {
        &self.identity
    }
}

/// Reads one file stream line by line
#[derive(Debug)]
pub struct Harvester {
    stream: Arc<FileStream>,
    reader: BufReader<File>,
    /// Offset of the first byte not yet turned into an event
    offset: u64,
    status: StreamStatus,
    buffer: Vec<u8>,
}

impl Harvester {
    /// Open `path` and position it at `resume_offset`
    pub fn open(path: impl AsRef<Path>, resume_offset: u64) -> HarvestResult<Self> {
        let stream = Arc::new(FileStream::new(path));
        let identity = stream.identity().to_string();

        let mut file = File::open(stream.path()).map_err(|e| HarvestError::io(&identity, e))?;
        let len = file
            .metadata()
            .map_err(|e| HarvestError::io(&identity, e))?
            .len();
        if resume_offset > len {
            return Err(HarvestError::OffsetBeyondEnd {
                path: identity,
                offset: resume_offset,
                len,
            });
        }
        file.seek(SeekFrom::Start(resume_offset))
            .map_err(|e| HarvestError::io(&identity, e))?;

        let status = StreamStatus::new(identity, resume_offset);
        status.set_state(StreamState::Reading);

        Ok(Self {
            stream,
            reader: BufReader::new(file),
            offset: resume_offset,
            status,
            buffer: Vec::new(),
        })
    }

    /// The stream this harvester reads
    pub fn stream(&self) -> Arc<dyn Stream> {
        self.stream.clone()
    }

    /// Current resume offset
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Live progress handle for the status tree
    pub fn status(&self) -> StreamStatus {
        self.status.clone()
    }

    /// Next complete line as a descriptor, `None` when none is available
    ///
    /// A trailing line without its newline is left unread so the resume
    /// offset never points into the middle of a line. Lines that are not
    /// UTF-8 are skipped with a warning.
    pub fn next_descriptor(&mut self) -> HarvestResult<Option<EventDescriptor>> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buffer)
                .map_err(|e| HarvestError::io(self.stream.identity(), e))?;

            if read == 0 {
                self.status.set_state(StreamState::Idle);
                return Ok(None);
            }

            if self.buffer.last() != Some(&b'\n') {
                self.reader
                    .seek(SeekFrom::Start(self.offset))
                    .map_err(|e| HarvestError::io(self.stream.identity(), e))?;
                self.status.set_state(StreamState::Idle);
                return Ok(None);
            }

            let start = self.offset;
            self.offset += read as u64;

            let mut line = &self.buffer[..read - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }

            let Ok(line) = std::str::from_utf8(line) else {
                let at = start.to_string();
                Logger::warn(
                    "HARVEST_SKIPPED_LINE",
                    &[("path", self.stream.identity()), ("offset", at.as_str())],
                );
                self.status.skip_to(self.offset);
                continue;
            };

            let event = Event::from_line(line, self.stream.as_ref(), start);
            let descriptor = EventDescriptor::new(self.stream(), self.offset, &event)?;
            self.status.record_line(self.offset);
            return Ok(Some(descriptor));
        }
    }

    /// Feed every available line to `sink`; returns how many were produced
    pub fn harvest<F>(&mut self, mut sink: F) -> HarvestResult<u64>
    where
        F: FnMut(EventDescriptor) -> HarvestResult<()>,
    {
        let from = self.offset.to_string();
        let scope = ObservationScope::with_fields(
            "HARVEST",
            &[("path", self.stream.identity()), ("from", from.as_str())],
        );

        let mut produced = 0;
        loop {
            let next = match self.next_descriptor() {
                Ok(next) => next,
                Err(err) => {
                    scope.fail(&err.to_string());
                    return Err(err);
                }
            };
            let Some(descriptor) = next else { break };

            if let Err(err) = sink(descriptor) {
                scope.fail(&err.to_string());
                return Err(err);
            }
            produced += 1;
        }

        let offset = self.offset.to_string();
        let lines = produced.to_string();
        scope.complete_with_fields(&[("offset", offset.as_str()), ("lines", lines.as_str())]);
        Ok(produced)
    }
}

impl Drop for Harvester {
    fn drop(&mut self) {
        self.status.set_state(StreamState::Idle);
    }
}
