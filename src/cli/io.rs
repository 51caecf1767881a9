//! Output helpers for the CLI; stdout carries results only

use std::io::{self, Write};

use crate::event::EventDescriptor;

/// Write one encoded event as a JSON line
pub fn write_event<W: Write>(out: &mut W, descriptor: &EventDescriptor) -> io::Result<()> {
    out.write_all(&descriptor.event)?;
    out.write_all(b"\n")
}

/// Write a rendered document to stdout
pub fn write_output(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
