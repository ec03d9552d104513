//! Background file writer.

use crate::error::Result;
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// Opens `path` in append mode and starts a thread that writes every record
/// sent on the returned channel. The thread exits once all senders are gone.
pub(crate) fn spawn_file_writer(path: &Path) -> Result<Sender<LogRecord>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (sender, receiver) = channel();
    thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || drain(BufWriter::new(file), receiver))?;
    Ok(sender)
}

fn drain(mut out: BufWriter<File>, receiver: Receiver<LogRecord>) {
    for record in receiver {
        // Flush per record so the file is readable while the app runs.
        let written = writeln!(out, "{}", record.line()).and_then(|_| out.flush());
        if let Err(e) = written {
            eprintln!("log writer: {}", e);
        }
    }
}
