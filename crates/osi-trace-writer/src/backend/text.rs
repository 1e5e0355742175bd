use std::fs::File;
use std::io::{BufWriter, Write as _};

use super::BackendFailure;
use crate::record::Record;
use crate::text_format::render_text;

/// `.txth`: records rendered in protobuf text format, one after another.
pub(crate) struct TextBackend {
    out: BufWriter<File>,
}

impl TextBackend {
    pub(crate) fn new(file: File) -> Self {
        TextBackend {
            out: BufWriter::new(file),
        }
    }

    pub(crate) fn write_message(&mut self, record: &Record<'_>) -> Result<(), BackendFailure> {
        let text = render_text(&record.message);
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub(crate) fn close(mut self) -> Result<(), BackendFailure> {
        self.out.flush()?;
        let file = self.out.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}
