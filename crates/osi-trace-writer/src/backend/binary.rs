use std::fs::File;
use std::io::{self, BufWriter, Write};

use super::BackendFailure;

/// Single-channel `.osi`: each record is a little-endian `u32` length
/// followed by the serialized message.
///
/// A failed write may leave part of a frame in the file, after which no
/// reader can find the next length prefix. The backend refuses all further
/// writes from then on.
pub(crate) struct BinaryBackend<W: Write> {
    out: W,
    torn: bool,
}

impl<W: Write> BinaryBackend<W> {
    pub(crate) fn new(out: W) -> Self {
        BinaryBackend { out, torn: false }
    }

    pub(crate) fn write_message(&mut self, bytes: &[u8]) -> Result<(), BackendFailure> {
        if self.torn {
            return Err("an earlier record was only partly written".into());
        }
        let frame = frame(bytes)?;
        if let Err(e) = self.out.write_all(&frame) {
            self.torn = true;
            return Err(e.into());
        }
        Ok(())
    }
}

impl BinaryBackend<BufWriter<File>> {
    pub(crate) fn close(mut self) -> Result<(), BackendFailure> {
        self.out.flush()?;
        let file = self.out.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}

fn frame(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let len = u32::try_from(bytes.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "record larger than 4 GiB"))?;
    let mut frame = Vec::with_capacity(4 + bytes.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(bytes);
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `budget` bytes, then fails every write.
    struct Budgeted {
        written: Vec<u8>,
        budget: usize,
    }

    impl Write for Budgeted {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.budget - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn frames_are_length_prefixed() {
        let mut b = BinaryBackend::new(Vec::new());
        b.write_message(&[1, 2, 3]).unwrap();
        b.write_message(&[]).unwrap();
        assert_eq!(b.out, [3, 0, 0, 0, 1, 2, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn partial_frame_blocks_later_writes() {
        let mut b = BinaryBackend::new(Budgeted {
            written: Vec::new(),
            budget: 10,
        });
        b.write_message(&[7; 4]).unwrap();
        // prefix fits, body does not
        assert!(b.write_message(&[8; 4]).is_err());
        assert_eq!(b.out.written.len(), 10);

        b.out.budget = usize::MAX;
        assert!(b.write_message(&[9; 4]).is_err());
        assert_eq!(b.out.written.len(), 10);
    }
}
