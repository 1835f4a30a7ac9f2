//! ZIP container writing shared by both strategies.

use crate::ProgressCallback;
use crate::Result;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes entries into a ZIP container.
///
/// Entries carry the default (1980-01-01) timestamp, so identical inputs
/// produce identical archives.
pub struct ZipSink<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    buffer: Vec<u8>,
}

impl ZipSink<File> {
    /// Creates the archive file at `destination`.
    ///
    /// # Errors
    ///
    /// Fails with an `AlreadyExists` I/O error if `destination` exists; the
    /// archive is never written over an existing file.
    pub fn create(destination: &Path, compression_level: u8) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)?;
        Ok(Self::new(file, compression_level))
    }
}

impl<W: Write + Seek> ZipSink<W> {
    /// Wraps `writer` with DEFLATE at the given level.
    pub fn new(writer: W, compression_level: u8) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(compression_level)));

        Self {
            zip: ZipWriter::new(writer),
            options,
            buffer: vec![0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Copies `source` into a new entry called `name`.
    ///
    /// Returns the number of bytes read from `source`.
    pub fn add_file(
        &mut self,
        source: &Path,
        name: &str,
        progress: &mut dyn ProgressCallback,
    ) -> Result<u64> {
        let mut file = File::open(source)?;
        let metadata = file.metadata()?;

        // Entries of 4 GiB or more need Zip64 headers
        let options = self
            .options
            .large_file(metadata.len() >= u64::from(u32::MAX));

        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            options.unix_permissions(metadata.permissions().mode())
        };

        self.zip.start_file(name, options)?;

        let mut bytes_read = 0u64;
        loop {
            let read = file.read(&mut self.buffer)?;
            if read == 0 {
                break;
            }
            self.zip.write_all(&self.buffer[..read])?;
            bytes_read += read as u64;
            progress.on_bytes_read(read as u64);
        }

        Ok(bytes_read)
    }

    /// Adds an explicit directory entry. A trailing `/` is appended.
    pub fn add_directory(&mut self, name: &str) -> Result<()> {
        self.zip.add_directory(format!("{name}/"), self.options)?;
        Ok(())
    }

    /// Writes the central directory and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}
