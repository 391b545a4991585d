//! Configuration for reading plot3d files

use crate::parse::{Format, FormatSelection};

use std::path::Path;

/// Whether the bytes of a file need to be decompressed before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// gzip if the file name ends in `.gz`, plain text otherwise
    #[default]
    Auto,
    Plain,
    Gzip,
}

impl Compression {
    /// resolve `Auto` against a file path
    pub(crate) fn for_path(self, path: &Path) -> Compression {
        match self {
            Compression::Auto => {
                if path.as_os_str().as_encoded_bytes().ends_with(b".gz") {
                    Compression::Gzip
                } else {
                    Compression::Plain
                }
            }
            other => other,
        }
    }
}

/// Options controlling how a file is read.
///
/// ```
/// use plot3d::{Format, ReadOptions};
///
/// let options = ReadOptions::default().with_format(Format::single_block_2d(10, 20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// how the layout of the file is determined. Default: sniffed from the header
    pub format: FormatSelection,
    /// decompression of the raw bytes. Only used when reading from a path
    pub compression: Compression,
    /// Logger for this read only. When `None`, events go to whatever
    /// subscriber is current for the calling thread.
    pub dispatch: Option<tracing::Dispatch>,
}

impl ReadOptions {
    /// skip format sniffing and read the file with a known layout
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = FormatSelection::Explicit(format);
        self
    }

    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// route the log events of reads made with these options to `dispatch`
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: tracing::Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// run `f` with this read's logger installed, if there is one
    pub(crate) fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}
