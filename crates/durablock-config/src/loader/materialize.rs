//! Copy bundled default files into the data directory.

use crate::ConfigError;
use durablock_protocol::ResourceProvider;
use log::{debug, error, warn};
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Chunk size used when streaming a resource to disk.
const COPY_BUFFER_SIZE: usize = 1024;

/// What happened when a default file was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Materialized {
    /// The resource was copied; carries the number of bytes written.
    Created(u64),
    /// The resource is not bundled; no file was created.
    MissingResource,
}

/// Create `target` from the bundled resource `name`.
///
/// On a copy failure the partial file is removed so the next load tries
/// again from scratch. Both handles are dropped on every path; a failed
/// final flush is reported only when the copy itself succeeded.
pub(crate) fn materialize(
    target: &Path,
    name: &str,
    resources: &dyn ResourceProvider,
) -> Result<Materialized, ConfigError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let Some(mut reader) = resources.open(name) else {
        error!("missing resource file (resource={name})");
        return Ok(Materialized::MissingResource);
    };

    let mut file = File::create(target).map_err(|source| ConfigError::WriteFailed {
        path: target.to_path_buf(),
        source,
    })?;

    let copied = copy_chunked(&mut reader, &mut file, target).and_then(|bytes| {
        file.flush().map_err(|source| ConfigError::WriteFailed {
            path: target.to_path_buf(),
            source,
        })?;
        Ok(bytes)
    });
    drop(file);

    match copied {
        Ok(bytes) => {
            debug!(
                "materialized resource (resource={name}, path={}, bytes={bytes})",
                target.display()
            );
            Ok(Materialized::Created(bytes))
        }
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(target) {
                warn!(
                    "failed to remove partial file (path={}): {remove_err}",
                    target.display()
                );
            }
            Err(err)
        }
    }
}

fn copy_chunked(
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    target: &Path,
) -> Result<u64, ConfigError> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => return Ok(total),
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(ConfigError::ReadFailed(err)),
        };
        writer
            .write_all(&buffer[..read])
            .map_err(|source| ConfigError::WriteFailed {
                path: target.to_path_buf(),
                source,
            })?;
        total += read as u64;
    }
}
