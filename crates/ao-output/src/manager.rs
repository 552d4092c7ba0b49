//! `WriterManager` — opens every planned output and closes it exactly once.

use std::path::Path;

use ao_core::OutputKey;
use ao_plan::{FilePlan, FileTarget};
use tracing::{debug, warn};

use crate::OutputResult;
use crate::sink::{Encoding, WriterHandle};

/// Owns one [`WriterHandle`] per planned output.
///
/// Absent outputs never get a handle.  Handles are reachable only through
/// [`writer`](Self::writer), which returns `None` for absent outputs, so
/// there is no way to write to an output that is not open.
///
/// [`close_all`](Self::close_all) should be called at the end of a run to
/// observe close errors; if the manager is dropped first (early return,
/// panic unwinding) every remaining handle is still closed and errors are
/// logged.
pub struct WriterManager {
    plan:    FilePlan,
    handles: [Option<WriterHandle>; OutputKey::COUNT],
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

impl WriterManager {
    /// Open a writer for every `Stdout` or `Path` entry of `plan`.
    ///
    /// `eigen` is always a gzip byte stream; other paths are gzip iff their
    /// final extension is `gz`.
    pub fn open(plan: FilePlan) -> OutputResult<Self> {
        let mut handles: [Option<WriterHandle>; OutputKey::COUNT] = Default::default();

        for (key, target) in plan.iter() {
            let handle = match target {
                FileTarget::Absent => continue,
                FileTarget::Stdout => WriterHandle::stdout(key),
                FileTarget::Path(path) if key == OutputKey::Eigen => {
                    WriterHandle::create(key, path, Encoding::Binary, true)?
                }
                FileTarget::Path(path) => {
                    WriterHandle::create(key, path, Encoding::Text, is_gzip_path(path))?
                }
            };
            debug!(
                %key,
                ?target,
                compressed = handle.is_compressed(),
                encoding = ?handle.encoding(),
                "opened writer"
            );
            handles[key.index()] = Some(handle);
        }

        Ok(Self { plan, handles })
    }

    pub fn plan(&self) -> &FilePlan {
        &self.plan
    }

    /// `true` if `key` has an open writer.
    pub fn is_open(&self, key: OutputKey) -> bool {
        self.handles[key.index()].is_some()
    }

    /// The open writer for `key`, if any.
    pub fn writer(&mut self, key: OutputKey) -> Option<&mut WriterHandle> {
        self.handles[key.index()].as_mut()
    }

    /// Close every open writer.  Idempotent.
    ///
    /// All handles are closed even if one fails; the first error is
    /// returned.
    pub fn close_all(&mut self) -> OutputResult<()> {
        let mut first_err = None;
        for slot in &mut self.handles {
            let Some(handle) = slot.take() else {
                continue;
            };
            let key = handle.key();
            match handle.close() {
                Ok(()) => debug!(%key, "closed writer"),
                Err(e) => {
                    // Keep only the first error.
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
            }
        }
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl Drop for WriterManager {
    fn drop(&mut self) {
        if let Err(e) = self.close_all() {
            warn!(error = %e, "failed to close writer during drop");
        }
    }
}
