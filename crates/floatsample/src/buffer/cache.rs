//! Memoized format resolution.

use crate::format::{AudioFormat, FormatCode};

/// The last descriptor a buffer converted with, and what it resolved to.
///
/// A hit implies the descriptor already passed the buffer's sample rate and
/// channel count checks, so the owner must invalidate whenever either changes.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormatCache {
    entry: Option<(AudioFormat, FormatCode)>,
}

impl FormatCache {
    pub(crate) fn lookup(&self, format: &AudioFormat) -> Option<FormatCode> {
        match &self.entry {
            Some((cached, code)) if cached == format => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn store(&mut self, format: &AudioFormat, code: FormatCode) {
        self.entry = Some((format.clone(), code));
    }

    pub(crate) fn invalidate(&mut self) {
        self.entry = None;
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
