//! Whether the host supports Finder tagging at all.

/// Capability gate consulted by every tag store operation.
///
/// Resolved once at startup and handed to the store; a disabled store reads
/// nothing and writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Enabled,
    Disabled,
}

impl Capability {
    /// Enabled on macOS, disabled everywhere else.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::detect()
    }
}
