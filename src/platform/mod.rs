//! Host platform detection and environment-derived formatting

use serde::{Deserialize, Serialize};

/// Host operating system discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    Macos,
    Linux,
}

impl Os {
    /// Detect the current host OS.
    ///
    /// Targets other than Windows and macOS map to `Linux`, the neutral
    /// row of the formatting tables.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Os::Windows,
            "macos" => Os::Macos,
            _ => Os::Linux,
        }
    }

    /// Lowercase identifier for this OS
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Macos => "macos",
            Os::Linux => "linux",
        }
    }
}

/// UI font stack for the given OS.
///
/// Linux gets the empty string: the desktop default applies as-is.
pub fn font_family(os: Os) -> &'static str {
    match os {
        Os::Windows => r#""Microsoft Yahei", "Arial", sans-serif, "Twemoji Mozilla""#,
        Os::Macos => r#""Twemoji Mozilla""#,
        Os::Linux => "",
    }
}
