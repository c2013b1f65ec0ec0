//! Build-time platform detection
//!
//! The target platform is resolved once by `cfg` and exposed as [`PLATFORM`].
//! Building for a target outside the supported set fails at compile time.

use std::fmt;

/// Operating system family the crate was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux
    Linux,
    /// macOS
    MacOs,
    /// FreeBSD
    FreeBsd,
    /// Any other Unix
    Unix,
    /// 32-bit Windows
    Windows32,
    /// 64-bit Windows
    Windows64,
}

impl Platform {
    /// True for both Windows variants
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows32 | Self::Windows64)
    }

    /// True for macOS, which needs a forward-compatible core context
    pub const fn is_macos(self) -> bool {
        matches!(self, Self::MacOs)
    }

    /// Human-readable platform name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::FreeBsd => "FreeBSD",
            Self::Unix => "Unix",
            Self::Windows32 => "Windows (32-bit)",
            Self::Windows64 => "Windows (64-bit)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Platform selected at build time
#[cfg(target_os = "linux")]
pub const PLATFORM: Platform = Platform::Linux;

/// Platform selected at build time
#[cfg(target_os = "macos")]
pub const PLATFORM: Platform = Platform::MacOs;

/// Platform selected at build time
#[cfg(target_os = "freebsd")]
pub const PLATFORM: Platform = Platform::FreeBsd;

/// Platform selected at build time
#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "macos", target_os = "freebsd"))
))]
pub const PLATFORM: Platform = Platform::Unix;

/// Platform selected at build time
#[cfg(all(windows, target_pointer_width = "64"))]
pub const PLATFORM: Platform = Platform::Windows64;

/// Platform selected at build time
#[cfg(all(windows, not(target_pointer_width = "64")))]
pub const PLATFORM: Platform = Platform::Windows32;

#[cfg(not(any(unix, windows)))]
compile_error!("glwrap: target operating system is not supported");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        assert!(Platform::Windows32.is_windows());
        assert!(Platform::Windows64.is_windows());
        assert!(!Platform::Linux.is_windows());
        assert!(!Platform::MacOs.is_windows());
    }

    #[test]
    fn test_detected_platform_matches_host() {
        assert_eq!(PLATFORM.is_windows(), cfg!(windows));
        assert_eq!(PLATFORM.is_macos(), cfg!(target_os = "macos"));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Platform::FreeBsd.to_string(), "FreeBSD");
    }
}
