//! Usage: Per-platform policy for what happens once the last window is gone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformPolicy {
    QuitWhenEmpty,
    /// Keep running without windows (dock / menu bar convention).
    StayResident,
}

impl PlatformPolicy {
    pub fn current() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &str) -> Self {
        if os == "macos" {
            Self::StayResident
        } else {
            Self::QuitWhenEmpty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_macos_stays_resident() {
        assert_eq!(PlatformPolicy::for_os("macos"), PlatformPolicy::StayResident);
        for os in ["windows", "linux", "freebsd"] {
            assert_eq!(PlatformPolicy::for_os(os), PlatformPolicy::QuitWhenEmpty);
        }
    }

    #[test]
    fn current_matches_target_os() {
        let expected = if cfg!(target_os = "macos") {
            PlatformPolicy::StayResident
        } else {
            PlatformPolicy::QuitWhenEmpty
        };
        assert_eq!(PlatformPolicy::current(), expected);
    }
}
