//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus where the manifest and each installed package came from.
    Verbose,
    /// One line per package, warnings, and the summary.
    #[default]
    Normal,
    /// Only problems and the summary.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows lines for packages that passed.
    pub fn shows_successes(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows diagnostic details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
