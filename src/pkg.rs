//! OS package manager facade.
//!
//! One concrete implementation per supported package ecosystem, selected by
//! host OS identity. The only capability exposed is refreshing the package
//! index before configs are installed.

use anyhow::Result;

use crate::error::BootstrapError;
use crate::exec::Executor;
use crate::logging::Logger;
use crate::platform::{Os, Platform};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// Debian-family Linux (apt-get).
    AptGet,
    /// Arch Linux (pacman).
    Pacman,
    /// Windows (winget).
    Winget,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl PackageManager {
    /// Select the package manager for the detected platform.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::UnsupportedPlatform`] when the host OS has no
    /// registered implementation. No subprocess is spawned.
    pub fn detect(platform: &Platform) -> Result<Self, BootstrapError> {
        match platform.os {
            Os::Linux if platform.is_arch => Ok(Self::Pacman),
            Os::Linux if platform.is_debian => Ok(Self::AptGet),
            Os::Windows => Ok(Self::Winget),
            Os::Linux => Err(BootstrapError::UnsupportedPlatform {
                os: platform.os.to_string(),
            }),
        }
    }

    /// Stable name used in log and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AptGet => "apt-get",
            Self::Pacman => "pacman",
            Self::Winget => "winget",
        }
    }

    /// Program and arguments of the index-refresh command.
    const fn refresh_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::AptGet => ("apt-get", &["update"]),
            Self::Pacman => ("pacman", &["-Sy"]),
            Self::Winget => ("winget", &["source", "update"]),
        }
    }

    /// Whether the refresh command must run as root.
    const fn needs_elevation(self) -> bool {
        matches!(self, Self::AptGet | Self::Pacman)
    }

    /// Refresh the host package index, streaming output to the terminal.
    ///
    /// The command is prefixed with `sudo` when the manager needs root and the
    /// process is not already elevated.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::PackageUpdate`] if the refresh command exits
    /// non-zero; a spawn failure propagates as an ordinary error. Both are
    /// fatal for the run.
    pub fn update(self, executor: &dyn Executor, log: &Logger) -> Result<()> {
        let (program, args) = self.refresh_command();

        let result = if self.needs_elevation() && !is_elevated(executor) {
            let mut elevated = vec![program];
            elevated.extend_from_slice(args);
            log.debug(&format!("running: sudo {}", elevated.join(" ")));
            executor.run_interactive("sudo", &elevated)?
        } else {
            log.debug(&format!("running: {program} {}", args.join(" ")));
            executor.run_interactive(program, args)?
        };

        if result.success {
            Ok(())
        } else {
            Err(BootstrapError::PackageUpdate {
                manager: self.name(),
                code: result.code.unwrap_or(-1),
            }
            .into())
        }
    }
}

/// True when the process already runs with root privileges.
fn is_elevated(executor: &dyn Executor) -> bool {
    executor
        .run_unchecked("id", &["-u"])
        .is_ok_and(|result| result.success && result.stdout.trim() == "0")
}
