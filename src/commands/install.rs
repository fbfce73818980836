use anyhow::Result;

use crate::cli::Cli;
use crate::config::{Layout, profile, resolve};
use crate::error::BootstrapError;
use crate::exec::Executor;
use crate::installer;
use crate::logging::Logger;
use crate::pkg::PackageManager;
use crate::platform::Platform;

/// Run the bootstrap sequence.
///
/// Resolves configs from the requested profiles and explicit paths, validates
/// them, then either reports the plan (dry run) or refreshes the package
/// index and installs each config via dotbot.
///
/// # Errors
///
/// Returns an error if the repository root cannot be determined, a profile
/// cannot be read, validation fails (every offending path is reported first),
/// the package index refresh fails, or dotbot reports a failure.
pub fn run(args: &Cli, log: &Logger, executor: &dyn Executor) -> Result<()> {
    let version = option_env!("BOOTSTRAP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("bootstrap {version}"));

    let layout = Layout::discover(args.root.as_deref())?;
    log.debug(&format!("root: {}", layout.root.display()));

    log.stage("Resolving configs");
    let mut profiles = Vec::with_capacity(args.profiles.len());
    for arg in &args.profiles {
        let path = profile::locate(arg, &layout.profiles_dir);
        log.debug(&format!("profile: {}", path.display()));
        profiles.push(profile::read(&path, &layout.configs_dir)?);
    }

    let configs = resolve::merge(&profiles, &args.configs)?;
    log.info(&format!("{} config(s) resolved", configs.len()));

    if let Err(err) = resolve::validate(&configs) {
        if let BootstrapError::MissingConfigs(ref offenders) = err {
            log.error("missing configs:");
            for path in offenders {
                log.error(&format!("\t{}", path.display()));
            }
        }
        return Err(err.into());
    }

    if args.dry_run {
        log.stage("Configs");
        for config in &configs {
            log.dry_run(&format!("install {}", config.display()));
        }
        return Ok(());
    }

    if configs.is_empty() {
        log.warn("no configs resolved; nothing to install");
    }

    // Refreshing the index once here saves each config from doing it
    if args.package_update {
        log.stage("Refreshing package index");
        let platform = Platform::detect();
        let manager = PackageManager::detect(&platform)?;
        log.info(&format!("package manager: {manager}"));
        manager.update(executor, log)?;
    }

    installer::install_configs(&layout, &configs, &args.dotbot_args, executor, log)?;

    Ok(())
}
