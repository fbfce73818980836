//! Wrapper for the external dotbot linker.
//!
//! Dotbot is an opaque collaborator invoked once per resolved config via its
//! command-line contract; its link-application behavior is not modeled here.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::Layout;
use crate::exec::Executor;
use crate::logging::Logger;

/// Name of the external linking tool on PATH.
pub const DOTBOT: &str = "dotbot";

/// Build the dotbot argument list for one config.
fn dotbot_args(layout: &Layout, config: &Path, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        "--exit-on-failure".to_string(),
        "--base-directory".to_string(),
        layout.root.display().to_string(),
        "--config-file".to_string(),
        config.display().to_string(),
    ];
    args.extend(extra.iter().cloned());
    args
}

/// Install every resolved config by invoking dotbot once per config file.
///
/// A failure reported by dotbot stops the remaining configs and fails the
/// run, mirroring the `--exit-on-failure` flag passed to the tool itself. A
/// config whose command cannot be spawned is logged and skipped; the rest are
/// still attempted.
///
/// # Errors
///
/// Returns an error if `dotbot` is not on PATH, or if dotbot reports a
/// failure for any config.
pub fn install_configs(
    layout: &Layout,
    configs: &[PathBuf],
    extra_args: &[String],
    executor: &dyn Executor,
    log: &Logger,
) -> Result<()> {
    if !executor.which(DOTBOT) {
        bail!("{DOTBOT} not found on PATH");
    }

    for config in configs {
        log.stage(&format!("Installing {}", config.display()));

        let args = dotbot_args(layout, config, extra_args);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        match executor.run_interactive(DOTBOT, &arg_refs) {
            Ok(result) if result.success => {}
            Ok(result) => bail!(
                "{DOTBOT} failed for {} (exit {})",
                config.display(),
                result.code.unwrap_or(-1)
            ),
            Err(e) => {
                log.error(&format!(
                    "error executing {DOTBOT} for {}: {e:#}",
                    config.display()
                ));
            }
        }
    }

    Ok(())
}
