//! The `run` action: startup resolution followed by an interactive session.

use crate::{
    core::{
        capability::CapabilityPolicy,
        config_loader, descriptor,
        era_catalog::EraCatalog,
        paths::{self, PathError},
        resolver::{self, Resolution, StartupError},
        session::ShellSession,
    },
    models::Settings,
    system::executor::HostShellExecutor,
};
use anyhow::{Result, anyhow};
use std::{
    io::{self, BufRead, Write},
    path::Path,
};

/// Main entry point for the `run` action: `teleport run <descriptor-file>`.
pub fn handle(args: Vec<String>) -> Result<()> {
    let descriptor_path = args
        .first()
        .ok_or_else(|| anyhow!("Internal error: 'run' handler called without a descriptor path."))?;

    let config_path = match paths::get_config_path() {
        Ok(path) => Some(path),
        Err(PathError::ConfigDirNotFound) => {
            log::debug!("No system config directory; using default settings");
            None
        }
        Err(e) => return Err(e.into()),
    };
    launch(
        config_path.as_deref(),
        Path::new(descriptor_path),
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

/// Loads settings, resolves the descriptor, prints the startup banner and runs
/// the session on `input`/`output`.
///
/// Every fatal error happens before anything is written to `output`.
fn launch<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    descriptor_path: &Path,
    input: R,
    mut output: W,
) -> Result<()> {
    let settings = match config_path {
        Some(path) => config_loader::load_settings_from(path)?,
        None => Settings::default(),
    };
    let resolution = prepare(descriptor_path)?;
    announce(&resolution, &mut output)?;

    let executor = settings
        .host_shell
        .as_deref()
        .map(HostShellExecutor::new)
        .unwrap_or_default();

    let mut session = ShellSession::new(
        resolution.era,
        resolution.shell,
        CapabilityPolicy::builtin(),
        settings,
        executor,
    );
    session.run(input, output)?;
    Ok(())
}

/// Writes the selected year, then the shell downgrade notice if there was one.
fn announce<W: Write>(resolution: &Resolution, output: &mut W) -> io::Result<()> {
    writeln!(output, t!("run.info.selected_year"), year = resolution.era.year)?;
    if let Some(requested) = &resolution.downgraded_from {
        writeln!(
            output,
            t!("run.warning.shell_downgrade"),
            shell = requested,
            fallback = resolution.shell
        )?;
    }
    Ok(())
}

/// Loads the descriptor and resolves it against the built-in catalog.
/// Every failure here is fatal and carries its user-facing message.
fn prepare(path: &Path) -> Result<Resolution> {
    let request = descriptor::load(path).map_err(|e| {
        log::debug!("{}", e);
        anyhow!(t!("run.error.cannot_open"))
    })?;

    resolver::resolve(&request, &EraCatalog::builtin()).map_err(|e| {
        log::debug!("{}", e);
        match e {
            StartupError::InvalidYear { .. } => anyhow!(t!("run.error.invalid_year")),
            StartupError::EraNotFound => anyhow!(t!("run.error.no_era")),
        }
    })
}
