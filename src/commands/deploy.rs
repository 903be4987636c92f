//! `ferry deploy` - sync, fix permissions, restart

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::application::deploy::{DeployOptions, DeployUseCase};
use crate::config::{self, Config};
use crate::domain::services::plan_transfer;
use crate::domain::value_objects::{ExclusionSet, OwnershipSpec, RemoteTarget, ServiceSet};
use crate::error::{FerryError, FerryResult};
use crate::infrastructure::{ComposeOrchestrator, RsyncTransport, SshShell};
use crate::ui::{json, output, ConsoleSink, JsonSink, UiContext};

pub fn run(
    config_path: Option<&Path>,
    remote: Option<String>,
    dry_run: bool,
    yes: bool,
    json_mode: bool,
    verbose: u8,
) -> Result<()> {
    let (config, warnings, loaded_from) = config::discover(config_path)?;
    let ui = UiContext::new(json_mode, verbose, &config);
    output::print_config_warnings(&ui, &loaded_from, &warnings);

    let target = resolve_target(&config, remote.as_deref())?;
    let exclusions = ExclusionSet::with_extras(&config.sync.exclude)?;
    let services = ServiceSet::new(config.services.restart.clone())?;
    let ownership = OwnershipSpec::new(
        &config.ownership.user,
        &config.ownership.group,
        &config.ownership.mode,
    )?;
    let source = config.sync.source.clone();
    if !source.is_dir() {
        return Err(FerryError::SourceNotFound { path: source }.into());
    }
    let payload_path = target.payload_path(&config.ownership.path);

    if json_mode {
        json::emit(serde_json::json!({
            "event": "start",
            "command": "deploy",
            "source": source.display().to_string(),
            "target": target.remote_dest(),
            "services": services.names(),
            "dry_run": dry_run,
        }))?;
    } else {
        output::print_header(
            &ui,
            &source,
            &target.remote_dest(),
            &services.to_string(),
            dry_run,
        );
    }

    // Dry runs always show the plan; verbose runs show it before confirming.
    if dry_run || verbose > 0 {
        let plan = plan_transfer(&source, &exclusions)?;
        output::print_plan(&ui, &plan, dry_run || verbose > 1);
    }

    if !dry_run && !yes && !json_mode && std::io::stdin().is_terminal() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Deploy to {}?", target))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(FerryError::Aborted.into());
        }
    }

    let transport = RsyncTransport::new(source, target.clone(), exclusions);
    let shell = SshShell::new(target.host(), json_mode);
    let orchestrator = ComposeOrchestrator::new(
        SshShell::new(target.host(), json_mode),
        target.root(),
        config.services.compose_file.clone(),
    );
    let use_case = DeployUseCase::new(
        transport,
        shell,
        orchestrator,
        ownership,
        payload_path,
        services,
    );

    let options = DeployOptions {
        dry_run,
        quiet: json_mode,
        verbose: verbose > 0,
    };
    let report = if json_mode {
        use_case.execute(&options, &JsonSink)?
    } else {
        let sink = ConsoleSink::new(ui, dry_run || verbose > 0);
        use_case.execute(&options, &sink)?
    };

    if json_mode {
        json::emit(serde_json::json!({
            "event": "complete",
            "status": "success",
            "report": report,
        }))?;
    } else {
        output::print_summary(&ui, &report);
    }

    Ok(())
}

/// --remote beats the config; without either there is no target
fn resolve_target(config: &Config, remote: Option<&str>) -> FerryResult<RemoteTarget> {
    if let Some(spec) = remote {
        return RemoteTarget::parse(spec);
    }
    match config.target.host.as_deref() {
        Some(host) => RemoteTarget::new(host, config.target.root.as_deref().unwrap_or(".")),
        None => Err(FerryError::MissingTarget),
    }
}
