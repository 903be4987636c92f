//! `ferry check` - validate configuration and environment
//!
//! Exits non-zero when any error-level finding exists, or on warnings too
//! with --strict-warnings (CI mode). Nothing here touches the remote host.

use std::path::Path;

use anyhow::Result;

use crate::config::{self, Config};
use crate::domain::value_objects::{ExclusionSet, OwnershipSpec, RemoteTarget, ServiceSet};
use crate::infrastructure::RsyncTransport;
use crate::ui::theme::{self, colors};
use crate::ui::{json, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

struct Finding {
    severity: Severity,
    message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

pub fn run(config_path: Option<&Path>, strict_warnings: bool, json_mode: bool) -> Result<()> {
    let mut findings: Vec<Finding> = Vec::new();

    let loaded = match config::discover(config_path) {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            findings.push(Finding::error(e.to_string()));
            None
        }
    };

    let ui = match &loaded {
        Some((config, _, _)) => UiContext::new(json_mode, 0, config),
        None => UiContext::new(json_mode, 0, &Config::default()),
    };

    if let Some((config, warnings, loaded_from)) = &loaded {
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", loaded_from.display(), line),
                None => loaded_from.display().to_string(),
            };
            let mut message = format!("unknown config key '{}' in {}", w.key, location);
            if let Some(suggestion) = &w.suggestion {
                message.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            findings.push(Finding::warning(message));
        }
        check_config(config, &mut findings);
    }

    check_environment(&mut findings);

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    report(&ui, &findings, errors, warnings);

    if errors > 0 || (strict_warnings && warnings > 0) {
        std::process::exit(1);
    }
    Ok(())
}

fn check_config(config: &Config, findings: &mut Vec<Finding>) {
    // [target]
    match config.target.host.as_deref() {
        Some(host) => {
            if let Err(e) = RemoteTarget::new(host, config.target.root.as_deref().unwrap_or(".")) {
                findings.push(Finding::error(e.to_string()));
            }
        }
        None => findings.push(Finding::error(
            "no deploy target - set [target] host in ferry.toml",
        )),
    }
    if let Some(root) = config.target.root.as_deref() {
        if !root.starts_with('/') && !root.starts_with('~') {
            findings.push(Finding::warning(format!(
                "target root '{}' is relative - it resolves against the SSH login directory",
                root
            )));
        }
    } else {
        findings.push(Finding::warning(
            "no [target] root - deploying into the SSH login directory",
        ));
    }

    // [sync]
    match ExclusionSet::with_extras(&config.sync.exclude) {
        Ok(set) => {
            // verify the baseline actually matches, not just that the
            // pattern strings are present
            if !set.is_excluded(Path::new(".git"), true)
                || !set.is_excluded(Path::new(".env"), false)
            {
                findings.push(Finding::error(
                    "exclusion baseline no longer matches .git/.env",
                ));
            }
        }
        Err(e) => findings.push(Finding::error(e.to_string())),
    }
    if !config.sync.source.is_dir() {
        findings.push(Finding::error(format!(
            "source directory not found: {}",
            config.sync.source.display()
        )));
    }

    // [ownership]
    if let Err(e) = OwnershipSpec::new(
        &config.ownership.user,
        &config.ownership.group,
        &config.ownership.mode,
    ) {
        findings.push(Finding::error(e.to_string()));
    }

    // [services]
    if let Err(e) = ServiceSet::new(config.services.restart.clone()) {
        findings.push(Finding::error(e.to_string()));
    }
}

fn check_environment(findings: &mut Vec<Finding>) {
    if !RsyncTransport::has_rsync() {
        findings.push(Finding::warning(
            "rsync not found in PATH - deploy will fail at the sync step",
        ));
    }
    if !RsyncTransport::has_ssh() {
        findings.push(Finding::warning(
            "ssh not found in PATH - deploy will fail at the sync step",
        ));
    }
}

fn report(ui: &UiContext, findings: &[Finding], errors: usize, warnings: usize) {
    if ui.json {
        for f in findings {
            let _ = json::emit(serde_json::json!({
                "event": "finding",
                "severity": match f.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                },
                "message": f.message,
            }));
        }
        let _ = json::emit(serde_json::json!({
            "event": "check_complete",
            "status": if errors == 0 { "passed" } else { "failed" },
            "errors": errors,
            "warnings": warnings,
        }));
        return;
    }

    for f in findings {
        match f.severity {
            Severity::Error => {
                let icon = if ui.unicode {
                    theme::icons::ERROR
                } else {
                    theme::icons_ascii::ERROR
                };
                println!("{} {}", theme::paint(icon, colors::ERROR, ui.color), f.message);
            }
            Severity::Warning => {
                let icon = if ui.unicode {
                    theme::icons::WARNING
                } else {
                    theme::icons_ascii::WARNING
                };
                println!(
                    "{} {}",
                    theme::paint(icon, colors::WARNING, ui.color),
                    f.message
                );
            }
        }
    }

    if errors == 0 {
        let icon = if ui.unicode {
            theme::icons::SUCCESS
        } else {
            theme::icons_ascii::SUCCESS
        };
        println!(
            "{} Check passed ({} warnings)",
            theme::paint(icon, colors::SUCCESS, ui.color),
            warnings
        );
    } else {
        println!("Check failed: {} errors, {} warnings", errors, warnings);
    }
}
