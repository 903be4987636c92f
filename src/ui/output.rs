//! Progress lines, headers and summaries for the deploy pipeline

use std::path::Path;

use crate::application::deploy::DeployReport;
use crate::config::{Config, ConfigWarning};
use crate::domain::ports::{DeployEvent, DeployEventSink, DeployStep};
use crate::domain::services::TransferPlan;

use super::json;
use super::theme::{self, colors};

/// Resolved output settings for one command invocation
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self {
            json,
            verbose,
            color: theme::color_enabled(config.output.color, json),
            unicode: theme::unicode_enabled(),
        }
    }

    fn icon_success(&self) -> &'static str {
        if self.unicode {
            theme::icons::SUCCESS
        } else {
            theme::icons_ascii::SUCCESS
        }
    }

    fn icon_warning(&self) -> &'static str {
        if self.unicode {
            theme::icons::WARNING
        } else {
            theme::icons_ascii::WARNING
        }
    }

    fn icon_step(&self) -> &'static str {
        if self.unicode {
            theme::icons::STEP
        } else {
            theme::icons_ascii::STEP
        }
    }

    fn icon_arrow(&self) -> &'static str {
        if self.unicode {
            theme::icons::ARROW
        } else {
            theme::icons_ascii::ARROW
        }
    }

    fn icon_deploy(&self) -> &'static str {
        if self.unicode {
            theme::icons::DEPLOY
        } else {
            theme::icons_ascii::DEPLOY
        }
    }
}

/// Print the deploy header (human mode)
pub fn print_header(ui: &UiContext, source: &Path, target: &str, services: &str, dry_run: bool) {
    println!("{} Ferry Deploy", ui.icon_deploy());
    println!("Source:   {}", source.display());
    println!("Target:   {}", target);
    println!("Services: {}", services);
    if dry_run {
        println!("Mode:     Dry run (nothing will be executed)");
    }
    println!();
}

/// Print unknown-key warnings from config loading
pub fn print_config_warnings(ui: &UiContext, path: &Path, warnings: &[ConfigWarning]) {
    if ui.json {
        for w in warnings {
            let _ = json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": path.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }
    for w in warnings {
        let prefix = theme::paint(ui.icon_warning(), colors::WARNING, ui.color);
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", prefix, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", prefix, w.key, path.display());
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Print the transfer plan (dry runs always, otherwise verbose only)
pub fn print_plan(ui: &UiContext, plan: &TransferPlan, show_files: bool) {
    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "plan",
            "files": plan.file_count(),
            "excluded": plan.excluded.len(),
            "included": plan.included.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        }));
        return;
    }
    println!(
        "Plan: {} files to mirror, {} paths excluded",
        plan.file_count(),
        plan.excluded.len()
    );
    if show_files {
        for path in &plan.included {
            println!("  + {}", path.display());
        }
        for path in &plan.excluded {
            let line = format!("  - {} (excluded)", path.display());
            println!("{}", theme::paint(&line, colors::DIM, ui.color));
        }
    }
    println!();
}

/// Print the final summary (human mode)
pub fn print_summary(ui: &UiContext, report: &DeployReport) {
    let icon = theme::paint(ui.icon_success(), colors::SUCCESS, ui.color);
    if report.dry_run {
        println!("\n{} Dry run complete - no commands were executed", icon);
    } else {
        println!("\n{} Deploy complete", icon);
    }
}

/// Event sink printing human-readable progress lines
///
/// A line is printed BEFORE each step runs, so on failure the most recent
/// line names the failed stage.
pub struct ConsoleSink {
    ui: UiContext,
    show_commands: bool,
}

impl ConsoleSink {
    pub fn new(ui: UiContext, show_commands: bool) -> Self {
        Self { ui, show_commands }
    }
}

impl DeployEventSink for ConsoleSink {
    fn emit(&self, event: &DeployEvent) {
        match event {
            DeployEvent::StepStarted { step, detail } => {
                let marker = theme::paint(self.ui.icon_step(), colors::INFO, self.ui.color);
                println!(
                    "{} [{}/{}] {}: {}",
                    marker,
                    step.position(),
                    DeployStep::COUNT,
                    step.name(),
                    detail
                );
            }
            DeployEvent::CommandPlanned { command, .. } => {
                if self.show_commands {
                    let line = format!("  {} {}", self.ui.icon_arrow(), command);
                    println!("{}", theme::paint(&line, colors::DIM, self.ui.color));
                }
            }
            DeployEvent::StepCompleted { .. } => {
                let icon = theme::paint(self.ui.icon_success(), colors::SUCCESS, self.ui.color);
                println!("  {} done", icon);
            }
            DeployEvent::StepSkipped { .. } => {
                println!("  - skipped (dry run)");
            }
        }
    }
}

/// Event sink emitting one NDJSON object per event
pub struct JsonSink;

impl DeployEventSink for JsonSink {
    fn emit(&self, event: &DeployEvent) {
        let value = match event {
            DeployEvent::StepStarted { step, detail } => serde_json::json!({
                "event": "step_started",
                "step": step.name(),
                "detail": detail,
            }),
            DeployEvent::CommandPlanned { step, command } => serde_json::json!({
                "event": "command",
                "step": step.name(),
                "command": command,
            }),
            DeployEvent::StepCompleted { step } => serde_json::json!({
                "event": "step_completed",
                "step": step.name(),
            }),
            DeployEvent::StepSkipped { step } => serde_json::json!({
                "event": "step_skipped",
                "step": step.name(),
            }),
        };
        let _ = json::emit(value);
    }
}
