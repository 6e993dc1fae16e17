//! Progress reporting for debate turns

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::{AgentRole, DebatePhase, Model};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a debate turn with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_bar(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.phase_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name().to_string());
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(120));

        *self.phase_bar() = Some(pb);
    }

    fn on_agent_complete(&self, _phase: &DebatePhase, role: AgentRole, success: bool) {
        if let Some(pb) = self.phase_bar().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), role)
            } else {
                format!("{} {}", "x".red(), role)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &DebatePhase) {
        if let Some(pb) = self.phase_bar().take() {
            pb.finish_with_message(format!("{} complete", phase.display_name().green()));
        }
    }

    fn on_retry(&self, model: &Model, attempt: u32, delay: Duration) {
        let line = format!(
            "  {} {} attempt {} failed, retrying in {}ms",
            "!".yellow(),
            model,
            attempt + 1,
            delay.as_millis()
        );
        if let Some(pb) = self.phase_bar().as_ref() {
            pb.println(line);
        } else {
            let _ = self.multi.println(line);
        }
    }
}

/// Simple text-based progress (no bars)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_agent_complete(&self, _phase: &DebatePhase, role: AgentRole, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), role);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), role);
        }
    }

    fn on_phase_complete(&self, _phase: &DebatePhase) {}

    fn on_retry(&self, model: &Model, attempt: u32, delay: Duration) {
        eprintln!(
            "  {} {} attempt {} failed, retrying in {}ms",
            "!".yellow(),
            model,
            attempt + 1,
            delay.as_millis()
        );
    }
}
