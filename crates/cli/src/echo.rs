use lesbar_core::AnalysisRun;
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "lesbar".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "German readability and content analysis\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let secs = duration.as_secs_f64();
    let label = format!("{}:", label);

    if secs < 10.0 {
        eprintln!("  {} {:>8.2}s ({})", label.dimmed(), secs, "fast".dimmed());
    } else if secs < 60.0 {
        eprintln!("  {} {:>8.2}s ({})", label.dimmed(), secs, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}s ({})", label.dimmed(), secs, "slow".bright_red());
    }
}

/// Print per-site counts after an analysis run
pub fn print_run_summary(run: &AnalysisRun) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Run Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    for report in &run.reports {
        eprintln!(
            "  {} {} analysed, {} failed",
            format!("{}:", report.name).dimmed(),
            report.successful_analyses.to_string().bright_white(),
            report.failed.to_string().bright_white()
        );
    }

    for skipped in &run.skipped {
        print_warning(&format!("{} skipped: {}", skipped.name, skipped.reason));
    }

    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
