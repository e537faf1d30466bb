#![allow(non_snake_case)]

mod monitor;

const PROGRAM_NAME: &str = "EdidView";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    // stdout carries the report; diagnostics go to stderr
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();
    tracing::debug!(program = PROGRAM_NAME, "starting monitor EDID extraction");

    match monitor::collect_present_monitor_edids() {
        Ok(report) => {
            monitor::print_report(&report);
        }
        Err(error) => {
            tracing::error!(%error, "monitor enumeration failed before any device was processed");
            notify_fatal_failure(&error.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(target_os = "windows")]
fn notify_fatal_failure(message: &str) {
    use win_toast_notify::WinToastNotify;

    if let Err(notify_error) = WinToastNotify::new()
        .set_title(PROGRAM_NAME)
        .set_messages(vec!["Unable to extract monitor EDID data.", message])
        .show()
    {
        tracing::warn!(?notify_error, "failed to show the failure notification");
    }
}

#[cfg(not(target_os = "windows"))]
fn notify_fatal_failure(_message: &str) {
    // the tracing record emitted by the caller is the only channel here
}
