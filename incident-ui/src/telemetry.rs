use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

pub const DEFAULT_FILTER: &str = "incident_ui=debug,incident_client=debug";

/// Routes `tracing` output to the browser console.
pub fn init() {
    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_env_filter(DEFAULT_FILTER)
            .with_writer(MakeConsoleWriter::default())
            .with_ansi(false)
            .without_time()
            .finish(),
    )
    .expect("Unable to configure tracing");
}
