use anyhow::Result;
use pomoplanner::commands::Cli;
use pomoplanner::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu()
}
