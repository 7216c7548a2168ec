//! CallRecord CLI entry point

use std::process::ExitCode;

use clap::Parser;

use call_record::cli::{
    app::{init_logging, open_store, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::{handle_config_command, handle_save_toggle},
    presenter::Presenter,
    watch::{run_watch, WatchOptions},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    let presenter = Presenter::new();
    let store = open_store(cli.config);

    let result = match cli.command {
        Commands::Watch { input, dry_run } => {
            return run_watch(WatchOptions { input, dry_run }, store, &presenter).await;
        }
        Commands::Config { action } => handle_config_command(action, store, &presenter),
        Commands::Enable => handle_save_toggle(true, store, &presenter),
        Commands::Disable => handle_save_toggle(false, store, &presenter),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
