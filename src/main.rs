use argh::FromArgs;
use food_ordering::menu::DEFAULT_MENU_FILE;
use food_ordering::{App, EditorSource, RunOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Interactive food ordering console for an owner and their customers.
struct Args {
    #[argh(option, default = "PathBuf::from(DEFAULT_MENU_FILE)")]
    /// menu file read at startup and written on exit. Defaults to menu.txt.
    menu: PathBuf,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    // Logs go to stderr so they never interleave with the dialogue.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(RunOutcome::Exited) => ExitCode::SUCCESS,
        Ok(RunOutcome::InputClosed) => {
            println!("Input closed. Menu changes were not saved.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<RunOutcome> {
    let mut input = EditorSource::new()?;
    let mut app = App::new(args.menu);
    app.run(&mut input, &mut std::io::stdout())
}
