use askpage::api::HttpAnswerService;
use askpage::core::config;
use askpage::core::controller::PageController;
use askpage::core::state::App;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "askpage", about = "Ask a question, get an answer")]
struct Args {
    /// Base URL of the answer service (overrides config and ASKPAGE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Ask one question, print the answer, and exit
    #[arg(long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Where to write the debug log
    #[arg(long, default_value = "askpage.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger so the TUI screen stays clean
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let resolved = config::resolve(&file_config, args.api_url.as_deref());
    log::info!(
        "askpage starting up: api={}, timeout={:?}",
        resolved.api_base_url,
        resolved.timeout
    );

    let service = HttpAnswerService::new(&resolved.api_base_url, resolved.timeout)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
    let app = App::from_config(Arc::new(service), &resolved);

    match args.ask {
        Some(question) => {
            let mut controller = PageController::new(app);
            let answered = askpage::oneshot::run(
                &mut controller,
                question,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await?;
            if !answered {
                process::exit(1);
            }
            Ok(())
        }
        None => askpage::tui::run(app),
    }
}
