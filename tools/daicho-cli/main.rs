use clap::Parser;
use daicho::prelude::*;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

/// Compile or execute a batch of entity actions described in a JSON file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the batch file: one item object or an array of item objects
    items_path: String,

    /// Path to a credentials JSON file ({"baseUrl": ..., "apiKey": ...})
    #[arg(short, long)]
    credentials: Option<String>,

    /// Backend base URL (trailing slash), overridden by --credentials
    #[arg(long)]
    base_url: Option<String>,

    /// Backend API key, overridden by --credentials
    #[arg(long)]
    api_key: Option<String>,

    /// Compile and print the requests without sending anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Record per-item failures and keep going instead of aborting the batch
    #[arg(long)]
    continue_on_fail: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // --- 1. File Loading ---
    let items_json = fs::read_to_string(&cli.items_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read items file '{}': {}",
            &cli.items_path, e
        ))
    });
    let items = ActionParams::parse_batch(&items_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse items JSON: {}", e)));
    let credentials = resolve_credentials(&cli);

    println!("Loaded {} item(s) from '{}'", items.len(), cli.items_path);

    // --- 2. Compilation / Execution ---
    if cli.dry_run {
        run_dry(&items, &credentials);
    } else {
        run_batch(&items, &credentials, cli.continue_on_fail).await;
    }
}

/// Compiles every item and prints the request descriptions, touching nothing.
fn run_dry(items: &[ActionParams], credentials: &Credentials) {
    let dispatcher = Dispatcher::new();
    let mut failures = 0usize;

    for (index, item) in items.iter().enumerate() {
        match dispatcher.dispatch(item, credentials) {
            Ok(request) => {
                let rendered = serde_json::to_string_pretty(&request)
                    .unwrap_or_else(|e| exit_with_error(&format!("Failed to render request: {}", e)));
                println!("\n[item {}] {} {}", index, request.method, request.url);
                println!("{}", rendered);
            }
            Err(e) => {
                failures += 1;
                println!("\n[item {}] Error: {}", index, e);
            }
        }
    }

    println!("\n--- Dry Run Summary ---");
    println!("Items:    {}", items.len());
    println!("Failures: {}", failures);
    if failures > 0 {
        std::process::exit(1);
    }
}

/// Runs the batch against the backend and prints each result entry.
async fn run_batch(items: &[ActionParams], credentials: &Credentials, continue_on_fail: bool) {
    let policy = if continue_on_fail {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };
    let runner = BatchRunner::new(Arc::new(HttpTransport::new())).with_policy(policy);

    println!("Running batch against {}...", credentials.base_url);
    let run_start = Instant::now();
    let results = runner
        .run(items, credentials)
        .await
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let run_duration = run_start.elapsed();

    let mut failures = 0usize;
    for result in &results {
        if result.is_failed() {
            failures += 1;
        }
        println!("[item {}] {}", result.item, result.to_json());
    }

    println!("\n--- Batch Summary ---");
    println!("Items:      {}", items.len());
    println!("Results:    {}", results.len());
    println!("Failures:   {}", failures);
    println!("Total Time: {:?}", run_duration);
}

/// Credentials come from the file when given, from the flags otherwise. A dry
/// run without either falls back to a placeholder so requests still render.
fn resolve_credentials(cli: &Cli) -> Credentials {
    if let Some(path) = &cli.credentials {
        let raw = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read credentials file '{}': {}", path, e))
        });
        return serde_json::from_str(&raw)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse credentials: {}", e)));
    }
    match (&cli.base_url, &cli.api_key) {
        (Some(base_url), Some(api_key)) => Credentials::new(base_url.as_str(), api_key.as_str()),
        _ if cli.dry_run => {
            println!("No credentials given, using placeholders for the dry run.");
            Credentials::new("https://localhost/", "unset")
        }
        _ => exit_with_error("Credentials are required: pass --credentials or --base-url and --api-key."),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
