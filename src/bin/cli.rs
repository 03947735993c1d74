use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use grade_generator::persistence::file::DEFAULT_CSV_PATH;
use grade_generator::prompt::BANNER;
use grade_generator::{EntryPrompt, GradeSession, save_grades_to_csv, save_summary_to_json};

#[derive(Parser)]
#[command(
    name = "grade-generator",
    version,
    about = "Collect weighted FA/SA assignments and export a graded summary"
)]
struct Cli {
    /// CSV file to write the assignments to (overwritten)
    #[arg(short, long, default_value = DEFAULT_CSV_PATH)]
    output: PathBuf,

    /// Also write the computed summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    println!("\n{BANNER}\n");

    let mut session = GradeSession::new();
    let mut prompt = EntryPrompt::new(stdin.lock(), stdout.lock());
    let outcome = prompt
        .collect(&mut session)
        .context("failed to read assignment input")?;
    tracing::debug!(?outcome, entries = session.entries().len(), "input finished");

    let mut stdout = prompt.into_output();
    let summary = session.finalize();
    writeln!(stdout, "\n{}", summary.to_cli_summary())?;

    save_grades_to_csv(session.entries(), &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    if let Some(path) = &cli.summary_json {
        save_summary_to_json(&summary, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    writeln!(
        stdout,
        "\n{} created with all assignments.",
        cli.output.display()
    )?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grade_generator=error")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
