//! Binary entry point for `symptom-triage`.
//!
//! This module provides the command-line interface for symptom-triage with options
//! for configuration file paths and logging verbosity. It initializes the
//! runtime and dispatches to the requested command.

use clap::{Parser, Subcommand};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use symptom_triage::{
    base::{
        config::Config,
        types::{Res, TriageResult, Void},
    },
    runtime::{Runtime, TriageOutcome},
    triage::category::SymptomCategory,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Symptom-triage – a rule-based symptom checker.
///
/// Configuration can come from `config.toml` or environment variables.
/// Answers are classified as safe to monitor at home, worth seeing a doctor
/// about soon, or in need of urgent care. This tool does not give medical advice.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the tool will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: WARN level
    /// - -v: INFO level
    /// - -vv: DEBUG level
    /// - -vvv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Export spans to an OTLP collector over HTTP.
    #[arg(long, global = true)]
    otlp: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the symptom categories.
    Symptoms,
    /// Show the questions and options for a category.
    Questions {
        /// Category id, e.g. `chest-pain`.
        category: String,
    },
    /// Evaluate answers given as `question=answer` pairs.
    Evaluate {
        /// Category id, e.g. `chest-pain`.
        category: String,
        /// Answers, e.g. `chest-pain-breathing=yes`.
        answers: Vec<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Answer the questions for a category one at a time.
    Ask {
        /// Category id, e.g. `chest-pain`.
        category: String,
    },
    /// Show stored history.
    History {
        /// Remove every stored entry instead.
        #[arg(long)]
        clear: bool,
    },
    /// Show how repeated symptoms are trending.
    Trends,
}

/// Main entry point for the symptom-triage binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs the command.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("symptom-triage");

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stderr).init();

    let config = Config::load(args.config.as_deref())?;
    let runtime = Runtime::new(config).await?;

    run(&runtime, args.command).await
}

async fn run(runtime: &Runtime, command: Command) -> Void {
    match command {
        Command::Symptoms => {
            for category in runtime.questionnaire.symptoms() {
                println!("{} {:<14} {} {}", category.emoji(), category.id(), category.name(), category.blurb());
            }
        }
        Command::Questions { category } => {
            let category = category.parse::<SymptomCategory>()?;

            for question in runtime.questionnaire.questions_for(category.id()) {
                println!("{} ({})", question.prompt, question.id);

                for option in question.options {
                    println!("  {} {:<16} {}", option.emoji, option.id, option.label);
                }
            }
        }
        Command::Evaluate { category, answers, json } => {
            let answers = runtime.parse_answers(&category, &answers)?;
            let outcome = runtime.triage(&category, &answers);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.result)?);
            } else {
                print_result(&outcome.result);
            }

            settle(outcome).await?;
        }
        Command::Ask { category } => {
            let mut session = runtime.session(&category);
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            while let Some(question) = session.current_question() {
                println!("\n{}", question.prompt);

                for option in question.options {
                    println!("  {} {:<16} {}", option.emoji, option.id, option.label);
                }

                let Some(line) = lines.next_line().await? else {
                    return Err(anyhow::anyhow!("Input closed before every question was answered."));
                };

                if let Err(err) = session.answer(&line) {
                    println!("{err}");
                }
            }

            let outcome = runtime.finish_session(session)?;
            println!();
            print_result(&outcome.result);

            settle(outcome).await?;
        }
        Command::History { clear } => {
            if clear {
                runtime.history.clear().await?;
                println!("History cleared.");
            } else {
                for entry in runtime.history.entries().await? {
                    let condition = entry.suspected_condition.as_deref().unwrap_or("-");
                    println!("{} {:<14} {:<8} {}", entry.timestamp.to_rfc3339(), entry.category, entry.severity, condition);
                }
            }
        }
        Command::Trends => {
            let trends = runtime.trends().await?;

            if trends.is_empty() {
                println!("Not enough history to spot any trends yet.");
            }

            for trend in trends {
                let recent = trend.recent.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" <- ");
                println!("{:<14} {:<11} (seen {} times; {})", trend.category, trend.status, trend.frequency, recent);
            }
        }
    }

    Ok(())
}

fn print_result(result: &TriageResult) {
    println!("{} {}", result.emoji, result.title);
    println!("{}", result.description);
    println!();
    println!("{}", result.explanation);

    if let Some(condition) = &result.suspected_condition {
        println!();
        println!("Possible cause: {condition}");
    }

    if let Some(message) = &result.supportive_message {
        println!();
        println!("{message}");
    }
}

/// Waits for the history write so it lands before the process exits.
async fn settle(outcome: TriageOutcome) -> Res<()> {
    if let Some(recording) = outcome.recording {
        recording.await?;
    }

    Ok(())
}
