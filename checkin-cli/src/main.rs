use anyhow::{Context, Result, bail};
use checkin_core::{
    AnalysisResult, DeferredScorer, EmotionEngine, FacialReading, NeutralScorer, SentimentScorer,
    validate_text,
};
use checkin_store::{CheckinRecord, FacialRecord, JsonlStore, MemoryStore, RecordStore};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tokio::io::AsyncReadExt;

mod config;
mod logging;
mod render;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "checkin",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CHECKIN_BUILD_SHA"), ")"),
    about = "Daily emotional check-ins, scored locally"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a check-in (reads stdin when TEXT is omitted)
    Analyze {
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not append to the check-in history
        #[arg(long)]
        no_save: bool,

        /// Store under this user instead of the configured one
        #[arg(long)]
        user: Option<String>,

        /// Skip the sentiment lexicon; polarity is treated as neutral
        #[arg(long)]
        no_sentiment: bool,
    },

    /// Show recent check-ins, newest first
    History {
        #[arg(long)]
        user: Option<String>,

        /// Number of check-ins to show (default: 10)
        #[arg(long, default_value_t = 10)]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Record a facial-expression reading from classifier confidences
    Facial {
        /// label=confidence, confidence in 0..1 (repeatable). None means no face;
        /// that reading is shown but not saved.
        #[arg(long = "score")]
        scores: Vec<String>,

        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        no_save: bool,

        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.checkin/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init_logging(&cfg.logging.level);

    match cli.command {
        Command::Analyze {
            text,
            json,
            no_save,
            user,
            no_sentiment,
        } => {
            let opts = AnalyzeOpts {
                json,
                save: cfg.analysis.save && !no_save,
                sentiment: cfg.analysis.sentiment && !no_sentiment,
                user: user.unwrap_or_else(|| cfg.user.id.clone()),
            };
            analyze(text, opts).await?;
        }

        Command::History { user, limit, json } => {
            let user = user.unwrap_or_else(|| cfg.user.id.clone());
            let store: JsonlStore<CheckinRecord> = JsonlStore::new(state::checkins_path()?);
            let rows = store.list(&user, limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::render_history(&rows));
            }
        }

        Command::Facial {
            scores,
            user,
            no_save,
            json,
        } => {
            let confidences = parse_scores(&scores)?;
            let face_found = !confidences.is_empty();
            let reading = if face_found {
                FacialReading::from_confidences(&confidences)
            } else {
                FacialReading::no_face()
            };

            if !face_found {
                tracing::info!("no face in reading; nothing saved");
            } else if cfg.analysis.save && !no_save {
                let user = user.unwrap_or_else(|| cfg.user.id.clone());
                let mut store: JsonlStore<FacialRecord> = JsonlStore::new(state::facial_path()?);
                store.append(&FacialRecord::new(user, reading.clone(), Utc::now()))?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print!("{}", render::render_facial(&reading));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => show_config(&cfg)?,
        },
    }

    Ok(())
}

struct AnalyzeOpts {
    json: bool,
    save: bool,
    sentiment: bool,
    user: String,
}

async fn analyze(text: Option<String>, opts: AnalyzeOpts) -> Result<()> {
    // Lexicon load overlaps with reading input.
    let deferred = DeferredScorer::new();
    let load = opts.sentiment.then(|| {
        let loader = deferred.loader();
        tokio::task::spawn_blocking(move || loader.load())
    });

    let raw = match text {
        Some(t) => t,
        None => read_stdin().await?,
    };
    let text = validate_text(&raw)?;

    if let Some(handle) = load {
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "sentiment lexicon load failed");
        }
    }

    let scorer: Box<dyn SentimentScorer + Send + Sync> = if opts.sentiment {
        Box::new(deferred)
    } else {
        Box::new(NeutralScorer)
    };
    let engine = EmotionEngine::new(scorer);
    let result = engine.analyze(text);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render_analysis(&result));
    }

    if opts.save {
        let mut store: JsonlStore<CheckinRecord> = JsonlStore::new(state::checkins_path()?);
        let record = record_checkin(&mut store, &opts.user, text, &result)?;
        tracing::info!(id = %record.id, path = %store.path().display(), "check-in saved");
    } else {
        let mut store: MemoryStore<CheckinRecord> = MemoryStore::new();
        let record = record_checkin(&mut store, &opts.user, text, &result)?;
        tracing::info!(id = %record.id, "dry run; check-in not saved");
    }

    Ok(())
}

/// Append a check-in for `result` to `store`.
fn record_checkin<S: RecordStore<CheckinRecord>>(
    store: &mut S,
    user: &str,
    text: &str,
    result: &AnalysisResult,
) -> Result<CheckinRecord> {
    let record = CheckinRecord::from_analysis(user, text, result, Utc::now());
    store.append(&record)?;
    Ok(record)
}

async fn read_stdin() -> Result<String> {
    if std::io::stdin().is_terminal() {
        eprintln!("How are you feeling today? (Ctrl-D to finish)");
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("read check-in from stdin")?;
    Ok(buf)
}

/// Parse `label=confidence`.
fn parse_score(s: &str) -> Result<(String, f64)> {
    let Some((label, conf)) = s.split_once('=') else {
        bail!("expected label=confidence, got {s:?}");
    };
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        bail!("missing expression label in {s:?}");
    }
    let conf: f64 = conf
        .trim()
        .parse()
        .with_context(|| format!("confidence in {s:?} is not a number"))?;
    if !(0.0..=1.0).contains(&conf) {
        bail!("confidence must be between 0 and 1, got {conf}");
    }
    Ok((label, conf))
}

/// Parse every `--score`, rejecting repeated labels.
fn parse_scores(raw: &[String]) -> Result<Vec<(String, f64)>> {
    let mut out: Vec<(String, f64)> = Vec::with_capacity(raw.len());
    for s in raw {
        let (label, conf) = parse_score(s)?;
        if out.iter().any(|(l, _)| *l == label) {
            bail!("expression {label:?} given more than once");
        }
        out.push((label, conf));
    }
    Ok(out)
}

fn show_config(cfg: &Config) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("Happy=0.7").unwrap(), ("happy".to_string(), 0.7));
        assert_eq!(parse_score(" sad = 0 ").unwrap(), ("sad".to_string(), 0.0));
    }

    #[test]
    fn test_parse_score_rejects_bad_input() {
        assert!(parse_score("happy").is_err());
        assert!(parse_score("=0.5").is_err());
        assert!(parse_score("happy=lots").is_err());
        assert!(parse_score("happy=1.5").is_err());
        assert!(parse_score("happy=NaN").is_err());
    }

    #[test]
    fn test_parse_scores_rejects_repeats() {
        let raw = vec!["happy=0.6".to_string(), "Happy=0.1".to_string()];
        assert!(parse_scores(&raw).is_err());
        assert!(parse_scores(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_record_checkin_appends_to_store() {
        let result = EmotionEngine::neutral().analyze("heartbroken");
        let mut store: MemoryStore<CheckinRecord> = MemoryStore::new();
        let record = record_checkin(&mut store, "ana", "heartbroken", &result).unwrap();

        assert_eq!(store.len(), 1);
        let rows = store.list("ana", 5).unwrap();
        assert_eq!(rows[0].id, record.id);
        assert_eq!(rows[0].emotions, result.emotions);
    }

    #[test]
    fn test_cli_parses_analyze_flags() {
        let cli =
            Cli::try_parse_from(["checkin", "analyze", "feeling ok", "--json", "--no-save"])
                .unwrap();
        match cli.command {
            Command::Analyze {
                text,
                json,
                no_save,
                no_sentiment,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("feeling ok"));
                assert!(json && no_save && !no_sentiment);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cli_repeatable_scores() {
        let cli = Cli::try_parse_from([
            "checkin", "facial", "--score", "happy=0.6", "--score", "sad=0.1",
        ])
        .unwrap();
        match cli.command {
            Command::Facial { scores, .. } => assert_eq!(scores.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
