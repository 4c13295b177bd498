use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use ideagauge::classifier::{classify, ClassifierConfig};
use ideagauge::corpus::KeywordCorpus;
use ideagauge::insight::RealityCheck;
use ideagauge::questions::build_question_flow;
use ideagauge::report::{generate_final_report, ReportContext};

#[derive(Parser, Debug)]
#[command(name = "ideagauge", version, about = "Classify product ideas and synthesize reality-check reports")]
struct Args {
    /// Optional TOML file overriding classifier thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an idea and print the full classification
    Classify {
        /// The idea text, e.g. "a marketplace for dog walkers"
        idea: String,
    },
    /// Print the live reality check plus the question flow for an idea
    Check {
        idea: String,
    },
    /// Synthesize the final report from an idea and recorded answers
    Report {
        idea: String,
        /// JSON file with a question-id to answer-id map
        #[arg(long = "answers", value_name = "FILE")]
        answers_file: Option<PathBuf>,
        /// Recorded answer as question-id=answer-id, repeatable; overrides
        /// entries from --answers
        #[arg(long = "answer", value_name = "QID=AID")]
        answers: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<ClassifierConfig> {
    let config = match path {
        Some(path) => ClassifierConfig::from_toml_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClassifierConfig::from_env(),
    };
    config.validate().context("invalid classifier config")?;
    Ok(config)
}

fn require_idea(idea: &str) -> Result<&str> {
    let idea = idea.trim();
    if idea.len() < 10 {
        bail!("idea text must be at least 10 characters; got {}", idea.len());
    }
    Ok(idea)
}

fn collect_answers(file: Option<&PathBuf>, pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut map: BTreeMap<String, String> = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading answers from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing answers from {}", path.display()))?
        }
        None => BTreeMap::new(),
    };
    for pair in pairs {
        let (question, answer) = pair
            .split_once('=')
            .with_context(|| format!("expected QID=AID, got {pair:?}"))?;
        map.insert(question.to_string(), answer.to_string());
    }
    Ok(map)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ideagauge=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_ref())?;
    let corpus = KeywordCorpus::default();

    match args.command {
        Command::Classify { idea } => {
            let idea = require_idea(&idea)?;
            let classification = classify(&corpus, &config, idea);
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        Command::Check { idea } => {
            let idea = require_idea(&idea)?;
            let classification = classify(&corpus, &config, idea);
            let check = RealityCheck::from_classification(idea, &classification);
            let questions = build_question_flow(&classification, 5);
            let payload = serde_json::json!({
                "reality_check": check,
                "questions": questions,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Report {
            idea,
            answers_file,
            answers,
        } => {
            let idea = require_idea(&idea)?;
            let user_answers = collect_answers(answers_file.as_ref(), &answers)?;
            let classification = classify(&corpus, &config, idea);
            let reality_check = RealityCheck::from_classification(idea, &classification);
            let ctx = ReportContext::new(idea, classification, user_answers, reality_check);
            let report = generate_final_report(&ctx);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_idea_rejects_short_text() {
        assert!(require_idea("too short").is_err());
        assert!(require_idea("   a marketplace for dog walkers   ").is_ok());
    }

    #[test]
    fn test_collect_answers_from_flags() {
        let map = collect_answers(
            None,
            &["uni-3=core-action".to_string(), "mp-1=no-plan".to_string()],
        )
        .unwrap();
        assert_eq!(map.get("uni-3").unwrap(), "core-action");
        assert_eq!(map.get("mp-1").unwrap(), "no-plan");
        assert!(collect_answers(None, &["malformed".to_string()]).is_err());
    }

    #[test]
    fn test_collect_answers_flags_override_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"uni-3": "everything", "uni-4": "no-plan"}}"#).unwrap();
        let path = file.path().to_path_buf();
        let map = collect_answers(Some(&path), &["uni-3=core-action".to_string()]).unwrap();
        assert_eq!(map.get("uni-3").unwrap(), "core-action");
        assert_eq!(map.get("uni-4").unwrap(), "no-plan");
    }
}
