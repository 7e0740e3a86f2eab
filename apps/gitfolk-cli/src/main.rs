//! gitfolk command-line pipeline
//!
//! `mine` extracts the deduplicated identity set from a repository's
//! history, `score` evaluates every candidate pair, and `evaluate`
//! compares the rule's verdicts against a human-labeled table.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use gitfolk_core::{
    disagreements, evaluate, score_all_pairs, shortlist, MatchConfig,
};
use gitfolk_git::mine_repository;
use gitfolk_io::{
    read_identities, read_labeled_pairs, write_disagreements, write_identities,
    write_scored_pairs,
};

#[derive(Parser)]
#[command(name = "gitfolk", version, about = "Developer identity deduplication for git history")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine the deduplicated (name, email) set from a repository
    Mine {
        /// Path to the git repository
        repo: PathBuf,
        /// Output CSV for the identity list
        #[arg(short, long, default_value = "identities.csv")]
        output: PathBuf,
    },
    /// Score every candidate pair of an identity list
    Score {
        /// Identity list CSV (name,email)
        identities: PathBuf,
        /// Output CSV for the scored pair table
        #[arg(short, long, default_value = "pairs.csv")]
        output: PathBuf,
        /// Keep only the manual-labeling candidate shortlist
        #[arg(long)]
        shortlist_only: bool,
        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
    /// Evaluate the rule against a labeled ground-truth table
    Evaluate {
        /// Labeled pair CSV (name_1,email_1,name_2,email_2 + label)
        labeled: PathBuf,
        /// Write rule-vs-label disagreements to this CSV
        #[arg(long)]
        disagreements: Option<PathBuf>,
        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

/// Overrides for the tunable decision thresholds
#[derive(clap::Args)]
struct ThresholdArgs {
    /// Minimum full-name similarity for a strong name signal
    #[arg(long)]
    name_threshold: Option<f64>,
    /// Minimum local-part length for a cross-domain prefix match
    #[arg(long)]
    min_prefix_len: Option<usize>,
    /// Token-Jaccard floor for the surname+domain guard
    #[arg(long)]
    surname_jaccard: Option<f64>,
    /// Token-Jaccard floor for the prefix+domain guard
    #[arg(long)]
    prefix_jaccard: Option<f64>,
    /// Similarity floor for the candidate shortlist
    #[arg(long)]
    shortlist_threshold: Option<f64>,
}

impl ThresholdArgs {
    fn into_config(self) -> MatchConfig {
        let mut config = MatchConfig::default();
        if let Some(t) = self.name_threshold {
            config.name_similarity_threshold = t;
        }
        if let Some(n) = self.min_prefix_len {
            config.min_local_part_len = n;
        }
        if let Some(t) = self.surname_jaccard {
            config.surname_domain_jaccard = t;
        }
        if let Some(t) = self.prefix_jaccard {
            config.prefix_domain_jaccard = t;
        }
        if let Some(t) = self.shortlist_threshold {
            config.shortlist_threshold = t;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Commands::Mine { repo, output } => {
            info!(repo = %repo.display(), "mining repository history");
            let identities = mine_repository(&repo)
                .with_context(|| format!("mining {}", repo.display()))?;
            info!(count = identities.len(), "collected unique identities");
            write_identities(&output, &identities)?;
            println!("Wrote {} identities to {}", identities.len(), output.display());
        }
        Commands::Score {
            identities,
            output,
            shortlist_only,
            thresholds,
        } => {
            let config = thresholds.into_config();
            let records = read_identities(&identities)?;
            info!(count = records.len(), "scoring all candidate pairs");
            let pairs = score_all_pairs(&records, &config);

            if shortlist_only {
                let kept: Vec<_> = shortlist(&pairs, config.shortlist_threshold)
                    .into_iter()
                    .cloned()
                    .collect();
                info!(total = pairs.len(), kept = kept.len(), "applied shortlist filter");
                write_scored_pairs(&output, &records, &kept)?;
                println!("Wrote {} of {} pairs to {}", kept.len(), pairs.len(), output.display());
            } else {
                write_scored_pairs(&output, &records, &pairs)?;
                println!("Wrote {} pairs to {}", pairs.len(), output.display());
            }
        }
        Commands::Evaluate {
            labeled,
            disagreements: disagreements_path,
            thresholds,
        } => {
            let config = thresholds.into_config();
            let pairs = read_labeled_pairs(&labeled)?;
            let result = evaluate(&pairs, &config);

            println!("Labeled rows used: {} of {}", result.labeled, result.total);
            println!(
                "TP={}  FP={}  TN={}  FN={}",
                result.true_positives,
                result.false_positives,
                result.true_negatives,
                result.false_negatives
            );
            println!(
                "Precision={}  Recall={}  F1={}",
                fmt_metric(result.precision()),
                fmt_metric(result.recall()),
                fmt_metric(result.f1())
            );

            if let Some(path) = disagreements_path {
                let rows = disagreements(&pairs, &config);
                write_disagreements(&path, &rows)?;
                println!("Wrote {} disagreements to {}", rows.len(), path.display());
            }
        }
    }

    Ok(())
}

fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "n/a".to_string(),
    }
}
