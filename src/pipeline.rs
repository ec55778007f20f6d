use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::classifier::Classifier;
use crate::common::constants::ERRORS_FILE;
use crate::common::types::{LinkRecord, MalformedLink, ProcessingStats};
use crate::extractor::{Document, Rewrite};
use crate::preflight::Toolkit;
use crate::report;
use crate::settings::UtmSettings;

/// Everything one pass over the document decided.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub with_utm: Vec<LinkRecord>,
    pub without_utm: Vec<LinkRecord>,
    pub malformed: Vec<MalformedLink>,
    pub rewrites: Vec<Rewrite>,
    pub stats: ProcessingStats,
}

/// Files written by a run.
#[derive(Debug)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub modified_path: PathBuf,
    pub errors_path: Option<PathBuf>,
    pub stats: ProcessingStats,
}

impl RunSummary {
    /// Console lines naming the files written, relative to `output_dir`.
    pub fn status_lines(&self, output_dir: &Path) -> Vec<String> {
        let name = |path: &Path| {
            path.strip_prefix(output_dir)
                .unwrap_or(path)
                .display()
                .to_string()
        };
        let mut lines = vec![
            format!("CSV report saved to {}", name(&self.report_path)),
            format!("Modified HTML saved to {}", name(&self.modified_path)),
        ];
        if let Some(errors_path) = &self.errors_path {
            lines.push(format!("Errors logged to {}", name(errors_path)));
        }
        lines
    }
}

pub fn create_progress_bar(total: usize, style: ProgressStyle) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(style);
    pb.set_message("Analyzing links");
    pb
}

/// Classify every eligible anchor serially. The progress bar advances once
/// per candidate anchor. The document is not modified; approved hrefs come
/// back as `rewrites`.
pub fn scan(
    document: &Document,
    toolkit: &Toolkit,
    classifier: &Classifier,
    pb: &ProgressBar,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let candidates = Cell::new(0);

    let eligible = document.eligible_links(&toolkit.anchor_selector, |_| {
        candidates.set(candidates.get() + 1);
        pb.inc(1);
    });

    for anchor in eligible {
        match classifier.classify(&anchor.href) {
            Ok(record) => {
                outcome.stats.eligible += 1;
                if let Some(href) = &record.rewritten_href {
                    outcome.rewrites.push(Rewrite {
                        node: anchor.node,
                        href: href.clone(),
                    });
                }
                if record.has_utm {
                    outcome.with_utm.push(record);
                } else {
                    outcome.without_utm.push(record);
                }
            }
            Err(e) => {
                outcome.stats.eligible += 1;
                outcome.stats.malformed += 1;
                warn!("Skipping link: {:#}", e);
                outcome.malformed.push(MalformedLink {
                    href: anchor.href.clone(),
                    reason: e.root_cause().to_string(),
                });
            }
        }
    }

    outcome.stats.candidates = candidates.get();
    outcome.stats.tagged = outcome.with_utm.len();
    outcome.stats.rewritten = outcome.rewrites.len();
    outcome
}

/// Read `input`, tag its links and write the report, the modified copy and,
/// when needed, the error log into `output_dir`.
pub fn run(
    input: &Path,
    output_dir: &Path,
    settings: &UtmSettings,
    toolkit: &Toolkit,
    timestamp: &str,
) -> Result<RunSummary> {
    let start_time = Instant::now();

    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    debug!("Read {} bytes from {}", source.len(), input.display());

    let mut document = Document::parse(&source);
    let classifier = Classifier::new(settings);

    let total = document.candidates(&toolkit.anchor_selector).count();
    info!("Found {} anchor(s) with an href", total);

    let pb = create_progress_bar(total, toolkit.progress_style.clone());
    let mut outcome = scan(&document, toolkit, &classifier, &pb);
    pb.finish_with_message(format!(
        "Done! {} tagged, {} rewritten, {} malformed",
        outcome.stats.tagged, outcome.stats.rewritten, outcome.stats.malformed
    ));

    let applied = document.apply_rewrites(&outcome.rewrites);
    if applied != outcome.rewrites.len() {
        warn!(
            "Only {} of {} rewrites could be applied",
            applied,
            outcome.rewrites.len()
        );
    }
    outcome.stats.rewritten = applied;

    let report_path = output_dir.join(report::report_file_name(input, timestamp)?);
    report::export_csv(&report_path, &outcome.with_utm, &outcome.without_utm)?;

    let modified_path = output_dir.join(report::modified_file_name(input)?);
    report::save_modified_html(&document, &modified_path)?;

    let errors_path = if outcome.malformed.is_empty() {
        None
    } else {
        let path = output_dir.join(ERRORS_FILE);
        report::write_error_log(&path, &outcome.malformed)?;
        Some(path)
    };

    info!(
        "Processed {} link(s) ({} eligible, {} skipped) in {:.2}s",
        outcome.stats.candidates,
        outcome.stats.eligible,
        outcome.stats.skipped(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(RunSummary {
        report_path,
        modified_path,
        errors_path,
        stats: outcome.stats,
    })
}
