// Colored terminal output for a scoring report.
//
// Renders the weight table, the best document and its score, matched
// keywords, and one mnemonic per keyword. main.rs delegates here.

use colored::Colorize;

use super::{format_score, truncate_chars};
use crate::error::PipelineError;
use crate::pipeline::{document_label, Report};

pub const NO_MATCH_MESSAGE: &str = "No direct matches found in the documents.";
pub const NO_MATCH_HINT: &str = "Try a question that shares words with your documents.";

/// Display the full report.
pub fn display_report(report: &Report) {
    display_matrix(report);

    println!("\n{}", "=== Result ===".bold());
    println!(
        "  Most relevant document ({}): {}",
        report.best_label(),
        report.best_document.green().bold()
    );
    println!("  Similarity: {}", format_score(report.best_score).cyan());

    println!("\n{}", "=== Keywords found ===".bold());
    if report.has_matches() {
        println!("  {}", report.keywords.join(", "));
    } else {
        println!("  {}", NO_MATCH_MESSAGE.dimmed());
    }

    if report.has_matches() {
        println!("\n{}", "=== Sentences to remember the keywords ===".bold());
        for m in &report.mnemonics {
            println!("  — {}", m.sentence);
        }
    } else {
        println!("\n  {}", NO_MATCH_HINT.yellow());
    }
    println!();
}

/// Display the TF-IDF table: one row per document, one column per stem.
pub fn display_matrix(report: &Report) {
    let matrix = &report.matrix;
    println!(
        "\n{}",
        format!(
            "=== TF-IDF matrix ({} documents x {} stems) ===",
            matrix.n_documents(),
            matrix.vocabulary.len()
        )
        .bold()
    );
    println!();

    let widths: Vec<usize> = matrix.vocabulary.iter().map(|s| s.len().max(5)).collect();

    let header: Vec<String> = matrix
        .vocabulary
        .iter()
        .zip(&widths)
        .map(|(stem, &w)| format!("{stem:>w$}"))
        .collect();
    println!("  {:<8} {}", "", header.join("  ").dimmed());

    for (i, row) in matrix.rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(weight, &w)| {
                let cell = format!("{:>w$}", format_score(*weight));
                if *weight > 0.0 {
                    cell.normal().to_string()
                } else {
                    cell.dimmed().to_string()
                }
            })
            .collect();
        let label = document_label(i);
        let label = if i == report.best_index {
            label.green().bold()
        } else {
            label.normal()
        };
        println!("  {:<8} {}", label, cells.join("  "));
    }

    println!();
    for (i, (doc, score)) in report.documents.iter().zip(&report.scores).enumerate() {
        println!(
            "  {:<8} [sim: {}] {}",
            document_label(i),
            format_score(*score),
            truncate_chars(doc, 60).dimmed()
        );
    }
}

/// Show a pipeline refusal as a warning rather than an error.
pub fn display_warning(err: &PipelineError) {
    eprintln!("{} {}", "Warning:".yellow().bold(), err);
}
