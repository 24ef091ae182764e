// Colored terminal output for keyword lists, search results, and model info.
//
// main.rs delegates all human-readable rendering here; --json output
// bypasses this module entirely.

use colored::Colorize;

use crate::keywords::KeywordResult;
use crate::model::VocabularyModel;

/// Display ranked keywords for one document as a bar chart.
pub fn display_keywords(source: &str, keywords: &KeywordResult) {
    println!(
        "\n{}",
        format!(
            "=== Keywords for {} ({} found) ===",
            super::truncate_chars(source, 60),
            keywords.len()
        )
        .bold()
    );

    if keywords.is_empty() {
        println!(
            "  {}",
            "No known vocabulary terms in this document.".dimmed()
        );
        return;
    }
    println!();

    let bar_width: usize = 20;

    for (i, (term, score)) in keywords.iter().enumerate() {
        // Scores are L2-normalized, so 1.0 is the ceiling
        let filled = ((score * bar_width as f64).round() as usize).min(bar_width);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));

        let colored_bar = if *score >= 0.25 {
            bar.bright_green()
        } else if *score >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<32} {} {:.3}",
            i + 1,
            super::truncate_chars(term, 32).bold(),
            colored_bar,
            score
        );
    }
    println!();
}

/// Display vocabulary search matches.
pub fn display_search_results(query: &str, results: &[String], limit: usize) {
    println!(
        "\n{}",
        format!("=== Vocabulary matches for \"{query}\" ===").bold()
    );

    if results.is_empty() {
        println!("  {}", "No matching terms.".dimmed());
        return;
    }

    for term in results {
        println!("  {term}");
    }

    if results.len() == limit {
        println!(
            "\n  {}",
            format!("Showing the first {limit} matches.").dimmed()
        );
    }
}

/// Display summary statistics for the loaded model.
pub fn display_model_info(model: &VocabularyModel, model_dir: &str) {
    let (min_n, max_n) = model.vectorizer().ngram_range;
    let norm = match model.idf().norm {
        Some(norm) => format!("{norm:?}"),
        None => "none".to_string(),
    };
    let lexicon = model.lexicon();
    let stop_words = match &lexicon.stop_words {
        Some(words) => format!("{} (from lexicon)", words.len()),
        None => "stop-words crate English list".to_string(),
    };

    println!("\n{}", "=== Vocabulary Model ===".bold());
    println!("  Directory:   {}", model_dir);
    println!("  Features:    {}", model.n_features().to_string().bold());
    println!("  N-grams:     {min_n}..={max_n}");
    println!("  Norm:        {norm}");
    println!(
        "  TF scaling:  {}",
        if model.idf().sublinear_tf { "sublinear" } else { "raw counts" }
    );
    println!("  Stop words:  {stop_words}");
    println!(
        "  Lemmas:      {} listed, {} irregular forms",
        lexicon.lemmas.len(),
        lexicon.exceptions.len()
    );
}
