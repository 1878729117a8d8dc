//! # chatlens CLI
//!
//! Command-line rendering layer for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, ReportFormat};
use chatlens::config::ParserConfig;
use chatlens::prelude::*;
use chatlens::stats::Report;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("👤 User:    {}", args.user);
    println!("📄 Format:  {}", args.format);
    println!();

    // Step 1: Parse
    let config = ParserConfig::new().with_skip_invalid(!args.strict);
    let preprocessor = Preprocessor::with_config(config);

    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let bytes = fs::read(&args.input)?;
    let transcript = preprocessor.preprocess_bytes(&bytes)?;
    println!(
        "   Found {} messages ({:.2}s)",
        transcript.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if transcript.skipped_lines() > 0 {
        println!(
            "   Skipped {} lines with unparseable timestamps",
            transcript.skipped_lines()
        );
    }
    println!();

    if args.list_users {
        println!("👥 Senders:");
        println!("   Overall");
        for sender in transcript.senders() {
            println!("   {sender}");
        }
        return Ok(());
    }

    // Step 2: Load resources
    let custom_lexicon = match &args.stopwords {
        Some(path) => Some(Lexicon::from_file(path)?),
        None => None,
    };
    let lexicon: &Lexicon = custom_lexicon.as_ref().unwrap_or_else(|| Lexicon::builtin());

    // Step 3: Aggregate
    let selection = Selection::from_label(&args.user);
    if let Selection::User(name) = &selection {
        if !transcript.senders().iter().any(|s| s == name) {
            println!("⚠️  No messages from '{}' in this export", name);
        }
    }
    let report = Report::build(selection, &transcript, lexicon);

    // Step 4: Render
    match args.format {
        ReportFormat::Text => render_text(&report),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn render_text(report: &Report) {
    println!("📈 Top Statistics for {}", report.selection);
    println!("   Messages:     {}", report.stats.messages);
    println!("   Words:        {}", report.stats.words);
    println!("   Media shared: {}", report.stats.media);
    println!("   Links shared: {}", report.stats.links);

    println!();
    println!("📅 Monthly Timeline");
    for month in &report.monthly_timeline {
        println!("   {:<16} {}", month.label, month.messages);
    }

    println!();
    println!("📅 Daily Timeline");
    match (report.daily_timeline.first(), report.daily_timeline.last()) {
        (Some(first), Some(last)) => {
            println!(
                "   {} active days between {} and {}",
                report.daily_timeline.len(),
                first.date,
                last.date
            );
            if let Some(peak) = report.daily_timeline.iter().max_by_key(|d| d.messages) {
                println!("   Busiest day: {} ({} messages)", peak.date, peak.messages);
            }
        }
        _ => println!("   (no messages)"),
    }

    println!();
    println!("🗺️  Activity Map");
    println!("   Most busy day:");
    for day in &report.week_activity {
        println!("      {:<10} {}", day.day, day.messages);
    }
    println!("   Most busy month:");
    for month in report.month_activity.iter().filter(|m| m.messages > 0) {
        println!("      {:<10} {}", month.month, month.messages);
    }

    println!();
    println!("📅 Weekly Activity Heatmap (hour periods)");
    for (day, row) in report.heatmap.days().iter().zip(report.heatmap.cells()) {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>3}")).collect();
        println!("   {:<10} {}", day, cells.join(" "));
    }

    if let Some(busy) = &report.busy_users {
        println!();
        println!("👥 Most Busy Users");
        for user in &busy.top {
            println!("   {:<20} {}", user.user, user.messages);
        }
        for share in &busy.shares {
            println!("   {:<20} {:.2}%", share.user, share.percent);
        }
    }

    println!();
    println!("📝 Most Common Words");
    if report.common_words.is_empty() {
        println!("   No words found for this user.");
    } else {
        for word in &report.common_words {
            println!("   {:<20} {}", word.word, word.count);
        }
    }

    println!();
    println!("☁️  Word Cloud");
    match &report.wordcloud {
        Some(cloud) => println!("   {} words weighted", cloud.len()),
        None => println!("   Not enough data to generate a word cloud."),
    }

    println!();
    println!("😊 Emoji Analysis");
    if report.emoji.is_empty() {
        println!("   Not enough data for emoji analysis.");
    } else {
        for emoji in &report.emoji {
            println!("   {:<4} {}", emoji.emoji, emoji.count);
        }
    }
}
