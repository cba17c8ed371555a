//! # chatsplit CLI
//!
//! Command-line interface for the chatsplit library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsplit::cli::Args;
use chatsplit::config::ViewConfig;
use chatsplit::core::{AuthorIndex, ChatView, read_json};
use chatsplit::format::write_to_format;
use chatsplit::parser::{ParseReport, TranscriptParser};
use chatsplit::parsing::SkipReason;
use chatsplit::{ChatsplitError, MessageRecord};

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatsplitError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format = args.output_format();

    println!("📦 chatsplit v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if args.load {
        println!("📥 Mode:    Load results");
    } else {
        println!("💾 Output:  {}", output_path);
        println!("📄 Format:  {}", format);
    }
    println!();

    let (records, report) = if args.load {
        println!("⏳ Loading records...");
        let start = Instant::now();
        let records = read_json(&args.input)?;
        println!(
            "   Loaded {} records ({:.2}s)",
            records.len(),
            start.elapsed().as_secs_f64()
        );
        (records, None)
    } else {
        println!("⏳ Parsing transcript...");
        let start = Instant::now();
        let report = TranscriptParser::with_config(args.transcript_config())
            .parse_with_report(&args.input)?;
        println!(
            "   Found {} messages in {} chunks ({:.2}s)",
            report.records().len(),
            report.chunk_count(),
            start.elapsed().as_secs_f64()
        );
        (report.records().to_vec(), Some(report))
    };

    let authors = AuthorIndex::from_records(&records);

    if args.authors {
        print_authors(&authors);
    }

    if let Some(ref selected) = args.view {
        print_view(&records, &authors, selected, args.width);
    }

    if args.stats {
        match report {
            Some(ref report) => print_stats(report),
            None => println!("⏭️  No skip statistics for loaded results"),
        }
    }

    if !args.load {
        println!("💾 Writing {}...", format);
        let write_start = Instant::now();
        write_to_format(&records, &output_path, format, &args.output_config())?;
        println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
    }

    println!();
    if args.load {
        println!("✅ Done!");
    } else {
        println!("✅ Done! Output saved to {}", output_path);
    }
    println!(
        "   {} records, {} authors, {:.2}s total",
        records.len(),
        authors.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_authors(authors: &AuthorIndex) {
    println!();
    println!("👥 Authors ({}):", authors.len());
    for author in authors.iter() {
        println!("   {}", author);
    }
}

fn print_view(records: &[MessageRecord], authors: &AuthorIndex, selected: &str, width: usize) {
    println!();
    if !authors.contains(selected) {
        println!("⚠️  No messages from '{}'", selected);
    }
    println!("💬 Chat as {}:", selected);
    println!();
    let view = ChatView::for_author(records, selected, &ViewConfig::default());
    print!("{}", view.render_text(width));
    println!();
}

fn print_stats(report: &ParseReport) {
    let stats = report.stats();
    println!();
    println!("📊 Summary:");
    println!("   Chunks:    {}", stats.chunks);
    println!("   Records:   {}", stats.records);
    println!("   Skipped:   {}", stats.skipped_total());
    for reason in SkipReason::all() {
        let count = stats.skipped_for(*reason);
        if count > 0 {
            println!("     {:<28} {}", reason.code(), count);
        }
    }
    println!("   Accepted:  {:.1}%", stats.acceptance_ratio());
    println!();
}
