/// Example: Resolve a scripture passage into renderer-ready content.
///
/// This example demonstrates how to use the lection library to:
/// - Open a content library over the two local cache files
/// - Resolve a raw passage reference against the remote source
/// - Walk the labeled verse lines the renderer would lay onto slides
///
/// Usage:
///   cargo run --example resolve_passage bible_chapter_codes.csv responsive_reading.csv "John,3,16,3,18"

use lection::{ContentLibrary, FetchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <chapter_codes> <responsive_readings> <reference>",
            args[0]
        );
        std::process::exit(1);
    }

    let library = ContentLibrary::open(&args[1], &args[2], FetchConfig::default())?;

    let passage = library.resolve_scripture(&args[3])?;
    println!("{}", passage.title);
    println!("{}", "-".repeat(40));
    for line in &passage.lines {
        println!("{} - {}", line.label, line.text);
    }
    if passage.lines.is_empty() {
        println!("(the source returned no verses for this span)");
    }

    Ok(())
}
