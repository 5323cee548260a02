/// Example: Read a weekly service plan and resolve its responsive reading.
///
/// This example demonstrates how to use the lection library to:
/// - Load the week's key-value service plan
/// - Print the assignments the deck build would consume
/// - Resolve the plan's responsive-reading index into title and lines
///
/// Usage:
///   cargo run --example service_plan worship_info.csv bible_chapter_codes.csv responsive_reading.csv

use lection::plan::ServiceInfo;
use lection::{ContentLibrary, FetchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <worship_info> <chapter_codes> <responsive_readings>",
            args[0]
        );
        std::process::exit(1);
    }

    let info = ServiceInfo::load(&args[1])?;
    println!("Service plan ({} entries)", info.len());
    println!("{}", "-".repeat(40));
    if let Some(leader) = info.prayer_leader() {
        println!("  prayer:   {leader}");
    }
    if let Some(leader) = info.offering_leader() {
        println!("  offering: {leader}");
    }
    if let (Some(reference), Some(reader)) = (info.scripture_reference(), info.scripture_reader()) {
        println!("  lesson:   {reference} (read by {reader})");
    }
    if let Some(sermon) = info.sermon()? {
        println!("  sermon:   \"{}\" by {}", sermon.title, sermon.speaker);
    }

    if let Some(index) = info.reading_index() {
        let library = ContentLibrary::open(&args[2], &args[3], FetchConfig::default())?;
        let reading = library.resolve_responsive_reading(index)?;

        println!();
        println!("{}", reading.title);
        println!("{}", "-".repeat(40));
        for (i, line) in reading.lines.iter().enumerate() {
            let voice = if i % 2 == 0 { "leader" } else { "people" };
            println!("  [{voice}] {line}");
        }
    }

    Ok(())
}
