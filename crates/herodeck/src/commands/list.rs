use anyhow::Result;
use colored::Colorize;

use crate::deck;

pub fn run() -> Result<()> {
    let registry = deck::registry()?;
    println!("{}", deck::COURSE_TITLE.bold());
    println!();
    for (i, slide) in registry.iter().enumerate() {
        println!(
            "  {}  {} {}",
            format!("{:>3}", i + 1).dimmed(),
            format!("{:<16}", slide.id).cyan(),
            slide.title
        );
    }
    println!();
    println!("{}", format!("{} slides", registry.len()).dimmed());
    Ok(())
}
