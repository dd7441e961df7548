use anyhow::Result;
use console::{style, Emoji};

use crate::catalog::{find_relevant_courses, sample_catalog};

static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");

pub fn run_courses(query: &str, json: bool) -> Result<()> {
    let matches = find_relevant_courses(query, sample_catalog());

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matching courses for: {}", style(query).italic());
        return Ok(());
    }

    println!(
        "\n{}Found {} courses for: {}\n",
        BOOKS,
        style(matches.len()).cyan(),
        style(query).yellow().bold()
    );

    for course in matches {
        println!(
            "  {} — {} ({}, {} credits)",
            style(&course.code).green().bold(),
            course.title,
            course.department,
            course.credits
        );
    }
    println!();

    Ok(())
}
