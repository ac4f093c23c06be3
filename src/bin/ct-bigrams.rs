//! Bigram counter for title collections
//!
//! This pipeline takes a CSV of free-text titles, keeps the rows a language
//! detector classifies as English, normalizes the words (alphabetic only,
//! lowercased, singularized), and counts every adjacent word pair across the
//! whole collection.
//!
//! The output is a CSV with three columns (word1, word2, n), one row per
//! distinct pair, ranked by count with ties in lexicographic order.
//!

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate catawba;

use std::path::Path;

use catawba::errors::*;
use catawba::bigrams::Accumulator;
use catawba::lang::Whatlang;
use catawba::norm::Normalizer;
use catawba::pipeline;
use catawba::table;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<titles> 'CSV file containing one title per row'")
        .arg_from_usage("<counts> 'CSV file in which to store the bigram counts'")
        .arg_from_usage("-c, --column=[column] 'name of the title column (default: names)'")
        .get_matches();
    let column = args.value_of("column").unwrap_or("names");

    let source = table::TitleSource::open(Path::new(args.value_of("titles").unwrap()), column)?;
    let mut accum = Accumulator::new();
    let (accepted, seen) = pipeline::run(source, &Whatlang, &Normalizer::new(), &mut accum);
    info!("{} of {} titles were English; {} pairs over {} distinct bigrams",
        accepted, seen, accum.total(), accum.distinct());

    table::write_counts(Path::new(args.value_of("counts").unwrap()), &accum.into_rows())?;
    Ok(())
}
