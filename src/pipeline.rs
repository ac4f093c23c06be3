//! The single forward pass over the title rows
//!
//! No retries, no backtracking: each row is classified, the English ones are
//! normalized and folded into the accumulator, and everything else is dropped
//! on the floor. The caller freezes the accumulator afterwards.
use lang::LanguageId;
use norm::{Normalizer, Tokenizer, Singularize};
use bigrams::Accumulator;

/// Run every title through filter, normalizer and accumulator.
///
/// Returns how many rows were accepted as English out of how many were seen.
pub fn run<I, L, T, S>(titles: I,
                       language: &L,
                       normalizer: &Normalizer<T, S>,
                       accum: &mut Accumulator)
                       -> (usize, usize)
    where I: Iterator<Item = String>,
          L: LanguageId,
          T: Tokenizer,
          S: Singularize
{
    let mut seen = 0;
    let mut accepted = 0;
    for title in titles {
        seen += 1;
        if seen % 10000 == 0 {
            info!("Finished {}, this one is: {:?}",
                seen,
                &title.chars().take(100).collect::<String>());
        }
        if !language.is_english(&title) {
            debug!("Skipping non-English title: {:?}", title);
            continue;
        }
        accepted += 1;
        accum.observe(&normalizer.normalize(&title));
    }
    (accepted, seen)
}
