//! Bigram frequency counts for collections of short titles
//!
//! This code grew out of a one-off notebook that counted word pairs in article titles.
//! It is split into small modules so each pipeline stage can be swapped or tested on
//! its own, but the whole thing is still one forward pass: read rows, keep the English
//! ones, normalize the words, count adjacent pairs, write a table.


#[macro_use] extern crate log;
extern crate csv;
extern crate farmhash;
extern crate inflector;
extern crate unicode_segmentation;
extern crate whatlang;
#[cfg(test)] extern crate tempfile;
pub mod errors;
pub mod farm;
pub mod lang;
pub mod norm;
pub mod bigrams;
pub mod pipeline;
pub mod table;
