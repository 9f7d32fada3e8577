pub extern crate pest;
pub extern crate pest_derive;

use pest_derive::Parser;

/// PEG for a single scientific-pitch note name.
#[derive(Parser)]
#[grammar = "musictheory/pitch.pest"]
pub struct PitchParser;
