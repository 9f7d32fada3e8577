//! Conversion between scientific pitch notation ("C#4", "Ebb4", "B#3") and
//! integer pitch indices, where `C-1` is 0 and middle C is 60.
//!
//! ```
//! assert_eq!(musictheory::note_number("Db4"), Ok(61));
//! assert_eq!(musictheory::spell_note(60, 'B').as_deref(), Ok("B#3"));
//! ```

pub mod musictheory {
    pub mod error;
    pub mod ffi;
    pub mod parser;
    pub mod pitch;
    pub mod pitchparser;
    pub mod speller;
}

pub use crate::musictheory::error::{ErrorKind, NoteError, Result};
pub use crate::musictheory::parser::{note_number, parse_note, parse_note_list};
pub use crate::musictheory::pitch::{Accidental, Letter, Note, Pitch, PitchClass};
pub use crate::musictheory::speller::{enharmonics, spell, spell_note};
