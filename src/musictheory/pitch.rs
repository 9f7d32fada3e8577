use std::fmt;
use std::str::FromStr;

use crate::musictheory::error::{NoteError, Result};
use crate::musictheory::{parser, speller};

/// Staff letter of a note name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Staff order, starting from C.
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitone of the unaltered letter within its octave, C = 0.
    pub fn natural_semitone(self) -> i64 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = NoteError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            other => Err(NoteError::InvalidLetter(other)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Signed accidental count: sharps positive, flats negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Accidental(pub i64);

impl Accidental {
    pub const NATURAL: Accidental = Accidental(0);
    pub const SHARP: Accidental = Accidental(1);
    pub const FLAT: Accidental = Accidental(-1);
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = if self.0 > 0 { '#' } else { 'b' };
        for _ in 0..self.0.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Position within the octave, 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_natural(&self) -> bool {
        matches!(self.0, 0 | 2 | 4 | 5 | 7 | 9 | 11)
    }

    pub fn is_sharpable(&self) -> bool {
        matches!(self.0, 1 | 6 | 8)
    }

    pub fn is_flatable(&self) -> bool {
        matches!(self.0, 3 | 10)
    }

    /// Letter used by the conventional spelling of this pitch class.
    pub fn default_letter(&self) -> Letter {
        match self.0 {
            0 | 1 => Letter::C,
            2 => Letter::D,
            3 | 4 => Letter::E,
            5 | 6 => Letter::F,
            7 | 8 => Letter::G,
            9 => Letter::A,
            10 | 11 => Letter::B,
            _ => unreachable!("Unknown pitch class {}", self.0),
        }
    }
}

/// Pitch index in semitones; `C-1` is 0 and middle C (`C4`) is 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch(pub i64);

impl Pitch {
    pub fn pitch_class(&self) -> PitchClass {
        // rem_euclid keeps negative indices in 0..12
        PitchClass(self.0.rem_euclid(12) as u8)
    }

    /// Spelling of this pitch on `letter` with the fewest accidentals.
    pub fn spell(&self, letter: Letter) -> Note {
        speller::spell(*self, letter)
    }

    /// Naturals on white keys, C# F# G# and Eb Bb on black keys.
    pub fn default_spelling(&self) -> Note {
        let pitch_class = self.pitch_class();
        let note = self.spell(pitch_class.default_letter());
        debug_assert!(
            (pitch_class.is_natural() && note.accidental == Accidental::NATURAL)
                || (pitch_class.is_sharpable() && note.accidental == Accidental::SHARP)
                || (pitch_class.is_flatable() && note.accidental == Accidental::FLAT)
        );
        note
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.default_spelling())
    }
}

/// A spelled note: letter, accidental count and octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: i64,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental, octave: i64) -> Self {
        Note {
            letter,
            accidental,
            octave,
        }
    }

    /// `(octave + 1) * 12 + natural_semitone + accidental`, or `None` past 64 bits.
    pub fn pitch(&self) -> Option<Pitch> {
        let index = (i128::from(self.octave) + 1) * 12
            + i128::from(self.letter.natural_semitone())
            + i128::from(self.accidental.0);
        i64::try_from(index).ok().map(Pitch)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental, self.octave)
    }
}

impl FromStr for Note {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_note(s)
    }
}
