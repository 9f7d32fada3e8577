//! Note name to pitch index.
//!
//! Grammar (see `pitch.pest`): an uppercase letter `A`-`G`, then either a run
//! of `#` or a run of `b` (never both), then a signed decimal octave.

use crate::musictheory::error::{NoteError, Result};
use crate::musictheory::pitch::{Accidental, Letter, Note, Pitch};
use crate::musictheory::pitchparser::pest::Parser;
use crate::musictheory::pitchparser::{PitchParser, Rule};
use pest::error::{ErrorVariant, InputLocation};

/// Parse one note name such as `"C#4"`, `"Ebb4"` or `"C-1"`.
pub fn parse_note(s: &str) -> Result<Note> {
    if s.is_empty() {
        return Err(NoteError::malformed(s, "empty note name"));
    }

    let pitch = PitchParser::parse(Rule::NOTE_NAME, s)
        .map_err(|e| NoteError::malformed(s, reason_for(s, &e)))?
        .next()
        .filter(|pair| pair.as_rule() == Rule::PITCH)
        .ok_or_else(|| NoteError::malformed(s, "no note found"))?;

    let mut letter = None;
    let mut accidental = Accidental::NATURAL;
    let mut octave = None;
    for part in pitch.into_inner() {
        match part.as_rule() {
            Rule::LETTER => {
                let c = part.as_str().chars().next().unwrap_or_default();
                let parsed = Letter::try_from(c)
                    .map_err(|_| NoteError::malformed(s, "expected a letter A-G"))?;
                letter = Some(parsed);
            }
            Rule::SHARPS => accidental = Accidental(run_length(part.as_str())),
            Rule::FLATS => accidental = Accidental(-run_length(part.as_str())),
            Rule::OCTAVE => {
                octave = Some(
                    part.as_str()
                        .parse::<i64>()
                        .map_err(|_| NoteError::malformed(s, "octave out of range"))?,
                );
            }
            rule => return Err(NoteError::malformed(s, format!("unexpected {:?}", rule))),
        }
    }

    match (letter, octave) {
        (Some(letter), Some(octave)) => Ok(Note::new(letter, accidental, octave)),
        (None, _) => Err(NoteError::malformed(s, "expected a letter A-G")),
        (_, None) => Err(NoteError::malformed(s, "missing octave")),
    }
}

/// Pitch index of a note name; `note_number("C4") == Ok(60)`.
pub fn note_number(s: &str) -> Result<i64> {
    let note = parse_note(s)?;
    note.pitch()
        .map(|Pitch(index)| index)
        .ok_or_else(|| NoteError::malformed(s, "pitch index out of range"))
}

/// Parse whitespace-separated note names. The first malformed name fails the list.
pub fn parse_note_list(s: &str) -> Result<Vec<Note>> {
    s.split_whitespace().map(parse_note).collect()
}

fn run_length(run: &str) -> i64 {
    run.chars().count() as i64
}

// pest reports what it expected; translate the common cases into words.
fn reason_for(s: &str, e: &pest::error::Error<Rule>) -> String {
    let position = match e.location {
        InputLocation::Pos(p) => p,
        InputLocation::Span((start, _)) => start,
    };
    // EOI is only attempted once a whole note has matched
    let after_note = matches!(
        &e.variant,
        ErrorVariant::ParsingError { positives, .. } if positives.contains(&Rule::EOI)
    );
    let rest = s.get(position..).unwrap_or_default();
    if position == 0 {
        "expected a letter A-G".to_string()
    } else if after_note {
        format!("unexpected trailing characters {:?}", rest)
    } else if rest.is_empty() {
        "missing octave".to_string()
    } else if rest.starts_with('#') || rest.starts_with('b') {
        "sharps and flats cannot be mixed".to_string()
    } else {
        format!("invalid octave {:?}", rest)
    }
}
