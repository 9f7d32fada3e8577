//! Pitch index to note name on a requested letter (enharmonic respelling).

use itertools::Itertools;

use crate::musictheory::error::Result;
use crate::musictheory::pitch::{Accidental, Letter, Note, Pitch};

/// Spell `pitch` on `letter` with the smallest |accidental|.
///
/// The letter's natural sits at `(octave + 1) * 12 + natural_semitone`. The
/// distance from the natural just below (or at) the pitch is `r` in `0..12`,
/// so the only candidates worth comparing are that octave with `+r` and the
/// next one up with `r - 12`. A tie (`r == 6`) keeps the lower octave.
pub fn spell(pitch: Pitch, letter: Letter) -> Note {
    // i128 so that offsets near i64::MIN/MAX cannot overflow
    let offset = i128::from(pitch.0) - i128::from(letter.natural_semitone());
    let below = offset.div_euclid(12) - 1;
    let r = offset.rem_euclid(12);

    // strictly fewer accidentals needed to move up an octave
    let (octave, accidental) = if (r - 12).abs() < r {
        (below + 1, r - 12)
    } else {
        (below, r)
    };

    // |offset / 12| <= i64::MAX / 12 and |accidental| <= 6
    Note::new(letter, Accidental(accidental as i64), octave as i64)
}

/// Name of `pitch_index` spelled on `letter`; `spell_note(60, 'B') == Ok("B#3")`.
pub fn spell_note(pitch_index: i64, letter: char) -> Result<String> {
    let letter = Letter::try_from(letter)?;
    Ok(spell(Pitch(pitch_index), letter).to_string())
}

/// Spellings of `pitch` on all seven letters, fewest accidentals first.
pub fn enharmonics(pitch: Pitch) -> Vec<Note> {
    Letter::ALL
        .iter()
        .map(|&letter| spell(pitch, letter))
        .sorted_by_key(|note| (note.accidental.0.unsigned_abs(), note.letter))
        .collect()
}
