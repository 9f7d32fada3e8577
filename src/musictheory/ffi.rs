//! C ABI. See `include/musictheory.h`.

use std::ffi::{CStr, CString};
use std::ptr;

use crate::musictheory::parser::note_number;
use crate::musictheory::speller::spell_note;

/// Given a string describing a note in scientific pitch (e.g. "C#5", "Dbb4",
/// "E0"), writes its unbounded MIDI note number to `out` and returns true.
///
/// Returns false, leaving `out` untouched, if `note` is null, not UTF-8,
/// malformed, or its number does not fit in `intptr_t`.
///
/// # Safety
///
/// `note` must be null or point to a NUL-terminated string, and `out` must be
/// null or valid for a write of one `intptr_t`.
#[no_mangle]
pub unsafe extern "C" fn musictheory_note_number(
    note: *const libc::c_char,
    out: *mut libc::intptr_t,
) -> bool {
    if note.is_null() || out.is_null() {
        return false;
    }
    let Ok(s) = CStr::from_ptr(note).to_str() else {
        return false;
    };
    match note_number(s).ok().and_then(|n| libc::intptr_t::try_from(n).ok()) {
        Some(n) => {
            *out = n;
            true
        }
        None => false,
    }
}

/// Spells `number` on `letter` (one of 'A'..'G'), e.g. (61, 'D') -> "Db4".
///
/// Returns null for any other letter. A non-null result must be released with
/// [`musictheory_string_free`].
#[no_mangle]
pub extern "C" fn musictheory_spell_note(
    number: libc::intptr_t,
    letter: libc::c_char,
) -> *mut libc::c_char {
    let letter = char::from(letter as u8);
    let name = spell_note(number as i64, letter).ok().and_then(|name| CString::new(name).ok());
    match name {
        Some(name) => name.into_raw(),
        None => ptr::null_mut(),
    }
}

/// Releases a string returned by [`musictheory_spell_note`]. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from `musictheory_spell_note` that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn musictheory_string_free(s: *mut libc::c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
