use std::ffi::{CStr, CString};

use musictheory::musictheory::ffi::{
    musictheory_note_number, musictheory_spell_note, musictheory_string_free,
};

const FIXTURES: [(isize, char, &str); 15] = [
    (0, 'C', "C-1"),
    (12, 'C', "C0"),
    (24, 'C', "C1"),
    (36, 'C', "C2"),
    (48, 'C', "C3"),
    (60, 'B', "B#3"),
    (60, 'C', "C4"),
    (61, 'C', "C#4"),
    (61, 'D', "Db4"),
    (62, 'C', "C##4"),
    (62, 'D', "D4"),
    (62, 'E', "Ebb4"),
    (63, 'E', "Eb4"),
    (64, 'E', "E4"),
    (72, 'C', "C5"),
];

fn number(name: &str) -> Option<isize> {
    number_of_bytes(name.as_bytes())
}

fn number_of_bytes(name: &[u8]) -> Option<isize> {
    let name = CString::new(name).unwrap();
    let mut out: isize = -999;
    let ok = unsafe { musictheory_note_number(name.as_ptr(), &mut out) };
    if ok {
        Some(out)
    } else {
        assert_eq!(out, -999, "out must be untouched on failure");
        None
    }
}

fn spell(number: isize, letter: char) -> Option<String> {
    let ptr = musictheory_spell_note(number, letter as u8 as libc::c_char);
    if ptr.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { musictheory_string_free(ptr) };
    Some(name)
}

#[test]
fn note_number() {
    for (expected, _, name) in FIXTURES {
        assert_eq!(number(name), Some(expected), "{}", name);
    }
}

#[test]
fn spell_note() {
    for (n, letter, expected) in FIXTURES {
        assert_eq!(spell(n, letter).as_deref(), Some(expected), "{} {}", n, letter);
    }
}

#[test]
fn malformed_names_fail() {
    for name in ["", "H4", "C#", "C#b4"] {
        assert_eq!(number(name), None, "{:?}", name);
    }
}

#[test]
fn non_utf8_name_fails() {
    assert_eq!(number_of_bytes(&[b'C', 0xFF, b'4']), None);
}

#[test]
fn out_of_range_number_fails() {
    assert_eq!(number(&format!("C{}", i64::MAX)), None);
    assert_eq!(number(&format!("C{}", i64::MIN)), None);
}

#[test]
fn null_arguments_fail() {
    let mut out: isize = 0;
    assert!(!unsafe { musictheory_note_number(std::ptr::null(), &mut out) });
    let name = CString::new("C4").unwrap();
    assert!(!unsafe { musictheory_note_number(name.as_ptr(), std::ptr::null_mut()) });
    unsafe { musictheory_string_free(std::ptr::null_mut()) };
}

#[test]
fn invalid_letter_is_null() {
    assert_eq!(spell(60, 'H'), None);
}
