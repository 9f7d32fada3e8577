use thiserror::Error;

pub type Result<T> = std::result::Result<T, NoteError>;

/// Category of a [`NoteError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedNoteName,
    InvalidLetter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The input is not `<Letter><#...|b...><Octave>`, or its index does not fit in 64 bits.
    #[error("malformed note name {name:?}: {reason}")]
    MalformedNoteName { name: String, reason: String },

    #[error("invalid letter {0:?}, expected one of A-G")]
    InvalidLetter(char),
}

impl NoteError {
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        NoteError::MalformedNoteName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::MalformedNoteName { .. } => ErrorKind::MalformedNoteName,
            NoteError::InvalidLetter(_) => ErrorKind::InvalidLetter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            NoteError::malformed("H4", "expected a letter A-G").to_string(),
            "malformed note name \"H4\": expected a letter A-G"
        );
        assert_eq!(
            NoteError::InvalidLetter('H').to_string(),
            "invalid letter 'H', expected one of A-G"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(NoteError::malformed("", "empty").kind(), ErrorKind::MalformedNoteName);
        assert_eq!(NoteError::InvalidLetter('x').kind(), ErrorKind::InvalidLetter);
    }
}
