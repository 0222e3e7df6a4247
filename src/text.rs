use std::{fmt, ops::Deref};

type SmallText = arrayvec::ArrayString<[u8; 22]>;

/// Text payload of a document leaf.
#[derive(Clone)]
pub enum Text<'a> {
    Owned(Box<str>),
    Borrowed(&'a str),
    Small(SmallText),
}

impl Text<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Text::Owned(s) => s,
            Text::Borrowed(s) => s,
            Text::Small(s) => s,
        }
    }

    /// Column width of the text, counted in characters.
    pub(crate) fn width(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl Deref for Text<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<T> From<T> for Text<'_>
where
    T: fmt::Display,
{
    fn from(value: T) -> Self {
        use std::fmt::Write;
        let mut buf = FmtText::Small(SmallText::new());
        write!(buf, "{value}").unwrap();
        match buf {
            FmtText::Small(b) => Text::Small(b),
            FmtText::Large(b) => Text::Owned(b.into()),
        }
    }
}

enum FmtText {
    Small(SmallText),
    Large(String),
}

impl fmt::Write for FmtText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            FmtText::Small(buf) => {
                if buf.try_push_str(s).is_err() {
                    let mut new_str = String::with_capacity(buf.len() + s.len());
                    new_str.push_str(buf);
                    new_str.push_str(s);
                    *self = FmtText::Large(new_str);
                }
            }
            FmtText::Large(buf) => buf.push_str(s),
        }
        Ok(())
    }
}

macro_rules! make_spaces {
    () => { "" };
    ($s: tt $($t: tt)*) => { concat!("          ", make_spaces!($($t)*)) };
}

pub(crate) const SPACES: &str = make_spaces!(,,,,,,,,,,);

/// Append `count` spaces, chunked through [`SPACES`].
pub(crate) fn push_spaces(out: &mut String, mut count: usize) {
    while count > 0 {
        let chunk = SPACES.len().min(count);
        out.push_str(&SPACES[..chunk]);
        count -= chunk;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_text_stays_inline() {
        let text = Text::from(42u32);
        assert!(matches!(text, Text::Small(_)));
        assert_eq!(text.as_str(), "42");
    }

    #[test]
    fn long_text_spills_to_heap() {
        let text = Text::from("a very long string that cannot stay inline");
        assert!(matches!(text, Text::Owned(_)));
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(Text::Borrowed("abc").width(), 3);
        assert_eq!(Text::Borrowed("ÅÄÖ").width(), 3);
    }

    #[test]
    fn spaces_chunking() {
        let mut s = String::new();
        push_spaces(&mut s, SPACES.len() + 3);
        assert_eq!(s.len(), SPACES.len() + 3);
        assert!(s.bytes().all(|b| b == b' '));
    }
}
