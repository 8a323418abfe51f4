//! Layout of text on the character grid of the display.
//!
//! The panel is 128×64 pixels and fits 15 columns of 8 rows. Text is cut
//! into lines every 15 characters regardless of words. A `\n` forces a line
//! break. Whatever does not fit into 8 rows is dropped.

pub const COLUMNS: usize = 15;
pub const ROWS: usize = 8;

/// Shows text on the display, replacing whatever was there before.
pub trait Display {
    fn show(&mut self, text: &str);
}

impl<T: Display + ?Sized> Display for &mut T {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

pub fn lines(text: &str) -> Lines<'_> {
    Lines {
        rest: text,
        emitted: 0,
    }
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    emitted: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= ROWS || self.rest.is_empty() {
            return None;
        }

        let (line, rest) = split_line(self.rest);
        self.rest = rest;
        self.emitted += 1;
        Some(line)
    }
}

fn split_line(text: &str) -> (&str, &str) {
    let mut chars = text.char_indices();

    for _ in 0..COLUMNS {
        match chars.next() {
            Some((i, '\n')) => return (&text[..i], &text[i + 1..]),
            Some(_) => (),
            None => return (text, ""),
        }
    }

    match chars.next() {
        // A break right after a full line would otherwise leave an empty row.
        Some((i, '\n')) => (&text[..i], &text[i + 1..]),
        Some((i, _)) => (&text[..i], &text[i..]),
        None => (text, ""),
    }
}
