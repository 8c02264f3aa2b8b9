//! Typing reveal
//!
//! Replies are shown a few words at a time. `TypingReveal` yields growing
//! prefixes of the text and never sleeps; `play` writes them out with the
//! configured pauses.

use coursebot_common::config::TypingSettings;
use regex::Regex;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid word pattern"));

/// Growing prefixes of `text`, one per `chunk_words` words.
///
/// Whitespace is kept as written, so line breaks and bullets survive. A
/// prefix ends right after a chunk's last word; whitespace that follows
/// opens the next chunk. The last prefix is always the whole text.
#[derive(Debug, Clone)]
pub struct TypingReveal<'a> {
    text: &'a str,
    chunk_words: usize,
    offset: usize,
}

impl<'a> TypingReveal<'a> {
    pub fn new(text: &'a str, chunk_words: usize) -> Self {
        Self {
            text,
            chunk_words: chunk_words.max(1),
            offset: 0,
        }
    }
}

impl<'a> Iterator for TypingReveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.offset >= self.text.len() {
            return None;
        }
        let end = WORD
            .find_iter(&self.text[self.offset..])
            .nth(self.chunk_words - 1)
            .map_or(self.text.len(), |m| self.offset + m.end());
        self.offset = end;
        Some(&self.text[..end])
    }
}

impl FusedIterator for TypingReveal<'_> {}

/// Write `text` to `out` chunk by chunk, then a newline.
///
/// With typing disabled the text is written in one go without pauses.
pub fn play<W: Write + ?Sized>(
    out: &mut W,
    text: &str,
    settings: &TypingSettings,
) -> io::Result<()> {
    if !settings.enabled {
        writeln!(out, "{}", text)?;
        return out.flush();
    }

    if settings.pre_delay_ms > 0 {
        thread::sleep(Duration::from_millis(settings.pre_delay_ms));
    }
    let chunk_delay = Duration::from_millis(settings.chunk_delay_ms);
    let mut shown = 0;
    for (idx, prefix) in TypingReveal::new(text, settings.effective_chunk_words()).enumerate() {
        if idx > 0 && !chunk_delay.is_zero() {
            thread::sleep(chunk_delay);
        }
        out.write_all(prefix[shown..].as_bytes())?;
        out.flush()?;
        shown = prefix.len();
    }
    writeln!(out)?;
    out.flush()
}
