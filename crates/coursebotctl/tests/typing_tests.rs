//! Typing reveal over real reply texts.

use coursebotctl::typing::TypingReveal;
use coursebotctl::views::help::{help_all, welcome};

#[test]
fn prefixes_grow_to_the_full_text() {
    let text = help_all();
    let steps: Vec<&str> = TypingReveal::new(&text, 3).collect();
    assert!(steps.len() > 10);
    for pair in steps.windows(2) {
        assert!(pair[1].starts_with(pair[0]));
        assert!(pair[1].len() > pair[0].len());
    }
    assert_eq!(steps.last().copied(), Some(text.as_str()));
}

#[test]
fn each_step_adds_at_most_chunk_words() {
    let text = welcome();
    let mut previous = "";
    for step in TypingReveal::new(text, 4) {
        let added = step[previous.len()..].split_whitespace().count();
        assert!(added <= 4, "{added} words in one step");
        previous = step;
    }
}

#[test]
fn restart_by_clone() {
    let reveal = TypingReveal::new("one two three", 1);
    let first: Vec<&str> = reveal.clone().collect();
    let second: Vec<&str> = reveal.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}
