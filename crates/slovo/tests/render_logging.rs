//! Tests for the warnings emitted while rendering.
//!
//! The logger is process-wide, so this file holds a single test.

mod common;

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use slovo::{Template, variables};

struct Capture {
    messages: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.messages.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    messages: Mutex::new(Vec::new()),
};

#[test]
fn only_referenced_variables_are_looked_up() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let dictionary = common::dictionary();
    let template = Template::compile("[[hero|вн]] и [[beast]]").unwrap();
    let vars = variables! {
        "hero" => "обезьянка",
        "beast" => "кракозябра",
        "unused" => "бармаглот",
    };
    let text = template.substitute(&dictionary, &vars).unwrap();
    assert_eq!(text, "обезьянку и <word not found: кракозябра>");

    let messages = CAPTURE.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("кракозябра")));
    assert!(
        !messages.iter().any(|m| m.contains("бармаглот")),
        "unexpected warnings: {messages:?}"
    );
}
