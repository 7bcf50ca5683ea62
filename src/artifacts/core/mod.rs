//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use colored::Colorize;

/// Terminal formatting applied to offending messages in a report
///
/// Validation stays free of terminal state: the reporting step receives a
/// highlighter and decides how an offending message is emphasized. `Bold`
/// is used when stderr is a terminal, `Plain` otherwise and in tests.
pub trait Highlighter {
    fn highlight(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bold;

impl Highlighter for Bold {
    fn highlight(&self, text: &str) -> String {
        text.bold().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Highlighter for Plain {
    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn highlighter_for(is_terminal: bool) -> Box<dyn Highlighter> {
    if is_terminal {
        Box::new(Bold)
    } else {
        Box::new(Plain)
    }
}
