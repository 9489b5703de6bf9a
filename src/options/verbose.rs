use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

pub fn log(message: &str) {
    if is_verbose() {
        println!("{} {}", "[VERBOSE]".blue(), message);
    }
}

/// Reported whether or not verbose mode is on.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow(), message);
}
