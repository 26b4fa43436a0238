// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(level: LevelFilter) {
        let logger = Box::leak(Box::new(Logger));

        if log::set_logger(logger).is_ok() {
            log::set_max_level(level);
        }

        log::debug!("Logger initialized at {level}");
    }

    pub fn raise_to(level: LevelFilter) {
        if level > log::max_level() {
            log::set_max_level(level);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN".yellow().bold(),
            Level::Info => "INFO".green(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".dimmed(),
        };

        eprintln!("[{level}] {}: {}", record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}
