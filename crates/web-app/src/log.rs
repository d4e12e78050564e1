use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

use crate::Settings;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Bounded in-memory log, newest entry first.
pub struct Memory {
    entries: Mutex<VecDeque<Entry>>,
    capacity: usize,
}

impl Memory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.log_capacity)
    }
}

impl Repository for Memory {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Install the logger with an in-memory log sized by `settings` and return that log.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init_from_settings(
    settings: &Settings,
    level: LevelFilter,
) -> Result<Arc<Memory>, SetLoggerError> {
    let memory = Arc::new(Memory::from_settings(settings));
    init(memory.clone(), level)?;
    Ok(memory)
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(log) = LOG.lock().ok().and_then(|log| log.clone()) else {
            return;
        };
        let _ = log.write_entry(Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}
