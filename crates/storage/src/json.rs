//! Loading of the muscle dataset, the video table and settings from JSON files.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use aiofitness_domain::MuscleRecord;
use aiofitness_web_app::Settings;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::InMemory;

pub const MUSCLES_FILE: &str = "muscles.json";
pub const VIDEOS_FILE: &str = "videos.json";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse a muscle dataset: an object mapping base slugs to records. Records without an
/// explicit slug take the key.
pub fn parse_muscles(json: &str) -> Result<Vec<MuscleRecord>, serde_json::Error> {
    let muscles: BTreeMap<String, MuscleRecord> = serde_json::from_str(json)?;
    Ok(muscles
        .into_iter()
        .map(|(slug, mut muscle)| {
            if muscle.slug.is_empty() {
                muscle.slug = slug;
            } else if muscle.slug != slug {
                warn!("muscle {slug:?} declares slug {:?}", muscle.slug);
                muscle.slug = slug;
            }
            muscle
        })
        .collect())
}

/// Parse a video table: an object mapping exercise names to URLs. Definition order is kept,
/// entries whose value is not a string are skipped.
pub fn parse_videos(json: &str) -> Result<Vec<(String, String)>, serde_json::Error> {
    let videos: Map<String, Value> = serde_json::from_str(json)?;
    Ok(videos
        .into_iter()
        .filter_map(|(name, url)| match url {
            Value::String(url) => Some((name, url)),
            other => {
                warn!("ignored video of {name:?} with non-string URL {other}");
                None
            }
        })
        .collect())
}

/// Load `muscles.json` and `videos.json` from `dir`. The muscle dataset is required, a
/// missing video table is treated as empty.
pub fn load(dir: impl AsRef<Path>) -> Result<InMemory, LoadError> {
    let dir = dir.as_ref();

    let muscles_path = dir.join(MUSCLES_FILE);
    let muscles = fs::read_to_string(&muscles_path).map_err(|source| LoadError::Io {
        path: muscles_path.clone(),
        source,
    })?;
    let muscles = parse_muscles(&muscles).map_err(|source| LoadError::Parse {
        path: muscles_path,
        source,
    })?;

    let videos_path = dir.join(VIDEOS_FILE);
    let videos = match read(&videos_path)? {
        Some(videos) => parse_videos(&videos).map_err(|source| LoadError::Parse {
            path: videos_path,
            source,
        })?,
        None => {
            debug!("no video table at {}", videos_path.display());
            Vec::new()
        }
    };

    Ok(InMemory::new(muscles, videos))
}

/// Read settings from `path`, falling back to the defaults if the file does not exist.
pub fn read_settings(path: impl AsRef<Path>) -> Result<Settings, LoadError> {
    let path = path.as_ref();
    match read(path)? {
        Some(contents) => serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(Settings::default()),
    }
}

fn read(path: &Path) -> Result<Option<String>, LoadError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
