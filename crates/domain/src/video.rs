use std::{collections::HashMap, fmt::Display};

use crate::{ReadError, VideoId, video_id};

const SEPARATOR: char = '-';

pub trait VideoRepository {
    /// Raw video table as authored: exercise name and URL, in definition order.
    fn read_videos(&self) -> Result<Vec<(String, String)>, ReadError>;
}

/// Lowercase the input and collapse every run of characters outside `[a-z0-9]` into a single
/// separator. Leading and trailing separators are dropped.
pub fn slugify(value: impl Display) -> String {
    let lowercase = value.to_string().to_lowercase();
    let mut slug = String::with_capacity(lowercase.len());
    let mut pending_separator = false;

    for c in lowercase.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[must_use]
pub fn exact_key(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

/// Case-insensitive lookup of video URLs by exercise name.
#[derive(Debug, Default, Clone)]
pub struct VideoIndex {
    exact: HashMap<String, String>,
    slug: HashMap<String, String>,
}

impl VideoIndex {
    /// Later entries replace earlier ones with the same normalized key. Entries with an empty
    /// name are skipped.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut index = Self::default();
        for (name, url) in entries {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            let url = url.into();
            index.exact.insert(exact_key(name), url.clone());
            index.slug.insert(slugify(name), url);
        }
        index
    }

    #[must_use]
    pub fn url_for(&self, exercise: &str) -> Option<&str> {
        let key = exact_key(exercise);
        (!key.is_empty())
            .then(|| self.exact.get(&key))
            .flatten()
            .filter(|url| !url.is_empty())
            .or_else(|| self.slug.get(&slugify(exercise)).filter(|url| !url.is_empty()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

#[must_use]
pub fn thumbnail_url(id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub privacy_enhanced: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            privacy_enhanced: false,
        }
    }
}

#[must_use]
pub fn embed_url(id: &VideoId, options: EmbedOptions) -> String {
    let host = if options.privacy_enhanced {
        "www.youtube-nocookie.com"
    } else {
        "www.youtube.com"
    };
    if options.autoplay {
        format!("https://{host}/embed/{id}?autoplay=1&rel=0")
    } else {
        format!("https://{host}/embed/{id}?rel=0")
    }
}

/// Video resolution result for a single exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseVideo {
    pub name: String,
    /// Stable anchor identity of the exercise, also used as scroll target.
    pub anchor: String,
    pub url: Option<String>,
    pub video_id: Option<VideoId>,
}

impl ExerciseVideo {
    #[must_use]
    pub fn resolve(name: &str, index: &VideoIndex) -> Self {
        let url = index.url_for(name);
        Self {
            name: name.to_string(),
            anchor: slugify(name),
            url: url.map(str::to_string),
            video_id: video_id(url),
        }
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<String> {
        self.video_id.as_ref().map(thumbnail_url)
    }
}
