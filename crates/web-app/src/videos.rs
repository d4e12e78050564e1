use aiofitness_domain::{
    EmbedOptions, ExerciseVideo, MuscleRepository, Service, VideoId, VideoRepository,
    embed_url, slugify, thumbnail_url,
};
use log::debug;

use crate::Settings;

pub const NO_VIDEO: &str = "No video available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: &'a str,
    pub anchor: &'a str,
    pub content: CardContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Player { embed_url: String },
    Thumbnail { url: String, label: String, alt: String },
    NoVideo,
}

impl CardContent {
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CardContent::NoVideo => Some(NO_VIDEO),
            CardContent::Player { .. } | CardContent::Thumbnail { .. } => None,
        }
    }
}

/// Exercise video page: one card per exercise, at most one playing video.
#[derive(Debug, Clone)]
pub struct VideoPage {
    videos: Vec<ExerciseVideo>,
    playing: Option<VideoId>,
    options: EmbedOptions,
}

impl VideoPage {
    pub fn new<R>(service: &Service<R>, settings: &Settings) -> Self
    where
        R: MuscleRepository + VideoRepository,
    {
        Self {
            videos: service.exercise_videos(),
            playing: None,
            options: settings.embed_options(),
        }
    }

    #[must_use]
    pub fn playing(&self) -> Option<&VideoId> {
        self.playing.as_ref()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> + '_ {
        self.videos.iter().map(|video| Card {
            title: &video.name,
            anchor: &video.anchor,
            content: self.content(video),
        })
    }

    fn content(&self, video: &ExerciseVideo) -> CardContent {
        match &video.video_id {
            Some(id) if self.playing.as_ref() == Some(id) => CardContent::Player {
                embed_url: embed_url(id, self.options),
            },
            Some(id) => CardContent::Thumbnail {
                url: thumbnail_url(id),
                label: format!("Play {}", video.name),
                alt: format!("{} thumbnail", video.name),
            },
            None => CardContent::NoVideo,
        }
    }

    /// Start the video of the card with the given anchor, replacing any playing video.
    pub fn play(&mut self, anchor: &str) -> bool {
        let Some(id) = self
            .videos
            .iter()
            .find(|video| video.anchor == anchor)
            .and_then(|video| video.video_id.clone())
        else {
            debug!("no playable video at {anchor:?}");
            return false;
        };
        self.playing = Some(id);
        true
    }

    pub fn stop(&mut self) {
        self.playing = None;
    }

    /// Anchor to scroll to when navigating to an exercise from elsewhere.
    #[must_use]
    pub fn target(&self, exercise: &str) -> Option<&str> {
        let anchor = slugify(exercise);
        self.videos
            .iter()
            .find(|video| video.anchor == anchor)
            .map(|video| video.anchor.as_str())
    }
}
