use std::collections::BTreeMap;

use aiofitness_domain::{self as domain, MuscleRecord, ReadError};

/// Read-only store holding the muscle dataset and the video table in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemory {
    muscles: BTreeMap<String, MuscleRecord>,
    videos: Vec<(String, String)>,
}

impl InMemory {
    #[must_use]
    pub fn new(
        muscles: impl IntoIterator<Item = MuscleRecord>,
        videos: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            muscles: muscles
                .into_iter()
                .map(|muscle| (muscle.slug.clone(), muscle))
                .collect(),
            videos: videos.into_iter().collect(),
        }
    }

    /// Built-in muscle catalog without any videos.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            domain::catalog::MUSCLES.values().cloned(),
            Vec::<(String, String)>::new(),
        )
    }

    #[must_use]
    pub fn with_videos(mut self, videos: impl IntoIterator<Item = (String, String)>) -> Self {
        self.videos = videos.into_iter().collect();
        self
    }
}

impl domain::MuscleRepository for InMemory {
    fn read_muscle(&self, slug: &str) -> Result<Option<MuscleRecord>, ReadError> {
        Ok(self.muscles.get(slug).cloned())
    }

    fn read_muscles(&self) -> Result<Vec<MuscleRecord>, ReadError> {
        Ok(self.muscles.values().cloned().collect())
    }
}

impl domain::VideoRepository for InMemory {
    fn read_videos(&self) -> Result<Vec<(String, String)>, ReadError> {
        Ok(self.videos.clone())
    }
}
