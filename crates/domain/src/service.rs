use log::{debug, error, warn};

use crate::{
    ExerciseVideo, MuscleDetail, MuscleRepository, ReadError, Selection, StorageError,
    VideoIndex, VideoRepository, exercise_names, strip_laterality,
};

pub struct Service<R> {
    repository: R,
    videos: VideoIndex,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NoData) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R>
where
    R: MuscleRepository + VideoRepository,
{
    /// Create the service and build the video index once from the repository's table.
    pub fn new(repository: R) -> Self {
        let videos = log_on_error!(repository.read_videos(), "read", "videos")
            .map(|videos| VideoIndex::new(videos))
            .unwrap_or_default();
        Self { repository, videos }
    }

    /// Resolve the selected muscle and its active sub-part. Unknown slugs and unknown
    /// sub-parts resolve to `None` and to a detail without part respectively.
    #[must_use]
    pub fn muscle(&self, selection: &Selection) -> Option<MuscleDetail> {
        self.muscle_by_slug(selection.base_slug()?, selection.part())
    }

    #[must_use]
    pub fn muscle_by_slug(&self, slug: &str, part: Option<&str>) -> Option<MuscleDetail> {
        let slug = strip_laterality(slug.trim());
        let record = log_on_error!(self.repository.read_muscle(slug), "read", "muscle")
            .ok()
            .flatten();
        let Some(record) = record else {
            debug!("no information for muscle {slug:?}");
            return None;
        };
        let detail = MuscleDetail::new(record, part);
        if let (Some(key), None) = (part, &detail.part) {
            warn!("muscle {slug:?} has no part {key:?}");
        }
        Some(detail)
    }

    /// All exercises referenced by the muscle dataset, sorted and de-duplicated.
    #[must_use]
    pub fn exercises(&self) -> Vec<String> {
        log_on_error!(self.repository.read_muscles(), "read", "muscles")
            .map(|muscles| exercise_names(&muscles))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn exercise_video(&self, name: &str) -> ExerciseVideo {
        let video = ExerciseVideo::resolve(name, &self.videos);
        if video.video_id.is_none() {
            debug!("no video available for exercise {name:?}");
        }
        video
    }

    #[must_use]
    pub fn exercise_videos(&self) -> Vec<ExerciseVideo> {
        self.exercises()
            .iter()
            .map(|name| self.exercise_video(name))
            .collect()
    }
}
