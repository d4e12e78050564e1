use log::debug;

use crate::{DisplayName, InteractionSignal, InteractiveNode, MuscleSlug, extract_slug};

/// Current muscle selection and the sub-part chosen within it.
///
/// The sub-part is scoped to the selected muscle: every successful top-level selection
/// clears it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    muscle: Option<MuscleSlug>,
    part: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the muscle carried by `signal`. Signals without a usable slug leave the
    /// selection unchanged.
    pub fn handle_select<N: InteractiveNode>(&mut self, signal: &InteractionSignal<'_, N>) -> bool {
        match extract_slug(signal) {
            Some(slug) => self.select(&slug),
            None => {
                debug!("ignored selection signal without slug");
                false
            }
        }
    }

    pub fn select(&mut self, slug: &str) -> bool {
        match MuscleSlug::new(slug) {
            Ok(slug) => {
                self.muscle = Some(slug);
                self.part = None;
                true
            }
            Err(err) => {
                debug!("ignored selection of {slug:?}: {err}");
                false
            }
        }
    }

    pub fn select_part(&mut self, key: &str) -> bool {
        let key = key.trim();
        if self.muscle.is_none() || key.is_empty() {
            return false;
        }
        self.part = Some(key.to_string());
        true
    }

    pub fn clear_part(&mut self) {
        self.part = None;
    }

    pub fn clear(&mut self) {
        self.muscle = None;
        self.part = None;
    }

    #[must_use]
    pub fn muscle(&self) -> Option<&MuscleSlug> {
        self.muscle.as_ref()
    }

    #[must_use]
    pub fn part(&self) -> Option<&str> {
        self.part.as_deref()
    }

    #[must_use]
    pub fn base_slug(&self) -> Option<&str> {
        self.muscle.as_ref().map(MuscleSlug::base)
    }

    #[must_use]
    pub fn display_name(&self) -> Option<DisplayName> {
        self.muscle.as_ref().and_then(MuscleSlug::display_name)
    }

    /// Whether `slug` is exactly the selected region, laterality included.
    #[must_use]
    pub fn is_selected(&self, slug: &str) -> bool {
        self.muscle.as_ref().is_some_and(|muscle| **muscle == slug)
    }
}
