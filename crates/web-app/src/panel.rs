use aiofitness_domain::{
    DisplayName, MuscleDetail, MuscleRepository, Selection, Service, VideoRepository,
};

pub const NO_SELECTION: &str = "No muscle selected. Click the diagram.";
pub const NO_INFORMATION: &str = "No information available for this muscle.";

/// Content of the information panel next to the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    NoSelection,
    NoInformation {
        display_name: DisplayName,
    },
    Muscle {
        display_name: DisplayName,
        detail: MuscleDetail,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTab<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub active: bool,
}

impl Panel {
    pub fn new<R>(selection: &Selection, service: &Service<R>) -> Self
    where
        R: MuscleRepository + VideoRepository,
    {
        let Some(display_name) = selection.display_name() else {
            return Panel::NoSelection;
        };
        match service.muscle(selection) {
            Some(detail) => Panel::Muscle {
                display_name,
                detail,
            },
            None => Panel::NoInformation { display_name },
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&DisplayName> {
        match self {
            Panel::NoSelection => None,
            Panel::NoInformation { display_name } | Panel::Muscle { display_name, .. } => {
                Some(display_name)
            }
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Panel::NoSelection => Some(NO_SELECTION),
            Panel::NoInformation { .. } => Some(NO_INFORMATION),
            Panel::Muscle { .. } => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.title()
            .map(|name| format!("Information about the {} muscles.", name.to_lowercase()))
    }

    /// Exercises of the active sub-part, or of the muscle itself.
    #[must_use]
    pub fn exercises(&self) -> &[String] {
        match self {
            Panel::Muscle { detail, .. } => detail.exercises(),
            Panel::NoSelection | Panel::NoInformation { .. } => &[],
        }
    }

    #[must_use]
    pub fn contraindications(&self) -> &[String] {
        match self {
            Panel::Muscle { detail, .. } => &detail.record.contraindications,
            Panel::NoSelection | Panel::NoInformation { .. } => &[],
        }
    }

    #[must_use]
    pub fn parts(&self) -> Vec<PartTab<'_>> {
        let Panel::Muscle { detail, .. } = self else {
            return Vec::new();
        };
        let active = detail.part.as_ref().map(|part| part.key.as_str());
        detail
            .record
            .parts
            .iter()
            .map(|part| PartTab {
                key: &part.key,
                name: &part.name,
                active: active == Some(part.key.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use aiofitness_domain::{MuscleRecord, ReadError, catalog::MUSCLES};
    use pretty_assertions::assert_eq;

    use super::*;

    struct Catalog;

    impl MuscleRepository for Catalog {
        fn read_muscle(&self, slug: &str) -> Result<Option<MuscleRecord>, ReadError> {
            Ok(MUSCLES.get(slug).cloned())
        }

        fn read_muscles(&self) -> Result<Vec<MuscleRecord>, ReadError> {
            Ok(MUSCLES.values().cloned().collect())
        }
    }

    impl VideoRepository for Catalog {
        fn read_videos(&self) -> Result<Vec<(String, String)>, ReadError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_no_selection() {
        let panel = Panel::new(&Selection::new(), &Service::new(Catalog));

        assert_eq!(panel, Panel::NoSelection);
        assert_eq!(panel.message(), Some(NO_SELECTION));
        assert_eq!(panel.summary(), None);
        assert!(panel.exercises().is_empty());
    }

    #[test]
    fn test_no_information() {
        let mut selection = Selection::new();
        selection.select("Shoulders");
        let panel = Panel::new(&selection, &Service::new(Catalog));

        assert_eq!(panel.title().map(ToString::to_string), Some("Shoulders".to_string()));
        assert_eq!(panel.message(), Some(NO_INFORMATION));
        assert!(panel.parts().is_empty());
    }

    #[test]
    fn test_muscle() {
        let mut selection = Selection::new();
        selection.select("chest.left");
        let panel = Panel::new(&selection, &Service::new(Catalog));

        assert_eq!(panel.title().map(ToString::to_string), Some("Chest".to_string()));
        assert_eq!(panel.message(), None);
        assert_eq!(
            panel.summary(),
            Some("Information about the chest muscles.".to_string())
        );
        assert_eq!(panel.exercises(), ["Bench press", "Push-ups", "Chest fly"]);
        assert_eq!(panel.contraindications(), MUSCLES["chest"].contraindications);
        assert_eq!(
            panel.parts().iter().map(|tab| tab.key).collect::<Vec<_>>(),
            vec!["clavicular", "sternal", "minor"]
        );
        assert!(panel.parts().iter().all(|tab| !tab.active));
    }

    #[test]
    fn test_muscle_part() {
        let service = Service::new(Catalog);
        let mut selection = Selection::new();
        selection.select("deltoids");
        selection.select_part("anterior");

        let panel = Panel::new(&selection, &service);
        assert_eq!(panel.exercises(), ["Front raise", "Incline press", "Arnold press"]);
        assert_eq!(
            panel.parts().into_iter().find(|tab| tab.active).map(|tab| tab.name),
            Some("Anterior Deltoid (Front)")
        );

        selection.select("chest");
        let panel = Panel::new(&selection, &service);
        assert_eq!(panel.exercises(), ["Bench press", "Push-ups", "Chest fly"]);
    }

    #[test]
    fn test_muscle_unknown_part() {
        let mut selection = Selection::new();
        selection.select("deltoids");
        selection.select_part("medial");
        let panel = Panel::new(&selection, &Service::new(Catalog));

        assert_eq!(panel.exercises(), MUSCLES["deltoids"].exercises);
        assert!(panel.parts().iter().all(|tab| !tab.active));
    }
}
