use std::collections::BTreeSet;

use serde::Deserialize;

use crate::ReadError;

pub trait MuscleRepository {
    fn read_muscle(&self, slug: &str) -> Result<Option<MuscleRecord>, ReadError>;
    fn read_muscles(&self) -> Result<Vec<MuscleRecord>, ReadError>;
}

/// Descriptive information about a muscle group, keyed by its base slug.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MuscleRecord {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tips: String,
    pub exercises: Vec<String>,
    pub contraindications: Vec<String>,
    pub parts: Vec<PartRecord>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PartRecord {
    pub key: String,
    pub name: String,
    pub description: String,
    pub tips: String,
    pub exercises: Vec<String>,
}

impl MuscleRecord {
    #[must_use]
    pub fn part(&self, key: &str) -> Option<&PartRecord> {
        self.parts.iter().find(|part| part.key == key)
    }

    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.exercises
            .iter()
            .chain(self.parts.iter().flat_map(|part| part.exercises.iter()))
            .map(String::as_str)
    }
}

/// A resolved muscle record together with the active sub-part, if the part exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleDetail {
    pub record: MuscleRecord,
    pub part: Option<PartRecord>,
}

impl MuscleDetail {
    #[must_use]
    pub fn new(record: MuscleRecord, part_key: Option<&str>) -> Self {
        let part = part_key.and_then(|key| record.part(key)).cloned();
        Self { record, part }
    }

    #[must_use]
    pub fn exercises(&self) -> &[String] {
        self.part
            .as_ref()
            .map_or(&self.record.exercises, |part| &part.exercises)
    }
}

/// Sorted, de-duplicated union of all exercises referenced by the given records and their parts.
pub fn exercise_names<'a>(records: impl IntoIterator<Item = &'a MuscleRecord>) -> Vec<String> {
    records
        .into_iter()
        .flat_map(MuscleRecord::exercise_names)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::MUSCLES;

    #[test]
    fn test_part() {
        let deltoids = &MUSCLES["deltoids"];
        assert_eq!(
            deltoids.part("anterior").map(|part| part.name.as_str()),
            Some("Anterior Deltoid (Front)")
        );
        assert_eq!(deltoids.part("medial"), None);
        assert_eq!(MUSCLES["back"].part("anterior"), None);
    }

    #[test]
    fn test_muscle_detail_exercises() {
        let deltoids = MUSCLES["deltoids"].clone();

        assert_eq!(
            MuscleDetail::new(deltoids.clone(), Some("posterior")).exercises(),
            ["Rear delt fly", "Face pull", "Bent-over lateral raise"]
        );
        assert_eq!(
            MuscleDetail::new(deltoids.clone(), None).exercises(),
            ["Overhead press", "Lateral raises", "Rear delt fly"]
        );

        let unknown_part = MuscleDetail::new(deltoids, Some("sternal"));
        assert_eq!(unknown_part.part, None);
        assert_eq!(
            unknown_part.exercises(),
            ["Overhead press", "Lateral raises", "Rear delt fly"]
        );
    }

    #[test]
    fn test_exercise_names() {
        let records = [
            MuscleRecord {
                slug: "a".into(),
                exercises: vec!["Squat".into(), "Lunge".into()],
                parts: vec![PartRecord {
                    key: "x".into(),
                    exercises: vec!["Box jump".into(), "Squat".into()],
                    ..PartRecord::default()
                }],
                ..MuscleRecord::default()
            },
            MuscleRecord {
                slug: "b".into(),
                exercises: vec!["Lunge".into(), "Calf raise".into()],
                ..MuscleRecord::default()
            },
        ];

        assert_eq!(
            exercise_names(&records),
            vec!["Box jump", "Calf raise", "Lunge", "Squat"]
        );
    }

    #[test]
    fn test_exercise_names_of_catalog() {
        let names = exercise_names(MUSCLES.values());

        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(names.contains(&"Hammer curl".to_string()));
        assert!(names.contains(&"Serratus punches (to support scapular control)".to_string()));
        assert_eq!(
            names.iter().filter(|name| *name == "Rear delt fly").count(),
            1
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let record: MuscleRecord = serde_json::from_str(
            r#"{"slug": "neck", "name": "Neck", "parts": [{"key": "upper"}]}"#,
        )
        .unwrap();

        assert_eq!(record.slug, "neck");
        assert!(record.exercises.is_empty());
        assert_eq!(record.parts[0].key, "upper");
        assert!(record.parts[0].name.is_empty());
    }
}
