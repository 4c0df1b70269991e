use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A prerequisite edge: `course` requires `prerequisite`
///
/// Serialized as the pair `[course, prerequisite]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Prerequisite {
    pub course: usize,
    pub prerequisite: usize,
}

impl Prerequisite {
    pub fn new(course: usize, prerequisite: usize) -> Self {
        Self {
            course,
            prerequisite,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.course == self.prerequisite
    }
}

impl From<(usize, usize)> for Prerequisite {
    fn from((course, prerequisite): (usize, usize)) -> Self {
        Self::new(course, prerequisite)
    }
}

impl From<Prerequisite> for (usize, usize) {
    fn from(p: Prerequisite) -> Self {
        (p.course, p.prerequisite)
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} -> #{}", self.course, self.prerequisite)
    }
}

/// Parses the command line form `COURSE,PREREQUISITE`
impl FromStr for Prerequisite {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidPair(s.to_string());
        let (course, prerequisite) = s.split_once(',').ok_or_else(invalid)?;
        let course = course.trim().parse().map_err(|_| invalid())?;
        let prerequisite = prerequisite.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(course, prerequisite))
    }
}

/// A course catalog as read from JSON input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    pub num_courses: usize,
    #[serde(default)]
    pub prerequisites: Vec<Prerequisite>,
}

impl CourseCatalog {
    pub fn new(num_courses: usize, prerequisites: Vec<Prerequisite>) -> Self {
        Self {
            num_courses,
            prerequisites,
        }
    }
}

/// Outcome of checking a catalog, for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub num_courses: usize,
    pub prerequisite_count: usize,
    pub can_finish: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prerequisite() {
        let p: Prerequisite = "1,0".parse().unwrap();
        assert_eq!(p, Prerequisite::new(1, 0));

        let p: Prerequisite = " 3 , 2 ".parse().unwrap();
        assert_eq!(p, Prerequisite::new(3, 2));
    }

    #[test]
    fn test_parse_prerequisite_invalid() {
        for input in ["", "1", "1;0", "a,0", "1,-2", "1,0,2"] {
            let result = input.parse::<Prerequisite>();
            assert!(
                matches!(result, Err(ScheduleError::InvalidPair(ref s)) if s == input),
                "expected InvalidPair for {input:?}"
            );
        }
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{"num_courses": 4, "prerequisites": [[1, 0], [2, 0], [3, 1], [3, 2]]}"#;
        let catalog: CourseCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.num_courses, 4);
        assert_eq!(catalog.prerequisites.len(), 4);
        assert_eq!(catalog.prerequisites[2], Prerequisite::new(3, 1));
    }

    #[test]
    fn test_catalog_prerequisites_default_empty() {
        let catalog: CourseCatalog = serde_json::from_str(r#"{"num_courses": 5}"#).unwrap();
        assert_eq!(catalog, CourseCatalog::new(5, vec![]));
    }

    #[test]
    fn test_report_skips_missing_fields() {
        let report = ScheduleReport {
            num_courses: 2,
            prerequisite_count: 1,
            can_finish: true,
            cycle: None,
            order: Some(vec![1, 0]),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"num_courses":2,"prerequisite_count":1,"can_finish":true,"order":[1,0]}"#
        );
    }

    #[test]
    fn test_self_loop() {
        assert!(Prerequisite::new(4, 4).is_self_loop());
        assert!(!Prerequisite::new(4, 3).is_self_loop());
    }
}
