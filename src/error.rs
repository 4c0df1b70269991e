use thiserror::Error;

/// All possible errors when building or checking a course catalog
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Course {course} is out of range for a catalog of {num_courses} courses")]
    CourseOutOfRange { course: usize, num_courses: usize },

    #[error("Invalid prerequisite pair '{0}': expected COURSE,PREREQUISITE")]
    InvalidPair(String),

    #[error("No catalog given. Pass --file or --courses")]
    MissingCatalog,

    #[error("No completion order exists: {path}", path = format_cycle(path))]
    NoCompletionOrder { path: Vec<usize> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn format_cycle(path: &[usize]) -> String {
    path.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cycle() {
        assert_eq!(format_cycle(&[1, 0, 2, 1]), "#1 → #0 → #2 → #1");
        assert_eq!(format_cycle(&[3, 3]), "#3 → #3");
        assert_eq!(format_cycle(&[]), "");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ScheduleError::CourseOutOfRange {
            course: 7,
            num_courses: 3,
        };
        assert_eq!(
            err.to_string(),
            "Course 7 is out of range for a catalog of 3 courses"
        );
    }

    #[test]
    fn test_no_completion_order_message() {
        let err = ScheduleError::NoCompletionOrder {
            path: vec![0, 1, 0],
        };
        assert_eq!(err.to_string(), "No completion order exists: #0 → #1 → #0");
    }
}
