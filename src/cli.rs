use crate::models::Prerequisite;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "course-schedule")]
#[command(about = "Check whether every course in a catalog can be completed")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog comes from
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Number of courses; ids run from 0 to N-1
    #[arg(long, conflicts_with = "file")]
    pub courses: Option<usize>,

    /// Prerequisite pair, repeatable
    #[arg(
        long = "prereq",
        value_name = "COURSE,PREREQUISITE",
        requires = "courses"
    )]
    pub prereqs: Vec<Prerequisite>,

    /// JSON catalog file, or "-" for stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether all courses can be finished
    Check {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Print an order in which all courses can be taken
    Order {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in demonstration catalogs
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_inline() {
        let cli = Cli::try_parse_from([
            "course-schedule",
            "check",
            "--courses",
            "2",
            "--prereq",
            "1,0",
            "--prereq",
            "0,1",
        ])
        .unwrap();

        match cli.command {
            Commands::Check { catalog, json } => {
                assert_eq!(catalog.courses, Some(2));
                assert_eq!(
                    catalog.prereqs,
                    vec![Prerequisite::new(1, 0), Prerequisite::new(0, 1)]
                );
                assert!(!json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_pair() {
        let result = Cli::try_parse_from([
            "course-schedule",
            "check",
            "--courses",
            "2",
            "--prereq",
            "1-0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_file_with_courses() {
        let result = Cli::try_parse_from([
            "course-schedule",
            "order",
            "--courses",
            "2",
            "--file",
            "catalog.json",
        ]);
        assert!(result.is_err());
    }
}
