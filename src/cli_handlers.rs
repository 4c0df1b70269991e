use crate::cli::CatalogArgs;
use crate::error::{Result, ScheduleError};
use crate::graph::{completion_order, CycleDetector, PrerequisiteGraph};
use crate::models::{CourseCatalog, ScheduleReport};
use anyhow::Context;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Literal catalogs run by the demo command: (courses, prerequisite pairs)
pub const DEMONSTRATIONS: [(usize, &[(usize, usize)]); 4] = [
    (2, &[(0, 1)]),
    (2, &[(1, 0), (0, 1)]),
    (4, &[(1, 0), (2, 0), (3, 1), (3, 2)]),
    (3, &[(1, 0), (0, 2), (2, 1)]),
];

/// Parse a JSON catalog from any reader
pub fn read_catalog<R: Read>(reader: R) -> Result<CourseCatalog> {
    Ok(serde_json::from_reader(reader)?)
}

/// Resolve the catalog from `--file` or from `--courses`/`--prereq`
pub fn load_catalog(args: &CatalogArgs) -> anyhow::Result<CourseCatalog> {
    if let Some(path) = &args.file {
        return load_catalog_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()));
    }

    match args.courses {
        Some(num_courses) => Ok(CourseCatalog::new(num_courses, args.prereqs.clone())),
        None => Err(ScheduleError::MissingCatalog.into()),
    }
}

fn load_catalog_file(path: &Path) -> Result<CourseCatalog> {
    if path == Path::new("-") {
        return read_catalog(io::stdin().lock());
    }
    read_catalog(File::open(path)?)
}

/// Check a catalog and build the report
pub fn check_catalog(catalog: &CourseCatalog) -> Result<ScheduleReport> {
    let graph =
        PrerequisiteGraph::build(catalog.num_courses, catalog.prerequisites.iter().copied())?;
    let mut detector = CycleDetector::new(&graph);
    let can_finish = detector.can_finish_all();

    let (cycle, order) = if can_finish {
        (None, completion_order(&graph))
    } else {
        (detector.into_cycle().map(|c| c.path), None)
    };

    Ok(ScheduleReport {
        num_courses: graph.num_courses(),
        prerequisite_count: graph.edge_count(),
        can_finish,
        cycle,
        order,
    })
}

/// Handle the check command
pub fn handle_check(args: &CatalogArgs, json: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args)?;
    let report = check_catalog(&catalog)?;
    info!(
        num_courses = report.num_courses,
        can_finish = report.can_finish,
        "checked catalog"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.can_finish);
    if let Some(ref path) = report.cycle {
        println!("Cycle: {}", crate::error::format_cycle(path));
    }

    Ok(())
}

/// Handle the order command
pub fn handle_order(args: &CatalogArgs, json: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args)?;
    let report = check_catalog(&catalog)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.order {
        Some(order) => {
            let order_str = order
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{order_str}");
            Ok(())
        }
        None => Err(ScheduleError::NoCompletionOrder {
            path: report.cycle.unwrap_or_default(),
        }
        .into()),
    }
}

/// Handle the demo command
pub fn handle_demo() -> anyhow::Result<()> {
    for (i, (num_courses, prerequisites)) in DEMONSTRATIONS.iter().enumerate() {
        let can_finish = crate::can_finish(*num_courses, prerequisites.iter().copied())?;
        println!("Test {}: {}", i + 1, can_finish);
    }
    Ok(())
}
