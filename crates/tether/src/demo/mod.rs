//! Scripted demonstrations of the aliasing model.
//!
//! Every demonstration computes its output through [`Heap`](crate::Heap),
//! [`Map`](crate::Map), [`Env`](crate::Env) and closures, and appends the
//! lines to a [`Report`]. The expected output of each is fixed.

pub mod composite;
pub mod functions;
pub mod pointers;
pub mod scopes;

use tether_log::info;

use crate::config::Config;
use crate::error::Result;
use crate::report::Report;

/// Signature shared by every demonstration.
pub type DemoFn = fn(&Config, &mut Report) -> Result<()>;

/// Demonstrations in the order [`run_all`] executes them.
pub const DEMOS: &[(&str, DemoFn)] = &[
    ("composite", composite::run),
    ("scopes", scopes::run),
    ("functions", functions::run),
    ("pointers", pointers::run),
];

/// Runs every demonstration in order and returns the combined report.
///
/// Stops at the first demonstration that fails.
pub fn run_all(config: &Config) -> Result<Report> {
    let mut report = Report::new();
    for (name, demo) in DEMOS {
        info!("running {name} demonstration");
        demo(config, &mut report)?;
    }
    Ok(report)
}

/// Runs the demonstration called `name`, or returns `None` if there is none.
pub fn run_one(name: &str, config: &Config) -> Option<Result<Report>> {
    let (_, demo) = DEMOS.iter().find(|(n, _)| *n == name)?;
    let mut report = Report::new();
    Some(demo(config, &mut report).map(|()| report))
}
