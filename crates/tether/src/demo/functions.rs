//! Return values, recoverable errors, closures and persisting results.

use tether_log::warn;

use crate::arith::{div, div_and_remainder};
use crate::closure::make_closure;
use crate::config::Config;
use crate::error::Result;
use crate::report::Report;

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    let divide = div(73, 37);
    let results = Report::from(vec![format!("div : {divide}"), format!("div : {divide:.2}")]);

    let saved = if config.persist {
        results.save_json(&config.report_file)
    } else {
        Ok(())
    };
    report.extend(results);

    if let Err(err) = saved {
        warn!("could not save {}: {err}", config.report_file.display());
        report.line(err.to_string());
    }

    for (num, denom) in [(73, 37), (73, 0)] {
        match div_and_remainder(num, denom) {
            Ok((result, rem)) => report.line(format!("divAndRemainder : {result} {rem}")),
            Err(err) => report.line(err.to_string()),
        }
    }

    let next = make_closure(5i64, |a| {
        *a += 1;
        *a
    });
    report.line(format!("closure 1 : {}", next.call()));
    report.line(format!("closure 2 : {}", next.call()));

    let square = |x: i64| x * x;
    let my_num = 3;
    report.line(format!("square of {my_num} is {}", square(my_num)));
    Ok(())
}
