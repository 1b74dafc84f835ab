//! Block shadowing and ranging over a view.

use crate::config::Config;
use crate::error::Result;
use crate::heap::Heap;
use crate::report::Report;
use crate::scope::Env;

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    let mut heap: Heap<i64> = Heap::with_policy(config.growth);
    let mut env = Env::new();

    env.declare(&mut heap, "myNum1", 10);
    if env.load(&heap, "myNum1")? > 5 {
        env.block(|env| -> Result<()> {
            report.line(env.load(&heap, "myNum1")?.to_string());
            env.declare(&mut heap, "myNum1", 5);
            report.line(env.load(&heap, "myNum1")?.to_string());
            Ok(())
        })?;
    }
    report.line(env.load(&heap, "myNum1")?.to_string());

    let values = heap.alloc_slice([1, 2, 3, 4, 5]);
    for (i, v) in heap.iter(values)?.enumerate() {
        report.line(format!("Index : {i} | Value : {v}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_output() {
        let mut report = Report::new();
        run(&Config::default(), &mut report).unwrap();

        let lines = report.lines();
        assert_eq!(&lines[..3], &["10", "5", "10"]);
        assert_eq!(lines[3], "Index : 0 | Value : 1");
        assert_eq!(lines[7], "Index : 4 | Value : 5");
        assert_eq!(lines.len(), 8);
    }
}
