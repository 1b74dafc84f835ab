//! Arrays, views, maps and struct values.

use std::fmt;

use crate::array::FixedArray;
use crate::config::Config;
use crate::error::Result;
use crate::heap::{Heap, View};
use crate::map::Map;
use crate::report::Report;

/// A plain struct value; copies never share fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    arrays(config, report)?;
    slices(config, report)?;
    overlapping(config, report)?;
    maps(report);
    structs(report);
    Ok(())
}

fn arrays(config: &Config, report: &mut Report) -> Result<()> {
    report.line("Array");

    let mut array1 = FixedArray::new([1i64, 2, 3]);
    let array2 = FixedArray::from([1, 2, 3]);
    report.line((array1 == array2).to_string());

    array1.set(1, 9)?;
    report.line((array1 == array2).to_string());

    let mut heap = Heap::with_policy(config.growth);
    let var1 = heap.alloc_array(array1);
    let var2 = heap.alloc_array(array2);
    let equal = heap.equal(var1.as_view(), var2.as_view())?;
    report.line(equal.to_string());
    Ok(())
}

fn describe(heap: &Heap<i64>, view: View<i64>) -> Result<String> {
    Ok(format!(
        "{} {} {}",
        heap.render(view)?,
        view.len(),
        view.cap()
    ))
}

fn slices(config: &Config, report: &mut Report) -> Result<()> {
    report.section("Slice");
    let mut heap = Heap::with_policy(config.growth);

    let mut slice = heap.alloc_slice([10, 20, 30]);
    report.line(describe(&heap, slice)?);

    slice = heap.append(slice, [40, 50])?;
    report.line(describe(&heap, slice)?);

    let sub = heap.view(slice, 0, 3)?;
    report.line(describe(&heap, sub)?);

    let fresh = heap.make(3, 3)?;
    let tail = heap.view(slice, 1, slice.len())?;
    heap.copy(fresh, tail)?;
    report.line(describe(&heap, fresh)?);

    heap.clear(sub)?;
    report.line(describe(&heap, sub)?);
    Ok(())
}

fn overlapping(config: &Config, report: &mut Report) -> Result<()> {
    let mut heap: Heap<String> = Heap::with_policy(config.growth);

    let x = heap.alloc_slice(["a", "b", "c", "d"].map(String::from));
    let y = heap.view(x, 0, 2)?;
    let z = heap.view(x, 1, x.len())?;

    heap.set(x, 1, "y".into())?;
    heap.set(y, 0, "x".into())?;
    heap.set(z, 1, "z".into())?;

    report.line(format!("x : {}", heap.render(x)?));
    report.line(format!("y : {}", heap.render(y)?));
    report.line(format!("z : {}", heap.render(z)?));
    Ok(())
}

fn maps(report: &mut Report) {
    report.section("Map");

    let scores: Map<String, i64> = Map::from_iter([("Alice".to_string(), 5)]);
    scores.insert("Bob".into(), 3);
    report.line(scores.to_string());

    scores.delete("Alice");
    report.line(scores.to_string());

    let (v, ok) = scores.lookup("Bob");
    report.line(format!("{v} {ok}"));

    let (v, ok) = scores.lookup("Alice");
    report.line(format!("{v} {ok}"));

    scores.increment("Bob".into());
    report.line(scores.to_string());
}

fn structs(report: &mut Report) {
    report.section("Struct");

    let person1 = Person::new("Alice", 30);
    let person2 = Person {
        name: "Bob".into(),
        age: 40,
    };
    let mut person3 = Person::default();
    person3.name = "Charlie".into();
    person3.age = 50;

    report.line(format!("{person1} {person2} {person3}"));
}
