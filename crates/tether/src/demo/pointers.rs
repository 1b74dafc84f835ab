//! Pointers: store through an address, nil checks, and pass-by-value of the
//! pointer itself.

use tether_log::trace;

use crate::config::Config;
use crate::error::Result;
use crate::heap::Heap;
use crate::pointer::Pointer;
use crate::report::Report;
use crate::scope::Env;

pub fn run(config: &Config, report: &mut Report) -> Result<()> {
    let mut heap: Heap<i64> = Heap::with_policy(config.growth);
    let mut env = Env::new();

    let my_pointer = env.declare(&mut heap, "myNum", 73);
    report.line(format!("Address of myNum is {my_pointer}"));
    report.line(format!(
        "Value of myPointer is {}",
        env.load(&heap, "myNum")?
    ));

    heap.store(my_pointer, 20)?;
    report.line(format!("Updated myNum is {}", env.load(&heap, "myNum")?));

    let my_pointer2: Pointer<i64> = Pointer::nil();
    report.line(format!("Is myPointer 2 nil? {}", my_pointer2 == Pointer::nil()));

    let target = env.declare(&mut heap, "myNum2", 37);
    failed_update(&mut heap, target);
    report.line(format!(
        "Value after failedUpdate : {}",
        env.load(&heap, "myNum2")?
    ));

    successful_update(&mut heap, target)?;
    report.line(format!(
        "Value after successfulUpdate : {}",
        env.load(&heap, "myNum2")?
    ));
    Ok(())
}

/// Rebinds its own copy of the pointer; the caller's cell is untouched.
fn failed_update(heap: &mut Heap<i64>, mut ptr: Pointer<i64>) {
    let received = ptr;
    ptr = heap.make_pointer(99);
    trace!("failed_update rebound {received} to {ptr}");
}

/// Writes through the pointer, so the caller sees the new value.
fn successful_update(heap: &mut Heap<i64>, ptr: Pointer<i64>) -> Result<()> {
    heap.store(ptr, 99)
}
