//! The two receiver carriers and the `Printer` capability.
//!
//! `ValuePrinter::print` takes `self` (a copy), `PointerPrinter::print` takes
//! `&self`. Which of `T` / `&T` implements [`Printer`] follows from that choice:
//!
//! | type                | `Printer`? |
//! |---------------------|------------|
//! | `ValuePrinter`      | yes        |
//! | `&ValuePrinter`     | yes        |
//! | `PointerPrinter`    | **no**     |
//! | `&PointerPrinter`   | yes        |

use std::cell::RefCell;
use std::io::{self, Write};
use std::mem;

#[derive(Debug, Default)]
struct Output {
    printed: usize,
    // `Some` while `capture` is diverting this thread's lines.
    captured: Option<String>,
}

thread_local! {
    static OUTPUT: RefCell<Output> = RefCell::new(Output::default());
}

/// Writes one line (to stdout, or the active capture) and bumps this
/// thread's print tally.
fn emit(text: &str) -> io::Result<()> {
    OUTPUT.with(|output| -> io::Result<()> {
        let mut output = output.borrow_mut();
        match output.captured.as_mut() {
            Some(buffer) => {
                buffer.push_str(text);
                buffer.push('\n');
            }
            None => writeln!(io::stdout().lock(), "{text}")?,
        }
        output.printed += 1;
        Ok(())
    })
}

/// Number of lines printed by any carrier on the current thread.
pub fn printed() -> usize {
    OUTPUT.with(|output| output.borrow().printed)
}

/// Runs `f` with every carrier line printed on this thread collected into a
/// string instead of going to stdout.
///
/// ```
/// use receivers::{capture, ValuePrinter};
///
/// let (result, output) = capture(|| ValuePrinter.print("Epic poem"));
/// assert!(result.is_ok());
/// assert_eq!(output, "Epic poem\n");
/// ```
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let outer = OUTPUT.with(|output| output.borrow_mut().captured.replace(String::new()));
    let result = f();
    let captured = OUTPUT.with(|output| mem::replace(&mut output.borrow_mut().captured, outer));
    (result, captured.unwrap_or_default())
}

// ============================================================================
// Value receiver
// ============================================================================

/// Carrier whose method takes its receiver by value.
///
/// Every call works on its own copy, so a reference to a `ValuePrinter` can
/// always reach the method by dereferencing and copying.
///
/// ```
/// use receivers::ValuePrinter;
///
/// let printer = ValuePrinter;
/// printer.print("Epic poem")?;
/// (&printer).print("Epic poem")?; // auto-deref, then copy
/// ValuePrinter::print(printer, "Epic poem")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValuePrinter;

impl ValuePrinter {
    pub fn print(self, text: &str) -> io::Result<()> {
        emit(text)
    }
}

// ============================================================================
// Reference receiver
// ============================================================================

/// Carrier whose method needs a borrow of its receiver.
///
/// The method expression takes `&PointerPrinter` as its first argument:
///
/// ```
/// use receivers::PointerPrinter;
///
/// let printer = PointerPrinter;
/// PointerPrinter::print(&printer, "Epic poem")?;
/// printer.print("Epic poem")?; // auto-ref
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Passing the value itself where the method expects a reference is rejected:
///
/// ```compile_fail
/// use receivers::PointerPrinter;
///
/// let printer = PointerPrinter;
/// PointerPrinter::print(printer, "Epic poem").unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerPrinter;

impl PointerPrinter {
    pub fn print(&self, text: &str) -> io::Result<()> {
        emit(text)
    }
}

// ============================================================================
// Capability set
// ============================================================================

/// Anything that can print a line of text.
///
/// A `dyn Printer` is a fat pointer: one half points at the vtable for the
/// concrete type, the other at its data. Nothing in the static type says
/// whether that data is a `ValuePrinter` or a `&PointerPrinter`.
///
/// ```
/// use receivers::{PointerPrinter, Printer, ValuePrinter};
///
/// let value = ValuePrinter;
/// let pointer = PointerPrinter;
///
/// let printers: Vec<Box<dyn Printer + '_>> = vec![
///     Box::new(value),
///     Box::new(&value),
///     Box::new(&pointer),
/// ];
/// for printer in &printers {
///     printer.print("Epic poem")?;
/// }
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// The value form of `PointerPrinter` does not implement it:
///
/// ```compile_fail
/// use receivers::{PointerPrinter, Printer};
///
/// let printer: Box<dyn Printer> = Box::new(PointerPrinter);
/// ```
///
/// ```compile_fail
/// use receivers::{PointerPrinter, Printer};
///
/// let printer = PointerPrinter;
/// Printer::print(&printer, "Epic poem").unwrap();
/// ```
pub trait Printer {
    fn print(&self, text: &str) -> io::Result<()>;
}

impl Printer for ValuePrinter {
    fn print(&self, text: &str) -> io::Result<()> {
        ValuePrinter::print(*self, text)
    }
}

// A reference can reach the value-receiver method, so it satisfies the trait too.
impl Printer for &ValuePrinter {
    fn print(&self, text: &str) -> io::Result<()> {
        ValuePrinter::print(**self, text)
    }
}

impl Printer for &PointerPrinter {
    fn print(&self, text: &str) -> io::Result<()> {
        PointerPrinter::print(self, text)
    }
}
