//! The walkthrough itself: five sections, each a run of print calls.
//!
//! Every section returns how many lines it printed, or the first write error,
//! so the tests can check the total against [`CALL_SITES`].

use std::io;

use crate::printers::{printed, PointerPrinter, ValuePrinter};
use tracing::{debug, info};

/// The line every call prints.
pub const TEXT: &str = "Epic poem";

/// Print calls made by [`run`], summed over all five sections.
pub const CALL_SITES: usize = 30;

/// Runs every section in order and returns the number of lines printed.
///
/// Stops at the first line that cannot be written.
pub fn run(text: &str) -> io::Result<usize> {
    let calls = method_expressions(text)?
        + method_values(text)?
        + interface_method_expressions(text)?
        + interface_method_values(text)?
        + calling_via_interfaces(text)?;

    info!(calls, "walkthrough finished");
    Ok(calls)
}

// ============================================================================
// Section 1: Method expressions
// ============================================================================
//
// `Type::method` names the method as a plain function. It does NOT hold a
// receiver, so the receiver is passed as the first argument, which makes the
// receiver kind visible at the call site.

pub fn method_expressions(text: &str) -> io::Result<usize> {
    debug!("section: method expressions");
    let start = printed();

    let printer1 = ValuePrinter;
    let printer2 = PointerPrinter;

    ValuePrinter::print(printer1, text)?;
    let f1: fn(ValuePrinter, &str) -> io::Result<()> = ValuePrinter::print;
    f1(printer1, text)?;

    // Qualified-path form of the same thing.
    <ValuePrinter>::print(printer1, text)?;
    let f2: fn(ValuePrinter, &str) -> io::Result<()> = <ValuePrinter>::print;
    f2(printer1, text)?;

    // The receiver parameter is `&PointerPrinter`, so that is what gets passed.
    //
    // PointerPrinter::print(printer2, text); // Wouldn't compile!
    PointerPrinter::print(&printer2, text)?;
    let f3: fn(&PointerPrinter, &str) -> io::Result<()> = PointerPrinter::print;
    f3(&printer2, text)?;

    Ok(printed() - start)
}

// ============================================================================
// Section 2: Method values
// ============================================================================
//
// `x.method(..)` with the receiver already chosen. Binding one for later is a
// closure that captures the receiver: by copy for `ValuePrinter`, by borrow
// for `PointerPrinter`.
//
// `Printer` is not in scope here, so every call below resolves
// to the inherent methods.

pub fn method_values(text: &str) -> io::Result<usize> {
    debug!("section: method values");
    let start = printed();

    let printer1 = ValuePrinter;
    let printer2 = PointerPrinter;

    printer1.print(text)?;
    let f1 = move |text: &str| printer1.print(text); // copy of printer1 is bound
    f1(text)?;

    // A reference reaching a by-value method is dereferenced (and copied).
    // `p.print(..)` is `(*p).print(..)` here.
    let printer1_ref = &printer1;
    printer1_ref.print(text)?;
    (*printer1_ref).print(text)?;

    // An addressable value reaching a by-reference method is borrowed.
    // `x.print(..)` is `(&x).print(..)` here.
    printer2.print(text)?;
    let f2 = |text: &str| printer2.print(text); // &printer2 is bound
    f2(text)?;

    let printer2_ref = &printer2;
    printer2_ref.print(text)?;
    (printer2_ref).print(text)?;

    Ok(printed() - start)
}

// ============================================================================
// Interfaces 101
// ============================================================================
//
// A trait is a set of methods, and `dyn Trait` is also a type. A `dyn Printer`
// value is two pointers:
// - one to the vtable of the concrete type's methods,
// - one to the data.
//
// The trait does not say whether an implementor is `T` or `&T`. Handed a
// `dyn Printer`, there is no telling which one sits behind it.

/// The three trait objects the interface sections work with.
struct Interfaces<'a> {
    printer1_value: Box<dyn crate::Printer + 'a>,
    printer1_ref: Box<dyn crate::Printer + 'a>,
    printer2_ref: Box<dyn crate::Printer + 'a>,
}

impl<'a> Interfaces<'a> {
    fn new(printer1: &'a ValuePrinter, printer2: &'a PointerPrinter) -> Self {
        // A reference can use the methods of the value it points at, not the other way round.
        let printer1_value: Box<dyn crate::Printer + 'a> = Box::new(*printer1);
        let printer1_ref: Box<dyn crate::Printer + 'a> = Box::new(printer1);

        // `PointerPrinter` itself is not a `Printer`; only `&PointerPrinter` is.
        //
        // let printer2_value: Box<dyn Printer> = Box::new(*printer2); // Wouldn't compile!
        let printer2_ref: Box<dyn crate::Printer + 'a> = Box::new(printer2);

        Self {
            printer1_value,
            printer1_ref,
            printer2_ref,
        }
    }
}

// ============================================================================
// Section 3: Method expressions on the trait
// ============================================================================

pub fn interface_method_expressions(text: &str) -> io::Result<usize> {
    use crate::Printer;

    debug!("section: interface method expressions");
    let start = printed();

    let printer1 = ValuePrinter;
    let printer2 = PointerPrinter;

    Printer::print(&printer1, text)?;
    let f1 = <dyn Printer>::print; // fn(&dyn Printer, &str)
    f1(&printer1, text)?;

    <dyn Printer>::print(&printer1, text)?;
    let f2 = <dyn Printer as Printer>::print; // fn(&dyn Printer, &str)
    f2(&printer1, text)?;

    // Unlike `PointerPrinter::print`, there is no picking the receiver form
    // here: the argument has to be something that already implements `Printer`.
    //
    // <dyn Printer>::print(&printer2, text); // Wouldn't compile!
    //
    // `+ '_` lets the trait object borrow the local `printer2`.
    <dyn Printer + '_>::print(&&printer2, text)?;

    Ok(printed() - start)
}

// ============================================================================
// Section 4: Method values on trait objects
// ============================================================================

pub fn interface_method_values(text: &str) -> io::Result<usize> {
    debug!("section: interface method values");
    let start = printed();

    let printer1 = ValuePrinter;
    let printer2 = PointerPrinter;
    let interfaces = Interfaces::new(&printer1, &printer2);

    interfaces.printer1_value.print(text)?;
    interfaces.printer1_ref.print(text)?;

    let f1 = |text: &str| interfaces.printer1_value.print(text); // value behind the box
    let f2 = |text: &str| interfaces.printer1_ref.print(text); // reference behind the box
    f1(text)?;
    f2(text)?;

    interfaces.printer2_ref.print(text)?;
    let f3 = |text: &str| interfaces.printer2_ref.print(text);
    f3(text)?;

    Ok(printed() - start)
}

// ============================================================================
// Section 5: Passing trait objects around
// ============================================================================

pub fn calling_via_interfaces(text: &str) -> io::Result<usize> {
    use crate::Printer;

    debug!("section: calling via interfaces");
    let start = printed();

    let printer1 = ValuePrinter;
    let printer2 = PointerPrinter;
    let interfaces = Interfaces::new(&printer1, &printer2);

    // Takes any `Printer` trait object.
    fn print_func(text: &str, printer: &dyn Printer) -> io::Result<()> {
        printer.print(text)
    }

    print_func(text, &printer1)?;
    print_func(text, &*interfaces.printer1_value)?;
    print_func(text, &*interfaces.printer1_ref)?;

    // The function only knows `Printer`, so the caller must hand over the form
    // that implements it.
    //
    // print_func(text, &printer2); // Wouldn't compile!
    print_func(text, &&printer2)?;
    print_func(text, &*interfaces.printer2_ref)?;

    Ok(printed() - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printers::capture;

    /// Runs a section with its output captured, checking every line it printed.
    fn lines_of(section: fn(&str) -> io::Result<usize>) -> usize {
        let (calls, output) = capture(|| section(TEXT));
        let calls = calls.unwrap();
        assert_eq!(output, format!("{TEXT}\n").repeat(calls));
        calls
    }

    #[test]
    fn method_expressions_print_six_lines() {
        assert_eq!(lines_of(method_expressions), 6);
    }

    #[test]
    fn method_values_print_eight_lines() {
        assert_eq!(lines_of(method_values), 8);
    }

    #[test]
    fn interface_method_expressions_print_five_lines() {
        assert_eq!(lines_of(interface_method_expressions), 5);
    }

    #[test]
    fn interface_method_values_print_six_lines() {
        assert_eq!(lines_of(interface_method_values), 6);
    }

    #[test]
    fn calling_via_interfaces_prints_five_lines() {
        assert_eq!(lines_of(calling_via_interfaces), 5);
    }

    #[test]
    fn run_covers_every_call_site() {
        assert_eq!(lines_of(run), CALL_SITES);
    }

    #[test]
    fn sections_print_whatever_text_they_are_given() {
        let (calls, output) = capture(|| method_values("Short verse"));
        assert_eq!(calls.unwrap(), 8);
        assert!(output.lines().all(|line| line == "Short verse"));
    }
}
