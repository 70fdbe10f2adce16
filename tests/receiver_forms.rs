//! A method expression and the matching method value print the same thing
//! when they share a receiver.

use std::io;

use receivers::{capture, PointerPrinter, Printer, ValuePrinter, TEXT};

/// Everything printed while `f` runs.
fn output_of(f: impl FnOnce() -> io::Result<()>) -> String {
    let (result, output) = capture(f);
    result.unwrap();
    output
}

fn one_line() -> String {
    format!("{TEXT}\n")
}

#[test]
fn value_printer_expression_and_value_forms_agree() {
    let printer = ValuePrinter;
    let expression: fn(ValuePrinter, &str) -> io::Result<()> = ValuePrinter::print;
    let value = move |text: &str| printer.print(text);

    let from_expression = output_of(|| expression(printer, TEXT));
    let from_value = output_of(|| value(TEXT));

    assert_eq!(from_expression, one_line());
    assert_eq!(from_value, from_expression);
}

#[test]
fn pointer_printer_expression_and_value_forms_agree() {
    let printer = PointerPrinter;
    let expression: fn(&PointerPrinter, &str) -> io::Result<()> = PointerPrinter::print;
    let value = |text: &str| printer.print(text);

    let from_expression = output_of(|| expression(&printer, TEXT));
    let from_value = output_of(|| value(TEXT));

    assert_eq!(from_expression, one_line());
    assert_eq!(from_value, from_expression);
}

#[test]
fn trait_forms_agree_for_value_printer() {
    let printer = ValuePrinter;
    let boxed: Box<dyn Printer> = Box::new(printer);
    let value = |text: &str| boxed.print(text);

    let from_expression = output_of(|| <dyn Printer>::print(&printer, TEXT));
    let from_value = output_of(|| value(TEXT));

    assert_eq!(from_expression, one_line());
    assert_eq!(from_value, from_expression);
}

#[test]
fn trait_forms_agree_for_pointer_printer() {
    let printer = PointerPrinter;
    let boxed: Box<dyn Printer + '_> = Box::new(&printer);
    let value = |text: &str| boxed.print(text);

    let from_expression = output_of(|| <dyn Printer + '_>::print(&&printer, TEXT));
    let from_value = output_of(|| value(TEXT));

    assert_eq!(from_expression, one_line());
    assert_eq!(from_value, from_expression);
}

#[test]
fn every_printer_form_dispatches_through_dyn() {
    let value_printer = ValuePrinter;
    let pointer_printer = PointerPrinter;
    let printers: Vec<Box<dyn Printer + '_>> = vec![
        Box::new(value_printer),
        Box::new(&value_printer),
        Box::new(&pointer_printer),
    ];

    let output = output_of(|| printers.iter().try_for_each(|printer| printer.print(TEXT)));

    assert_eq!(output, one_line().repeat(printers.len()));
}
