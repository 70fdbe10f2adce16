//! # Method receivers and trait satisfaction
//!
//! A walkthrough of how a method's receiver kind (`self` vs `&self`) decides
//! which call forms compile and which types implement a trait.
//!
//! ## The rules
//! 1. **Method expressions**: `Type::method` is a plain function whose first
//!    parameter is the receiver. For a `&self` method that parameter is a
//!    reference, so a reference is what you pass.
//! 2. **Method values**: `x.method(..)` has the receiver picked already; keeping
//!    one around means a closure that captures the receiver.
//! 3. **Auto-ref / auto-deref**: an addressable value reaching a `&self` method is
//!    borrowed; a reference reaching a `self` method on a `Copy` type is
//!    dereferenced and copied.
//! 4. **Trait satisfaction**: `&T` can implement a trait whenever `T` does, but a
//!    trait that is only implemented for `&T` is not implemented for `T`.
//! 5. **Trait objects**: a `dyn Printer` is a (vtable, data) pointer pair. Calls
//!    dispatch dynamically and the type hides whether the data is `T` or `&T`.
//! 6. **Method expressions on a trait**: `Printer::print` / `<dyn Printer>::print`
//!    work like rule 1, except the argument must already be a form that
//!    implements the trait.
//!
//! Run with: `cargo run --bin receivers`

pub mod demo;
pub mod error;
pub mod printers;

pub use demo::{run, CALL_SITES, TEXT};
pub use error::DemoError;
pub use printers::{capture, printed, PointerPrinter, Printer, ValuePrinter};
