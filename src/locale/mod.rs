//! Month and weekday name tables.

mod builtin;

pub use builtin::Locale;
