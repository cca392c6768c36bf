//! Debugger visualization of IEEE‑754‑2008 decimal floating-point values.
//!
//! Decodes the raw storage of decimal32/64/128 values, in both the packed
//! interchange encoding (binary integer significand) and the "fast" layout
//! with separately stored significand, exponent and sign, into a
//! scientific-notation string such as `1.23e+2`, `-INF` or `SNAN(5)`.
//!
//! The significand and exponent are shown exactly as encoded, so members of
//! the same cohort (`1.0` vs `1.00`) stay distinguishable. No rounding is
//! performed.
//!
//! The [`summary`] function and the [`PrinterRegistry`] adapt the
//! decoders to a debugger: they read members out of a [`ValueSnapshot`] and
//! degrade to `<invalid TYPE: reason>` instead of failing.
//!
//! NOTE: decimal128 values are handled as `u128` or as `(high, low)` 64-bit
//! words, matching how the value is laid out in memory.

mod decimal_width;
pub use decimal_width::*;
mod masks;
pub use masks::*;
mod decoded_value;
pub use decoded_value::*;
mod interchange;
pub use interchange::*;
mod fast;
pub use fast::*;
mod render;
pub use render::*;
mod decode;
pub use decode::*;
mod decimal_type;
pub use decimal_type::*;
mod value_snapshot;
pub use value_snapshot::*;
mod printer;
pub use printer::*;
mod registry;
pub use registry::*;
mod error;
pub use error::*;
