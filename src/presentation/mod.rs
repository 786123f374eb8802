//! Presentation of estimates.
//!
//! Currency formatting, the copyable summary text, and the print document.
//! Nothing here feeds back into a calculation.

mod currency;
mod print;
mod summary;

pub use currency::{FormattedAmounts, format_currency};
pub use print::{PRINT_DISCLAIMER, PRINT_TITLE, PrintDocument};
pub use summary::summary_text;
