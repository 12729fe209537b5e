//! Email address extraction and filtering
//!
//! Raw page text is scanned with a loose address pattern. Because that
//! pattern also matches things like `logo@2x.png` or numeric garbage, every
//! candidate passes through [`EmailFilter`] before it is accepted.

mod extract;
mod filter;

pub use extract::extract_emails;
pub use filter::{is_valid_email, matches_keywords, EmailFilter};
