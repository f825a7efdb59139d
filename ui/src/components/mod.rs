//! User Interface Components
//!
//! Reusable Dioxus components for the portfolio page:
//!
//! - **forms**: the contact form
//! - **display**: toast notifications and validation feedback
//! - **inputs**: validated input fields and form controls
//! - **footer**: social links and attribution

pub mod display;
pub mod footer;
pub mod forms;
pub mod inputs;

pub use footer::Footer;
pub use forms::ContactForm;
