//! Marketing site components

mod nav;
mod footer;
mod cards;
mod rfq_modal;

pub use nav::{use_active_section, MarketingNav, HOME_SECTIONS};
pub use footer::Footer;
pub use cards::*;
pub use rfq_modal::{FieldError, RfqModal};
