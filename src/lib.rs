//! BookSwap core: catalog filtering, offer valuation and the session state
//! the desktop shell renders.

pub mod domain;
pub mod util;
