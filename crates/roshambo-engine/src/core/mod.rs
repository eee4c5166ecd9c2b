pub use self::{classify::*, gesture::*, landmark::*};

pub(crate) mod classify;
pub(crate) mod gesture;
pub(crate) mod landmark;
