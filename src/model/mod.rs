//! Plain data carried through the facility: orders and recorded actions.

pub mod action;
pub mod order;

pub use action::*;
pub use order::*;
