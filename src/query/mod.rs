//! Query types exchanged with the bound collection

mod order;

pub use order::Direction;
pub use order::NullsOrder;
pub use order::OrderKey;
pub use order::OrderSpec;
