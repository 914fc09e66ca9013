pub mod product;
pub mod line_item;
pub mod order;
pub mod clock;

pub use product::*;
pub use line_item::*;
pub use order::*;
pub use clock::*;
