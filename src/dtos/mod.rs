pub mod product;
pub mod quote;
pub mod offer;
pub mod part;
