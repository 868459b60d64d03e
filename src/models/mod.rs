pub mod product;
pub mod offer;
pub mod part;
pub mod house;
