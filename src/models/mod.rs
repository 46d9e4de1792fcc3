pub mod product;

pub use product::{Category, Product, ProductListResponse};
