mod product;
pub use self::product::{CategoryGroup, CategoryGroups, Product, ProductID, ProductPage};

mod shop;
pub use self::shop::{Shop, ShopID, ShopList};
