//! Catalog
//!
//! Read-only product and category listings supplied by the surrounding
//! application, used to populate pickers and to resolve ids into names.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Catalog product entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend product id
    #[serde(rename = "productId")]
    pub id: ProductId,

    /// Display name
    pub name: String,
}

/// Catalog category entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend category id
    #[serde(rename = "categoryId")]
    pub id: CategoryId,

    /// Display name, also the value stored in category rules
    pub name: String,
}

/// Resolve product ids into display names.
pub trait ProductLookup {
    /// Return the product name for `id`, or `None` when the id is unknown.
    fn product_name(&self, id: ProductId) -> Option<&str>;
}

impl ProductLookup for FxHashMap<ProductId, String> {
    fn product_name(&self, id: ProductId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

/// Products and categories known to the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    product_names: FxHashMap<ProductId, usize>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, keeping listing order for pickers.
    ///
    /// When the same product id appears more than once the last entry wins
    /// for name resolution.
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let product_names = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id, index))
            .collect();

        Self {
            products,
            product_names,
            categories,
        }
    }

    /// Products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Categories in listing order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in listing order, as offered by the category picker.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_names
            .get(&id)
            .and_then(|index| self.products.get(*index))
    }
}

impl ProductLookup for Catalog {
    fn product_name(&self, id: ProductId) -> Option<&str> {
        self.product(id).map(|product| product.name.as_str())
    }
}
