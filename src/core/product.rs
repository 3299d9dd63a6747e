//! Product catalog model - normalized products and the ordered product list.
//!
//! Raw catalog records arrive in the nested shape of the catalog document
//! (`sys.id`, `fields.title`, `fields.price`, `fields.image.fields.file.url`).
//! [`ProductList::add`] flattens each record into an immutable [`Product`] and
//! appends it, so insertion order is display order and also the position space
//! a [`Cart`](crate::core::cart::Cart) is keyed against.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, trace};

/// Identifier of a product, unique within one catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductId(pub String);

impl ProductId {
    /// Borrows the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A product as displayed in the storefront. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique id within the catalog
    pub id: ProductId,
    /// Display title
    pub title: String,
    /// Unit price, non-negative and finite
    pub price: f64,
    /// Image URL
    pub image: String,
}

impl Product {
    /// Validates a raw record and flattens it into a product.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The id or the title is empty or whitespace-only
    /// - The price is negative or not finite (NaN, infinity)
    pub fn from_record(record: CatalogRecord) -> Result<Self> {
        let CatalogRecord { sys, fields } = record;

        if sys.id.trim().is_empty() {
            return Err(Error::InvalidProduct {
                message: "Product id cannot be empty".to_string(),
            });
        }

        if fields.title.trim().is_empty() {
            return Err(Error::InvalidProduct {
                message: format!("Product {} has an empty title", sys.id),
            });
        }

        if fields.price < 0.0 || !fields.price.is_finite() {
            return Err(Error::InvalidPrice {
                id: sys.id,
                price: fields.price,
            });
        }

        Ok(Self {
            id: ProductId(sys.id),
            title: fields.title,
            price: fields.price,
            image: fields.image.fields.file.url,
        })
    }
}

/// The catalog document: an object holding an `items` array of records.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// Raw records in display order
    pub items: Vec<CatalogRecord>,
}

/// One raw catalog record before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    /// System metadata carrying the id
    pub sys: RecordSys,
    /// Content fields
    pub fields: RecordFields,
}

/// `sys` block of a catalog record.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSys {
    /// Product id
    pub id: String,
}

/// `fields` block of a catalog record.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordFields {
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Image asset
    pub image: RecordImage,
}

/// Image asset wrapper (`fields.image`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecordImage {
    /// Asset fields
    pub fields: RecordImageFields,
}

/// Asset fields (`fields.image.fields`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecordImageFields {
    /// Stored file
    pub file: RecordFile,
}

/// Stored file (`fields.image.fields.file`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecordFile {
    /// Public URL of the image
    pub url: String,
}

/// Ordered list of products. No two products share an id.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Builds a list from every record of a catalog document, in order.
    ///
    /// Stops at the first record that [`add`](Self::add) rejects.
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut list = Self::new();
        for record in document.items {
            list.add(record)?;
        }
        debug!("Built product list with {} products", list.len());
        Ok(list)
    }

    /// Normalizes a raw record and appends the resulting product.
    ///
    /// # Errors
    /// Returns an error if the record is invalid (see [`Product::from_record`])
    /// or if its id is already present. The list is unchanged on error.
    pub fn add(&mut self, record: CatalogRecord) -> Result<&Product> {
        let product = Product::from_record(record)?;

        if self.position(&product.id).is_some() {
            return Err(Error::DuplicateProduct {
                id: product.id.0,
            });
        }

        trace!("Adding product {} ({})", product.id, product.title);
        self.products.push(product);
        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    /// Removes the product with the given id, if present.
    ///
    /// Later products shift down one position. Returns the removed product.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.position(id)?;
        debug!("Removing product {} at position {}", id, index);
        Some(self.products.remove(index))
    }

    /// Position of the product with the given id.
    #[must_use]
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|product| &product.id == id)
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Product at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterates products in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the list holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_flattens_nested_record() {
        let mut list = ProductList::new();
        let product = list
            .add(record("p1", "Queen Bed", 59.99, "//images/bed.jpg"))
            .unwrap();

        assert_eq!(product.id, ProductId::from("p1"));
        assert_eq!(product.title, "Queen Bed");
        assert_eq!(product.price, 59.99);
        assert_eq!(product.image, "//images/bed.jpg");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_keeps_title_as_given() {
        let mut list = ProductList::new();
        let product = list
            .add(record("p1", "  queen bed ", 59.99, "bed.jpg"))
            .unwrap();
        assert_eq!(product.title, "  queen bed ");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let list = sample_products();
        let ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut list = sample_products();
        let result = list.add(record("a", "Another A", 1.0, "a2.jpg"));

        assert!(matches!(result, Err(Error::DuplicateProduct { id }) if id == "a"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().title, "Product a");
    }

    #[test]
    fn test_add_rejects_invalid_prices() {
        let mut list = ProductList::new();

        let result = list.add(record("neg", "Negative", -1.0, "x.jpg"));
        assert!(matches!(result, Err(Error::InvalidPrice { price, .. }) if price == -1.0));

        let result = list.add(record("nan", "NaN", f64::NAN, "x.jpg"));
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));

        let result = list.add(record("inf", "Inf", f64::INFINITY, "x.jpg"));
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));

        assert!(list.is_empty());
    }

    #[test]
    fn test_add_accepts_free_product() {
        let mut list = ProductList::new();
        assert!(list.add(record("free", "Free Sample", 0.0, "x.jpg")).is_ok());
    }

    #[test]
    fn test_add_rejects_blank_title_and_id() {
        let mut list = ProductList::new();
        assert!(matches!(
            list.add(record("p1", "   ", 1.0, "x.jpg")),
            Err(Error::InvalidProduct { .. })
        ));
        assert!(matches!(
            list.add(record("", "Title", 1.0, "x.jpg")),
            Err(Error::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = sample_products();
        let removed = list.remove(&ProductId::from("a")).unwrap();

        assert_eq!(removed.id, ProductId::from("a"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, ProductId::from("b"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = sample_products();
        assert!(list.remove(&ProductId::from("zzz")).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_find_and_position() {
        let list = sample_products();
        assert_eq!(list.position(&ProductId::from("b")), Some(1));
        assert_eq!(list.find(&ProductId::from("b")).unwrap().price, 3.333);
        assert!(list.find(&ProductId::from("c")).is_none());
    }

    #[test]
    fn test_from_document_stops_at_first_bad_record() {
        let document = CatalogDocument {
            items: vec![
                record("a", "A", 1.0, "a.jpg"),
                record("a", "A again", 2.0, "a.jpg"),
                record("b", "B", 3.0, "b.jpg"),
            ],
        };
        assert!(matches!(
            ProductList::from_document(document),
            Err(Error::DuplicateProduct { .. })
        ));
    }
}
