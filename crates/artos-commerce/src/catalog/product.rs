//! Product, variant, and file attachment types.

use crate::ids::{FileId, FileLinkId, OptionId, ProductId, VariantId};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored media file referenced by a product or variant.
///
/// Files are shared: the same file may be linked from several variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Unique file identifier.
    pub id: FileId,
    /// URL path to the file contents.
    pub path: String,
    /// MIME type (e.g. "image/png").
    pub mime_type: String,
    /// Original file name.
    pub file_name: String,
}

/// Associates a file with a product or variant.
///
/// `priority` controls display order: ascending, lowest first. The
/// lowest-priority link is the main image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileLink {
    /// Unique link identifier.
    pub id: FileLinkId,
    /// The linked file.
    pub file: StoredFile,
    /// Display ordering priority (lower = shown first).
    pub priority: i64,
}

/// A descriptive option tag on a variant (e.g. colour or size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Unique option identifier.
    pub id: OptionId,
    /// Human-readable name (e.g. "Blue").
    pub name: String,
    /// Machine-readable code (e.g. "blue").
    pub code: String,
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant name; may be empty, in which case display falls back to
    /// the product name.
    #[serde(default)]
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Price as a decimal amount. The API emits both JSON numbers and
    /// numeric strings here.
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    /// Units in stock. `None` means stock is unknown; `Some(0)` means
    /// sold out. The two render differently.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Image attachments, ordered by ascending priority for display.
    #[serde(default)]
    pub files: Vec<FileLink>,
    /// Option tags, rendered in the order given here.
    #[serde(default)]
    pub product_options: Vec<ProductOption>,
}

impl Variant {
    /// The variant's files in display order (ascending priority).
    pub fn files_by_priority(&self) -> Vec<&FileLink> {
        sorted_by_priority(&self.files)
    }

    /// The variant's main image link, if it has any files.
    pub fn primary_file(&self) -> Option<&FileLink> {
        self.files.iter().min_by_key(|link| link.priority)
    }

    /// Shopper-facing stock label.
    ///
    /// Unknown stock reads "Out of stock"; a numeric value, including
    /// zero, is rendered literally.
    pub fn stock_label(&self) -> String {
        match self.stock {
            None => "Out of stock".to_string(),
            Some(count) => count.to_string(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Purchasable variants, in catalog order. The first variant is the
    /// default selection for display.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Product-level image attachments, used as a fallback when the
    /// selected variant has none.
    #[serde(default)]
    pub files: Vec<FileLink>,
}

impl Product {
    /// The default variant for initial display.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Look up a variant by id.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == *id)
    }

    /// The product's own main image link, if any.
    pub fn primary_file(&self) -> Option<&FileLink> {
        self.files.iter().min_by_key(|link| link.priority)
    }
}

fn sorted_by_priority(links: &[FileLink]) -> Vec<&FileLink> {
    let mut ordered: Vec<&FileLink> = links.iter().collect();
    ordered.sort_by_key(|link| link.priority);
    ordered
}

fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
