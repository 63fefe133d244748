//! Image derivation for product cards.

use crate::catalog::{Product, Variant};
use crate::ids::VariantId;

/// A selectable thumbnail together with the variant that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    /// Image source path.
    pub src: String,
    /// The variant this thumbnail selects.
    pub owner: VariantId,
}

/// All selectable thumbnails for a product.
///
/// Variants contribute in catalog order; within a variant, files appear
/// by ascending priority.
pub fn thumbnail_strip(product: &Product) -> Vec<ThumbnailImage> {
    product
        .variants
        .iter()
        .flat_map(|variant| {
            variant
                .files_by_priority()
                .into_iter()
                .map(move |link| ThumbnailImage {
                    src: link.file.path.clone(),
                    owner: variant.id.clone(),
                })
        })
        .collect()
}

/// The main image for a card.
///
/// Resolution order: the selected variant's lowest-priority file, then
/// the product's own lowest-priority file, then nothing. A fully
/// imageless product simply renders no image.
pub fn main_image<'a>(product: &'a Product, selected: &'a Variant) -> Option<&'a str> {
    selected
        .primary_file()
        .or_else(|| product.primary_file())
        .map(|link| link.file.path.as_str())
}
