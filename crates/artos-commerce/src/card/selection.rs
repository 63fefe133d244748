//! Per-card variant selection state machine.

use crate::card::images::{main_image, thumbnail_strip};
use crate::catalog::{Product, ProductOption, Variant};
use crate::error::CommerceError;
use crate::ids::VariantId;
use crate::price::format_usd;

/// A thumbnail ready for rendering, flagged when it belongs to the
/// selected variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Image source path.
    pub src: String,
    /// The variant this thumbnail selects.
    pub owner: VariantId,
    /// True when the owning variant is the current selection.
    pub active: bool,
}

/// Display attributes derived from the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantCard {
    /// Variant name, or the product name when the variant has none.
    pub display_name: String,
    /// Formatted price (e.g. "$15.50"). Never inherited from another
    /// variant.
    pub display_price: String,
    /// The selected variant's option tags, in their given order.
    pub options: Vec<ProductOption>,
    /// Shopper-facing stock label.
    pub stock_label: String,
    /// Main image source, if the fallback chain found one.
    pub main_image: Option<String>,
    /// The full thumbnail strip with active flags.
    pub thumbnails: Vec<Thumbnail>,
}

/// Tracks which of a product's variants is active on its card.
///
/// One instance exists per rendered card and holds its own catalog
/// snapshot; a new page fetch replaces card and state wholesale, so the
/// machine never outlives its product. States are the product's
/// variants; the only transition is [`select`](Self::select).
#[derive(Debug, Clone)]
pub struct VariantSelection {
    product: Product,
    // Index into product.variants; set only from position lookups.
    selected: usize,
}

impl VariantSelection {
    /// Start with the product's first variant selected.
    pub fn new(product: Product) -> Result<Self, CommerceError> {
        if product.variants.is_empty() {
            return Err(CommerceError::ProductWithoutVariants(product.id.clone()));
        }
        Ok(Self {
            product,
            selected: 0,
        })
    }

    /// The product this card displays.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The currently selected variant.
    pub fn selected(&self) -> &Variant {
        &self.product.variants[self.selected]
    }

    /// Switch the selection to the variant with the given id.
    ///
    /// Ids outside the product's variant set leave the selection
    /// unchanged and return false. Re-selecting the active variant is a
    /// valid no-op transition. Selection never triggers a fetch.
    pub fn select(&mut self, id: &VariantId) -> bool {
        match self.product.variants.iter().position(|v| v.id == *id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Derive the renderable card for the current selection.
    pub fn card(&self) -> VariantCard {
        let variant = self.selected();

        let display_name = if variant.name.trim().is_empty() {
            self.product.name.clone()
        } else {
            variant.name.clone()
        };

        let thumbnails = thumbnail_strip(&self.product)
            .into_iter()
            .map(|thumb| {
                let active = thumb.owner == variant.id;
                Thumbnail {
                    src: thumb.src,
                    owner: thumb.owner,
                    active,
                }
            })
            .collect();

        VariantCard {
            display_name,
            display_price: format_usd(variant.price),
            options: variant.product_options.clone(),
            stock_label: variant.stock_label(),
            main_image: main_image(&self.product, variant).map(str::to_string),
            thumbnails,
        }
    }
}
