use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StockaError};

/// A single tracked stock record.
///
/// `id` is assigned at creation and never changes; every other field can be
/// replaced through `update` or `adjust`. An item is *low on stock* when
/// `quantity < reorder_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i64,
    /// Price per unit in integer cents. Never a float.
    pub price_cents: i64,
    #[serde(default)]
    pub reorder_level: i64,
}

impl Item {
    pub fn new(draft: ItemDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            price_cents: draft.price_cents,
            reorder_level: draft.reorder_level,
        }
    }

    pub fn is_low(&self) -> bool {
        self.quantity < self.reorder_level
    }

    /// Stock value of this line: quantity × unit price, in cents.
    pub fn value_cents(&self) -> i64 {
        self.quantity.saturating_mul(self.price_cents)
    }
}

/// Field values for a new item, validated as a whole before the id is issued.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub category: Option<String>,
    pub quantity: i64,
    pub price_cents: i64,
    pub reorder_level: i64,
}

impl ItemDraft {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_quantity(self.quantity)?;
        validate_price(self.price_cents)?;
        validate_reorder_level(self.reorder_level)?;
        Ok(())
    }
}

/// A partial update: only the supplied fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price_cents: Option<i64>,
    pub reorder_level: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price_cents.is_none()
            && self.reorder_level.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(price) = self.price_cents {
            validate_price(price)?;
        }
        if let Some(level) = self.reorder_level {
            validate_reorder_level(level)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = Some(category.clone());
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(price) = self.price_cents {
            item.price_cents = price;
        }
        if let Some(level) = self.reorder_level {
            item.reorder_level = level;
        }
        item.updated_at = Utc::now();
    }
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StockaError::Validation("name cannot be empty".into()));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity < 0 {
        return Err(StockaError::Validation(format!(
            "quantity cannot be negative (got {})",
            quantity
        )));
    }
    Ok(())
}

pub fn validate_price(price_cents: i64) -> Result<()> {
    if price_cents < 0 {
        return Err(StockaError::Validation("price cannot be negative".into()));
    }
    Ok(())
}

pub fn validate_reorder_level(level: i64) -> Result<()> {
    if level < 0 {
        return Err(StockaError::Validation(
            "reorder level cannot be negative".into(),
        ));
    }
    Ok(())
}
