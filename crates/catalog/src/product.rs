use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use stockroom_core::{DomainResult, ProductId, ValidationError, Violation};

/// Maximum length of `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length of `description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Upper bound for `price` (inclusive).
pub const PRICE_MAX: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

pub const NAME_REQUIRED: &str = "Product name is required";
pub const NAME_TOO_LONG: &str = "Product name cannot exceed 100 characters";
pub const DESCRIPTION_REQUIRED: &str = "Product description is required";
pub const DESCRIPTION_TOO_LONG: &str = "Description cannot exceed 500 characters";
pub const PRICE_REQUIRED: &str = "Product price is required";
pub const PRICE_NEGATIVE: &str = "Price must be a positive number";
pub const PRICE_TOO_LARGE: &str = "Price cannot exceed 1,000,000";
pub const CATEGORY_REQUIRED: &str = "Product category is required";
pub const CATEGORY_INVALID: &str = "Please select a valid category";

/// Fixed product category set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Books,
        Category::Other,
    ];

    /// Parse the exact wire label; anything else is not a valid category.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Electronics" => Some(Category::Electronics),
            "Clothing" => Some(Category::Clothing),
            "Home" => Some(Category::Home),
            "Books" => Some(Category::Books),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Books => "Books",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied product fields, not yet validated.
///
/// This is the *transient* state of a record: every field is optional so the
/// validation contract (not the type system) decides what "missing" means and
/// which message to report. `category` stays a raw label here so unknown
/// values fail with the category message rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
            category: Some(category.into()),
            in_stock: None,
        }
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Round `price` to exactly two decimal places.
    ///
    /// Uses round-half-up (`MidpointAwayFromZero`): 19.999 → 20.00 and
    /// 19.995 → 20.00. Runs before validation on every commit attempt, so a
    /// persisted price never carries more than two decimal places. Idempotent.
    pub fn normalize(&mut self) {
        if let Some(price) = self.price {
            self.price = Some(round_to_cents(price));
        }
    }

    /// Check every field constraint against the current values.
    ///
    /// Whitespace is trimmed off `name`/`description` before the
    /// required/length checks. All-or-nothing: either every constraint holds,
    /// or the error carries every violation in fixed field order
    /// (name, description, price, category).
    pub fn validate(&self) -> DomainResult<()> {
        self.clone().into_validated().map(|_| ())
    }

    /// Normalize the price, then validate; the pre-commit path.
    ///
    /// On success yields the persistable field values: trimmed strings,
    /// two-decimal price, parsed category, `in_stock` defaulted to true.
    pub fn validate_and_normalize(mut self) -> DomainResult<ValidatedProduct> {
        self.normalize();
        self.into_validated()
    }

    // Single fixed-order pass producing either the validated fields or the
    // ordered violation list.
    fn into_validated(self) -> DomainResult<ValidatedProduct> {
        let mut violations = Vec::new();

        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push(Violation::new("name", NAME_REQUIRED));
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_CHARS => {
                violations.push(Violation::new("name", NAME_TOO_LONG));
                None
            }
            Some(name) => Some(name.to_owned()),
        };

        let description = match self.description.as_deref().map(str::trim) {
            None | Some("") => {
                violations.push(Violation::new("description", DESCRIPTION_REQUIRED));
                None
            }
            Some(description) if description.chars().count() > DESCRIPTION_MAX_CHARS => {
                violations.push(Violation::new("description", DESCRIPTION_TOO_LONG));
                None
            }
            Some(description) => Some(description.to_owned()),
        };

        let price = match self.price {
            None => {
                violations.push(Violation::new("price", PRICE_REQUIRED));
                None
            }
            Some(price) if price < Decimal::ZERO => {
                violations.push(Violation::new("price", PRICE_NEGATIVE));
                None
            }
            Some(price) if price > PRICE_MAX => {
                violations.push(Violation::new("price", PRICE_TOO_LARGE));
                None
            }
            Some(price) => Some(price),
        };

        let category = match self.category.as_deref() {
            None | Some("") => {
                violations.push(Violation::new("category", CATEGORY_REQUIRED));
                None
            }
            Some(label) => match Category::parse(label) {
                Some(category) => Some(category),
                None => {
                    violations.push(Violation::new("category", CATEGORY_INVALID));
                    None
                }
            },
        };

        match (name, description, price, category) {
            (Some(name), Some(description), Some(price), Some(category)) => Ok(ValidatedProduct {
                name,
                description,
                price,
                category,
                in_stock: self.in_stock.unwrap_or(true),
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

/// Field values that passed validation: trimmed, normalized, defaulted.
///
/// The only way to obtain one is through
/// [`ProductDraft::validate_and_normalize`], which is what makes a record
/// safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub in_stock: bool,
}

/// A persisted product record.
///
/// Serializes with the derived `formattedPrice` alongside the stored fields;
/// deserialization ignores it, since it is recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialize a freshly validated record; creation stamps both timestamps.
    pub fn create(id: ProductId, fields: ValidatedProduct, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace the caller-editable fields; keeps `created_at`, advances
    /// `updated_at`.
    pub fn apply_update(&mut self, fields: ValidatedProduct, at: DateTime<Utc>) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
        self.updated_at = at;
    }

    /// Display price: `$` followed by the price with exactly two decimals.
    ///
    /// Pure function of the current `price`; recomputed on every access,
    /// never cached, never persisted.
    pub fn formatted_price(&self) -> String {
        let mut price = round_to_cents(self.price);
        price.rescale(2);
        format!("${price}")
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Product", 9)?;
        record.serialize_field("id", &self.id)?;
        record.serialize_field("name", &self.name)?;
        record.serialize_field("description", &self.description)?;
        record.serialize_field("price", &self.price)?;
        record.serialize_field("category", &self.category)?;
        record.serialize_field("inStock", &self.in_stock)?;
        record.serialize_field("createdAt", &self.created_at)?;
        record.serialize_field("updatedAt", &self.updated_at)?;
        // Derived, recomputed here; not a stored field.
        record.serialize_field("formattedPrice", &self.formatted_price())?;
        record.end()
    }
}

fn round_to_cents(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
