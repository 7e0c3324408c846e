//! Product domain entity
//!
//! A catalog item that customers can browse and add to their cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cocina,
    #[serde(rename = "Decoración")]
    Decoracion,
    #[serde(rename = "Jardín")]
    Jardin,
    Textil,
    #[serde(rename = "Baño")]
    Bano,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Cocina,
        Category::Decoracion,
        Category::Jardin,
        Category::Textil,
        Category::Bano,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cocina => "Cocina",
            Category::Decoracion => "Decoración",
            Category::Jardin => "Jardín",
            Category::Textil => "Textil",
            Category::Bano => "Baño",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Accepts the display name with or without accents, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_text(s.trim());
        Category::ALL
            .into_iter()
            .find(|c| normalize_text(c.as_str()) == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Category filter used when browsing. `Todo` matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Todo,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Todo => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || normalize_text(s.trim()) == "todo" {
            return Ok(CategoryFilter::Todo);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub image_url: String,
    pub description: String,
    pub stock: i32,
}

impl Product {
    /// Case- and accent-insensitive substring match on the product name
    pub fn name_matches(&self, search: &str) -> bool {
        normalize_text(&self.name).contains(&normalize_text(search))
    }
}

/// Lowercase and strip the diacritics used in Spanish text.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
