use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ═══════════════════════════════════════════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════════════════════════════════════════

/// Image reference stored when a catalog item is created without an upload
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Store-assigned catalog identifier.
///
/// The in-memory catalog hands out sequential integers, the Postgres catalog
/// hands out UUIDs. Clients only ever echo the value back in a path segment,
/// so both serialize as their natural JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Seq(u64),
    Doc(Uuid),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Seq(n) => write!(f, "{}", n),
            ItemId::Doc(id) => write!(f, "{}", id),
        }
    }
}

/// A game or piece of gaming gear listed in the popular-items catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    pub img: String,
    /// Display price, e.g. "$49.99". Never parsed.
    pub price: String,
    pub description: String,
    /// Display rating, e.g. "4.5". Never parsed.
    pub rating: String,
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// A validated catalog item that has not been assigned an identifier yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCatalogItem {
    pub name: String,
    #[serde(default = "placeholder_image")]
    pub img: String,
    pub price: String,
    pub description: String,
    pub rating: String,
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl NewCatalogItem {
    pub fn with_id(self, id: ItemId) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            img: self.img,
            price: self.price,
            description: self.description,
            rating: self.rating,
            reviews: self.reviews,
        }
    }
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Validated catalog write fields, before an image reference is attached
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub rating: String,
    pub reviews: Vec<String>,
}

impl CatalogDraft {
    pub fn into_new(self, img: String) -> NewCatalogItem {
        NewCatalogItem {
            name: self.name,
            img,
            price: self.price,
            description: self.description,
            rating: self.rating,
            reviews: self.reviews,
        }
    }

    pub fn into_changes(self, img: Option<String>) -> CatalogChanges {
        CatalogChanges {
            name: self.name,
            img,
            price: self.price,
            description: self.description,
            rating: self.rating,
            reviews: self.reviews,
        }
    }
}

/// Replacement values for an existing catalog item.
///
/// `img` is `None` when the request carried no new upload, in which case the
/// stored image reference is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogChanges {
    pub name: String,
    pub img: Option<String>,
    pub price: String,
    pub description: String,
    pub rating: String,
    pub reviews: Vec<String>,
}

impl CatalogChanges {
    pub fn apply_to(self, item: &mut CatalogItem) {
        item.name = self.name;
        if let Some(img) = self.img {
            item.img = img;
        }
        item.price = self.price;
        item.description = self.description;
        item.rating = self.rating;
        item.reviews = self.reviews;
    }
}

/// Raw catalog write payload as received from a client.
///
/// Fields hold untyped JSON so that missing keys, `null` and wrongly typed
/// values all surface as validation messages rather than as deserialization
/// failures. Keys outside the schema are collected in `unknown`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogItemRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub reviews: Option<Value>,
    #[serde(flatten)]
    pub unknown: Map<String, Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ═══════════════════════════════════════════════════════════════════════════
// FEEDBACK BOARD
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: u64,
    pub name: String,
    pub feedback: String,
}

/// Validated feedback body, either for a new entry or a full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: String,
    pub feedback: String,
}

impl FeedbackDraft {
    pub fn with_id(self, id: u64) -> FeedbackEntry {
        FeedbackEntry {
            id,
            name: self.name,
            feedback: self.feedback,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub feedback: Option<Value>,
    #[serde(flatten)]
    pub unknown: Map<String, Value>,
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTACT FORM
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
    #[serde(flatten)]
    pub unknown: Map<String, Value>,
}
