//! Item kinds attached to each stop.

use serde::{Deserialize, Serialize};

/// What is delivered at a location.
///
/// Exactly one location carries [`ItemKind::Origin`], and it is always
/// location 0 (the courier's current position).
///
/// Serialized as `"origin"`, `"perishable"` or `"non-perishable"`. The
/// label `"current"` is accepted as an alias for the origin.
///
/// # Examples
///
/// ```
/// use perishable_routing::models::ItemKind;
///
/// assert!(ItemKind::Perishable.is_perishable());
/// assert!(!ItemKind::NonPerishable.is_perishable());
/// assert!(ItemKind::Origin.is_origin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// The starting location; not a delivery target.
    #[serde(alias = "current")]
    Origin,
    /// Delivery that loses value with time and is penalized for lateness.
    Perishable,
    /// Delivery with no lateness penalty.
    NonPerishable,
}

impl ItemKind {
    /// Returns `true` for [`ItemKind::Perishable`].
    pub fn is_perishable(self) -> bool {
        matches!(self, ItemKind::Perishable)
    }

    /// Returns `true` for [`ItemKind::Origin`].
    pub fn is_origin(self) -> bool {
        matches!(self, ItemKind::Origin)
    }

    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Origin => "origin",
            ItemKind::Perishable => "perishable",
            ItemKind::NonPerishable => "non-perishable",
        }
    }
}

/// The item attached to a single location.
///
/// Items are aligned with the distance matrix: `items[i]` describes
/// location `i`.
///
/// # Examples
///
/// ```
/// use perishable_routing::models::{Item, ItemKind};
///
/// let origin = Item::origin();
/// assert_eq!(origin.kind(), ItemKind::Origin);
///
/// let milk = Item::perishable().with_label("12 Baker Street");
/// assert!(milk.is_perishable());
/// assert_eq!(milk.label(), Some("12 Baker Street"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Item {
    /// Creates an item of the given kind.
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, label: None }
    }

    /// The origin item (location 0).
    pub fn origin() -> Self {
        Self::new(ItemKind::Origin)
    }

    /// A perishable delivery.
    pub fn perishable() -> Self {
        Self::new(ItemKind::Perishable)
    }

    /// A non-perishable delivery.
    pub fn non_perishable() -> Self {
        Self::new(ItemKind::NonPerishable)
    }

    /// Attaches a display label (typically the resolved address).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Kind of this item.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Shorthand for `self.kind().is_perishable()`.
    pub fn is_perishable(&self) -> bool {
        self.kind.is_perishable()
    }
}

impl From<ItemKind> for Item {
    fn from(kind: ItemKind) -> Self {
        Self::new(kind)
    }
}
