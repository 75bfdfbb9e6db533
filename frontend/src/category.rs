use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    Food,
    Travel,
    Shopping,
    Entertainment,
    Healthcare,
    Bills,
    Education,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Utensils,
    Car,
    ShoppingBag,
    Gamepad,
    Heart,
    FileText,
    GraduationCap,
    MoreHorizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub icon: CategoryIcon,
}

/// Style for labels the gateway sends that are not one of the eight categories.
pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    color: "#CCCCCC",
    icon: CategoryIcon::MoreHorizontal,
};

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Entertainment,
        Category::Healthcare,
        Category::Bills,
        Category::Education,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Bills => "Bills",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn style(self) -> CategoryStyle {
        let (color, icon) = match self {
            Category::Food => ("#FF6B6B", CategoryIcon::Utensils),
            Category::Travel => ("#4ECDC4", CategoryIcon::Car),
            Category::Shopping => ("#45B7D1", CategoryIcon::ShoppingBag),
            Category::Entertainment => ("#96CEB4", CategoryIcon::Gamepad),
            Category::Healthcare => ("#FECA57", CategoryIcon::Heart),
            Category::Bills => ("#FF9FF3", CategoryIcon::FileText),
            Category::Education => ("#54A0FF", CategoryIcon::GraduationCap),
            Category::Other => ("#C7ECEE", CategoryIcon::MoreHorizontal),
        };
        CategoryStyle { color, icon }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Looks up the style for a raw category label as it appears in gateway maps.
pub fn style_for_label(label: &str) -> CategoryStyle {
    Category::from_label(label)
        .map(Category::style)
        .unwrap_or(FALLBACK_STYLE)
}
