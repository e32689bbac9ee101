//! Category catalog
//!
//! Display names and input placeholders for each [`Category`]. The domain
//! refers to categories by id only; everything a user reads lives here.

use omni_domain::Category;

/// Presentation metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub display_name: &'static str,
    pub placeholder: &'static str,
}

/// Catalog in display order
pub const CATALOG: [CategoryInfo; 6] = [
    CategoryInfo {
        category: Category::All,
        display_name: "All Models",
        placeholder: "What would you like to create? I can help with text, images, code, music, and more...",
    },
    CategoryInfo {
        category: Category::Presentation,
        display_name: "Presentation",
        placeholder: "Describe your presentation topic and key points you want to cover...",
    },
    CategoryInfo {
        category: Category::Image,
        display_name: "Image Generation",
        placeholder: "Describe the image you want to generate in detail...",
    },
    CategoryInfo {
        category: Category::Code,
        display_name: "Our Model",
        placeholder: "What would you like me to help you build or solve?",
    },
    CategoryInfo {
        category: Category::Music,
        display_name: "Music Generation",
        placeholder: "Describe the style, mood, and elements of the music you want to create...",
    },
    CategoryInfo {
        category: Category::Video,
        display_name: "Video Generation",
        placeholder: "Describe the video content, style, and duration you want to generate...",
    },
];

/// Look up the catalog entry for `category`
pub fn category_info(category: Category) -> &'static CategoryInfo {
    CATALOG
        .iter()
        .find(|info| info.category == category)
        .unwrap_or(&CATALOG[0])
}
