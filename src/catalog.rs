//! The fixed tool catalog.
//!
//! Every row of the directory starts here: an ordered list of (name, link)
//! pairs compiled into the binary. Names double as row keys and must be unique.

/// One static catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub link: &'static str,
}

impl CatalogItem {
    const fn new(name: &'static str, link: &'static str) -> Self {
        Self { name, link }
    }
}

/// The directory, in display order.
pub const CATALOG: &[CatalogItem] = &[
    CatalogItem::new("Whispr Flow", "https://wispr.ai/flow"),
    CatalogItem::new("Gemini", "https://gemini.google.com/"),
    CatalogItem::new("Emily", "https://www.emily.ai/"),
    CatalogItem::new("Fireflies", "https://fireflies.ai/"),
    CatalogItem::new("ChatGPT", "https://chatgpt.com/"),
    CatalogItem::new("Claude", "https://claude.ai/"),
    CatalogItem::new("Phot AI", "https://phot.ai/"),
    CatalogItem::new("Supergrow", "https://www.supergrow.ai/"),
    CatalogItem::new("Numerous AI", "https://numerous.ai/"),
    CatalogItem::new("Genspark", "https://www.genspark.com/"),
    CatalogItem::new("Suno", "https://suno.com/"),
    CatalogItem::new("Notebook LM", "https://notebooklm.google.com/"),
    CatalogItem::new("Social Sonic", "https://writesonic.com/"),
    CatalogItem::new("Bolt", "https://www.bolt.ai/"),
    CatalogItem::new("Vapi", "https://vapi.ai/"),
    CatalogItem::new("Hey Gen", "https://www.heygen.com/"),
    CatalogItem::new("Chronicle", "https://chronicle.ai/"),
    CatalogItem::new("Kling", "https://kling.kuaishou.com/"),
    CatalogItem::new("Krea", "https://www.krea.ai/"),
    CatalogItem::new("Higgsfield", "https://www.higgsfield.ai/"),
    CatalogItem::new("Humanic AI", "https://www.humanic.ai/"),
    CatalogItem::new("Happenstance", "https://www.google.com/search?q=Happenstance+AI"),
    CatalogItem::new("Lyzr AI", "https://www.lyzr.ai/"),
    CatalogItem::new("Replit", "https://replit.com/"),
    CatalogItem::new("Perplexity Comet", "https://www.perplexity.ai/"),
];

/// Tool names in catalog order, as the pipeline consumes them.
pub fn tool_names(items: &[CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.name.to_string()).collect()
}
