//! Site content catalog
//!
//! Copy, menu and pricing live in `content/site.toml`, compiled into the
//! binary and parsed once at startup.

use std::fmt;

use serde::Deserialize;

use crate::error::Result;

const EMBEDDED_CATALOG: &str = include_str!("../../content/site.toml");

/// Price in cents, displayed as `$12.99`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub home: Home,
    pub markets: Vec<Market>,
    pub testimonials: Vec<Testimonial>,
    pub about: About,
    pub team: Vec<TeamMember>,
    pub menu: Menu,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub tagline: String,
    pub blurb: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Home {
    /// Names of menu items shown as signature dishes
    pub featured: Vec<String>,
    pub cta_title: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    pub name: String,
    pub schedule: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub subtitle: String,
    pub story: Vec<String>,
    pub mission: String,
    pub values: Vec<Value>,
    pub cta_title: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Value {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Menu {
    pub subtitle: String,
    pub sections: Vec<MenuSection>,
    pub catering: Vec<CateringPackage>,
    pub catering_intro: String,
    pub catering_note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
    pub description: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CateringPackage {
    pub name: String,
    pub serves: String,
    pub price: Price,
    pub items: Vec<String>,
}

impl SiteContent {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_CATALOG)
    }

    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu
            .sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.name == name)
    }

    /// Featured dishes in configured order; unknown names are skipped
    pub fn featured_items(&self) -> Vec<&MenuItem> {
        self.home
            .featured
            .iter()
            .filter_map(|name| self.find_item(name))
            .collect()
    }
}
