use serde::Deserialize;
use std::fmt;

/// One heritage-site entry. Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteRecord {
    pub name: Option<String>,
    pub location: Option<String>,
    pub built_year: Option<BuiltYear>,
    pub facts: Option<String>,
    pub precautions: Vec<String>,
    /// Primary image reference field.
    pub image_path: Option<String>,
    /// Consulted only when `image_path` is absent or blank.
    pub image: Option<String>,
}

/// Construction year as written in the catalog: either a number or free text ("c. 1200 BCE").
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BuiltYear {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for BuiltYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltYear::Number(n) => write!(f, "{}", n),
            BuiltYear::Text(s) => f.write_str(s),
        }
    }
}

impl SiteRecord {
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or("Unknown site")
    }

    pub fn display_location(&self) -> &str {
        non_blank(self.location.as_deref()).unwrap_or("Unknown location")
    }

    /// Image reference from `image_path`, else `image`. Blank values count as absent.
    pub fn image_reference(&self) -> Option<&str> {
        non_blank(self.image_path.as_deref()).or_else(|| non_blank(self.image.as_deref()))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
