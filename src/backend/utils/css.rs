//! Embedded stylesheet lookup.

use std::{collections::HashMap, sync::OnceLock};

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct ResourceLoader;

impl ResourceLoader {
    fn get_all_styles() -> HashMap<&'static str, &'static str> {
        let mut m = HashMap::new();
        macro_rules! style {
            ($n:expr, $p:expr) => {
                m.insert($n, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), $p)));
            };
        }
        style!("base", "/assets/styles/base.css");
        style!("layout", "/assets/styles/layout.css");
        style!("carousel", "/assets/styles/components/carousel.css");
        style!("forms", "/assets/styles/components/forms.css");
        m
    }

    pub fn get_css(name: &str) -> &'static str {
        CSS_CACHE
            .get_or_init(Self::get_all_styles)
            .get(name)
            .copied()
            .unwrap_or("")
    }

    pub fn combine_css(styles: &[&str]) -> String {
        styles
            .iter()
            .map(|&n| Self::get_css(n))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_are_embedded() {
        assert!(!ResourceLoader::get_css("base").is_empty());
        assert!(ResourceLoader::get_css("missing").is_empty());
    }

    #[test]
    fn combine_skips_unknown_names() {
        let combined = ResourceLoader::combine_css(&["base", "missing", "layout"]);
        assert!(combined.contains(ResourceLoader::get_css("base")));
        assert!(combined.contains(ResourceLoader::get_css("layout")));
    }
}
