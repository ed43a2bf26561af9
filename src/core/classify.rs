use crate::core::registry::Registry;
use crate::domain::model::WebsiteStatus;
use std::sync::Arc;

/// Pure classification over the shared registry. Cloning only bumps the `Arc`.
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    registry: Arc<Registry>,
}

impl ClassificationEngine {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// True when the name contains a chain name fragment, or the website URL
    /// contains a chain domain fragment. A place without a website can still
    /// be excluded by name.
    pub fn is_chain(&self, name: &str, website_uri: Option<&str>) -> bool {
        let chain = &self.registry.chain;
        let name_match = chain.matches_name(name);
        let domain_match = chain.matches_url(website_uri.unwrap_or_default());
        name_match || domain_match
    }

    pub fn website_status(&self, url: Option<&str>) -> WebsiteStatus {
        match url {
            None | Some("") => WebsiteStatus::NoWebsite,
            Some(url) if self.registry.sns.matches_url(url) => WebsiteStatus::SnsOnly,
            Some(_) => WebsiteStatus::HasWebsite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ClassificationEngine {
        ClassificationEngine::new(Arc::new(Registry::builtin().unwrap()))
    }

    #[test]
    fn test_chain_by_name_without_website() {
        let engine = engine();
        assert!(engine.is_chain("スターバックス鎌倉店", None));
        assert!(engine.is_chain("STARBUCKS Reserve Roastery", None));
        assert!(engine.is_chain("Tully's Coffee 横浜", None));
        assert!(!engine.is_chain("カフェ・オリジナル", None));
    }

    #[test]
    fn test_chain_by_domain_regardless_of_name() {
        let engine = engine();
        assert!(engine.is_chain("独立カフェ", Some("https://www.starbucks.co.jp/x")));
        assert!(engine.is_chain("珈琲工房", Some("HTTPS://WWW.DOUTOR.CO.JP/shop/123")));
        assert!(!engine.is_chain("独立カフェ", Some("https://original-cafe.example.jp")));
    }

    #[test]
    fn test_domain_match_covers_full_url() {
        let engine = engine();
        // Fragment in the path, not the host, still matches.
        assert!(engine.is_chain(
            "まちのカフェ",
            Some("https://maps.example.com/?ref=komeda.co.jp")
        ));
    }

    #[test]
    fn test_naive_substring_false_positive_is_kept() {
        let engine = engine();
        // "kfc" is a name fragment, so any name containing it is excluded.
        assert!(engine.is_chain("Kfcafe Roasters", None));
    }

    #[test]
    fn test_empty_website_is_treated_as_no_website() {
        let engine = engine();
        assert!(!engine.is_chain("喫茶ひだまり", Some("")));
    }

    #[test]
    fn test_website_status() {
        let engine = engine();
        assert_eq!(engine.website_status(None), WebsiteStatus::NoWebsite);
        assert_eq!(engine.website_status(Some("")), WebsiteStatus::NoWebsite);
        assert_eq!(
            engine.website_status(Some("https://www.instagram.com/mycafe")),
            WebsiteStatus::SnsOnly
        );
        assert_eq!(
            engine.website_status(Some("https://tabelog.com/kanagawa/A1404/")),
            WebsiteStatus::SnsOnly
        );
        assert_eq!(
            engine.website_status(Some("https://mycafe-original.example.com")),
            WebsiteStatus::HasWebsite
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let engine = engine();
        let url = Some("https://www.Instagram.com/Starbucks");
        assert_eq!(
            engine.is_chain("Starbucks", url),
            engine.is_chain("Starbucks", url)
        );
        assert_eq!(engine.website_status(url), engine.website_status(url));
    }
}
