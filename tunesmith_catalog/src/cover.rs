// Cover-art URLs.
//
// Covers are rendered by an external avatar service; the catalogue only
// builds the request URL. The service seed is `"{title}-{artist}-{seed}"`,
// percent-encoded, so a cover changes whenever any of the three does.

use crate::config::CatalogConfig;

/// Cover URL for one item.
pub fn cover_url(config: &CatalogConfig, title: &str, artist: &str, item_seed: i64) -> String {
    let seed = format!("{title}-{artist}-{item_seed}");
    format!(
        "{}/shapes/svg?seed={}&size={}",
        config.cover_base_url.trim_end_matches('/'),
        urlencoding::encode(&seed),
        config.cover_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cover_url() {
        let url = cover_url(&CatalogConfig::default(), "Lorem Ipsum", "Ann Lee", 43);
        assert_eq!(
            url,
            "https://api.dicebear.com/9.x/shapes/svg?seed=Lorem%20Ipsum-Ann%20Lee-43&size=300"
        );
    }

    #[test]
    fn test_cyrillic_and_negative_seed() {
        let url = cover_url(&CatalogConfig::default(), "Мир", "Ян", -7);
        assert!(url.contains("seed=%D0%9C%D0%B8%D1%80-%D0%AF%D0%BD--7&"), "{url}");
    }

    #[test]
    fn test_configured_host_and_size() {
        let config = CatalogConfig {
            cover_base_url: "http://localhost:8080/".to_string(),
            cover_size: 64,
            ..CatalogConfig::default()
        };
        let url = cover_url(&config, "A", "B", 1);
        assert_eq!(url, "http://localhost:8080/shapes/svg?seed=A-B-1&size=64");
    }
}
