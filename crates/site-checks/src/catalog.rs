//! The fixed, ordered set of evaluation criteria.

/// One evaluation criterion: response key and display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub key: &'static str,
    pub title: &'static str,
}

/// Rendering order of the panel. Independent of response key order.
pub const CRITERIA: [Criterion; 8] = [
    Criterion { key: "zoning", title: "용도지역" },
    Criterion { key: "ecology", title: "생태자연도" },
    Criterion { key: "heritage", title: "문화재 규제" },
    Criterion { key: "setback", title: "이격거리" },
    Criterion { key: "grid", title: "한전 여유용량" },
    Criterion { key: "slope", title: "경사도" },
    Criterion { key: "insolation", title: "일사량" },
    Criterion { key: "land_price", title: "토지가격" },
];

/// Look up a criterion by its response key.
pub fn criterion(key: &str) -> Option<&'static Criterion> {
    CRITERIA.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_unique() {
        let mut keys: Vec<_> = CRITERIA.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CRITERIA.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(criterion("grid").map(|c| c.title), Some("한전 여유용량"));
        assert!(criterion("wind").is_none());
    }
}
