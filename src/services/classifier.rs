use crate::domain::AspectRatio;

/// Tag assignments for one document across the four independent taxonomies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub channels: Vec<String>,
    pub materials: Vec<String>,
    pub industries: Vec<String>,
    pub ratio: AspectRatio,
}

/// One row of a classification rule table: if any keyword appears in the
/// lowercased file name or category hint, the row's tags are assigned.
struct Rule {
    keywords: &'static [&'static str],
    tags: &'static [&'static str],
}

/// Distribution channels. Rows are checked in order; the first match wins.
const CHANNEL_RULES: &[Rule] = &[
    Rule {
        keywords: &["portrait", "anime", "character", "肖像", "写实", "动漫", "角色"],
        tags: &["生活", "小红书"],
    },
    Rule {
        keywords: &[
            "product", "food", "fashion", "photography", "design", "产品", "美食", "时尚",
            "摄影", "设计",
        ],
        tags: &["电商", "广告营销"],
    },
    Rule {
        keywords: &["cyberpunk", "comic", "pixel", "fantasy", "scene", "赛博", "漫画", "场景", "艺术风格"],
        tags: &["娱乐", "短视频平台"],
    },
];
const CHANNEL_DEFAULT: &[&str] = &["全部"];

/// Material kinds.
const MATERIAL_RULES: &[Rule] = &[
    Rule {
        keywords: &["portrait", "character", "肖像", "写实", "角色"],
        tags: &["个人写真"],
    },
    Rule { keywords: &["poster", "海报"], tags: &["电影海报", "广告图"] },
    Rule { keywords: &["logo", "design", "设计"], tags: &["产品设计"] },
    Rule { keywords: &["product", "产品"], tags: &["产品展示"] },
    Rule { keywords: &["comic", "漫画"], tags: &["漫画插图"] },
    Rule { keywords: &["landscape", "风景"], tags: &["全屏海报"] },
];
const MATERIAL_DEFAULT: &[&str] = &["全部"];

/// Industries.
const INDUSTRY_RULES: &[Rule] = &[
    Rule { keywords: &["food", "美食"], tags: &["美食餐饮"] },
    Rule { keywords: &["fashion", "时尚"], tags: &["服饰箱包"] },
    Rule {
        keywords: &["architectural", "architecture", "interior", "建筑", "室内"],
        tags: &["建筑", "家居家装"],
    },
    Rule { keywords: &["logo", "design", "设计"], tags: &["广告营销"] },
];
const INDUSTRY_DEFAULT: &[&str] = &["通用"];

/// Aspect ratios. No match defaults to square.
const RATIO_RULES: &[(&[&str], AspectRatio)] = &[
    (&["portrait", "肖像", "写实"], AspectRatio::Portrait),
    (&["landscape", "风景"], AspectRatio::Landscape),
    (&["poster", "海报"], AspectRatio::Poster),
];

/// Classify one document from its file name and directory/category hint.
///
/// Purely a deterministic keyword-table lookup: each dimension is evaluated
/// by its own ordered rule table and the dimensions combine freely. Rule
/// order is fixed; it is the sole source of precedence.
pub fn classify(file_name: &str, category_hint: Option<&str>) -> Classification {
    let haystack = match category_hint {
        Some(hint) => format!("{} {}", file_name.to_lowercase(), hint.to_lowercase()),
        None => file_name.to_lowercase(),
    };

    Classification {
        channels: match_tags(&haystack, CHANNEL_RULES, CHANNEL_DEFAULT),
        materials: match_tags(&haystack, MATERIAL_RULES, MATERIAL_DEFAULT),
        industries: match_tags(&haystack, INDUSTRY_RULES, INDUSTRY_DEFAULT),
        ratio: match_ratio(&haystack),
    }
}

fn match_tags(haystack: &str, rules: &[Rule], default: &[&str]) -> Vec<String> {
    let tags = rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.tags)
        .unwrap_or(default);
    tags.iter().map(|t| t.to_string()).collect()
}

fn match_ratio(haystack: &str) -> AspectRatio {
    RATIO_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(_, ratio)| *ratio)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fashion_photography_with_photography_hint() {
        let c = classify("Fashion-Photography.md", Some("摄影"));
        assert_eq!(c.channels, vec!["电商", "广告营销"]);
        assert_eq!(c.materials, vec!["全部"]);
        assert_eq!(c.industries, vec!["服饰箱包"]);
        assert_eq!(c.ratio, AspectRatio::Square);
    }

    #[test]
    fn portrait_keyword_drives_channel_material_and_ratio() {
        let c = classify("Realistic-portrait.md", Some("Portrait"));
        assert_eq!(c.channels, vec!["生活", "小红书"]);
        assert_eq!(c.materials, vec!["个人写真"]);
        assert_eq!(c.industries, vec!["通用"]);
        assert_eq!(c.ratio, AspectRatio::Portrait);
    }

    #[test]
    fn dimensions_combine_freely() {
        // Food keyword for industry, landscape keyword for ratio.
        let c = classify("Food-landscape.md", None);
        assert_eq!(c.industries, vec!["美食餐饮"]);
        assert_eq!(c.ratio, AspectRatio::Landscape);
        assert_eq!(c.materials, vec!["全屏海报"]);
    }

    #[test]
    fn chinese_hint_matches_chinese_keywords() {
        let c = classify("Movie-art.md", Some("海报"));
        assert_eq!(c.materials, vec!["电影海报", "广告图"]);
        assert_eq!(c.ratio, AspectRatio::Poster);
    }

    #[test]
    fn no_keyword_falls_back_to_documented_defaults() {
        let c = classify("Abstract-texture.md", None);
        assert_eq!(c.channels, vec!["全部"]);
        assert_eq!(c.materials, vec!["全部"]);
        assert_eq!(c.industries, vec!["通用"]);
        assert_eq!(c.ratio, AspectRatio::Square);
    }

    #[test]
    fn every_document_gets_non_empty_assignments() {
        for name in ["a.md", "Cyberpunk.md", "Logo-Design.md", "产品海报.md", ""] {
            let c = classify(name, None);
            assert!(!c.channels.is_empty());
            assert!(!c.materials.is_empty());
            assert!(!c.industries.is_empty());
        }
    }

    #[test]
    fn rule_order_gives_first_match_precedence() {
        // Matches both the portrait row and the photography row of the
        // channel table; the earlier row wins.
        let c = classify("Portrait-photography.md", None);
        assert_eq!(c.channels, vec!["生活", "小红书"]);
    }
}
