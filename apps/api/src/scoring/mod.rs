//! Heuristic scorer — maps résumé text onto six fixed evaluation dimensions.
//!
//! Pure-Rust, deterministic, fully testable: no LLM call, no hidden state.
//! The rubric lives in a declarative table so triggers and magnitudes can be
//! tuned and tested without touching control flow.

use serde::Serialize;

/// One row of the scoring rubric.
pub struct DimensionRule {
    pub name: &'static str,
    /// Substring triggers. Stored lowercase; matching is case-insensitive.
    /// English entries are stems, so derived forms match too
    /// (e.g. "adapt" covers "adaptable" and "adaptability").
    pub triggers: &'static [&'static str],
    pub high: f64,
    pub low: f64,
    /// Inverted dimensions name risk signals: a trigger hit resolves to the
    /// LOW value, and a clean résumé scores high (high value = low risk).
    pub inverted: bool,
}

/// The fixed six-dimension rubric.
///
/// The high/low magnitudes are tuning constants inherited from the original
/// screening rubric, not derived values. Dimensions are scored independently;
/// triggers are not mutually exclusive.
pub const DIMENSION_RULES: [DimensionRule; 6] = [
    DimensionRule {
        name: "core_capability_salience",
        triggers: &[
            "核心技术",
            "独立完成",
            "负责",
            "core technology",
            "independently delivered",
            "responsible for",
        ],
        high: 90.0,
        low: 70.0,
        inverted: false,
    },
    DimensionRule {
        name: "capability_stability",
        triggers: &["多年", "持续", "长期", "years of", "sustained", "long-term"],
        high: 85.0,
        low: 60.0,
        inverted: false,
    },
    DimensionRule {
        name: "friction_risk",
        triggers: &[
            "频繁跳槽",
            "冲突",
            "离职",
            "frequent job-hopping",
            "conflict",
            "attrition",
        ],
        high: 80.0,
        low: 50.0,
        inverted: true,
    },
    DimensionRule {
        name: "role_fit",
        triggers: &["岗位", "职责", "responsibilities", "job duties"],
        high: 80.0,
        low: 50.0,
        inverted: false,
    },
    DimensionRule {
        name: "team_fit",
        triggers: &["团队合作", "跨部门", "team collaboration", "cross-functional"],
        high: 85.0,
        low: 60.0,
        inverted: false,
    },
    DimensionRule {
        name: "ecosystem_fit",
        triggers: &["适应", "灵活", "快速融入", "adapt", "flexib"],
        high: 90.0,
        low: 65.0,
        inverted: false,
    },
];

/// One scored dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub name: &'static str,
    pub value: f64,
}

/// Ordered dimension scores plus the derived aggregate.
///
/// Immutable once produced. The aggregate is always computed from the
/// dimension values at construction and never stored independently of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMap {
    pub dimensions: Vec<DimensionScore>,
    /// Unweighted arithmetic mean of the dimension values.
    pub aggregate: f64,
}

impl ScoreMap {
    fn new(dimensions: Vec<DimensionScore>) -> Self {
        let aggregate =
            dimensions.iter().map(|d| d.value).sum::<f64>() / dimensions.len() as f64;
        Self {
            dimensions,
            aggregate,
        }
    }

    /// The headline number, formatted to one decimal place for display.
    pub fn aggregate_display(&self) -> String {
        format!("{:.1}", self.aggregate)
    }
}

/// Scores résumé text against the fixed rubric.
///
/// Total over all string inputs, including the empty string: a dimension with
/// no trigger hit resolves to its default (low, or high when inverted).
pub fn score(resume_text: &str) -> ScoreMap {
    let haystack = resume_text.to_lowercase();

    let dimensions = DIMENSION_RULES
        .iter()
        .map(|rule| {
            let triggered = rule.triggers.iter().any(|t| haystack.contains(t));
            let value = if triggered != rule.inverted {
                rule.high
            } else {
                rule.low
            };
            DimensionScore {
                name: rule.name,
                value,
            }
        })
        .collect();

    ScoreMap::new(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn values(map: &ScoreMap) -> Vec<f64> {
        map.dimensions.iter().map(|d| d.value).collect()
    }

    #[test]
    fn test_empty_text_resolves_all_defaults() {
        let map = score("");
        assert_eq!(values(&map), vec![70.0, 60.0, 80.0, 50.0, 60.0, 65.0]);
        // 385 / 6 = 64.1666…
        assert!((map.aggregate - 385.0 / 6.0).abs() < EPS);
        assert_eq!(format!("{:.2}", map.aggregate), "64.17");
    }

    #[test]
    fn test_end_to_end_chinese_resume() {
        // salience + stability + team + ecosystem hits, no risk language,
        // no role keyword
        let map = score("负责核心技术，持续多年，团队合作良好，快速融入新环境");
        assert_eq!(values(&map), vec![90.0, 85.0, 80.0, 50.0, 85.0, 90.0]);
        assert!((map.aggregate - 80.0).abs() < EPS);
        assert_eq!(map.aggregate_display(), "80.0");
    }

    #[test]
    fn test_every_value_in_range_for_all_rules() {
        for rule in &DIMENSION_RULES {
            assert!(rule.high >= 0.0 && rule.high <= 100.0);
            assert!(rule.low >= 0.0 && rule.low <= 100.0);
            assert!(rule.low < rule.high);
        }
        for input in ["", "负责", "随便什么文本", "just some english text"] {
            let map = score(input);
            assert_eq!(map.dimensions.len(), 6);
            for d in &map.dimensions {
                assert!(d.value >= 0.0 && d.value <= 100.0, "{} out of range", d.name);
            }
        }
    }

    #[test]
    fn test_aggregate_is_mean_of_dimensions() {
        for input in ["", "负责 团队合作", "频繁跳槽 long-term"] {
            let map = score(input);
            let mean = values(&map).iter().sum::<f64>() / 6.0;
            assert!((map.aggregate - mean).abs() < EPS);
        }
    }

    #[test]
    fn test_trigger_affects_only_its_own_dimension() {
        for (i, rule) in DIMENSION_RULES.iter().enumerate() {
            let map = score(rule.triggers[0]);
            for (j, other) in DIMENSION_RULES.iter().enumerate() {
                let got = map.dimensions[j].value;
                let expected = if i == j {
                    // Hit: high, or low for the inverted dimension
                    if other.inverted {
                        other.low
                    } else {
                        other.high
                    }
                } else {
                    // Untouched: default
                    if other.inverted {
                        other.high
                    } else {
                        other.low
                    }
                };
                assert!(
                    (got - expected).abs() < EPS,
                    "trigger '{}' leaked into dimension '{}'",
                    rule.triggers[0],
                    other.name
                );
            }
        }
    }

    #[test]
    fn test_friction_risk_is_inverted() {
        let clean = score("");
        assert_eq!(clean.dimensions[2].name, "friction_risk");
        assert_eq!(clean.dimensions[2].value, 80.0);

        let risky = score("candidate known for frequent job-hopping");
        assert_eq!(risky.dimensions[2].value, 50.0);

        let risky_cn = score("与同事多次发生冲突");
        assert_eq!(risky_cn.dimensions[2].value, 50.0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let map = score("RESPONSIBLE FOR the platform's CORE TECHNOLOGY");
        assert_eq!(map.dimensions[0].value, 90.0);
    }

    #[test]
    fn test_english_stems_match_derived_forms() {
        let map = score("Adaptable engineer with flexibility across teams");
        assert_eq!(map.dimensions[5].name, "ecosystem_fit");
        assert_eq!(map.dimensions[5].value, 90.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let text = "负责核心技术，长期与跨部门团队合作";
        assert_eq!(score(text), score(text));
    }

    #[test]
    fn test_dimension_order_is_stable() {
        let names: Vec<&str> = score("").dimensions.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "core_capability_salience",
                "capability_stability",
                "friction_risk",
                "role_fit",
                "team_fit",
                "ecosystem_fit",
            ]
        );
    }
}
