//! The segmentation rule table
//!
//! Rules are compiled once from configuration and kept in descending
//! priority order. All shipped rules are boundary rules, but the table
//! supports non-boundary (suppressive) rules at any priority.

use regex::Regex;

use crate::config::RuleConfig;
use crate::error::{CoreError, Result};

/// A compiled boundary-detection rule
#[derive(Debug, Clone)]
pub struct SegmentationRule {
    name: String,
    pattern: Regex,
    is_boundary: bool,
    priority: i32,
    description: String,
    /// Candidate position comes from capture group 1 when the pattern has one
    has_break_group: bool,
}

impl SegmentationRule {
    /// Compile a rule from its configuration entry
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        let pattern = Regex::new(&config.pattern).map_err(|source| CoreError::Pattern {
            name: config.name.clone(),
            source,
        })?;
        let has_break_group = pattern.captures_len() > 1;

        Ok(Self {
            name: config.name.clone(),
            pattern,
            is_boundary: config.boundary,
            priority: config.priority,
            description: config.description.clone(),
            has_break_group,
        })
    }

    /// Rule identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a match of this rule proposes a boundary candidate
    pub fn is_boundary(&self) -> bool {
        self.is_boundary
    }

    /// Scan priority; higher runs first
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Human-readable rationale
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Byte offsets of boundary candidates over all non-overlapping matches
    pub(crate) fn candidate_offsets(&self, text: &str) -> Vec<usize> {
        if self.has_break_group {
            self.pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|group| group.end())
                .collect()
        } else {
            self.pattern.find_iter(text).map(|m| m.end()).collect()
        }
    }
}

/// Rules sorted by descending priority, declaration order on ties
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<SegmentationRule>,
}

impl RuleTable {
    /// Compile and sort the rule table
    pub fn from_config(configs: &[RuleConfig]) -> Result<Self> {
        let mut rules = configs
            .iter()
            .map(SegmentationRule::from_config)
            .collect::<Result<Vec<_>>>()?;
        // Stable sort keeps declaration order between equal priorities.
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority()));

        Ok(Self { rules })
    }

    /// Rules in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &SegmentationRule> {
        self.rules.iter()
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
