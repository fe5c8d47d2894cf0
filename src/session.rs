use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Rule, RuleGroup};

/// Per-session mutable wrapper around a catalog `RuleGroup`.
/// `is_flipped` is the only field that changes after creation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionRule {
    pub id: u32,
    pub group_name: String,
    pub primary: Rule,
    pub flipped: Rule,
    pub is_flipped: bool,
}

impl SessionRule {
    pub fn from_group(group: &RuleGroup) -> Self {
        Self {
            id: group.id,
            group_name: group.name.clone(),
            primary: group.primary_rule.clone(),
            flipped: group.flipped_rule.clone(),
            is_flipped: false,
        }
    }

    /// The side of this group currently in play.
    pub fn active_rule(&self) -> &Rule {
        if self.is_flipped {
            &self.flipped
        } else {
            &self.primary
        }
    }

    pub fn toggle(&mut self) {
        self.is_flipped = !self.is_flipped;
    }
}

/// Creates the session rule set for a fresh game from the catalog.
pub fn session_rules(catalog: &Catalog) -> Vec<SessionRule> {
    catalog.rule_groups.iter().map(SessionRule::from_group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_rule_follows_flip_state() {
        let catalog = Catalog::default_set();
        let mut rule = SessionRule::from_group(&catalog.rule_groups[0]);
        assert_eq!(rule.active_rule().id, rule.primary.id);
        rule.toggle();
        assert_eq!(rule.active_rule().id, rule.flipped.id);
        rule.toggle();
        assert_eq!(rule.active_rule().id, rule.primary.id);
    }

    #[test]
    fn test_session_rules_cover_every_group() {
        let catalog = Catalog::default_set();
        let rules = session_rules(catalog);
        assert_eq!(rules.len(), catalog.rule_groups.len());
        assert!(rules.iter().all(|r| !r.is_flipped));
    }
}
