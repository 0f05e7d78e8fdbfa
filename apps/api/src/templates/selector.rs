//! Template selector: picks the question set for a survey description.
//!
//! Templates are walked in declaration order. A template whose best keyword
//! appears verbatim is preferred over an earlier template that only qualifies
//! through a typo or prefix; otherwise the first qualifying template wins.
//! When nothing qualifies the default questions are returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::templates::catalog::{builtin_templates, default_questions, Template};
use crate::templates::matcher::{find_best_keyword, KeywordMatch, MatchKind};

/// Result of running the selector, for callers that want to show why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Template name, `None` when the default questions were used.
    pub template: Option<String>,
    pub matched_keyword: Option<String>,
    pub match_kind: Option<MatchKind>,
    pub confidence: f32,
    pub questions: Vec<String>,
}

/// Holds the ordered template list. Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TemplateSelector {
    templates: Vec<Template>,
}

impl TemplateSelector {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn suggest(&self, description: &str) -> Suggestion {
        match select_template(description, &self.templates) {
            Some((template, m)) => Suggestion {
                template: Some(template.name.clone()),
                matched_keyword: Some(m.keyword),
                match_kind: Some(m.kind),
                confidence: m.score,
                questions: template.questions.clone(),
            },
            None => Suggestion {
                template: None,
                matched_keyword: None,
                match_kind: None,
                confidence: 0.0,
                questions: default_questions(),
            },
        }
    }

    pub fn select(&self, description: &str) -> Vec<String> {
        select_questions(description, &self.templates)
    }
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns a copy of the questions for the selected template, or the defaults.
pub fn select_questions(description: &str, templates: &[Template]) -> Vec<String> {
    select_template(description, templates)
        .map(|(template, _)| template.questions.clone())
        .unwrap_or_else(default_questions)
}

/// Finds the winning template and its keyword match.
fn select_template<'a>(
    description: &str,
    templates: &'a [Template],
) -> Option<(&'a Template, KeywordMatch)> {
    let mut first_fuzzy: Option<(&Template, KeywordMatch)> = None;

    for template in templates {
        let Some(m) = find_best_keyword(description, template.keywords.as_slice()) else {
            continue;
        };
        // Strict first-qualifying order would give "NPS survey for our brand" to Brand Awareness ("bran").
        if m.kind == MatchKind::Exact {
            debug!(
                "Matched template '{}' with keyword: {}",
                template.name, m.keyword
            );
            return Some((template, m));
        }
        if first_fuzzy.is_none() {
            first_fuzzy = Some((template, m));
        }
    }

    if let Some((template, m)) = &first_fuzzy {
        debug!(
            "Matched template '{}' with keyword: {} ({:?})",
            template.name, m.keyword, m.kind
        );
    }
    first_fuzzy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::catalog::DEFAULT_QUESTIONS;

    fn questions_of(name: &str) -> Vec<String> {
        builtin_templates()
            .into_iter()
            .find(|t| t.name == name)
            .map(|t| t.questions)
            .unwrap()
    }

    fn suggest(description: &str) -> Suggestion {
        TemplateSelector::builtin().suggest(description)
    }

    #[test]
    fn test_employee_description_gets_employee_questions() {
        let s = suggest("A survey for our employees");
        assert_eq!(s.template.as_deref(), Some("Employee"));
        assert_eq!(s.matched_keyword.as_deref(), Some("employee"));
        assert_eq!(s.questions.len(), 8);
        assert_eq!(s.questions, questions_of("Employee"));
    }

    #[test]
    fn test_typo_and_prefix_resolved_by_declaration_order() {
        // No verbatim keyword anywhere; "cust" in "customers" is the first
        // qualifying signal in declaration order.
        let s = suggest("feedbak from customers");
        assert_eq!(s.template.as_deref(), Some("Customer Satisfaction"));
        assert_eq!(s.match_kind, Some(MatchKind::Prefix));
        assert_eq!(s.confidence, 0.8);
    }

    #[test]
    fn test_empty_description_gets_defaults() {
        let s = suggest("");
        assert_eq!(s.template, None);
        assert_eq!(s.confidence, 0.0);
        assert_eq!(s.questions, DEFAULT_QUESTIONS.to_vec());
    }

    #[test]
    fn test_nps_verbatim_beats_earlier_brand_prefix() {
        // "brand" also carries the "bran" prefix of "brand awareness", which is
        // declared before NPS; the verbatim "nps" must still win.
        let s = suggest("NPS survey for our brand");
        assert_eq!(s.template.as_deref(), Some("Net Promoter Score"));
        assert_eq!(s.questions.len(), 3);
    }

    #[test]
    fn test_unrelated_description_gets_defaults() {
        let questions = TemplateSelector::builtin().select("completely unrelated topic about gardening");
        assert_eq!(questions, DEFAULT_QUESTIONS.to_vec());
    }

    #[test]
    fn test_typo_only_description_matches_template() {
        let s = suggest("survey of usablity issues");
        assert_eq!(s.template.as_deref(), Some("Usability Testing"));
        assert_eq!(s.match_kind, Some(MatchKind::Typo));
        assert_eq!(s.confidence, 0.9);
    }

    #[test]
    fn test_prefix_only_description_matches_template() {
        let s = suggest("feedback from our clients");
        assert_eq!(s.template.as_deref(), Some("Customer Satisfaction"));
        assert_eq!(s.matched_keyword.as_deref(), Some("client happiness"));
    }

    #[test]
    fn test_overlapping_verbatim_keywords_pick_first_declared() {
        // "school" (Student) and "school survey" (Educational Feedback) both appear.
        let s = suggest("annual school survey");
        assert_eq!(s.template.as_deref(), Some("Student"));
    }

    #[test]
    fn test_uppercase_description_matches() {
        let s = suggest("HEALTH CHECK FOR EVERYONE");
        assert_eq!(s.template.as_deref(), Some("Health & Wellness"));
    }

    #[test]
    fn test_returned_questions_are_a_copy() {
        let selector = TemplateSelector::builtin();
        let mut first = selector.select("nps");
        first.push("Extra question".to_string());
        first[0] = "Edited".to_string();

        let second = selector.select("nps");
        assert_eq!(second, questions_of("Net Promoter Score"));
        assert_eq!(selector.templates()[10].questions.len(), 3);
    }

    #[test]
    fn test_select_questions_with_caller_templates() {
        let templates = vec![
            Template::new("Pets", &["dog", "cat"], &["Do you own a pet?"]),
            Template::new("Garden", &["garden"], &["What do you grow?"]),
        ];
        assert_eq!(
            select_questions("my garden", &templates),
            vec!["What do you grow?".to_string()]
        );
        assert_eq!(
            select_questions("nothing relevant", &templates),
            DEFAULT_QUESTIONS.to_vec()
        );
    }

    #[test]
    fn test_select_questions_with_no_templates_returns_defaults() {
        assert_eq!(select_questions("employee", &[]), DEFAULT_QUESTIONS.to_vec());
    }

    #[test]
    fn test_selector_and_free_function_agree() {
        let selector = TemplateSelector::builtin();
        for desc in ["college life", "new hire checklist", "poll of members", "xyz"] {
            assert_eq!(selector.select(desc), select_questions(desc, selector.templates()));
        }
    }
}
