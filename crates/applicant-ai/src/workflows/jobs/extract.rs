//! Field extraction over rendered markup.
//!
//! Source markup is externally controlled and changes without notice, so each
//! field carries an ordered chain of fallback rules. Extraction stops at the
//! first rule yielding a non-empty result; when every rule misses, the field
//! degrades to a sentinel instead of aborting the scrape.

use scraper::{Html, Selector};

/// A pure markup-to-text rule. Adding a fallback is a one-line change to the
/// rule list.
#[derive(Debug, Clone, Copy)]
pub enum ExtractionRule {
    /// Text of the first element matching any selector in the set.
    Css(&'static [&'static str]),
    /// `content` attribute of `<meta property="...">`.
    MetaProperty(&'static str),
}

impl ExtractionRule {
    fn apply(&self, document: &Html) -> Option<String> {
        match self {
            ExtractionRule::Css(selectors) => selectors.iter().find_map(|raw| {
                let selector = Selector::parse(raw).ok()?;
                let element = document.select(&selector).next()?;
                non_empty(collapse_ws(element.text()))
            }),
            ExtractionRule::MetaProperty(property) => {
                let selector = Selector::parse(&format!("meta[property=\"{property}\"]")).ok()?;
                let element = document.select(&selector).next()?;
                non_empty(element.value().attr("content")?.trim().to_string())
            }
        }
    }
}

/// A named field and its fallback chain.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [ExtractionRule],
}

impl FieldRules {
    /// First non-empty rule result, or the `"Unknown <Field>"` sentinel.
    pub fn extract(&self, document: &Html) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(document))
            .unwrap_or_else(|| format!("Unknown {}", self.field))
    }
}

/// LinkedIn public job pages. Class names rotate between page generations, so
/// each chain ends on a structural fallback.
pub const LINKEDIN_TITLE: FieldRules = FieldRules {
    field: "Title",
    rules: &[
        ExtractionRule::Css(&[
            "h1.top-card-layout__title",
            "h1.job-details-jobs-unified-top-card__job-title",
        ]),
        ExtractionRule::MetaProperty("og:title"),
        ExtractionRule::Css(&["h1"]),
    ],
};

pub const LINKEDIN_COMPANY: FieldRules = FieldRules {
    field: "Company",
    rules: &[
        ExtractionRule::Css(&["a.topcard__org-name-link"]),
        ExtractionRule::Css(&["div.top-card-layout__card"]),
    ],
};

pub const LINKEDIN_DESCRIPTION: FieldRules = FieldRules {
    field: "Description",
    rules: &[
        ExtractionRule::Css(&["div.show-more-less-html__markup"]),
        ExtractionRule::Css(&["div.description__text"]),
    ],
};

fn collapse_ws<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined = parts.collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(markup: &str) -> Html {
        Html::parse_document(markup)
    }

    #[test]
    fn first_matching_rule_wins() {
        let document = parse(
            r#"<html><body>
                <h1 class="top-card-layout__title"> Staff Engineer </h1>
                <h1>Something Else</h1>
            </body></html>"#,
        );
        assert_eq!(LINKEDIN_TITLE.extract(&document), "Staff Engineer");
    }

    #[test]
    fn falls_through_to_later_rule() {
        // No LinkedIn title classes: the chain should land on the bare h1.
        let document = parse("<html><body><h1>Backend Developer</h1></body></html>");
        assert_eq!(LINKEDIN_TITLE.extract(&document), "Backend Developer");
    }

    #[test]
    fn meta_property_rule_applies_before_bare_heading() {
        let document = parse(
            r#"<html><head><meta property="og:title" content="Platform Engineer"></head>
               <body><h1>ignored</h1></body></html>"#,
        );
        assert_eq!(LINKEDIN_TITLE.extract(&document), "Platform Engineer");
    }

    #[test]
    fn missing_field_yields_sentinel_not_error() {
        let document = parse("<html><body><p>nothing useful</p></body></html>");
        assert_eq!(LINKEDIN_TITLE.extract(&document), "Unknown Title");
        assert_eq!(LINKEDIN_COMPANY.extract(&document), "Unknown Company");
        assert_eq!(LINKEDIN_DESCRIPTION.extract(&document), "Unknown Description");
    }

    #[test]
    fn whitespace_is_collapsed() {
        let document = parse(
            r#"<html><body><div class="show-more-less-html__markup">
                We are <b>looking</b> for
                a   software engineer.
            </div></body></html>"#,
        );
        assert_eq!(
            LINKEDIN_DESCRIPTION.extract(&document),
            "We are looking for a software engineer."
        );
    }

    #[test]
    fn empty_elements_do_not_satisfy_a_rule() {
        let document = parse(
            r#"<html><body>
                <h1 class="top-card-layout__title">   </h1>
                <h1>Data Engineer</h1>
            </body></html>"#,
        );
        assert_eq!(LINKEDIN_TITLE.extract(&document), "Data Engineer");
    }
}
