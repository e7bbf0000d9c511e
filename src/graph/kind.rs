//! Content type tags.
//!
//! Every type tag this site knows about is a [`NodeKind`] variant, so the
//! per-type behavior (tag fields, page emission) is an exhaustive `match`
//! instead of a chain of string comparisons.

use crate::page::PageKind;

/// Known content-graph type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    MediaImage,
    Article,
    CallToAction,
    Career,
    Course,
    Employer,
    LandingPage,
    Page,
    Program,
    Testimonial,
    EventsWidget,
    GeneralText,
    ProgramStatistic,
    ProgramVariants,
    RelatedPages,
    TermDegrees,
    TermEventCategory,
    TermGoals,
    TermNewsCategory,
    TermPrograms,
    TermProgramVariantType,
    TermSpecializations,
    TermStatisticType,
    TermTags,
    TermTopics,
    TermUnits,
    PathAlias,
}

impl NodeKind {
    pub const ALL: [Self; 27] = [
        Self::MediaImage,
        Self::Article,
        Self::CallToAction,
        Self::Career,
        Self::Course,
        Self::Employer,
        Self::LandingPage,
        Self::Page,
        Self::Program,
        Self::Testimonial,
        Self::EventsWidget,
        Self::GeneralText,
        Self::ProgramStatistic,
        Self::ProgramVariants,
        Self::RelatedPages,
        Self::TermDegrees,
        Self::TermEventCategory,
        Self::TermGoals,
        Self::TermNewsCategory,
        Self::TermPrograms,
        Self::TermProgramVariantType,
        Self::TermSpecializations,
        Self::TermStatisticType,
        Self::TermTags,
        Self::TermTopics,
        Self::TermUnits,
        Self::PathAlias,
    ];

    /// The graph type tag (`internal.type`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MediaImage => "media__image",
            Self::Article => "node__article",
            Self::CallToAction => "node__call_to_action",
            Self::Career => "node__career",
            Self::Course => "node__course",
            Self::Employer => "node__employer",
            Self::LandingPage => "node__landing_page",
            Self::Page => "node__page",
            Self::Program => "node__program",
            Self::Testimonial => "node__testimonial",
            Self::EventsWidget => "paragraph__events_widget",
            Self::GeneralText => "paragraph__general_text",
            Self::ProgramStatistic => "paragraph__program_statistic",
            Self::ProgramVariants => "paragraph__program_variants",
            Self::RelatedPages => "paragraph__related_pages",
            Self::TermDegrees => "taxonomy_term__degrees",
            Self::TermEventCategory => "taxonomy_term__event_category",
            Self::TermGoals => "taxonomy_term__goals",
            Self::TermNewsCategory => "taxonomy_term__news_category",
            Self::TermPrograms => "taxonomy_term__programs",
            Self::TermProgramVariantType => "taxonomy_term__program_variant_type",
            Self::TermSpecializations => "taxonomy_term__specializations",
            Self::TermStatisticType => "taxonomy_term__statistic_type",
            Self::TermTags => "taxonomy_term__tags",
            Self::TermTopics => "taxonomy_term__topics",
            Self::TermUnits => "taxonomy_term__units",
            Self::PathAlias => "PathAlias",
        }
    }

    /// Parse a graph type tag. Unknown tags yield `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Whether `field_tags` on this type may point at several vocabularies,
    /// so the node gets a derived `tags` field to filter on.
    pub const fn carries_tags(self) -> bool {
        matches!(
            self,
            Self::MediaImage
                | Self::Article
                | Self::CallToAction
                | Self::Career
                | Self::Course
                | Self::Employer
                | Self::Page
                | Self::LandingPage
                | Self::Testimonial
        )
    }

    /// The page kind emitted for nodes of this type, if any.
    pub const fn page_kind(self) -> Option<PageKind> {
        match self {
            Self::Page => Some(PageKind::BasicPage),
            Self::Article => Some(PageKind::Article),
            Self::Program => Some(PageKind::Program),
            Self::LandingPage => Some(PageKind::LandingPage),
            _ => None,
        }
    }

    /// Taxonomy vocabularies carry `name` instead of `title`.
    pub const fn is_taxonomy(self) -> bool {
        matches!(
            self,
            Self::TermDegrees
                | Self::TermEventCategory
                | Self::TermGoals
                | Self::TermNewsCategory
                | Self::TermPrograms
                | Self::TermProgramVariantType
                | Self::TermSpecializations
                | Self::TermStatisticType
                | Self::TermTags
                | Self::TermTopics
                | Self::TermUnits
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
