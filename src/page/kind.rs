//! Page-bearing content kinds.

use crate::graph::NodeKind;

/// Where a page's context id comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextId {
    /// The node's own graph id.
    Node,
    /// The first node linked through this relationship field.
    Relationship(&'static str),
}

/// Content kinds that get one page per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageKind {
    BasicPage,
    Article,
    Program,
    LandingPage,
}

impl PageKind {
    /// Emission order.
    pub const ALL: [Self; 4] = [
        Self::BasicPage,
        Self::Article,
        Self::Program,
        Self::LandingPage,
    ];

    /// Graph type queried for this kind.
    pub const fn node_kind(self) -> NodeKind {
        match self {
            Self::BasicPage => NodeKind::Page,
            Self::Article => NodeKind::Article,
            Self::Program => NodeKind::Program,
            Self::LandingPage => NodeKind::LandingPage,
        }
    }

    /// Template the page renders with.
    pub const fn template(self) -> &'static str {
        match self {
            Self::BasicPage => "basic-page",
            Self::Article => "article-page",
            Self::Program => "program-page",
            Self::LandingPage => "landing-page",
        }
    }

    /// Alias prefix used when the config does not override it.
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::BasicPage => "",
            Self::Article => "news",
            Self::Program => "programs",
            Self::LandingPage => "topics",
        }
    }

    /// Name of the query result list, used to locate query errors.
    pub const fn query_name(self) -> &'static str {
        match self {
            Self::BasicPage => "pages",
            Self::Article => "articles",
            Self::Program => "programs",
            Self::LandingPage => "landing_pages",
        }
    }

    pub const fn context_id(self) -> ContextId {
        match self {
            Self::Program => ContextId::Relationship("field_program_acronym"),
            _ => ContextId::Node,
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.query_name())
    }
}
