//! Content model type definitions.
//!
//! Every content type, paragraph, media type and vocabulary the site reads.
//! Relationship fields point at `___NODE` ids filled in by the CMS sync.

use super::def::{
    FieldDef, InterfaceDef, ObjectDef, Schema, UnionDef, date, field, link, rel,
};

const NODE: &[&str] = &["Node"];
const TAXONOMY: &[&str] = &["Node", "TaxonomyInterface"];
const NONE: &[&str] = &[];

pub static SITE_SCHEMA: Schema = Schema {
    unions: UNIONS,
    interfaces: INTERFACES,
    objects: OBJECTS,
};

const UNIONS: &[UnionDef] = &[
    UnionDef {
        name: "relatedParagraphUnion",
        members: &["paragraph__program_variants", "paragraph__general_text"],
    },
    UnionDef {
        name: "relatedTaxonomyUnion",
        members: &[
            "taxonomy_term__tags",
            "taxonomy_term__specializations",
            "taxonomy_term__programs",
            "taxonomy_term__degrees",
            "taxonomy_term__topics",
            "taxonomy_term__units",
        ],
    },
    UnionDef {
        name: "relatedPagesUnion",
        members: &["node__page", "node__landing_page"],
    },
];

const INTERFACES: &[InterfaceDef] = &[InterfaceDef {
    name: "TaxonomyInterface",
    node_interface: true,
    fields: &[
        field("id", "ID!"),
        field("drupal_id", "String"),
        field("name", "String"),
    ],
}];

const TEXT: &[FieldDef] = &[
    field("processed", "String"),
    field("value", "String"),
    field("format", "String"),
];

const TEXT_WITH_SUMMARY: &[FieldDef] = &[
    field("processed", "String"),
    field("value", "String"),
    field("format", "String"),
    field("summary", "String"),
];

const TAGS_ONLY: &[FieldDef] = &[field("tags", "[String]")];

const TAG_RELATIONSHIPS: &[FieldDef] = &[rel("field_tags", "[relatedTaxonomyUnion]")];

const IMAGE_AND_TAGS: &[FieldDef] = &[
    rel("field_image", "file__file"),
    rel("field_tags", "[relatedTaxonomyUnion]"),
];

const ALIAS_FIELDS: &[FieldDef] = &[link("alias", "PathAlias")];

const ALIAS_AND_TAGS: &[FieldDef] = &[link("alias", "PathAlias"), field("tags", "[String]")];

const OBJECTS: &[ObjectDef] = &[
    // shared field types
    ObjectDef { name: "BodyField", implements: NONE, fields: TEXT_WITH_SUMMARY },
    ObjectDef { name: "BodyFieldWithSummary", implements: NONE, fields: TEXT_WITH_SUMMARY },
    ObjectDef {
        name: "FieldLink",
        implements: NONE,
        fields: &[field("title", "String"), field("uri", "String")],
    },
    ObjectDef { name: "FieldsPathAlias", implements: NONE, fields: ALIAS_FIELDS },
    ObjectDef { name: "ImageField", implements: NODE, fields: &[field("alt", "String")] },
    ObjectDef { name: "TaxonomyDescription", implements: NONE, fields: TEXT },
    ObjectDef {
        name: "PathAlias",
        implements: NODE,
        fields: &[field("value", "String"), field("alias", "String")],
    },
    // media
    ObjectDef {
        name: "media__image",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("name", "String"),
            field("field_media_image", "ImageField"),
            field("fields", "media__imageFields"),
            field("relationships", "media__imageRelationships"),
        ],
    },
    ObjectDef { name: "media__imageFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef {
        name: "media__imageRelationships",
        implements: NODE,
        fields: &[
            rel("field_media_image", "file__file"),
            rel("field_tags", "[relatedTaxonomyUnion]"),
        ],
    },
    // content types
    ObjectDef {
        name: "node__article",
        implements: NODE,
        fields: &[
            date("changed"),
            date("created"),
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("body", "BodyFieldWithSummary"),
            field("field_image", "ImageField"),
            field("relationships", "node__articleRelationships"),
            field("fields", "node__articleFields"),
        ],
    },
    ObjectDef {
        name: "node__articleRelationships",
        implements: NODE,
        fields: &[
            rel("field_image", "file__file"),
            rel("field_news_category", "[taxonomy_term__news_category]"),
            rel("field_tags", "[relatedTaxonomyUnion]"),
        ],
    },
    ObjectDef { name: "node__articleFields", implements: NODE, fields: ALIAS_AND_TAGS },
    ObjectDef {
        name: "node__call_to_action",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("field_call_to_action_link", "FieldLink"),
            field("relationships", "node__call_to_actionRelationships"),
            field("fields", "node__call_to_actionFields"),
        ],
    },
    ObjectDef { name: "node__call_to_actionFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef {
        name: "node__call_to_actionRelationships",
        implements: NODE,
        fields: &[
            rel("field_call_to_action_goal", "taxonomy_term__goals"),
            rel("field_tags", "[relatedTaxonomyUnion]"),
        ],
    },
    ObjectDef {
        name: "node__career",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            date("changed"),
            field("body", "BodyFieldWithSummary"),
            field("relationships", "node__careerRelationships"),
            field("fields", "node__careerFields"),
        ],
    },
    ObjectDef { name: "node__careerFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef { name: "node__careerRelationships", implements: NODE, fields: TAG_RELATIONSHIPS },
    ObjectDef {
        name: "node__course",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("field_code", "String"),
            field("field_course_url", "node__courseField_course_url"),
            field("field_credits", "String"),
            field("field_level", "Int"),
            field("relationships", "node__courseRelationships"),
            field("fields", "node__courseFields"),
        ],
    },
    ObjectDef { name: "node__courseFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef {
        name: "node__courseField_course_url",
        implements: NODE,
        fields: &[field("uri", "String")],
    },
    ObjectDef { name: "node__courseRelationships", implements: NODE, fields: TAG_RELATIONSHIPS },
    ObjectDef {
        name: "node__employer",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("field_employer_summary", "BodyField"),
            field("field_image", "ImageField"),
            field("field_link", "FieldLink"),
            field("relationships", "node__employerRelationships"),
            field("fields", "node__employerFields"),
        ],
    },
    ObjectDef { name: "node__employerFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef { name: "node__employerRelationships", implements: NONE, fields: IMAGE_AND_TAGS },
    ObjectDef {
        name: "node__landing_page",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("body", "BodyFieldWithSummary"),
            field("relationships", "node__landing_pageRelationships"),
            field("fields", "FieldsPathAlias"),
        ],
    },
    ObjectDef {
        name: "node__landing_pageRelationships",
        implements: NODE,
        fields: &[
            rel("field_tags", "[relatedTaxonomyUnion]"),
            rel("field_related_pages", "[paragraph__related_pages]"),
        ],
    },
    ObjectDef {
        name: "node__page",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("body", "BodyFieldWithSummary"),
            field("field_image", "ImageField"),
            field("relationships", "node__pageRelationships"),
            field("fields", "FieldsPathAlias"),
        ],
    },
    ObjectDef {
        name: "node__pageRelationships",
        implements: NODE,
        fields: &[
            rel("field_image", "file__file"),
            rel("field_related_pages", "[paragraph__related_pages]"),
            rel("field_tags", "[relatedTaxonomyUnion]"),
        ],
    },
    ObjectDef {
        name: "node__program",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            date("changed"),
            field("field_course_notes", "node__programField_course_notes"),
            field("field_program_overview", "node__programField_program_overview"),
            field("relationships", "node__programRelationships"),
            field("fields", "FieldsPathAlias"),
        ],
    },
    ObjectDef { name: "node__programField_course_notes", implements: NODE, fields: TEXT },
    ObjectDef { name: "node__programField_program_overview", implements: NODE, fields: TEXT },
    ObjectDef {
        name: "node__programRelationships",
        implements: NODE,
        fields: &[
            rel("field_program_acronym", "taxonomy_term__programs"),
            rel("field_courses", "[node__course]"),
            rel("field_degrees", "[taxonomy_term__degrees]"),
            rel("field_program_statistics", "[paragraph__program_statistic]"),
            rel("field_program_variants", "[relatedParagraphUnion]"),
            rel("field_specializations", "[taxonomy_term__specializations]"),
            rel("field_tags", "[taxonomy_term__tags]"),
        ],
    },
    ObjectDef {
        name: "node__testimonial",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__nid", "Int"),
            field("title", "String"),
            field("body", "BodyFieldWithSummary"),
            field("field_testimonial_person_desc", "String"),
            field("field_image", "ImageField"),
            field("relationships", "node__testimonialRelationships"),
            field("fields", "node__testimonialFields"),
        ],
    },
    ObjectDef { name: "node__testimonialFields", implements: NODE, fields: TAGS_ONLY },
    ObjectDef { name: "node__testimonialRelationships", implements: NONE, fields: IMAGE_AND_TAGS },
    // paragraphs
    ObjectDef {
        name: "paragraph__events_widget",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("field_title", "String"),
            field("field_match_categories", "Boolean"),
            field("relationships", "paragraph__events_widgetRelationships"),
        ],
    },
    ObjectDef {
        name: "paragraph__events_widgetRelationships",
        implements: NONE,
        fields: &[rel("field_event_category", "[taxonomy_term__event_category]")],
    },
    ObjectDef {
        name: "paragraph__general_text",
        implements: NODE,
        fields: &[field("drupal_id", "String"), field("field_general_text", "BodyField")],
    },
    ObjectDef {
        name: "paragraph__program_statistic",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("field_stat_range", "Boolean"),
            field("field_stat_value", "String"),
            field("field_stat_value_end", "String"),
            field("relationships", "paragraph__program_statisticRelationships"),
        ],
    },
    ObjectDef {
        name: "paragraph__program_statisticRelationships",
        implements: NODE,
        fields: &[
            rel("field_stat_icon", "media__image"),
            rel("field_stat_type", "taxonomy_term__statistic_type"),
        ],
    },
    ObjectDef {
        name: "paragraph__program_variants",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("field_variant_title", "String"),
            field("field_variant_link", "FieldLink"),
            field("field_variant_info", "BodyField"),
            field("relationships", "paragraph__program_variantsRelationships"),
        ],
    },
    ObjectDef {
        name: "paragraph__program_variantsRelationships",
        implements: NONE,
        fields: &[
            field("field_variant_name", "taxonomy_term__program_variant_type"),
            rel("field_variant_type", "taxonomy_term__program_variant_type"),
        ],
    },
    ObjectDef {
        name: "paragraph__related_pages",
        implements: NODE,
        fields: &[
            field("drupal_id", "String"),
            field("relationships", "paragraph__related_pagesRelationships"),
        ],
    },
    ObjectDef {
        name: "paragraph__related_pagesRelationships",
        implements: NONE,
        fields: &[rel("field_related_pages", "[relatedPagesUnion]")],
    },
    // vocabularies
    ObjectDef {
        name: "taxonomy_term__degrees",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("field_degree_acronym", "String"),
            field("name", "String"),
            field("description", "TaxonomyDescription"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__event_category",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__goals",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
            field("field_goal_action", "String"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__news_category",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
            field("description", "TaxonomyDescription"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__programs",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__programsRelationships",
        implements: NONE,
        fields: &[
            rel("field_degrees", "[taxonomy_term__degrees]"),
            field("field_specializations", "[taxonomy_term__specializations]"),
            rel("field_program_variants", "[relatedParagraphUnion]"),
            field("field_tags", "[taxonomy_term__tags]"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__program_variant_type",
        implements: NODE,
        fields: &[field("name", "String")],
    },
    ObjectDef {
        name: "taxonomy_term__specializations",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("field_specialization_acronym", "String"),
            field("name", "String"),
            field("relationships", "taxonomy_term__specializationsRelationships"),
            field("description", "TaxonomyDescription"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__specializationsRelationships",
        implements: NONE,
        fields: &[field("field_units", "[taxonomy_term__units]")],
    },
    ObjectDef {
        name: "taxonomy_term__statistic_type",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__tags",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("name", "String"),
            field("description", "TaxonomyDescription"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__topics",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("fields", "FieldsPathAlias"),
            field("name", "String"),
            field("description", "TaxonomyDescription"),
        ],
    },
    ObjectDef {
        name: "taxonomy_term__units",
        implements: TAXONOMY,
        fields: &[
            field("drupal_id", "String"),
            field("drupal_internal__tid", "Int"),
            field("field_unit_acronym", "String"),
            field("name", "String"),
            field("description", "TaxonomyDescription"),
        ],
    },
];
