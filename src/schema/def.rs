//! Schema definition types.

/// Field resolver directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `@dateformat`
    DateFormat,
    /// `@link` (by id)
    Link,
    /// `@link(from: "<field>___NODE")`
    LinkNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    /// Type reference, e.g. `String`, `[taxonomy_term__tags]`, `ID!`.
    pub ty: &'static str,
    pub directive: Option<Directive>,
}

impl FieldDef {
    /// Named type behind list/non-null wrappers.
    pub fn named_type(&self) -> &'static str {
        self.ty.trim_matches(|c| matches!(c, '[' | ']' | '!'))
    }
}

/// Plain field.
pub const fn field(name: &'static str, ty: &'static str) -> FieldDef {
    FieldDef {
        name,
        ty,
        directive: None,
    }
}

/// `Date @dateformat` field.
pub const fn date(name: &'static str) -> FieldDef {
    FieldDef {
        name,
        ty: "Date",
        directive: Some(Directive::DateFormat),
    }
}

/// Field linked by id (`@link`).
pub const fn link(name: &'static str, ty: &'static str) -> FieldDef {
    FieldDef {
        name,
        ty,
        directive: Some(Directive::Link),
    }
}

/// Relationship linked through `<name>___NODE`.
pub const fn rel(name: &'static str, ty: &'static str) -> FieldDef {
    FieldDef {
        name,
        ty,
        directive: Some(Directive::LinkNode),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnionDef {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct InterfaceDef {
    pub name: &'static str,
    /// Rendered with `@nodeInterface`.
    pub node_interface: bool,
    pub fields: &'static [FieldDef],
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectDef {
    pub name: &'static str,
    pub implements: &'static [&'static str],
    pub fields: &'static [FieldDef],
}

/// Complete set of type definitions.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub unions: &'static [UnionDef],
    pub interfaces: &'static [InterfaceDef],
    pub objects: &'static [ObjectDef],
}
