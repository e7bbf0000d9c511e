//! Content graph type definitions.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `def`    | Definition types and field constructors  |
//! | `types`  | The site's content model tables          |
//! | `render` | SDL text output                          |

mod def;
mod render;
mod types;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use thiserror::Error;

use def::Schema;
use render::render;
use types::SITE_SCHEMA;

/// Types supplied by the host graph layer rather than declared here.
const BUILTIN_TYPES: &[&str] = &[
    "ID", "String", "Int", "Float", "Boolean", "Date", "Node", "file__file",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("type `{0}` declared more than once")]
    Duplicate(String),

    #[error("`{owner}` references undeclared type `{name}`")]
    Undeclared { owner: String, name: String },
}

/// Check that every referenced type is declared exactly once.
pub fn validate(schema: &Schema) -> Result<(), Vec<SchemaError>> {
    let mut declared = FxHashSet::default();
    let mut errors = Vec::new();

    let names = schema
        .unions
        .iter()
        .map(|u| u.name)
        .chain(schema.interfaces.iter().map(|i| i.name))
        .chain(schema.objects.iter().map(|o| o.name));
    for name in names {
        if !declared.insert(name) {
            errors.push(SchemaError::Duplicate(name.to_owned()));
        }
    }

    let known = |name: &str| declared.contains(name) || BUILTIN_TYPES.contains(&name);
    let mut check = |owner: &str, name: &str| {
        if !known(name) {
            errors.push(SchemaError::Undeclared {
                owner: owner.to_owned(),
                name: name.to_owned(),
            });
        }
    };

    for union in schema.unions {
        for member in union.members {
            check(union.name, member);
        }
    }
    for interface in schema.interfaces {
        for field in interface.fields {
            check(interface.name, field.named_type());
        }
    }
    for object in schema.objects {
        for parent in object.implements {
            check(object.name, parent);
        }
        for field in object.fields {
            check(object.name, field.named_type());
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate and render the site schema.
pub fn site_sdl() -> Result<String> {
    if let Err(errors) = validate(&SITE_SCHEMA) {
        let lines: Vec<_> = errors.iter().map(|e| format!("  - {e}")).collect();
        anyhow::bail!("invalid schema:\n{}", lines.join("\n"));
    }
    Ok(render(&SITE_SCHEMA))
}

/// Write the site schema to `path`.
pub fn write_schema(path: &Path) -> Result<()> {
    let sdl = site_sdl()?;
    fs::write(path, sdl).with_context(|| format!("failed to write {}", path.display()))
}
