//! SDL rendering.

use std::fmt::Write;

use super::def::{Directive, FieldDef, InterfaceDef, ObjectDef, Schema, UnionDef};

/// Render the full schema as SDL text.
pub fn render(schema: &Schema) -> String {
    let mut out = String::new();
    for union in schema.unions {
        render_union(&mut out, union);
    }
    for interface in schema.interfaces {
        render_interface(&mut out, interface);
    }
    for object in schema.objects {
        render_object(&mut out, object);
    }
    out
}

fn render_union(out: &mut String, def: &UnionDef) {
    let _ = writeln!(out, "union {} = {}\n", def.name, def.members.join(" | "));
}

fn render_interface(out: &mut String, def: &InterfaceDef) {
    let _ = write!(out, "interface {}", def.name);
    if def.node_interface {
        out.push_str(" @nodeInterface");
    }
    render_fields(out, def.fields);
}

fn render_object(out: &mut String, def: &ObjectDef) {
    let _ = write!(out, "type {}", def.name);
    if !def.implements.is_empty() {
        let _ = write!(out, " implements {}", def.implements.join(" & "));
    }
    render_fields(out, def.fields);
}

fn render_fields(out: &mut String, fields: &[FieldDef]) {
    out.push_str(" {\n");
    for field in fields {
        let _ = write!(out, "  {}: {}", field.name, field.ty);
        match field.directive {
            Some(Directive::DateFormat) => out.push_str(" @dateformat"),
            Some(Directive::Link) => out.push_str(" @link"),
            Some(Directive::LinkNode) => {
                let _ = write!(out, " @link(from: \"{}___NODE\")", field.name);
            }
            None => {}
        }
        out.push('\n');
    }
    out.push_str("}\n\n");
}
