//! Command-line interface module.

mod args;
pub mod build;

pub use args::{BuildArgs, Cli, Commands};

use crate::{alias::slugify, schema};
use anyhow::Result;
use std::path::Path;

/// `schema`: print the type definitions or write them to `output`.
pub fn print_schema(output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            schema::write_schema(path)?;
            crate::log!("schema"; "wrote {}", path.display());
        }
        None => print!("{}", schema::site_sdl()?),
    }
    Ok(())
}

/// `slug`: print the slug of the joined words.
pub fn print_slug(text: &[String]) {
    println!("{}", slugify(&text.join(" ")));
}
