//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module   | TOML Section          | Purpose                              |
//! |----------|-----------------------|--------------------------------------|
//! | `source` | `[source]`            | Content graph export location        |
//! | `build`  | `[build]`             | Output directory and artifact names  |
//! | `alias`  | `[build.alias]`       | Alias source, conflicts, prefixes    |
//! | `menu`   | `[menus]`             | Exported menus                       |

mod alias;
mod build;
mod menu;
mod source;

pub use alias::{AliasConfig, AliasSource, ConflictLevel};
pub use build::BuildSectionConfig;
pub use menu::MenuSectionConfig;
pub use source::SourceSectionConfig;
