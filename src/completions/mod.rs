//! Completion support
//!
//! Two kinds of completion live here:
//! - **Shell completions** for the `tagsieve` binary, generated by `clap_complete`
//! - **Query suggestions** for the last token of a search box query, drawn from
//!   the metatag vocabulary and a [`crate::catalog::TagCatalog`]

mod candidates;
mod suggest;

pub use candidates::*;
pub use suggest::suggest;

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Destination for the completion script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}
