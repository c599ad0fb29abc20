//! Command-line surface: argument parsing, dispatch and action handlers.

use clap::Parser;

/// Argument-shape validation and fatal error output.
pub mod dispatcher;
/// Action handlers.
pub mod handlers;

/// Builds the color-aware help text from the localized template.
fn build_help_string() -> &'static str {
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = t!("cli.help.template")
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// teleport: run a shell as it was in a chosen year of Unix history.
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TELEPORT_LANG_EFFECTIVE"), ")"),
    about,
    help_template = { build_help_string() },
)]
#[command(disable_help_subcommand = true)]
#[command(trailing_var_arg = true)]
pub struct Cli {
    /// The raw arguments. Their shape is validated by the dispatcher so that
    /// any malformed invocation produces the same usage line.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}
