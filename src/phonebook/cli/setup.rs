use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Only the ambient options are parsed here. The subcommand and its arguments are
/// kept as raw strings, because the dispatcher owns their validation and messages.
#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    bin_name = "phonebook",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(
    about = "Command-line contact directory",
    long_about = None,
    after_help = "Commands:\n  search <term>\n  list\n  insert <name> <surname> <phone>\n  delete <phone>"
)]
pub struct Cli {
    /// Directory holding the phone book data and config.json
    #[arg(long, env = "PHONEBOOK_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand followed by its arguments
    #[arg(
        value_name = "COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
