use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the course labels and menu tree.
    Show(ShowArgs),
    /// Check the course configuration and summarize it.
    Validate(ValidateArgs),
    /// Write the course to a file.
    Export(ExportArgs),
    /// Show the external-document disclaimer and wait for acknowledgment.
    Disclaimer(DisclaimerArgs),
}

/// How sections 3 to 6 are arranged in the built-in course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CourseLayout {
    /// Every entry at the top level.
    #[default]
    Flat,
    /// Lessons attached as submenus of their section header.
    Nested,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Course config file (YAML). Defaults to the built-in course.
    #[arg(long)]
    pub config: Option<String>,

    /// Layout of the built-in course (ignored with `--config`).
    #[arg(long, value_enum, default_value_t = CourseLayout::Flat)]
    pub layout: CourseLayout,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Course config file (YAML). Defaults to the built-in course.
    #[arg(long)]
    pub config: Option<String>,

    /// Layout of the built-in course (ignored with `--config`).
    #[arg(long, value_enum, default_value_t = CourseLayout::Flat)]
    pub layout: CourseLayout,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Course config file (YAML). Defaults to the built-in course.
    #[arg(long)]
    pub config: Option<String>,

    /// Layout of the built-in course (ignored with `--config`).
    #[arg(long, value_enum, default_value_t = CourseLayout::Flat)]
    pub layout: CourseLayout,

    /// Output file path.
    #[arg(long)]
    pub out: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Overwrite the output file if it exists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct DisclaimerArgs {
    /// Course config file (YAML). Defaults to the built-in course.
    #[arg(long)]
    pub config: Option<String>,

    /// Layout of the built-in course (ignored with `--config`).
    #[arg(long, value_enum, default_value_t = CourseLayout::Flat)]
    pub layout: CourseLayout,

    /// Print the disclaimer without waiting for Enter.
    #[arg(long)]
    pub no_wait: bool,
}
