use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::cli::{ExportArgs, OutputFormat};
use crate::course;
use crate::formats::Course;

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let out_path = Path::new(&args.out);
    if out_path.exists() && !args.force {
        anyhow::bail!("export output already exists: {}", args.out);
    }
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create export output dir: {}", parent.display()))?;
    }

    let course = course::resolve(args.config.as_deref(), args.layout)?;
    let contents = render(&course, args.format)?;

    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options
        .open(out_path)
        .with_context(|| format!("open output: {}", args.out))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write output: {}", args.out))?;
    file.flush()
        .with_context(|| format!("flush output: {}", args.out))?;

    tracing::info!(
        format = ?args.format,
        out = %args.out,
        entries = course.menu.len(),
        "exported course"
    );
    Ok(())
}

/// Serializes a course in the requested format, newline terminated.
pub fn render(course: &Course, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(course).context("serialize course json")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yaml::to_string(course).context("serialize course yaml"),
    }
}
