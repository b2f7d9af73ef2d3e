use std::io::Write as _;

use anyhow::Context as _;

use crate::cli::ShowArgs;
use crate::course;
use crate::export::render;

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let course = course::resolve(args.config.as_deref(), args.layout)?;
    let contents = render(&course, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(contents.as_bytes())
        .context("write course to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
