mod args;
mod input;
mod report;
mod target;


use std::io::{self, Write};

use anyhow::bail;
use clap::Parser;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config, DisplayStyle};
use log::{warn, LevelFilter};

pub use args::Arguments;

use input::{read_listing, Files};
use target::{get_bank, get_target};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    let opts = args.options();

    init_logger(opts.verbose);

    let target = get_target(opts);
    let bank = get_bank(&target);

    let mut files = Files::new();
    let (file, src) = read_listing(&mut files, &opts.path)?;
    let (listing, msgs) = hreg_backend::parse(&src, file, bank.as_ref());

    if !msgs.is_empty() {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = Config {
            display_style: DisplayStyle::Rich,
            ..Default::default()
        };

        for msg in msgs.msgs.iter() {
            term::emit(&mut writer.lock(), &config, &files, msg)?;
        }

        bail!(
            "could not read {} due to {} errors",
            opts.path.display(),
            msgs.len()
        );
    }

    let shown = if opts.names {
        if bank.is_none() {
            warn!("--names given but {} has no register bank", target);
        }

        bank.as_ref()
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.command.rewrite() {
        report::rewrite(&mut out, listing, shown)?;
    } else {
        report::usage(&mut out, &listing, shown)?;
    }

    out.flush()?;

    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if verbose {
        builder.filter_level(LevelFilter::Trace);
    }

    builder.init();
}
