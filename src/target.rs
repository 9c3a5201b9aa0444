use std::str::FromStr;

use clap::error::ErrorKind;
use clap::CommandFactory;
use hreg_backend::Bank;
use log::{info, warn};
use target_lexicon::Triple;

use crate::args::Options;
use crate::Arguments;

pub fn get_target(opts: &Options) -> Triple {
    let target = match opts.target {
        Some(ref target) => Triple::from_str(target),
        None => Ok(Triple::host()),
    };

    match target {
        Err(error) => {
            let error = error.to_string();
            let mut cmd = Arguments::command();
            cmd.error(ErrorKind::InvalidValue, error).exit()
        }

        Ok(target) => target,
    }
}

/// The register bank of the target, if its architecture has one.
pub fn get_bank(target: &Triple) -> Option<Bank> {
    let bank = Bank::for_arch(target.architecture);

    match bank {
        Some(_) => info!("using the {} register bank", target.architecture),
        None => warn!(
            "no register bank for {}, real registers are not checked",
            target.architecture
        ),
    }

    bank
}
