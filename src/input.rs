use std::fs::File;
use std::io::Read;
use std::path::Path;

use codespan_reporting::files::SimpleFiles;

pub type Files = SimpleFiles<String, String>;

/// Read the listing at `path` and register it for diagnostics. Returns the
/// file id together with the source.
pub fn read_listing(files: &mut Files, path: &Path) -> anyhow::Result<(usize, String)> {
    let mut buf = Vec::new();
    File::open(path)?.read_to_end(&mut buf)?;
    let src = String::from_utf8(buf)?;

    let file = files.add(path.display().to_string(), src.clone());
    Ok((file, src))
}
