use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use mkpasswd::Options;

/// Read options from a YAML document. JSON documents are accepted too, being valid YAML.
pub(crate) fn load(path: &Path) -> anyhow::Result<Options> {
    let file = File::open(path)
        .with_context(|| format!("failed to open options file {}", path.display()))?;
    let options = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse options file {}", path.display()))?;
    log::debug!("loaded options from {}", path.display());
    Ok(options)
}
