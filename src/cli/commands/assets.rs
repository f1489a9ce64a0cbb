//! Static asset command.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use console::style;

use charforge::assets::STATIC_ASSETS;
use charforge::config::Settings;
use charforge::storage::write_static_assets;

use crate::cli::icons::{success, warning};

/// Write every bundled asset beneath the configured root.
pub fn cmd_assets(settings: &Settings) -> anyhow::Result<()> {
    let written = write_static_assets(&settings.root)?;

    let stdout = io::stdout();
    report_written(&mut stdout.lock(), &settings.root, &written)?;
    Ok(())
}

/// One line per written file, flagging assets whose extension disagrees with their content.
fn report_written<W: Write>(out: &mut W, root: &Path, written: &[PathBuf]) -> io::Result<()> {
    for (asset, path) in STATIC_ASSETS.iter().zip(written) {
        writeln!(out, "  {} Wrote {}", success(), path.display())?;
        if !asset.extension_matches_content() {
            writeln!(
                out,
                "    {} {} holds {} content",
                warning(),
                asset.relative_path,
                style(asset.media_type).dim()
            )?;
        }
    }

    writeln!(out, "{} Static assets ready in {}", success(), root.display())
}
