use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use handlebars::Handlebars;
use log::{debug, info};

use crate::{metadata::PostMetadata, renderer::render_post, slug::slugify};

/// `{YYYY-MM-DD}-{slug}.markdown`
pub(crate) fn file_name(metadata: &PostMetadata) -> String {
    let slug = slugify(&metadata.title);
    debug!("slug for {:?}: {:?}", metadata.title, slug);
    format!("{}-{}.markdown", metadata.file_date(), slug)
}

/// Renders the stub and writes it into `out_dir`, replacing any existing file of the same name.
pub(crate) fn generate(
    handlebars: &Handlebars<'_>,
    metadata: &PostMetadata,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let content = render_post(handlebars, metadata)?;
    let out_path = out_dir.join(file_name(metadata));

    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&out_path)
        .with_context(|| format!("while opening {out_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("while writing {out_path:?}"))?;

    info!("wrote {out_path:?}");
    Ok(out_path)
}
