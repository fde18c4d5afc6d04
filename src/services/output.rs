use crate::cli::OutputFormat;
use crate::domain::models::JsonOut;
use serde::Serialize;
use std::path::Path;

/// Emit one document as text or as a `JsonOut` envelope, honoring the output
/// file flag. Formats rendered by external tooling (junit, prometheus) fall
/// back to the text form here.
pub fn emit_one<T: Serialize>(
    format: OutputFormat,
    dest: Option<&Path>,
    data: &T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let rendered = if format == OutputFormat::Json {
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    } else {
        text(data)
    };
    write_out(dest, &rendered)
}

fn write_out(dest: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match dest {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, format!("{rendered}\n"))?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
