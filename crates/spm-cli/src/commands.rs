//! Subcommand implementations
//!
//! Each command writes to the given sink so tests can capture output.

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Serialize;
use spm_core::{
    codec,
    parser::ParseIssue,
    render::{AssetTable, RenderConfig},
    BubbleBlock, TagRenderer,
};
use spm_editor::{BubbleView, SpmDocument};
use std::fs;
use std::io::Write;
use std::path::Path;

/// JSON shape of `spm parse --json`
#[derive(Serialize)]
struct ParseReport<'a> {
    blocks: &'a [BubbleBlock],
    issues: &'a [ParseIssue],
}

/// Load a script, from raw game bytes unless `visible` is set
pub fn load_document(input: &Path, visible: bool) -> Result<SpmDocument> {
    let raw = fs::read(input).with_context(|| format!("cannot read {}", input.display()))?;
    debug!("Read {} bytes from {}", raw.len(), input.display());
    if visible {
        let text = String::from_utf8(raw)
            .with_context(|| format!("{} is not UTF-8 visible text", input.display()))?;
        Ok(SpmDocument::from_text(text))
    } else {
        Ok(SpmDocument::from_bytes(&raw))
    }
}

/// Write `bytes` to `output`, or to `out` when no path is given
pub fn write_output(output: Option<&Path>, bytes: &[u8], out: &mut impl Write) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("cannot write {}", path.display()))?;
            info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => out.write_all(bytes)?,
    }
    Ok(())
}

/// `spm decode`: raw game bytes to visible text
pub fn decode(input: &Path, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let raw = fs::read(input).with_context(|| format!("cannot read {}", input.display()))?;
    write_output(output, codec::decode(&raw).as_bytes(), out)
}

/// `spm encode`: visible text back to raw game bytes
pub fn encode(input: &Path, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;
    let raw = codec::encode(&text).with_context(|| format!("cannot encode {}", input.display()))?;
    write_output(output, &raw, out)
}

/// `spm parse`: list blocks, or dump blocks and issues as JSON
pub fn parse(doc: &SpmDocument, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let report = ParseReport {
            blocks: doc.blocks(),
            issues: doc.issues(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for (index, block) in doc.blocks().iter().enumerate() {
        writeln!(
            out,
            "#{index} {} [{}] position={} sound={} pages={}",
            block.stage_npc,
            block.bubble_type,
            block.position,
            block.bubble_sound.label(),
            block.page_count()
        )?;
        for (page, text) in block.pages.iter().enumerate() {
            writeln!(out, "  --- page {} ---", page + 1)?;
            for line in text.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }
    Ok(())
}

/// Which pages `spm render` prints
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSelection {
    pub block: Option<usize>,
    pub page: Option<usize>,
}

/// `spm render`: page markup for one block/page or all of them
///
/// With `--page` alone, blocks too short to have that page are skipped.
pub fn render(
    doc: &SpmDocument,
    config: &CliConfig,
    selection: RenderSelection,
    out: &mut impl Write,
) -> Result<()> {
    let blocks = doc.blocks();
    let indices: Vec<usize> = match selection.block {
        Some(index) if index < blocks.len() => vec![index],
        Some(index) => bail!("block {index} out of range ({} blocks)", blocks.len()),
        None => (0..blocks.len()).collect(),
    };

    let assets = AssetTable::new(config.asset_root.clone());
    for index in indices {
        let mut view = BubbleView::new(blocks[index].clone());
        let render_config = RenderConfig::default()
            .with_base_font_size(config.base_font_size)
            .with_persistent_color(Some(view.text_color()));
        let renderer = TagRenderer::new(&assets, render_config);

        let pages = view.block().page_count();
        let wanted = match selection.page {
            Some(page) if page < pages => page..page + 1,
            Some(page) if selection.block.is_some() => {
                bail!("page {page} out of range (block {index} has {pages} pages)")
            }
            Some(page) => {
                debug!("Skipping block {index}: no page {page} ({pages} pages)");
                continue;
            }
            None => 0..pages,
        };
        for _ in 0..wanted.start {
            view.next_page();
        }
        for page in wanted {
            writeln!(out, "<!-- {} page {} -->", view.stage_label(), page + 1)?;
            writeln!(out, "{}", view.render_page(&renderer))?;
            view.next_page();
        }
    }
    Ok(())
}

/// `spm check`: print issues; true when any is an error
pub fn check(doc: &SpmDocument, out: &mut impl Write) -> Result<bool> {
    for issue in doc.issues() {
        writeln!(out, "{}", issue.format_for_display())?;
    }
    let errors = doc.issues().iter().filter(|issue| issue.is_error()).count();
    writeln!(
        out,
        "{} blocks, {} issues, {errors} errors",
        doc.blocks().len(),
        doc.issues().len()
    )?;
    Ok(errors > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_listing() {
        let doc = SpmDocument::from_text("stg1_1_000\n<fairy>\n<se 1>\nHi\n<k>\nBye\n");
        let text = run(|out| parse(&doc, false, out));
        assert_eq!(
            text,
            "#0 stg1_1_000 [fairy] position=auto sound=Typewriter pages=2\n  --- page 1 ---\n  Hi\n  --- page 2 ---\n  Bye\n"
        );
    }

    #[test]
    fn parse_json() {
        let doc = SpmDocument::from_text("stg1_1_000\n<select 1 2 3 4>\nA\nB\n");
        let text = run(|out| parse(&doc, true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["blocks"][0]["bubble_type"], "select");
        assert_eq!(value["blocks"][0]["position"]["w"], 3);
        assert_eq!(value["blocks"][0]["pages"][0], "A\nB");
        assert_eq!(value["issues"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn render_single_page() {
        let doc = SpmDocument::from_text("stg1_1_000\nOne\n<k>\n<col ff0000>Two</col>\n");
        let selection = RenderSelection {
            block: Some(0),
            page: Some(1),
        };
        let text = run(|out| render(&doc, &CliConfig::default(), selection, out));
        assert_eq!(
            text,
            "<!-- stg1_1_000 page 2 -->\n<div style=\"line-height: 1.3;\"><span style=\"color: rgb(0,0,0);\"><span style=\"color: rgb(255,0,0);\">Two</span></span></div>\n"
        );
    }

    #[test]
    fn render_out_of_range() {
        let doc = SpmDocument::from_text("stg1_1_000\nOne\n");
        let mut out = Vec::new();
        let block = RenderSelection {
            block: Some(3),
            page: None,
        };
        assert!(render(&doc, &CliConfig::default(), block, &mut out).is_err());
        let page = RenderSelection {
            block: Some(0),
            page: Some(1),
        };
        assert!(render(&doc, &CliConfig::default(), page, &mut out).is_err());
    }

    #[test]
    fn render_page_skips_short_blocks() {
        let doc = SpmDocument::from_text("stg1_1_000\nstg1_1_001\nHello\nstg1_1_002\nA\n<k>\nB\n");
        let headers = |page| {
            let selection = RenderSelection { block: None, page: Some(page) };
            let text = run(|out| render(&doc, &CliConfig::default(), selection, out));
            text.lines()
                .filter(|line| line.starts_with("<!--"))
                .map(str::to_owned)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            headers(0),
            ["<!-- stg1_1_001 page 1 -->", "<!-- stg1_1_002 page 1 -->"]
        );
        assert_eq!(headers(1), ["<!-- stg1_1_002 page 2 -->"]);
        assert!(headers(5).is_empty());
    }

    #[test]
    fn check_reports_errors() {
        let mut out = Vec::new();
        let doc = SpmDocument::from_text("stg1_1_000\n<wpos 1 2>\nHi\n");
        assert!(check(&doc, &mut out).unwrap());

        let mut out = Vec::new();
        let doc = SpmDocument::from_text("stg1_1_000\nHi\n");
        assert!(!check(&doc, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "1 blocks, 0 issues, 0 errors\n");
    }
}
