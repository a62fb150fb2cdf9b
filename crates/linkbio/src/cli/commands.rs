//! Command implementations.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;

use super::{RenderArgs, ThemeArg, WatchArgs};
use crate::app::LinkPage;
use crate::config::PageConfig;
use crate::export::PageExporter;
use crate::host::build_host_document;
use crate::links::{validate_entries, LinkIcon};
use crate::theme::detect_os_color_mode;
use crate::util::{pad_to_width, truncate_to_width};
use crate::window::Window;

const TITLE_WIDTH: usize = 32;

fn mount(config: &PageConfig, theme: ThemeArg) -> Result<(Window, LinkPage)> {
    let document = build_host_document(config).context("could not build host page")?;
    let window = Window::new(document, theme.color_scheme());
    let page = LinkPage::mount(&window, config).context("could not mount page")?;
    Ok((window, page))
}

fn exporter(template_dir: Option<&Path>) -> Result<PageExporter> {
    let exporter = match template_dir {
        Some(dir) => PageExporter::with_template_dir(dir)
            .with_context(|| format!("could not load templates from {}", dir.display()))?,
        None => PageExporter::new()?,
    };
    Ok(exporter)
}

fn write_output(out: Option<&Path>, html: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("could not write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote page");
        }
        None => println!("{}", html),
    }
    Ok(())
}

pub(super) fn render(config: &PageConfig, args: &RenderArgs) -> Result<ExitCode> {
    let (window, page) = mount(config, args.theme)?;

    if args.toggle {
        let document = window.document();
        let toggle = document
            .get_element_by_id(&config.theme.toggle_id)
            .context("theme toggle disappeared after mounting")?;
        document.click(toggle)?;
    }

    let html = exporter(args.template_dir.as_deref())?.export(window.document())?;
    write_output(args.out.as_deref(), &html)?;

    if let Some(out) = &args.out {
        eprintln!(
            "{} {} ({} theme, {} links)",
            style("wrote").green().bold(),
            out.display(),
            page.theme().theme(),
            page.links().links().len()
        );
    }
    page.dispose();
    Ok(ExitCode::SUCCESS)
}

pub(super) fn check(config: &PageConfig) -> Result<ExitCode> {
    let (records, rejected) = validate_entries(&config.links);

    println!("{}", style(&config.title).bold());
    for record in &records {
        let icon = match &record.icon {
            LinkIcon::Image { source } => format!("image {}", source),
            LinkIcon::Glyph { class } => format!("glyph {}", class),
        };
        println!(
            "  {:>4}  {}  {}  {}",
            style(record.id).dim(),
            pad_to_width(&truncate_to_width(&record.title, TITLE_WIDTH), TITLE_WIDTH),
            style(&record.url).cyan(),
            style(icon).dim()
        );
    }

    for err in &rejected {
        println!("  {} {}", style("skipped").yellow().bold(), err);
    }

    println!(
        "{} valid, {} skipped",
        style(records.len()).green(),
        if rejected.is_empty() {
            style(rejected.len()).green()
        } else {
            style(rejected.len()).yellow()
        }
    );

    if rejected.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub(super) fn watch(config: &PageConfig, args: &WatchArgs) -> Result<ExitCode> {
    let (window, page) = mount(config, ThemeArg::Auto)?;
    let exporter = exporter(args.template_dir.as_deref())?;

    write_output(Some(&args.out), &exporter.export(window.document())?)?;
    eprintln!(
        "{} {} ({} theme); watching device preference every {}s",
        style("wrote").green().bold(),
        args.out.display(),
        page.theme().theme(),
        args.interval
    );

    let interval = Duration::from_secs(args.interval.max(1));
    loop {
        thread::sleep(interval);
        if window.color_scheme().refresh(detect_os_color_mode) {
            write_output(Some(&args.out), &exporter.export(window.document())?)?;
            eprintln!(
                "{} {} ({} theme)",
                style("updated").green().bold(),
                args.out.display(),
                page.theme().theme()
            );
        }
    }
}
