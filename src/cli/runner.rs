//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::error::{Result, ResultExt};
use crate::pagination::{PageInfo, Pagination};
use crate::style::{load_style, Preset, StyleConfig};
use crate::urls::QueryUrl;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::State { page, format } => self.state(page, *format),
            Commands::Links { page, pad } => {
                let pagination = self.paginate(page)?;
                let style = self.load_style()?;
                Ok(pagination.renderer(&style).links(*pad))
            }
            Commands::Pager {
                page,
                previous,
                next,
            } => {
                let pagination = self.paginate(page)?;
                let style = self.load_style()?;
                Ok(pagination
                    .renderer(&style)
                    .pager(previous.as_str(), next.as_str()))
            }
            Commands::Presets => Ok(Self::presets()),
        }
    }

    /// Build the pagination state for the given request
    fn paginate(&self, page: &PageArgs) -> Result<Pagination> {
        QueryUrl::validate(&page.url).with_context(|| format!("Bad --url '{}'", page.url))?;

        let mut pagination = Pagination::with_editor(QueryUrl::new(page.url.clone()));
        let known = pagination.set(&self.cli.key, self.cli.per_page, None)?;
        match (known, page.total) {
            (false, Some(total)) => pagination.set_total(total),
            (true, Some(_)) => {
                tracing::debug!("Page count taken from the URL, skipping --total");
            }
            (false, None) if pagination.current_page() > 1 => {
                tracing::warn!(
                    "Page {} has no page count in the URL; pass --total",
                    pagination.current_page()
                );
            }
            _ => {}
        }
        Ok(pagination)
    }

    /// Load the style from --style, falling back to --preset
    fn load_style(&self) -> Result<StyleConfig> {
        match &self.cli.style {
            Some(path) => {
                tracing::debug!("Using style file {}, ignoring --preset", path.display());
                load_style(path)
            }
            None => Ok(StyleConfig::preset(self.cli.preset)),
        }
    }

    /// Print the pagination state
    fn state(&self, page: &PageArgs, format: OutputFormat) -> Result<String> {
        let pagination = self.paginate(page)?;
        let info = pagination.info();
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&info)?),
            OutputFormat::Pretty => Ok(pretty_info(&pagination, &info)),
        }
    }

    /// List the style presets
    fn presets() -> String {
        let presets: Vec<_> = Preset::ALL
            .iter()
            .map(|preset| {
                json!({
                    "name": preset.name(),
                    "link_overrides": preset.link_overrides().len(),
                    "pager_overrides": preset.pager_overrides().len(),
                    "default": *preset == Preset::default(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&presets).unwrap_or_default()
    }
}

fn pretty_info(pagination: &Pagination, info: &PageInfo) -> String {
    let param = pagination.page_value().unwrap_or_else(|| "-".to_string());
    let or_dash = |url: &Option<String>| url.clone().unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        format!(
            "Page {} of {} ({}={})",
            info.current_page, info.number_pages, pagination.query_key().unwrap_or("-"), param
        ),
        format!("Offset:   {}", info.offset),
        format!(
            "Length:   {}",
            info.length.map_or_else(|| "-".to_string(), |l| l.to_string())
        ),
        format!("Limit:   {}", info.limit),
        format!("Previous: {}", or_dash(&info.previous_url)),
        format!("Next:     {}", or_dash(&info.next_url)),
    ];
    if info.last_page {
        lines.push("Last page".to_string());
    }
    lines.join("\n")
}
