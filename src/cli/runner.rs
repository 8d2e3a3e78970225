//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::PagerConfig;
use crate::context::MapContext;
use crate::error::Result;
use crate::render::{PaginationDecorator, RESOURCE_ATTRIBUTE};
use crate::types::{ElementTag, PageState};
use crate::window::{WindowConfig, WindowSelection};
use serde_json::{json, Value};

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
            Commands::Window {
                page,
                total_elements,
            } => self.window(page, *total_elements),
            Commands::Render {
                page,
                total_elements,
                locale,
                uri,
                element,
                class,
                resource,
            } => {
                let mut tag = ElementTag::new(element.as_str());
                if let Some(class) = class {
                    tag = tag.with_attribute("class", class.as_str());
                }
                if let Some(resource) = resource {
                    tag = tag.with_attribute(RESOURCE_ATTRIBUTE, resource.as_str());
                }
                self.render(page, *total_elements, locale, uri, &tag)
            }
            Commands::Bundles => self.bundles(),
        }
    }

    /// Load the pager config, applying command-line overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };
        if let Some(dir) = &self.cli.bundle_dir {
            config.bundle_dir = Some(dir.clone());
        }
        Ok(config)
    }

    fn page_state(args: &PageArgs, total_elements: Option<u64>) -> Result<PageState> {
        let total_elements = total_elements.unwrap_or(u64::from(args.total_pages));
        PageState::try_new(args.page, args.total_pages, total_elements)
    }

    fn window(&self, args: &PageArgs, total_elements: Option<u64>) -> Result<String> {
        let config = self.load_config()?;
        let page = Self::page_state(args, total_elements)?;
        let window = args
            .window
            .filter(|w| *w > 0)
            .map_or_else(|| config.window_config(), WindowConfig::new);
        let selection = WindowSelection::for_page(&page, &window);

        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&selection)?,
            OutputFormat::Pretty => {
                let pages: Vec<String> = selection
                    .window
                    .into_iter()
                    .map(|i| {
                        if i == page.current_page {
                            format!("[{}]", i + 1)
                        } else {
                            (i + 1).to_string()
                        }
                    })
                    .collect();
                format!(
                    "{} {} {} {} {}\ncase: {:?}, window: [{}, {})",
                    if selection.is_first_page { "-" } else { "«" },
                    if selection.has_previous { "‹" } else { "-" },
                    pages.join(" "),
                    if selection.has_next { "›" } else { "-" },
                    if selection.is_last_page { "-" } else { "»" },
                    selection.case,
                    selection.window.first_index,
                    selection.window.last_index_exclusive,
                )
            }
        })
    }

    fn render(
        &self,
        args: &PageArgs,
        total_elements: Option<u64>,
        locale: &str,
        uri: &str,
        tag: &ElementTag,
    ) -> Result<String> {
        let config = self.load_config()?;
        let decorator = config.decorator()?;
        let page = Self::page_state(args, total_elements)?;

        let mut ctx = MapContext::with_page(page);
        ctx.set_locale(locale).set_request_uri(uri);
        if let Some(window) = args.window {
            ctx.set_var(&config.window_size_variable, json!(window));
        }

        let markup = decorator.decorate(tag, &ctx)?;
        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "decorator": decorator.identifier(),
                "locale": ctx.locale.tag(),
                "markup": markup,
            }))?,
            OutputFormat::Pretty => markup,
        })
    }

    fn bundles(&self) -> Result<String> {
        let config = self.load_config()?;
        let resolver = config.bundle_resolver()?;
        let names = resolver.bundle_names();

        Ok(match self.cli.format {
            OutputFormat::Json => serde_json::to_string_pretty(&Value::from(names))?,
            OutputFormat::Pretty => names.join("\n"),
        })
    }
}
