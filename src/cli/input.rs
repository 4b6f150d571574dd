//! Turn `PageArgs` into deriver inputs.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::debug;
use crate::page::{PageData, RoutePath};
use crate::seo::SeoOptions;

use super::args::PageArgs;

/// Route, page data and overrides of one CLI invocation.
pub(super) struct PageInput {
    pub route: RoutePath,
    pub page: PageData,
    pub options: SeoOptions,
}

impl PageInput {
    pub fn from_args(args: &PageArgs, config: &SiteConfig) -> Result<Self> {
        let page = match &args.file {
            Some(file) if file.as_os_str() == "-" => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read content from stdin")?;
                PageData::from_source(&source).context("invalid frontmatter in stdin")?
            }
            Some(file) => PageData::from_file(file)?,
            None => PageData::default(),
        };

        let route = resolve_route(args, config);
        debug!("input"; "route {} title {:?}", route, page.title);

        Ok(Self {
            route,
            page,
            options: options_from_args(args),
        })
    }
}

/// `--path` wins; otherwise FILE relative to the content root.
fn resolve_route(args: &PageArgs, config: &SiteConfig) -> RoutePath {
    if let Some(path) = &args.path {
        return RoutePath::new(path);
    }

    match &args.file {
        Some(file) if file.as_os_str() != "-" => {
            let root = project_root(config);
            let content_dir = absolutize(&args.content, &root);
            let file = absolutize(file, &current_dir());
            let relative = file.strip_prefix(&content_dir).unwrap_or(&file);
            RoutePath::from_content_path(relative)
        }
        _ => RoutePath::root(),
    }
}

/// Directory of the loaded config file, or cwd when running on defaults.
fn project_root(config: &SiteConfig) -> PathBuf {
    config
        .config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(current_dir)
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_default()
}

fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn options_from_args(args: &PageArgs) -> SeoOptions {
    SeoOptions {
        title: args.title.clone(),
        description: args.description.clone(),
        keywords: (!args.keywords.is_empty()).then(|| args.keywords.clone()),
        image: args.image.clone(),
    }
}
