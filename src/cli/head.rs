//! `head` and `jsonld` commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::log;
use crate::seo::{DerivedMetadata, HeadState, SeoBinding, SeoInputs, derive};

use super::args::{OutputFormat, PageArgs};
use super::input::PageInput;

/// JSON output of `head --format json`.
#[derive(Serialize)]
struct HeadReport<'a> {
    route: &'a str,
    metadata: &'a DerivedMetadata,
    head: &'a HeadState,
}

/// Derive a page's metadata and print its head entries.
pub fn run_head(args: &PageArgs, format: OutputFormat, config: &SiteConfig) -> Result<()> {
    let input = PageInput::from_args(args, config)?;
    let inputs = SeoInputs::new(config, &input.route, &input.page);

    let mut binding = SeoBinding::new(input.options, HeadState::new());
    binding.update(&inputs);
    let metadata = binding.current().context("no metadata registered")?;
    let head = binding.sink();

    let output = match format {
        OutputFormat::Html => head.render(),
        OutputFormat::Json => {
            let report = HeadReport {
                route: input.route.as_str(),
                metadata,
                head,
            };
            serde_json::to_string_pretty(&report)? + "\n"
        }
    };

    emit(&output, args.output.as_deref())
}

/// Derive a page's metadata and print its JSON-LD record.
pub fn run_jsonld(args: &PageArgs, pretty: bool, config: &SiteConfig) -> Result<()> {
    let input = PageInput::from_args(args, config)?;
    let inputs = SeoInputs::new(config, &input.route, &input.page);
    let json_ld = derive(&inputs, &input.options).json_ld;

    let mut output = if pretty {
        json_ld.to_json_pretty()
    } else {
        json_ld.to_json()
    };
    output.push('\n');

    emit(&output, args.output.as_deref())
}

/// Write to `path`, or stdout.
fn emit(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("seo"; "wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        test_parse_config(
            "[site]\nname = \"Docs\"\ndescription = \"Site\"\nurl = \"https://docs.example.org\"",
        )
    }

    #[test]
    fn test_run_head_html_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("head.html");
        let args = PageArgs {
            path: Some("/guide/setup".into()),
            title: Some("Setup".into()),
            output: Some(out.clone()),
            ..Default::default()
        };

        run_head(&args, OutputFormat::Html, &config()).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<title>Setup - Docs</title>\n"));
        assert!(html.contains(r#"<link rel="canonical" href="https://docs.example.org/guide/setup">"#));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
    }

    #[test]
    fn test_run_head_json_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("head.json");
        let args = PageArgs {
            path: Some("/guide".into()),
            output: Some(out.clone()),
            ..Default::default()
        };

        run_head(&args, OutputFormat::Json, &config()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["route"], "/guide");
        assert_eq!(value["metadata"]["canonical_url"], "https://docs.example.org/guide");
        assert_eq!(value["head"]["entries"][0][0], "seo-meta");
        assert_eq!(value["head"]["entries"][1][0], "structured-data");
        assert_eq!(value["head"]["entries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_jsonld_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("ld.json");
        let args = PageArgs {
            path: Some("/".into()),
            output: Some(out.clone()),
            ..Default::default()
        };

        run_jsonld(&args, false, &config()).unwrap();

        let json = fs::read_to_string(&out).unwrap();
        assert!(json.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "TechArticle");
        assert_eq!(value["name"], "Docs");
        assert_eq!(value["mainEntityOfPage"]["@id"], "https://docs.example.org");
    }
}
