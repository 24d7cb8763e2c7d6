//! scrapeo command-line tool
//!
//! Fetches a single page and prints SEO-relevant fields: title, meta
//! description, robots directive, custom meta tags and headings.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use scrapeo::fetch::config::DEFAULT_TIMEOUT_SECS;
use scrapeo::{
    FetchOptions, FieldReport, FieldStatus, HeadingLevel, Scrapeo, ScrapeoError, SeoField, SeoReport,
    fetch_html,
};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "scrapeo", version, about = "A command-line web scraper and SEO analysis tool")]
struct Cli {
    /// Page to inspect; `http://` is assumed when no scheme is given
    url: String,

    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header to send
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report the title and meta tags
    Meta(MetaArgs),
    /// Report page headings
    Content(ContentArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct MetaArgs {
    /// Attribute that must hold VALUE, e.g. `name` or `property`
    #[arg(short, long, requires = "value")]
    attr: Option<String>,

    /// Value to match; without --attr any attribute may hold it
    #[arg(short = 'V', long)]
    value: Option<String>,

    /// Attribute to read the text from (default: content)
    #[arg(short, long)]
    seo_attr: Option<String>,

    /// Report the page title
    #[arg(short, long)]
    title: bool,

    /// Report the meta description
    #[arg(short, long)]
    description: bool,

    /// Report the robots directive
    #[arg(short, long)]
    robots: bool,
}

impl MetaArgs {
    /// Fields to report; title and description when nothing was asked for
    fn fields(&self) -> Vec<SeoField> {
        let mut fields = Vec::new();

        if self.title {
            fields.push(SeoField::Title);
        }
        if self.description {
            fields.push(SeoField::Description);
        }
        if self.robots {
            fields.push(SeoField::Robots);
        }
        if self.attr.is_some() || self.value.is_some() || self.seo_attr.is_some() {
            fields.push(SeoField::Meta {
                attr: self.attr.clone(),
                value: self.value.clone(),
                seo_attr: self.seo_attr.clone(),
            });
        }

        if fields.is_empty() {
            fields = vec![SeoField::Title, SeoField::Description];
        }
        fields
    }
}

#[derive(Debug, Args)]
struct ContentArgs {
    /// Heading level to report, h1 through h6
    #[arg(
        short = 'H',
        long,
        num_args = 0..=1,
        default_value = "h1",
        default_missing_value = "h1",
        value_parser = parse_heading
    )]
    heading: HeadingLevel,

    /// Report every heading of the level instead of the first
    #[arg(long)]
    all: bool,
}

fn parse_heading(s: &str) -> Result<HeadingLevel, String> {
    s.parse().map_err(|e: ScrapeoError| e.to_string())
}

impl Cli {
    fn fetch_options(&self) -> FetchOptions {
        let options = FetchOptions::new().timeout(Duration::from_secs(self.timeout));
        match &self.user_agent {
            Some(user_agent) => options.user_agent(user_agent.as_str()),
            None => options,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<SeoReport> {
    let html = fetch_html(&cli.url, &cli.fetch_options())
        .await
        .with_context(|| format!("Could not load {}", cli.url))?;

    let page = Scrapeo::from_html(&html);
    log::debug!("Parsed {} elements", page.navigator().dom().count_elements());

    let report = match &cli.command {
        Command::Meta(args) => SeoReport::collect(&page, &args.fields()),
        Command::Content(args) if args.all => SeoReport::collect_headings(&page, args.heading),
        Command::Content(args) => SeoReport::collect(&page, &[SeoField::Heading(args.heading)]),
    };

    Ok(report.with_url(cli.url.as_str()))
}

/// Stderr line for a field that produced no text
fn failure_line(field: &FieldReport) -> String {
    let reason = match field.status {
        FieldStatus::NotFound | FieldStatus::Found => "not found",
        FieldStatus::MissingAttribute => "missing attribute",
        FieldStatus::Invalid => "invalid query",
    };

    match &field.error {
        Some(error) => format!("{}: {} ({})", field.field, reason, error),
        None => format!("{}: {}", field.field, reason),
    }
}

fn print_report(report: &SeoReport, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let single = report.fields.len() == 1;
    for field in &report.fields {
        match &field.text {
            Some(text) if single => println!("{}", text.trim()),
            Some(text) => println!("{}: {}", field.field, text.trim()),
            None => eprintln!("{}", failure_line(field)),
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match run(&cli).await {
        Ok(report) => print_report(&report, cli.format),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn meta_defaults_to_title_and_description() {
        let cli = Cli::try_parse_from(["scrapeo", "https://example.com", "meta"]).unwrap();

        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Command::Meta(args) => assert_eq!(args.fields(), vec![SeoField::Title, SeoField::Description]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn meta_flags_select_fields() {
        let cli = Cli::try_parse_from([
            "scrapeo",
            "example.com",
            "meta",
            "--robots",
            "-t",
            "--attr",
            "property",
            "-V",
            "og:title",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Meta(args) => assert_eq!(
                args.fields(),
                vec![
                    SeoField::Title,
                    SeoField::Robots,
                    SeoField::Meta {
                        attr: Some("property".to_string()),
                        value: Some("og:title".to_string()),
                        seo_attr: None,
                    },
                ]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn meta_attr_requires_value() {
        let result = Cli::try_parse_from(["scrapeo", "example.com", "meta", "--attr", "name"]);
        assert!(result.is_err());
    }

    #[test]
    fn content_heading_defaults_to_h1() {
        for args in [
            vec!["scrapeo", "example.com", "content"],
            vec!["scrapeo", "example.com", "content", "-H"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            match cli.command {
                Command::Content(args) => {
                    assert_eq!(args.heading, HeadingLevel::H1);
                    assert!(!args.all);
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn content_heading_level_is_parsed() {
        let cli = Cli::try_parse_from(["scrapeo", "example.com", "content", "--heading", "h3", "--all"]).unwrap();
        match cli.command {
            Command::Content(args) => {
                assert_eq!(args.heading, HeadingLevel::H3);
                assert!(args.all);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["scrapeo", "example.com", "content", "-H", "h9"]).is_err());
    }

    #[test]
    fn failure_lines_name_the_cause() {
        let page = Scrapeo::from_html(r#"<title>Home</title><meta charset="utf-8">"#);
        let report = SeoReport::collect(
            &page,
            &[
                SeoField::Robots,
                SeoField::Meta { attr: None, value: Some("utf-8".to_string()), seo_attr: None },
                SeoField::Meta { attr: Some("bad name".to_string()), value: Some("x".to_string()), seo_attr: None },
            ],
        );

        let lines: Vec<_> = report.fields.iter().map(failure_line).collect();
        assert!(lines[0].contains(": not found ("), "{}", lines[0]);
        assert!(lines[1].contains(": missing attribute ("), "{}", lines[1]);
        assert!(lines[2].contains(": invalid query ("), "{}", lines[2]);
        assert!(!lines[2].contains("not found"), "{}", lines[2]);
    }

    #[test]
    fn global_fetch_options() {
        let cli = Cli::try_parse_from([
            "scrapeo",
            "--timeout",
            "5",
            "--user-agent",
            "bot/1.0",
            "example.com",
            "meta",
        ])
        .unwrap();

        let options = cli.fetch_options();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.user_agent, "bot/1.0");
        assert!(options.retry_without_scheme);
    }
}
