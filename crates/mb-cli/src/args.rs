//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use mb_core::config::AppConfig;
use mb_core::pagination::DEFAULT_PAGE_SIZE;
use mb_queries::RequestQuery;

/// Compile MoonBoard problem search criteria into catalog request parameters
#[derive(Parser, Debug)]
#[command(name = "moonboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Match problem names containing this text
    #[arg(short, long)]
    pub term: Option<String>,

    /// Order to sort problems by: New, Grade, Rating, Repeats
    #[arg(short, long)]
    pub order: Option<String>,

    /// Sort ascending (only Grade and Repeats honour this)
    #[arg(long)]
    pub asc: bool,

    /// Board configuration: Forty, Twenty
    #[arg(short, long, value_delimiter = ',')]
    pub configuration: Vec<String>,

    /// Hold sets to include: OS, Wood, A, B, C (default all)
    #[arg(long = "hold-set", value_delimiter = ',')]
    pub hold_set: Vec<String>,

    /// Filters to apply: Benchmarks, Setbyme, Myascents
    #[arg(short, long, value_delimiter = ',')]
    pub filter: Vec<String>,

    /// Minimum grade, e.g. 6A+
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum grade, e.g. 7C
    #[arg(long)]
    pub max: Option<String>,

    /// Page number
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Page size, 1 to 100
    #[arg(long = "page-size", allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Print the compiled query as JSON
    #[arg(long)]
    pub json: bool,

    /// Decode a saved search response and print its problems
    #[arg(long, value_name = "FILE")]
    pub response: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

impl Cli {
    /// Raw criteria, with the configured page size when none was given
    pub fn to_request(&self, config: &AppConfig) -> RequestQuery {
        let page_size = self.page_size.or_else(|| {
            (config.query.page_size != DEFAULT_PAGE_SIZE).then(|| i64::from(config.query.page_size))
        });

        RequestQuery {
            term: self.term.clone(),
            order: self.order.clone(),
            asc: self.order.as_ref().map(|_| self.asc.to_string()),
            configuration: joined(&self.configuration),
            hold_set: joined(&self.hold_set),
            filter: joined(&self.filter),
            min_grade: self.min.clone(),
            max_grade: self.max.clone(),
            page: self.page.map(|p| p.to_string()),
            page_size: page_size.map(|p| p.to_string()),
        }
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info,mb_queries=debug",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["moonboard"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_flags() {
        let cli = parse(&[]);
        let request = cli.to_request(&AppConfig::default());
        assert_eq!(request, RequestQuery::default());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_lists_are_joined() {
        let cli = parse(&["--hold-set", "A,os", "-c", "forty", "-c", "twenty"]);
        let request = cli.to_request(&AppConfig::default());
        assert_eq!(request.hold_set.as_deref(), Some("A,os"));
        assert_eq!(request.configuration.as_deref(), Some("forty,twenty"));
    }

    #[test]
    fn test_sort_flags() {
        let cli = parse(&["-o", "Grade", "--asc"]);
        let query = cli.to_request(&AppConfig::default()).to_query().unwrap();
        assert_eq!(query.sort(), "GradeAsc-asc");
    }

    #[test]
    fn test_full_request() {
        let cli = parse(&[
            "-t", "moon", "-f", "benchmarks", "--min", "6b", "--max", "7a", "-p", "3",
            "--page-size", "40",
        ]);
        let query = cli.to_request(&AppConfig::default()).to_query().unwrap();
        assert_eq!(
            query.filter(),
            "Name~contains~'moon'~and~Benchmarks~eq~''~and~MinGrade~eq~'6B'~and~MaxGrade~eq~'7A'"
        );
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 40);
    }

    #[test]
    fn test_configured_page_size() {
        let mut config = AppConfig::default();
        config.query.page_size = 60;

        let request = parse(&[]).to_request(&config);
        assert_eq!(request.page_size.as_deref(), Some("60"));

        let request = parse(&["--page-size", "10"]).to_request(&config);
        assert_eq!(request.page_size.as_deref(), Some("10"));
    }

    #[test]
    fn test_negative_page_reaches_validation() {
        let cli = parse(&["-p", "-1"]);
        assert!(cli.to_request(&AppConfig::default()).to_query().is_err());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["-v"]).log_filter(), "info,mb_queries=debug");
        assert_eq!(parse(&["-vv"]).log_filter(), "debug");
    }
}
