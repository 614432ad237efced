//! Command-line options.

use anyhow::{anyhow, bail, Context, Result};

use crate::stories::Story;

/// Options given on the command line; `None` keeps the persisted value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    pub story: Option<Story>,
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub help: bool,
}

/// Prints command-line help to stderr.
pub fn print_usage(program: &str) {
    let stories: Vec<&str> = Story::ALL.iter().map(|story| story.cli_name()).collect();
    eprintln!("Tailed ellipsis demo");
    eprintln!("Usage: {program} [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --story <NAME>    Story to open ({})", stories.join(", "));
    eprintln!("  --rows <N>        Number of generated table rows");
    eprintln!("  --seed <N>        Seed for generated table rows");
    eprintln!("  -h, --help        Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=tailed_ellipsis=debug) to control logging.");
}

/// Parses the arguments following the program name.
pub fn parse_options(args: impl IntoIterator<Item = String>) -> Result<DemoOptions> {
    let mut options = DemoOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--story" => {
                let name = args.next().ok_or_else(|| anyhow!("--story requires a value"))?;
                let story = Story::from_cli_name(&name)
                    .ok_or_else(|| anyhow!("unknown story: {name}"))?;
                options.story = Some(story);
            }
            "--rows" => {
                let raw = args.next().ok_or_else(|| anyhow!("--rows requires a value"))?;
                let rows = raw
                    .parse()
                    .with_context(|| format!("invalid row count: {raw}"))?;
                options.rows = Some(rows);
            }
            "--seed" => {
                let raw = args.next().ok_or_else(|| anyhow!("--seed requires a value"))?;
                let seed = raw.parse().with_context(|| format!("invalid seed: {raw}"))?;
                options.seed = Some(seed);
            }
            _ => bail!("unknown argument: {arg}"),
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_arguments() {
        assert_eq!(parse_options(args(&[])).unwrap(), DemoOptions::default());
    }

    #[test]
    fn test_all_options() {
        let options =
            parse_options(args(&["--story", "long-text", "--rows", "25", "--seed", "9"])).unwrap();
        assert_eq!(options.story, Some(Story::LongText));
        assert_eq!(options.rows, Some(25));
        assert_eq!(options.seed, Some(9));
        assert!(!options.help);
    }

    #[test]
    fn test_help() {
        assert!(parse_options(args(&["-h"])).unwrap().help);
        assert!(parse_options(args(&["--help"])).unwrap().help);
    }

    #[test]
    fn test_errors() {
        assert!(parse_options(args(&["--story"])).is_err());
        assert!(parse_options(args(&["--story", "gallery"])).is_err());
        assert!(parse_options(args(&["--rows", "-3"])).is_err());
        assert!(parse_options(args(&["--seed", "abc"])).is_err());
        assert!(parse_options(args(&["--verbose"])).is_err());

        let err = parse_options(args(&["--rows", "many"])).unwrap_err();
        assert!(format!("{err:#}").contains("invalid row count: many"));
    }
}
