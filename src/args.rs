use crate::config::UpvotesConfig;
use crate::input::Stream;
use crate::util::stream_parser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scores every k-window of upvote counts by non-decreasing minus non-increasing frames.")]
pub struct Cli {
    /// Input file holding `n k` and n values; `-` or omitted reads stdin.
    #[arg(index = 1, value_parser = stream_parser)]
    pub in_file: Option<Stream>,
    /// Output file; `-` writes stdout.
    #[arg(short, long, value_parser = stream_parser)]
    pub output: Option<Stream>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Cross-check running frame counts against a full recount at every window.
    #[arg(long)]
    pub verify: bool,
}

pub struct ScoreArgs {
    pub in_file: Stream,
    pub out_file: Stream,
    pub verify: bool,
}

impl Cli {
    pub fn to_score_args(self, config: &UpvotesConfig) -> ScoreArgs {
        let out_file = self
            .output
            .or_else(|| config.output_path().map(|p| Stream::File(p.into())))
            .unwrap_or(Stream::Std);

        ScoreArgs {
            in_file: self.in_file.unwrap_or(Stream::Std),
            out_file,
            verify: self.verify || config.verify(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("upvotes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_to_std_streams() {
        let args = parse(&[]).to_score_args(&UpvotesConfig::default());
        assert_eq!(args.in_file, Stream::Std);
        assert_eq!(args.out_file, Stream::Std);
        assert!(!args.verify);
    }

    #[test]
    fn test_flags_override_config() {
        let config = UpvotesConfig {
            general: None,
            output: Some(crate::config::OutputConfig {
                path: Some("from_config.txt".to_string()),
            }),
        };

        let args = parse(&["votes.txt", "--verify"]).to_score_args(&config);
        assert_eq!(args.in_file, Stream::File("votes.txt".into()));
        assert_eq!(args.out_file, Stream::File("from_config.txt".into()));
        assert!(args.verify);

        let args = parse(&["-", "-o", "-"]).to_score_args(&config);
        assert_eq!(args.in_file, Stream::Std);
        assert_eq!(args.out_file, Stream::Std);
    }
}
