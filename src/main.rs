use anyhow::{bail, Context, Result};

use orrery::{run_headless, run_windowed, RunOptions};

const USAGE: &str =
    "usage: orrery [--assets <dir>] [--headless] [--ticks <n>] [--scroll <px>] [--seed <n>]";

fn main() -> Result<()> {
    env_logger::init();
    let (options, headless) = parse_args(std::env::args().skip(1))?;
    if headless {
        run_headless(&options)
    } else {
        run_windowed(&options)
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(RunOptions, bool)> {
    let mut options = RunOptions::default();
    let mut headless = false;
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => {
                let value = args.next().context(format!("--assets needs a value\n{USAGE}"))?;
                options.assets = value.into();
            }
            "--headless" => headless = true,
            "--ticks" => {
                let value = args.next().context(format!("--ticks needs a value\n{USAGE}"))?;
                options.ticks = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid tick count {value:?}"))?,
                );
            }
            "--scroll" => {
                let value = args.next().context(format!("--scroll needs a value\n{USAGE}"))?;
                options.scroll = value
                    .parse()
                    .with_context(|| format!("invalid scroll offset {value:?}"))?;
            }
            "--seed" => {
                let value = args.next().context(format!("--seed needs a value\n{USAGE}"))?;
                options.star_seed = value
                    .parse()
                    .with_context(|| format!("invalid seed {value:?}"))?;
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }
    Ok((options, headless))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<(RunOptions, bool)> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_are_windowed() {
        let (options, headless) = parse(&[]).unwrap();
        assert!(!headless);
        assert_eq!(options.ticks, None);
        assert_eq!(options.scroll, 0.0);
    }

    #[test]
    fn all_flags_parse() {
        let (options, headless) = parse(&[
            "--assets", "/tmp/tex", "--headless", "--ticks", "100", "--scroll", "-500", "--seed",
            "7",
        ])
        .unwrap();
        assert!(headless);
        assert_eq!(options.assets, std::path::PathBuf::from("/tmp/tex"));
        assert_eq!(options.ticks, Some(100));
        assert_eq!(options.scroll, -500.0);
        assert_eq!(options.star_seed, 7);
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse(&["--warp"]).is_err());
        assert!(parse(&["--ticks", "many"]).is_err());
        assert!(parse(&["--ticks"]).is_err());
    }
}
