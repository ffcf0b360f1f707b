use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ppc - compile prompt modules into one deterministic document
#[derive(Parser, Debug)]
#[command(name = "ppc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./ppc.toml, then the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a prompt for a mode
    Compile(CompileArgs),

    /// List available modules
    List {
        /// Prompts directory
        #[arg(long, value_name = "DIR")]
        prompts: Option<PathBuf>,
    },

    /// Check the prompt pack for structural problems
    Doctor {
        /// Prompts directory
        #[arg(long, value_name = "DIR")]
        prompts: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Include module statistics
        #[arg(long)]
        stats: bool,

        /// Print the dependency graph in DOT format instead of the report
        #[arg(long)]
        graph: bool,

        /// Write the DOT graph to a file (implies --graph)
        #[arg(long, value_name = "FILE")]
        graph_out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct CompileArgs {
    /// Mode to compile (loads modes/<mode>)
    #[arg(required_unless_present_any = ["profile", "profile_file"])]
    pub mode: Option<String>,

    /// Contract module (e.g. markdown, code)
    #[arg(long)]
    pub contract: Option<String>,

    /// Include traits/conservative
    #[arg(long)]
    pub conservative: bool,

    /// Include traits/creative
    #[arg(long)]
    pub creative: bool,

    /// Include traits/terse
    #[arg(long)]
    pub terse: bool,

    /// Include traits/verbose
    #[arg(long = "verbose-trait")]
    pub verbose_trait: bool,

    /// Include a trait module by id (repeatable)
    #[arg(long = "trait", value_name = "ID")]
    pub traits: Vec<String>,

    /// Revision budget (enables policies/revisions)
    #[arg(long, value_name = "N")]
    pub revisions: Option<u32>,

    /// Template variable (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Named profile from the profiles directory
    #[arg(long, value_name = "NAME", conflicts_with = "profile_file")]
    pub profile: Option<String>,

    /// Profile file path
    #[arg(long, value_name = "PATH")]
    pub profile_file: Option<PathBuf>,

    /// Prompts directory
    #[arg(long, value_name = "DIR")]
    pub prompts: Option<PathBuf>,

    /// Also write the output to a file
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Prepend the prompt-id hash header
    #[arg(long)]
    pub hash: bool,

    /// Explain resolution steps to stderr
    #[arg(long)]
    pub explain: bool,

    /// Compare against an existing file instead of writing; exit 1 on drift
    #[arg(long, value_name = "FILE", conflicts_with = "out")]
    pub check: Option<PathBuf>,
}

impl CompileArgs {
    /// Trait ids from the shorthand flags, then `--trait` values
    pub fn trait_ids(&self) -> Vec<String> {
        let flags = [
            (self.conservative, "traits/conservative"),
            (self.creative, "traits/creative"),
            (self.terse, "traits/terse"),
            (self.verbose_trait, "traits/verbose"),
        ];
        flags
            .into_iter()
            .filter(|(on, _)| *on)
            .map(|(_, id)| id.to_string())
            .chain(self.traits.iter().cloned())
            .collect()
    }
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compile_flags() {
        let cli = Cli::try_parse_from([
            "ppc",
            "compile",
            "explore",
            "--conservative",
            "--terse",
            "--trait",
            "traits/custom",
            "--revisions",
            "2",
            "--var",
            "team=core",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Compile(args) = cli.command else {
            panic!("expected compile");
        };
        assert_eq!(args.mode.as_deref(), Some("explore"));
        assert_eq!(args.revisions, Some(2));
        assert_eq!(args.vars, vec![("team".to_string(), "core".to_string())]);
        assert_eq!(
            args.trait_ids(),
            vec!["traits/conservative", "traits/terse", "traits/custom"]
        );
    }

    #[test]
    fn mode_required_without_profile() {
        assert!(Cli::try_parse_from(["ppc", "compile"]).is_err());
        assert!(Cli::try_parse_from(["ppc", "compile", "--profile", "ship"]).is_ok());
    }

    #[test]
    fn profile_and_profile_file_conflict() {
        let result = Cli::try_parse_from([
            "ppc",
            "compile",
            "--profile",
            "ship",
            "--profile-file",
            "x.yml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn var_needs_equals() {
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
        assert_eq!(
            parse_var("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
    }

    #[test]
    fn check_conflicts_with_out() {
        let result = Cli::try_parse_from([
            "ppc", "compile", "explore", "--out", "a.md", "--check", "a.md",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
