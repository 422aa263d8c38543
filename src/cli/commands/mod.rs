//! CLI commands module

pub mod apply;
pub mod audit;
pub mod check;
pub mod init;
pub mod list;

use clap::Args;
use std::path::PathBuf;

use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, OutputRenderer, TerminalOutput};
use crate::context::RuleContext;
use crate::error::GuardrailsError;
use crate::rules::{Action, EvaluationReport, EvaluationResult, RuleRegistry};

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Skip interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Command to evaluate: a quoted command line or its raw tokens
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,

    /// Only evaluate specific rules
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub rules: Option<Vec<String>>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Write the JSON report to a file instead of rendering to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Command whose violations should be rewritten
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,

    /// Only fix violations of specific rules
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub rule: Option<Vec<String>>,

    /// Show planned fixes without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Output format for evaluation results
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Assemble the evaluation context from `check`/`apply` command tokens.
///
/// The first token is the command line; when it contains whitespace it came
/// in quoted and is shell-words split to recover the argument tokens. Any
/// further argv tokens join the argument list, so override flags can ride
/// alongside a quoted command. Plain unquoted tokens are used as-is.
pub(crate) fn command_context(tokens: &[String]) -> Result<RuleContext, GuardrailsError> {
    let first = &tokens[0];

    let (command, args) = if first.contains(char::is_whitespace) {
        let mut args: Vec<String> = shlex::split(first)
            .unwrap_or_default()
            .into_iter()
            .skip(1)
            .collect();
        args.extend(tokens[1..].iter().cloned());
        (first.clone(), args)
    } else {
        (tokens.join(" "), tokens[1..].to_vec())
    };

    RuleContext::for_command(command, args).capture_process()
}

/// Downgrade BLOCK results whose bypass flag the caller supplied.
///
/// Runs once after evaluation, never inside rule predicates. Severity is
/// left untouched so the result ordering stays stable.
pub(crate) fn honor_bypass_flags(results: &mut [EvaluationResult], context: &RuleContext) {
    for result in results.iter_mut() {
        if result.action != Action::Block {
            continue;
        }
        let Some(flag) = result.bypass_flag.clone() else {
            continue;
        };

        let supplied = context.args.iter().any(|arg| arg == &flag)
            || context
                .command
                .as_deref()
                .is_some_and(|command| command.contains(&flag));

        if supplied {
            tracing::info!(rule = %result.rule_id, flag = %flag, "Bypass flag honored");
            result.action = Action::Warn;
            result.message = format!("{} (bypassed with {})", result.message, flag);
        }
    }
}

/// Map a report to the exit code ladder.
pub(crate) fn exit_code_for(report: &EvaluationReport) -> i32 {
    if report.has_blocking() {
        exit_codes::BLOCKING_VIOLATIONS
    } else if report.has_warnings() {
        exit_codes::WARNINGS
    } else {
        exit_codes::SUCCESS
    }
}

/// Render a report in the requested format.
pub(crate) fn render(
    report: &EvaluationReport,
    format: &OutputFormat,
) -> Result<String, GuardrailsError> {
    let renderer: Box<dyn OutputRenderer> = match format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    renderer.render(report)
}

/// Ids from a `--rules`/`--rule` filter that match no registered rule.
pub(crate) fn unknown_rule_ids<'a>(registry: &RuleRegistry, ids: &'a [String]) -> Vec<&'a str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| registry.by_id(id).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_command_context_splits_a_quoted_command_line() {
        let context = command_context(&strings(&["rm -rf ./build"])).unwrap();
        assert_eq!(context.command.as_deref(), Some("rm -rf ./build"));
        assert_eq!(context.args, vec!["-rf", "./build"]);
    }

    #[test]
    fn test_command_context_uses_plain_tokens_as_is() {
        let context = command_context(&strings(&["rm", "-rf", "./build"])).unwrap();
        assert_eq!(context.command.as_deref(), Some("rm -rf ./build"));
        assert_eq!(context.args, vec!["-rf", "./build"]);
    }

    #[test]
    fn test_command_context_single_bare_token() {
        let context = command_context(&strings(&["ls"])).unwrap();
        assert_eq!(context.command.as_deref(), Some("ls"));
        assert!(context.args.is_empty());
    }

    #[test]
    fn test_extra_tokens_after_quoted_command_join_the_args() {
        let context =
            command_context(&strings(&["git restore .", "--i-know-what-im-doing"])).unwrap();

        // The command string stays pristine so anchored patterns still match.
        assert_eq!(context.command.as_deref(), Some("git restore ."));
        assert_eq!(context.args, vec!["restore", ".", "--i-know-what-im-doing"]);
    }

    #[test]
    fn test_bypass_flag_in_args_downgrades_block() {
        let context = RuleContext::for_command(
            "git restore .",
            vec![
                "restore".into(),
                ".".into(),
                "--i-know-what-im-doing".into(),
            ],
        );

        let mut results = vec![EvaluationResult::new(
            "safe-git-restore-dot",
            Action::Block,
            Severity::Error,
            "'git restore .' discards ALL changes",
        )
        .with_bypass_flag("--i-know-what-im-doing")];

        honor_bypass_flags(&mut results, &context);

        assert_eq!(results[0].action, Action::Warn);
        assert_eq!(results[0].severity, Severity::Error);
        assert!(results[0].message.contains("bypassed with"));
    }

    #[test]
    fn test_bypass_flag_in_command_substring_downgrades_block() {
        let context = RuleContext::for_command("some-tool --force-custom-guard run", vec![]);

        let mut results = vec![EvaluationResult::new(
            "custom-guard",
            Action::Block,
            Severity::Error,
            "blocked",
        )
        .with_bypass_flag("--force-custom-guard")];

        honor_bypass_flags(&mut results, &context);
        assert_eq!(results[0].action, Action::Warn);
    }

    #[test]
    fn test_block_without_supplied_flag_stays_blocked() {
        let context =
            RuleContext::for_command("git restore .", vec!["restore".into(), ".".into()]);

        let mut results = vec![EvaluationResult::new(
            "safe-git-restore-dot",
            Action::Block,
            Severity::Error,
            "'git restore .' discards ALL changes",
        )
        .with_bypass_flag("--i-know-what-im-doing")];

        honor_bypass_flags(&mut results, &context);
        assert_eq!(results[0].action, Action::Block);
        assert!(!results[0].message.contains("bypassed"));
    }

    #[test]
    fn test_block_without_declared_flag_is_untouchable() {
        let context = RuleContext::for_command("dangerous --whatever", vec!["--whatever".into()]);

        let mut results = vec![EvaluationResult::new(
            "hard-block",
            Action::Block,
            Severity::Error,
            "no bypass declared",
        )];

        honor_bypass_flags(&mut results, &context);
        assert_eq!(results[0].action, Action::Block);
    }

    #[test]
    fn test_unknown_rule_ids() {
        let registry = RuleRegistry::from_config(&crate::config::Config::default());
        let ids = strings(&["safe-rm-intercept", "not-a-rule"]);

        assert_eq!(unknown_rule_ids(&registry, &ids), vec!["not-a-rule"]);
    }
}
