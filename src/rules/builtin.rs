//! Built-in rule set
//!
//! The rules every installation starts with: command-safety intercepts,
//! modern-tool preferences and project-state guards. The order below is the
//! registration order; configuration overrides can disable or re-grade any
//! of them without touching this list.

use super::definition::{RuleDefinition, RuleKind};
use super::results::Severity;

/// The built-in rule definitions, in registration order.
pub fn builtin_definitions() -> Vec<RuleDefinition> {
    let mut rules = Vec::new();

    rules.push(
        RuleDefinition::new(
            "safe-rm-intercept",
            RuleKind::CommandPattern,
            Severity::Warning,
            "Detected 'rm' command. Consider using 'trash' for safer deletion.",
        )
        .with_pattern(r"^rm\s+-rf?")
        .with_suggestion("trash {{args}}")
        .with_whitelist(["/tmp", "/var/tmp"]),
    );

    rules.push(
        RuleDefinition::new(
            "safe-git-restore-dot",
            RuleKind::CommandPattern,
            Severity::Error,
            "'git restore .' will discard ALL changes, including files you didn't modify. \
             This is dangerous in team environments.",
        )
        .with_pattern(r"^git\s+restore\s+\.$")
        .with_suggestion("git restore <specific-file>")
        .require_explicit()
        .with_bypass_flag("--i-know-what-im-doing"),
    );

    rules.push(
        RuleDefinition::new(
            "safe-git-force-push",
            RuleKind::CommandPattern,
            Severity::Warning,
            "Force push can overwrite others' work. Consider 'git push --force-with-lease' instead.",
        )
        .with_pattern(r"^git\s+push\s+.*(--force|-f)")
        .with_suggestion("git push --force-with-lease"),
    );

    let tool_matrix = [
        (
            "tool-matrix-find-to-fd",
            r"^find\s+",
            "fd",
            "Consider using 'fd' instead of 'find' for better performance and usability",
        ),
        (
            "tool-matrix-grep-to-rg",
            r"^grep\s+",
            "rg",
            "Consider using 'rg' (ripgrep) instead of 'grep' for faster search",
        ),
        (
            "tool-matrix-cat-to-bat",
            r"^cat\s+",
            "bat",
            "Consider using 'bat' instead of 'cat' for syntax highlighting",
        ),
        (
            "tool-matrix-ls-to-exa",
            r"^ls\s+",
            "eza",
            "Consider using 'eza' instead of 'ls' for better output",
        ),
    ];

    for (id, pattern, modern, message) in tool_matrix {
        rules.push(
            RuleDefinition::new(id, RuleKind::ToolPreference, Severity::Info, message)
                .with_pattern(pattern)
                .with_suggestion(format!("{modern} {{{{args}}}}"))
                .with_whitelist([modern]),
        );
    }

    rules.push(
        RuleDefinition::new(
            "guard-system-cwd",
            RuleKind::FileCheck,
            Severity::Warning,
            "Working directory is a system path. Commands run here can affect the whole machine.",
        )
        .with_pattern(r"^/(etc|usr|bin|sbin|boot|lib)(/|$)"),
    );

    rules.push(
        RuleDefinition::new(
            "guard-sensitive-env",
            RuleKind::EnvCheck,
            Severity::Warning,
            "Sensitive credentials are exported into the environment. \
             Prefer scoped injection over global exports.",
        )
        .with_pattern(r"^(AWS_SECRET_ACCESS_KEY|AWS_SESSION_TOKEN|GITHUB_TOKEN|NPM_TOKEN|OPENAI_API_KEY)="),
    );

    rules
}
