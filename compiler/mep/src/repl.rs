// Interactive session state for `mep repl`.
// Reading lines is left to the binary; the session only maps a line to the
// lines to print.

use mep_eval::VarTable;

use crate::binding::parse_binding;
use crate::{analyze, parse, render};

const HELP: &str = "commands:
  :help              show this help
  :quit, :q, :exit   leave the REPL
  :vars              list variable bindings
  :set name = value  bind a variable
  :unset name        remove a binding
  :tree <expr>       show the parsed tree of an expression
anything else is evaluated as an expression";

#[derive(Debug, Clone)]
pub struct ReplSession {
    vars: VarTable,
    strict: bool,
}

impl Default for ReplSession {
    fn default() -> Self {
        Self::new(VarTable::new(), false)
    }
}

impl ReplSession {
    pub fn new(vars: VarTable, strict: bool) -> Self {
        Self { vars, strict }
    }

    pub fn prompt(&self) -> &'static str {
        "mep> "
    }

    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    /// Handles one input line, returning the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.handle_command(command.trim());
        }

        let report = analyze(trimmed, &self.vars, self.strict);
        let out = match (report.value, report.error) {
            (_, Some(error)) => vec![error],
            (Some(value), None) => vec![value.to_string()],
            (None, None) => Vec::new(),
        };
        (out, false)
    }

    fn handle_command(&mut self, command: &str) -> (Vec<String>, bool) {
        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        let out = match name {
            "quit" | "q" | "exit" => return (Vec::new(), true),
            "help" => HELP.lines().map(str::to_string).collect(),
            "vars" => self.list_vars(),
            "set" => match parse_binding(rest) {
                Ok((var, value)) => {
                    self.vars.insert(var.as_str(), value);
                    vec![format!("{var} = {value}")]
                }
                Err(err) => vec![format!("error: {err}")],
            },
            "unset" => match self.vars.remove(rest) {
                Some(_) => vec![format!("{rest} removed")],
                None => vec![format!("error: `{rest}` is not bound")],
            },
            "tree" => match parse(rest) {
                Ok(tree) => vec![
                    render(&tree),
                    format!("nodes: {}, depth: {}", tree.len(), tree.depth()),
                ],
                Err(err) => vec![crate::MepError::from(err).describe(rest)],
            },
            other => vec![format!("error: unknown command `:{other}`, try :help")],
        };
        (out, false)
    }

    fn list_vars(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .vars
            .iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect();
        out.push(format!("(unbound variables are {})", self.vars.default_value()));
        out
    }
}

#[cfg(test)]
mod repl_tests {
    use super::ReplSession;
    use mep_eval::VarTable;

    #[test]
    fn repl_help_command() {
        let mut s = ReplSession::default();
        let (out, exit) = s.handle_line(":help");
        assert!(!exit);
        assert!(out.iter().any(|l| l.contains("commands:")));
    }

    #[test]
    fn repl_quit_command() {
        for command in [":quit", ":q", ":exit"] {
            let mut s = ReplSession::default();
            let (_out, exit) = s.handle_line(command);
            assert!(exit, "{command}");
        }
    }

    #[test]
    fn repl_evaluates_expressions() {
        let mut s = ReplSession::default();
        let (out, exit) = s.handle_line("2 + (7 * 3)");
        assert!(!exit);
        assert_eq!(out, vec!["23".to_string()]);

        let (out, _) = s.handle_line("   ");
        assert!(out.is_empty());
    }

    #[test]
    fn repl_set_binding_visible_in_later_input() {
        let mut s = ReplSession::default();
        let (out, _) = s.handle_line(":set x = 2");
        assert_eq!(out, vec!["x = 2".to_string()]);
        let (out, _) = s.handle_line("x + 3");
        assert!(out.iter().any(|l| l.trim() == "5"));

        let (out, _) = s.handle_line(":vars");
        assert!(out.iter().any(|l| l.starts_with("x = 2")));

        let (out, _) = s.handle_line(":unset x");
        assert_eq!(out, vec!["x removed".to_string()]);
        let (out, _) = s.handle_line("x + 3");
        assert_eq!(out, vec!["4".to_string()]);
    }

    #[test]
    fn repl_strict_session_rejects_unbound() {
        let mut s = ReplSession::new(VarTable::new(), true);
        let (out, _) = s.handle_line("y * 2");
        assert_eq!(out, vec!["error: unbound variables: y".to_string()]);
    }

    #[test]
    fn repl_tree_command() {
        let mut s = ReplSession::default();
        let (out, _) = s.handle_line(":tree 1 + 2 * 3");
        assert_eq!(out[0], "(1.00 + (2.00 * 3.00))");
        assert_eq!(out[1], "nodes: 5, depth: 3");

        let (out, _) = s.handle_line(":tree sin x");
        assert!(out[0].contains("expected `(` after function `sin`"));
    }

    #[test]
    fn repl_reports_errors() {
        let mut s = ReplSession::default();
        let (out, _) = s.handle_line(":set 1=2");
        assert!(out[0].starts_with("error: invalid binding"));
        let (out, _) = s.handle_line(":frobnicate");
        assert!(out[0].contains("unknown command `:frobnicate`"));
        let (out, _) = s.handle_line("(1");
        assert!(out[0].starts_with("error: missing `)`"));
    }
}
