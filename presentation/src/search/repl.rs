//! REPL (Read-Eval-Print Loop) for interactive search

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::screens;
use medinfo_application::SearchController;
use medinfo_domain::{AppState, OutputFormat, find_link};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};

const HISTORY_CAPACITY: usize = 1000;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Links,
    Go(String),
    Retry,
    About,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Anything else is a query.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "links" => ReplCommand::Links,
            "go" => ReplCommand::Go(arg.to_string()),
            "retry" => ReplCommand::Retry,
            "about" => ReplCommand::About,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Interactive search REPL
pub struct SearchRepl {
    controller: SearchController,
    format: OutputFormat,
    config: ReplConfig,
}

impl SearchRepl {
    pub fn new(controller: SearchController, format: OutputFormat) -> Self {
        Self {
            controller,
            format,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => eprintln!("History disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("medinfo".to_string()),
            DefaultPromptSegment::Empty,
        );

        print!("{}", screens::welcome());

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }
                    self.search(&line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("ลาก่อน!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("ลาก่อน!");
                return true;
            }
            ReplCommand::Help => print!("{}", screens::help()),
            ReplCommand::Links => print!("\n{}", screens::links()),
            ReplCommand::About => print!("{}", screens::about()),
            ReplCommand::Go(id) => match find_link(&id) {
                Ok(link) => self.search(link.title).await,
                Err(e) => {
                    println!("{}", e);
                    println!("Type /links for available topics");
                }
            },
            ReplCommand::Retry => {
                if self.controller.retry().is_some() {
                    self.settle_and_print().await;
                } else {
                    println!("ยังไม่มีคำค้นหาก่อนหน้า");
                }
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn search(&mut self, query: &str) {
        // Blank input leaves everything as it was
        if self.controller.submit(query).is_none() {
            return;
        }
        self.settle_and_print().await;
    }

    async fn settle_and_print(&mut self) {
        println!();
        let state = self.controller.settle().await;
        if let Some(output) = render_state(state, self.format) {
            println!("{}", output);
        }
    }
}

/// Terminal text for a settled state; `None` when there is nothing to show
pub fn render_state(state: &AppState, format: OutputFormat) -> Option<String> {
    match state {
        AppState::Success(result) => Some(ConsoleFormatter::format(result, format)),
        AppState::Error(message) => Some(ConsoleFormatter::format_error(message)),
        AppState::Idle | AppState::Loading => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medinfo_domain::SearchResult;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("  /?  "), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/links"), Some(ReplCommand::Links));
        assert_eq!(
            ReplCommand::parse("/go   f2 "),
            Some(ReplCommand::Go("f2".to_string()))
        );
        assert_eq!(ReplCommand::parse("/go"), Some(ReplCommand::Go(String::new())));
        assert_eq!(ReplCommand::parse("/retry"), Some(ReplCommand::Retry));
        assert_eq!(ReplCommand::parse("/about"), Some(ReplCommand::About));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(
            ReplCommand::parse("/bogus x"),
            Some(ReplCommand::Unknown("/bogus x".to_string()))
        );
    }

    #[test]
    fn test_queries_are_not_commands() {
        assert_eq!(ReplCommand::parse("ไข้เลือดออก"), None);
        assert_eq!(ReplCommand::parse(""), None);
        assert_eq!(ReplCommand::parse("อาการ /ปวดหัว"), None);
    }

    #[test]
    fn test_render_state() {
        colored::control::set_override(false);

        assert_eq!(render_state(&AppState::Idle, OutputFormat::Full), None);
        assert_eq!(render_state(&AppState::Loading, OutputFormat::Full), None);

        let error = render_state(&AppState::Error("ล้มเหลว".to_string()), OutputFormat::Full).unwrap();
        assert!(error.contains("ล้มเหลว"));
        assert!(error.contains("/retry"));

        let result = SearchResult::new("- ข้อ 1", vec![], "10:00:00");
        let content = render_state(&AppState::Success(result), OutputFormat::Content).unwrap();
        assert_eq!(content, "  • ข้อ 1\n");
    }
}
