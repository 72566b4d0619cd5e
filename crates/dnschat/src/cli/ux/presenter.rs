use console::{Style, StyledObject};
use dnschat_core::chat::QueryOutcome;
use dnschat_core::config::Config;
use dnschat_core::server::ServerConfig;

pub const PROMPT: &str = "🙋 You: ";
pub const GOODBYE: &str = "👋 Goodbye!";

const RULE_WIDTH: usize = 40;

/// Represents the type of a chat message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMessageType {
    /// The prompt for user input.
    Prompt,
    /// Secondary information, like separators or details.
    Footer,
    /// An error message.
    Error,
}

/// Styles a string of text according to the specified `ChatMessageType`.
pub fn style_chat_text(text: &str, style: ChatMessageType) -> StyledObject<&str> {
    let style_obj = match style {
        ChatMessageType::Prompt => Style::new().blue().bold(),
        ChatMessageType::Footer => Style::new().white().dim(),
        ChatMessageType::Error => Style::new().red().bold(),
    };
    style_obj.apply_to(text)
}

/// Welcome banner shown when the interactive session starts.
pub fn format_banner(server: &ServerConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let rule = style_chat_text(&rule, ChatMessageType::Footer).to_string();
    let mut lines = vec![
        format!("🤖 {}", server.title()),
        rule.clone(),
        format!("📡 Connected to: {}", server.endpoint()),
        "💬 Type your questions below (or 'quit' to exit)".to_string(),
    ];
    if let Some(example) = server.banner_example() {
        lines.push(format!("🔧 Example: {example}"));
    }
    lines.push(rule);
    lines.push(String::new());

    let mut banner = lines.join("\n");
    banner.push('\n');
    banner
}

/// Usage text for the `help` and `?` keywords.
pub fn format_help(server: &ServerConfig) -> String {
    let mut lines = vec![
        String::new(),
        "📖 Help:".to_string(),
        "  • Ask any question in natural language".to_string(),
        "  • Type 'quit' or 'exit' to leave".to_string(),
        "  • Type 'help' or '?' for this message".to_string(),
    ];
    if !server.examples.is_empty() {
        lines.push("  • Examples:".to_string());
        lines.extend(server.examples.iter().map(|e| format!("    - {e}")));
    }
    lines.push(String::new());

    let mut help = lines.join("\n");
    help.push('\n');
    help
}

/// Reply line in the interactive session.
pub fn format_reply(outcome: &QueryOutcome) -> String {
    format!("🤖 AI: {outcome}")
}

/// One line per configured server, the default one marked with `*`.
pub fn format_server_list(config: &Config) -> String {
    let width = config
        .server_names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or_default();

    let mut list = String::new();
    for name in config.server_names() {
        let server = &config.servers[name];
        let marker = if server == &config.default { "*" } else { " " };
        let details = format!("({}, {}s)", server.encoding, server.timeout_secs);
        list.push_str(&format!(
            "{marker} {name:<width$}  {} {}\n",
            server.endpoint(),
            style_chat_text(&details, ChatMessageType::Footer)
        ));
    }
    list
}
