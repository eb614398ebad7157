//! Key contexts and the shortcut hints shown for each.

/// Which part of the UI currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Browsing the table: paging, sorting, switching datasets.
    Browse,
    /// Typing into the search input.
    Search,
    /// The help overlay is open.
    Help,
}

impl KeyContext {
    pub fn title(self) -> &'static str {
        match self {
            KeyContext::Browse => "Table",
            KeyContext::Search => "Search",
            KeyContext::Help => "Help",
        }
    }
}

/// A documented key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn bind(keys: &'static str, description: &'static str) -> Keybinding {
    Keybinding { keys, description }
}

const BROWSE_BINDINGS: &[Keybinding] = &[
    bind("/", "Start searching"),
    bind("← → / h l", "Move the column cursor"),
    bind("s / Enter", "Sort by the cursor column"),
    bind("1-9", "Sort by column N"),
    bind("x", "Clear the sort"),
    bind("↑ ↓ / k j", "Select a row"),
    bind("m", "Move the selected task to its next status"),
    bind("n / PgDn", "Next page"),
    bind("p / PgUp", "Previous page"),
    bind("g / Home", "First page"),
    bind("G / End", "Last page"),
    bind("+ / -", "Grow or shrink the page size"),
    bind("Tab / S-Tab", "Next or previous dataset"),
    bind("r", "Toggle office/client role"),
    bind("?", "Show this help"),
    bind("q / Ctrl+C", "Quit"),
];

const SEARCH_BINDINGS: &[Keybinding] = &[
    bind("any char", "Append to the search"),
    bind("Backspace", "Delete the last character"),
    bind("Enter", "Keep the search and return to the table"),
    bind("Esc", "Clear the search"),
];

const HELP_BINDINGS: &[Keybinding] = &[
    bind("j / k", "Scroll"),
    bind("Esc / q / ?", "Close help"),
];

/// Bindings grouped by context, in display order.
pub fn keybindings_grouped() -> Vec<(KeyContext, &'static [Keybinding])> {
    vec![
        (KeyContext::Browse, BROWSE_BINDINGS),
        (KeyContext::Search, SEARCH_BINDINGS),
        (KeyContext::Help, HELP_BINDINGS),
    ]
}

/// Hint line for a context. Keys are written in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Browse => {
            "[/] search  [←/→] column  [↑/↓] row  [s] sort  [m] move task  [n/p] page  [Tab] dataset  [r] role  [?] help  [q] quit"
        }
        KeyContext::Search => "[Enter] keep  [Esc] clear  [Backspace] delete",
        KeyContext::Help => "[Esc/q/?] close",
    }
}
