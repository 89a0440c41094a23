/// A line typed at the storefront prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Categories,
    Category(String),
    Ask(String),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "categories" => Command::Categories,
            "category" | "cat" => Command::Category(rest.to_string()),
            "ask" => Command::Ask(rest.to_string()),
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  list                 show the current products
  categories           show category tabs
  category <name|All>  filter the catalog by category
  ask <preference>     ask for recommendations, e.g. ask a phone under $500 for gaming
  clear                drop recommendations and show the whole catalog
  help                 show this help
  quit                 leave the storefront";
