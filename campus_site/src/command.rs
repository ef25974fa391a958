//! Browser command parsing.

use variantly::Variantly;

/// Something typed at the browser prompt.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Open a path (`go /santacruz` or just `/santacruz`).
    Go(String),
    Back,
    Home,
    /// List the numbered links of the current page again.
    Links,
    /// Follow a numbered link (1-based).
    Follow(usize),
    Campuses,
    Help,
    Quit,
    Unknown(String),
}

/// Verbs and their aliases, in help order.
pub const COMMAND_WORDS: &[&str] = &[
    "go", "open", "back", "home", "links", "campuses", "sedes", "help", "quit", "exit",
];

/// Parse one input line. Returns `None` for blank input.
pub fn parse_command(input: &str) -> Option<Command> {
    let line = input.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with('/') {
        return Some(Command::Go(line.to_string()));
    }
    if let Ok(number) = line.parse::<usize>() {
        return Some(Command::Follow(number));
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match (verb.to_lowercase().as_str(), rest.is_empty()) {
        ("go" | "open", false) => Command::Go(rest.to_string()),
        ("back" | "b", true) => Command::Back,
        ("home", true) => Command::Home,
        ("links" | "l", true) => Command::Links,
        ("campuses" | "sedes", true) => Command::Campuses,
        ("help" | "h" | "?", true) => Command::Help,
        ("quit" | "exit" | "q", true) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_numbers_need_no_verb() {
        assert_eq!(parse_command("/santacruz"), Some(Command::Go("/santacruz".into())));
        assert_eq!(parse_command("  3 "), Some(Command::Follow(3)));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn go_takes_the_rest_of_the_line() {
        assert_eq!(
            parse_command("go /Santa Cruz/carrera/Ingeniería de Sistemas"),
            Some(Command::Go("/Santa Cruz/carrera/Ingeniería de Sistemas".into()))
        );
        assert_eq!(parse_command("OPEN cobija"), Some(Command::Go("cobija".into())));
        assert!(parse_command("go").unwrap().is_unknown());
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("Back"), Some(Command::Back));
        assert_eq!(parse_command("HOME"), Some(Command::Home));
        assert_eq!(parse_command("links"), Some(Command::Links));
        assert_eq!(parse_command("sedes"), Some(Command::Campuses));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn unexpected_arguments_are_unknown() {
        assert_eq!(parse_command("back twice"), Some(Command::Unknown("back twice".into())));
        assert!(parse_command("dance").unwrap().is_unknown());
    }
}
