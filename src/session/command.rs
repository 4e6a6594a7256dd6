use crate::units::UnitSystem;

/// One line of input to the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `unit <metric|imperial>`
    Unit(UnitSystem),
    /// `height <value>`; the value is kept as raw text
    Height(String),
    /// `weight <value>`
    Weight(String),
    Calculate,
    Clear,
    Back,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  unit <metric|imperial>   select the measurement system
  height <value>           set height (cm or in)
  weight <value>           set weight (kg or lb)
  calc                     calculate BMI
  clear                    clear height and weight
  back                     return from results to input
  show                     show current inputs
  help                     show this help
  quit                     leave the session";

/// Parse a session line like `height 170` or `calc`
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("Empty command".to_string());
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "unit" | "units" | "system" => {
            if rest.is_empty() {
                return Err("Usage: unit <metric|imperial>".to_string());
            }
            Command::Unit(rest.parse()?)
        }
        // Field text may legitimately be empty; validation reports that
        "height" | "h" => Command::Height(rest.to_string()),
        "weight" | "w" => Command::Weight(rest.to_string()),
        "calc" | "calculate" => Command::Calculate,
        "clear" => Command::Clear,
        "back" => Command::Back,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    if !rest.is_empty()
        && matches!(
            command,
            Command::Calculate
                | Command::Clear
                | Command::Back
                | Command::Show
                | Command::Help
                | Command::Quit
        )
    {
        return Err(format!("'{}' takes no arguments", verb));
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            parse_command("height 170"),
            Ok(Command::Height("170".to_string()))
        );
        assert_eq!(
            parse_command("  weight   70.5  "),
            Ok(Command::Weight("70.5".to_string()))
        );
        // Raw text goes through unvalidated
        assert_eq!(
            parse_command("h abc"),
            Ok(Command::Height("abc".to_string()))
        );
        assert_eq!(parse_command("weight"), Ok(Command::Weight(String::new())));
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!(
            parse_command("unit Imperial"),
            Ok(Command::Unit(UnitSystem::Imperial))
        );
        assert!(parse_command("unit").is_err());
        assert!(parse_command("unit stone").is_err());
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_command("calc"), Ok(Command::Calculate));
        assert_eq!(parse_command("CLEAR"), Ok(Command::Clear));
        assert_eq!(parse_command("back"), Ok(Command::Back));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert!(parse_command("calc now").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("jump").is_err());
    }
}
