//! Menu choice parsing for the interactive loop.

/// The choices the parameter menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditPower,
    EditVolume,
    EditReflectivity,
    Run,
    Quit,
}

/// Parses a menu input line into a [`MenuChoice`].
pub fn parse_choice(input: &str) -> anyhow::Result<MenuChoice> {
    match input.trim().to_lowercase().as_str() {
        "1" => Ok(MenuChoice::EditPower),
        "2" => Ok(MenuChoice::EditVolume),
        "3" => Ok(MenuChoice::EditReflectivity),
        "r" | "run" => Ok(MenuChoice::Run),
        "q" | "quit" | "exit" => Ok(MenuChoice::Quit),
        other => anyhow::bail!("invalid choice '{}'. Please enter 1, 2, 3, R, or Q.", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1" => MenuChoice::EditPower; "edit power")]
    #[test_case("2" => MenuChoice::EditVolume; "edit volume")]
    #[test_case("3" => MenuChoice::EditReflectivity; "edit reflectivity")]
    #[test_case("r" => MenuChoice::Run; "lowercase run")]
    #[test_case("R" => MenuChoice::Run; "uppercase run")]
    #[test_case("run" => MenuChoice::Run; "run alias")]
    #[test_case("q" => MenuChoice::Quit; "lowercase quit")]
    #[test_case("Quit" => MenuChoice::Quit; "quit alias")]
    #[test_case("exit" => MenuChoice::Quit; "exit alias")]
    #[test_case("  R  " => MenuChoice::Run; "whitespace is trimmed")]
    fn parses_valid_choices(input: &str) -> MenuChoice {
        parse_choice(input).unwrap()
    }

    #[test_case("4"; "out of range digit")]
    #[test_case("power"; "free text")]
    #[test_case(""; "empty input")]
    fn rejects_unknown_choices(input: &str) {
        assert!(parse_choice(input).is_err());
    }
}
