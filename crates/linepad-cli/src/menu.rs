use std::str::FromStr;

/// Actions offered by the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Append,
    NewLine,
    Save,
    Load,
    Print,
    Insert,
    Search,
    ClearConsole,
    Delete,
    Exit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Replace,
    Overwrite,
    SaveEncrypted,
    LoadEncrypted,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 19] = [
        MenuChoice::Append,
        MenuChoice::NewLine,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Print,
        MenuChoice::Insert,
        MenuChoice::Search,
        MenuChoice::ClearConsole,
        MenuChoice::Delete,
        MenuChoice::Exit,
        MenuChoice::Undo,
        MenuChoice::Redo,
        MenuChoice::Cut,
        MenuChoice::Copy,
        MenuChoice::Paste,
        MenuChoice::Replace,
        MenuChoice::Overwrite,
        MenuChoice::SaveEncrypted,
        MenuChoice::LoadEncrypted,
    ];

    /// Number the user types to pick this action
    pub fn number(self) -> usize {
        MenuChoice::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Append => "Append at the end",
            MenuChoice::NewLine => "Start a new line",
            MenuChoice::Save => "Save to file",
            MenuChoice::Load => "Load from file",
            MenuChoice::Print => "Print to console",
            MenuChoice::Insert => "Insert text by line and index",
            MenuChoice::Search => "Search",
            MenuChoice::ClearConsole => "Clear console and display menu",
            MenuChoice::Delete => "Delete text by line and index",
            MenuChoice::Exit => "Exit",
            MenuChoice::Undo => "Undo last change",
            MenuChoice::Redo => "Redo last undone change",
            MenuChoice::Cut => "Cut text by line and index",
            MenuChoice::Copy => "Copy text by line and index",
            MenuChoice::Paste => "Paste text by line and index",
            MenuChoice::Replace => "Insert with replacement by line and index",
            MenuChoice::Overwrite => "Overwrite text by line and index",
            MenuChoice::SaveEncrypted => "Save encrypted to file",
            MenuChoice::LoadEncrypted => "Load encrypted file",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s.trim().parse().map_err(|_| ())?;
        number
            .checked_sub(1)
            .and_then(|index| MenuChoice::ALL.get(index))
            .copied()
            .ok_or(())
    }
}

/// Full menu text, one numbered option per line
pub fn menu_text() -> String {
    let mut text = String::from("Please select an option from the menu below:\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{:>2} - {}\n", choice.number(), choice.label()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse(), Ok(MenuChoice::Append));
        assert_eq!(" 10 ".parse(), Ok(MenuChoice::Exit));
        assert_eq!("16".parse(), Ok(MenuChoice::Replace));
        assert_eq!("19".parse(), Ok(MenuChoice::LoadEncrypted));
    }

    #[test]
    fn test_reject_unknown_choices() {
        assert_eq!("0".parse::<MenuChoice>(), Err(()));
        assert_eq!("20".parse::<MenuChoice>(), Err(()));
        assert_eq!("one".parse::<MenuChoice>(), Err(()));
        assert_eq!("".parse::<MenuChoice>(), Err(()));
    }

    #[test]
    fn test_numbers_roundtrip() {
        for choice in MenuChoice::ALL {
            assert_eq!(choice.number().to_string().parse(), Ok(choice));
        }
    }

    #[test]
    fn test_menu_text_lists_every_option() {
        let text = menu_text();
        assert!(text.contains(" 1 - Append at the end"));
        assert!(text.contains("10 - Exit"));
        assert_eq!(text.lines().count(), MenuChoice::ALL.len() + 1);
    }
}
