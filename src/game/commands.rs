//! Player command structure and the closed verb set.
//!
//! The shell splits each input line into whitespace tokens and hands the
//! engine a [`Command`]: one verb word plus up to two free-form arguments.
//! Verbs are a closed enum so dispatch stays exhaustive; anything outside
//! the set is surfaced as an unknown-command diagnostic, never a panic.

/// A tokenized player instruction. The engine never tokenizes raw input
/// itself; extra tokens past the second argument are discarded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
}

impl Command {
    pub fn new(verb: &str, arg1: Option<&str>, arg2: Option<&str>) -> Self {
        Self {
            verb: verb.to_string(),
            arg1: arg1.map(str::to_string),
            arg2: arg2.map(str::to_string),
        }
    }

    /// Build a command from pre-split tokens. Returns `None` for an empty
    /// line. Tokens beyond the third are ignored.
    pub fn from_tokens(tokens: &[&str]) -> Option<Self> {
        let verb = tokens.first().copied()?;
        Some(Self::new(verb, tokens.get(1).copied(), tokens.get(2).copied()))
    }
}

/// The recognised verb set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Drop,
    Give,
    Inventory,
    Back,
    Help,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 8] = [
        Verb::Go,
        Verb::Take,
        Verb::Drop,
        Verb::Give,
        Verb::Inventory,
        Verb::Back,
        Verb::Help,
        Verb::Quit,
    ];

    /// Parse a verb word, case-insensitively.
    pub fn parse(word: &str) -> Option<Verb> {
        match word.to_ascii_lowercase().as_str() {
            "go" => Some(Verb::Go),
            "take" => Some(Verb::Take),
            "drop" => Some(Verb::Drop),
            "give" => Some(Verb::Give),
            "inventory" => Some(Verb::Inventory),
            "back" => Some(Verb::Back),
            "help" => Some(Verb::Help),
            "quit" => Some(Verb::Quit),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Give => "give",
            Verb::Inventory => "inventory",
            Verb::Back => "back",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    /// Space-separated listing of every verb, for the help screen.
    pub fn listing() -> String {
        Verb::ALL
            .iter()
            .map(|verb| verb.keyword())
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_parse_case_insensitively() {
        assert_eq!(Verb::parse("go"), Some(Verb::Go));
        assert_eq!(Verb::parse("GO"), Some(Verb::Go));
        assert_eq!(Verb::parse("Inventory"), Some(Verb::Inventory));
        assert_eq!(Verb::parse("xyzzy"), None);
    }

    #[test]
    fn command_from_tokens_keeps_up_to_two_args() {
        assert_eq!(Command::from_tokens(&[]), None);

        let bare = Command::from_tokens(&["inventory"]).unwrap();
        assert_eq!(bare.verb, "inventory");
        assert_eq!(bare.arg1, None);

        let give = Command::from_tokens(&["give", "Mango", "Stranger", "please"]).unwrap();
        assert_eq!(give.arg1.as_deref(), Some("Mango"));
        assert_eq!(give.arg2.as_deref(), Some("Stranger"));
    }

    #[test]
    fn listing_names_every_verb() {
        let listing = Verb::listing();
        for verb in Verb::ALL {
            assert!(listing.contains(verb.keyword()));
        }
    }
}
