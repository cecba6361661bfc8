//! Static command table

use lumipad_protocol::ArgKind::{self, Integer};

/// Registered commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandId {
    /// `set x y r g b`
    Set,
    /// `clear`
    Clear,
    /// `show`
    Show,
    /// `set_status index r g b`
    SetStatus,
    /// `clear_status`
    ClearStatus,
    /// `show_status`
    ShowStatus,
    /// `set_buzzer value`
    SetBuzzer,
}

impl CommandId {
    /// Wire name
    pub fn name(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Clear => "clear",
            Self::Show => "show",
            Self::SetStatus => "set_status",
            Self::ClearStatus => "clear_status",
            Self::ShowStatus => "show_status",
            Self::SetBuzzer => "set_buzzer",
        }
    }
}

/// One registry row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub id: CommandId,
    /// Expected argument kinds, in order
    pub signature: &'static [ArgKind],
    /// Only registered when the board has a buzzer
    pub requires_buzzer: bool,
}

impl CommandEntry {
    const fn new(id: CommandId, signature: &'static [ArgKind]) -> Self {
        Self {
            id,
            signature,
            requires_buzzer: false,
        }
    }

    /// Wire name
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Every command the panel understands
pub static REGISTRY: [CommandEntry; 7] = [
    CommandEntry::new(CommandId::Set, &[Integer; 5]),
    CommandEntry::new(CommandId::Clear, &[]),
    CommandEntry::new(CommandId::Show, &[]),
    CommandEntry::new(CommandId::SetStatus, &[Integer; 4]),
    CommandEntry::new(CommandId::ClearStatus, &[]),
    CommandEntry::new(CommandId::ShowStatus, &[]),
    CommandEntry {
        requires_buzzer: true,
        ..CommandEntry::new(CommandId::SetBuzzer, &[Integer])
    },
];

/// Find a command by exact, case-sensitive name
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    REGISTRY.iter().find(|entry| entry.name() == name)
}

/// Commands available on a board with or without a buzzer
pub fn available(has_buzzer: bool) -> impl Iterator<Item = &'static CommandEntry> {
    REGISTRY
        .iter()
        .filter(move |entry| has_buzzer || !entry.requires_buzzer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("set").map(|e| e.id), Some(CommandId::Set));
        assert_eq!(
            lookup("clear_status").map(|e| e.id),
            Some(CommandId::ClearStatus)
        );
        assert!(lookup("SET").is_none());
        assert!(lookup("se").is_none());
        assert!(lookup("sets").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_signatures() {
        let arity = |name| lookup(name).map(|e| e.signature.len());
        assert_eq!(arity("set"), Some(5));
        assert_eq!(arity("clear"), Some(0));
        assert_eq!(arity("show"), Some(0));
        assert_eq!(arity("set_status"), Some(4));
        assert_eq!(arity("clear_status"), Some(0));
        assert_eq!(arity("show_status"), Some(0));
        assert_eq!(arity("set_buzzer"), Some(1));

        for entry in REGISTRY.iter() {
            assert!(entry.signature.iter().all(|k| *k == Integer));
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in REGISTRY.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_buzzer_command_is_conditional() {
        assert_eq!(available(true).count(), 7);
        assert_eq!(available(false).count(), 6);
        assert!(available(false).all(|e| e.id != CommandId::SetBuzzer));
    }
}
