pub const CHAT_SYSTEM: &str = include_str!("../data/prompts/chat_system.txt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_system_is_non_empty() {
        assert!(!CHAT_SYSTEM.is_empty());
    }

    #[test]
    fn test_chat_system_names_the_collective() {
        assert!(CHAT_SYSTEM.contains("Chomp Chomp"));
    }
}
