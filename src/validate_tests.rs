//! Tests for the character-set predicates.

use super::*;

mod token {
    use super::*;

    #[test]
    fn accepts_full_alphabet() {
        assert!(is_token(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-:"
        ));
    }

    #[test]
    fn accepts_typical_token() {
        assert!(is_token("dK3j-9x_Qa:APA91b"));
    }

    #[test]
    fn empty_is_vacuously_valid() {
        assert!(is_token(""));
    }

    #[test]
    fn rejects_any_foreign_character() {
        for bad in [" ", ".", "/", "=", "+", "é", "\n", "\0"] {
            let token = format!("abc{bad}123");
            assert!(!is_token(&token), "accepted {token:?}");
        }
    }
}

mod target {
    use super::*;

    #[test]
    fn accepts_default_and_named_targets() {
        assert!(is_target("DEFAULT"));
        assert!(is_target("my_phone_2"));
    }

    #[test]
    fn empty_is_vacuously_valid() {
        assert!(is_target(""));
    }

    #[test]
    fn rejects_token_only_characters() {
        assert!(!is_target("my-phone"));
        assert!(!is_target("phone:1"));
    }

    #[test]
    fn rejects_section_syntax() {
        assert!(!is_target("[DEFAULT]"));
        assert!(!is_target("a b"));
    }
}

mod printable {
    use super::*;

    #[test]
    fn accepts_text_punctuation_and_whitespace() {
        assert!(is_printable("Build #42 finished: OK! (3m 12s)"));
        assert!(is_printable("line one\nline two\r\n\ttabbed\x0b\x0c"));
        assert!(is_printable("~`!@#$%^&*()_+-={}[]|\\:;\"'<>,.?/"));
    }

    #[test]
    fn empty_is_vacuously_valid() {
        assert!(is_printable(""));
    }

    #[test]
    fn rejects_control_characters() {
        assert!(!is_printable("bell\x07"));
        assert!(!is_printable("nul\0"));
        assert!(!is_printable("escape\x1b[0m"));
        assert!(!is_printable("delete\x7f"));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(!is_printable("café"));
        assert!(!is_printable("done ✅"));
    }
}
