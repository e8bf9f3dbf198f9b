//! Greeting message and WhatsApp deep link
//!
//! The attendant receives a single pre-filled sentence built from the
//! answers. The sentence is percent-encoded into the `text` query parameter
//! of a `wa.me` link for a fixed phone number.

use crate::state::catalog::{find_usage_category, FALLBACK_USAGE_PHRASE};
use crate::state::FormAnswers;

/// Phone number of the attendant, in international format without `+`
pub const CHAT_PHONE_NUMBER: &str = "5584981321396";

/// Base of the click-to-chat link
pub const CHAT_BASE_URL: &str = "https://wa.me";

/// Phrase describing why the customer wants internet service
pub fn usage_phrase(code: &str) -> &'static str {
    find_usage_category(code)
        .map(|c| c.phrase)
        .unwrap_or(FALLBACK_USAGE_PHRASE)
}

/// Render the greeting sent to the attendant.
///
/// Only meaningful for answers that passed validation.
pub fn compose_message(answers: &FormAnswers) -> String {
    format!(
        "Olá, me chamo {}, sou de {}, {}, estou buscando internet para {}. \
         Quais os planos disponíveis para essa finalidade?",
        answers.name,
        answers.city,
        answers.state,
        usage_phrase(&answers.usage_category),
    )
}

/// Percent-encode text for use inside a query string
pub fn encode_message(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Build the full deep link for the given answers
pub fn chat_link(phone_number: &str, answers: &FormAnswers) -> String {
    format!(
        "{CHAT_BASE_URL}/{phone_number}?text={}",
        encode_message(&compose_message(answers))
    )
}

/// Whether a configured phone number can be placed in the link path
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    !phone_number.is_empty() && phone_number.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::USAGE_CATEGORIES;

    fn ana() -> FormAnswers {
        FormAnswers::new("Ana", "Natal", "Rio Grande do Norte", "trabalho")
    }

    mod phrases {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_codes_map_to_their_phrase() {
            assert_eq!(
                usage_phrase("pessoal"),
                "uso pessoal como assistir vídeos e navegar nos apps"
            );
            assert_eq!(usage_phrase("familia"), "usar com a família no Wi-Fi");
            assert_eq!(usage_phrase("trabalho"), "usar no trabalho");
            assert_eq!(
                usage_phrase("viagens"),
                "usar em viagens me locomovendo de uma cidade a outra"
            );
            assert_eq!(
                usage_phrase("empresa"),
                "uso empresarial no meu estabelecimento"
            );
        }

        #[test]
        fn test_unknown_codes_fall_back() {
            assert_eq!(usage_phrase(""), "uso geral");
            assert_eq!(usage_phrase("lazer"), "uso geral");
            assert_eq!(usage_phrase("Pessoal"), "uso geral");
        }

        #[test]
        fn test_every_table_entry_has_a_distinct_phrase() {
            for category in USAGE_CATEGORIES {
                assert_ne!(usage_phrase(category.code), FALLBACK_USAGE_PHRASE);
            }
        }
    }

    mod compose {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_greeting_for_work_usage() {
            assert_eq!(
                compose_message(&ana()),
                "Olá, me chamo Ana, sou de Natal, Rio Grande do Norte, estou buscando \
                 internet para usar no trabalho. Quais os planos disponíveis para essa finalidade?"
            );
        }

        #[test]
        fn test_values_are_substituted_as_entered() {
            let answers = FormAnswers::new(" Ana ", "Natal", "Acre", "empresa");
            let text = compose_message(&answers);
            assert!(text.starts_with("Olá, me chamo  Ana , sou de Natal, Acre,"));
            assert!(text.contains("uso empresarial no meu estabelecimento."));
        }

        #[test]
        fn test_compose_is_deterministic() {
            assert_eq!(compose_message(&ana()), compose_message(&ana()));
            assert_eq!(
                chat_link(CHAT_PHONE_NUMBER, &ana()),
                chat_link(CHAT_PHONE_NUMBER, &ana())
            );
        }
    }

    mod link {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_encode_message() {
            assert_eq!(encode_message("Olá, tudo?"), "Ol%C3%A1%2C%20tudo%3F");
            assert_eq!(encode_message("a-b_c.d~e"), "a-b_c.d~e");
            assert_eq!(encode_message("1&2=3"), "1%262%3D3");
        }

        #[test]
        fn test_chat_link_shape() {
            let link = chat_link(CHAT_PHONE_NUMBER, &ana());
            assert!(link.starts_with("https://wa.me/5584981321396?text=Ol%C3%A1%2C%20me%20chamo%20Ana%2C"));
            assert!(!link.contains(' '));
            assert_eq!(link.matches('?').count(), 1);
        }

        #[test]
        fn test_chat_link_decodes_back_to_message() {
            let link = chat_link(CHAT_PHONE_NUMBER, &ana());
            let (_, encoded) = link.split_once("?text=").unwrap();
            let decoded = urlencoding::decode(encoded).unwrap();
            assert_eq!(decoded, compose_message(&ana()));
        }

        #[test]
        fn test_chat_link_uses_given_phone() {
            let link = chat_link("5511999990000", &ana());
            assert!(link.starts_with("https://wa.me/5511999990000?text="));
        }

        #[test]
        fn test_phone_number_validation() {
            assert!(is_valid_phone_number(CHAT_PHONE_NUMBER));
            assert!(!is_valid_phone_number(""));
            assert!(!is_valid_phone_number("+55 84 9813"));
            assert!(!is_valid_phone_number("55-84"));
        }
    }
}
