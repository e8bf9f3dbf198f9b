//! Fixed option tables offered by the intake form

/// Brazilian states, used verbatim as both label and stored value
pub const BRAZILIAN_STATES: [&str; 27] = [
    "Acre",
    "Alagoas",
    "Amapá",
    "Amazonas",
    "Bahia",
    "Ceará",
    "Distrito Federal",
    "Espírito Santo",
    "Goiás",
    "Maranhão",
    "Mato Grosso",
    "Mato Grosso do Sul",
    "Minas Gerais",
    "Pará",
    "Paraíba",
    "Paraná",
    "Pernambuco",
    "Piauí",
    "Rio de Janeiro",
    "Rio Grande do Norte",
    "Rio Grande do Sul",
    "Rondônia",
    "Roraima",
    "Santa Catarina",
    "São Paulo",
    "Sergipe",
    "Tocantins",
];

/// Phrase used when a usage code is not in [`USAGE_CATEGORIES`]
pub const FALLBACK_USAGE_PHRASE: &str = "uso geral";

/// One selectable reason for wanting internet service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageCategory {
    /// Stable code stored in the answers
    pub code: &'static str,
    /// Short label shown as the option title
    pub label: &'static str,
    /// Longer description shown under the label
    pub description: &'static str,
    /// Phrase substituted into the greeting message
    pub phrase: &'static str,
}

pub const USAGE_CATEGORIES: [UsageCategory; 5] = [
    UsageCategory {
        code: "pessoal",
        label: "Uso pessoal",
        description: "Assistir vídeos, acessar redes sociais",
        phrase: "uso pessoal como assistir vídeos e navegar nos apps",
    },
    UsageCategory {
        code: "familia",
        label: "Uso em família",
        description: "Uso em Wi-Fi, como roteadores, modems",
        phrase: "usar com a família no Wi-Fi",
    },
    UsageCategory {
        code: "trabalho",
        label: "Uso para trabalho",
        description: "Home office, reuniões online, atividades profissionais",
        phrase: "usar no trabalho",
    },
    UsageCategory {
        code: "viagens",
        label: "Uso em viagens",
        description: "Se locomovendo de uma cidade a outra - motoristas, taxistas, caminhoneiros, vendedores, motoboy, etc",
        phrase: "usar em viagens me locomovendo de uma cidade a outra",
    },
    UsageCategory {
        code: "empresa",
        label: "Uso empresarial",
        description: "Para estabelecimento comercial, loja, escritório",
        phrase: "uso empresarial no meu estabelecimento",
    },
];

/// Look up a usage category by its code
pub fn find_usage_category(code: &str) -> Option<&'static UsageCategory> {
    USAGE_CATEGORIES.iter().find(|c| c.code == code)
}

/// Position of a state in [`BRAZILIAN_STATES`]
pub fn state_index(name: &str) -> Option<usize> {
    BRAZILIAN_STATES.iter().position(|s| *s == name)
}

/// Find the next state (after `from`, wrapping) whose name starts with `letter`.
///
/// Case and accents are ignored on both sides, so `É` behaves like `e`.
pub fn next_state_starting_with(letter: char, from: Option<usize>) -> Option<usize> {
    let wanted = fold_letter(letter);
    let len = BRAZILIAN_STATES.len();
    let start = from.map(|i| i + 1).unwrap_or(0);

    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| {
            BRAZILIAN_STATES[i]
                .chars()
                .next()
                .is_some_and(|c| fold_letter(c) == wanted)
        })
}

/// Lowercase a letter and strip the Portuguese diacritics
fn fold_letter(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_table_has_all_states() {
        assert_eq!(BRAZILIAN_STATES.len(), 27);
        assert_eq!(BRAZILIAN_STATES[0], "Acre");
        assert_eq!(BRAZILIAN_STATES[26], "Tocantins");
    }

    #[test]
    fn test_state_names_are_unique() {
        for (i, a) in BRAZILIAN_STATES.iter().enumerate() {
            for b in &BRAZILIAN_STATES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_usage_codes_are_unique() {
        let codes: Vec<_> = USAGE_CATEGORIES.iter().map(|c| c.code).collect();
        assert_eq!(
            codes,
            vec!["pessoal", "familia", "trabalho", "viagens", "empresa"]
        );
    }

    #[test]
    fn test_find_usage_category() {
        let work = find_usage_category("trabalho").unwrap();
        assert_eq!(work.label, "Uso para trabalho");
        assert!(find_usage_category("").is_none());
        assert!(find_usage_category("TRABALHO").is_none());
    }

    #[test]
    fn test_state_index() {
        assert_eq!(state_index("Rio Grande do Norte"), Some(19));
        assert_eq!(state_index("Texas"), None);
    }

    #[test]
    fn test_next_state_starting_with_from_start() {
        assert_eq!(next_state_starting_with('m', None), state_index("Maranhão"));
        assert_eq!(next_state_starting_with('M', None), state_index("Maranhão"));
    }

    #[test]
    fn test_next_state_starting_with_cycles() {
        let first = next_state_starting_with('r', None).unwrap();
        assert_eq!(BRAZILIAN_STATES[first], "Rio de Janeiro");
        let second = next_state_starting_with('r', Some(first)).unwrap();
        assert_eq!(BRAZILIAN_STATES[second], "Rio Grande do Norte");
        let last = state_index("Roraima").unwrap();
        assert_eq!(next_state_starting_with('r', Some(last)), Some(first));
    }

    #[test]
    fn test_next_state_starting_with_no_match() {
        assert_eq!(next_state_starting_with('x', None), None);
    }

    #[test]
    fn test_fold_letter_strips_accents() {
        assert_eq!(fold_letter('Á'), 'a');
        assert_eq!(fold_letter('ç'), 'c');
        assert_eq!(fold_letter('z'), 'z');
    }
}
