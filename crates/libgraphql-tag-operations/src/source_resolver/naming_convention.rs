use serde::Deserialize;
use serde::Serialize;

/// How a GraphQL definition name is transformed before the generated
/// symbol's suffix is appended.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// `getUser` becomes `GetUser`, `HTMLPage` becomes `HtmlPage`.
    #[default]
    PascalCase,

    /// Use the GraphQL name verbatim.
    Keep,
}

impl NamingConvention {
    pub fn apply(&self, name: &str, transform_underscore: bool) -> String {
        match self {
            Self::Keep => name.to_string(),
            Self::PascalCase if transform_underscore => pascal_case(name),
            Self::PascalCase => name
                .split('_')
                .map(pascal_case)
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

/// Every word after the first which starts with a digit is prefixed with
/// `_` (`user_2fa` becomes `User_2fa`), matching change-case's `pascalCase`.
fn pascal_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .enumerate()
        .map(|(idx, word)| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if idx > 0 && first.is_ascii_digit() => std::iter::once('_')
                    .chain(std::iter::once(first))
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Splits on non-alphanumeric characters, on lower-to-upper transitions
/// (`getUser`), and before the last capital of an acronym run which starts
/// a new word (`HTMLPage`).
fn split_words(name: &str) -> Vec<&str> {
    let chars = name.char_indices().collect::<Vec<_>>();
    let mut words = vec![];
    let mut word_start: Option<usize> = None;

    for (i, &(byte_idx, ch)) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if let Some(start) = word_start.take() {
                words.push(&name[start..byte_idx]);
            }
            continue;
        }

        let Some(start) = word_start else {
            word_start = Some(byte_idx);
            continue;
        };

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);
        let is_boundary = ch.is_uppercase() && (
            prev.is_lowercase()
            || prev.is_numeric()
            || (prev.is_uppercase() && next.is_some_and(char::is_lowercase))
        );
        if is_boundary {
            words.push(&name[start..byte_idx]);
            word_start = Some(byte_idx);
        }
    }

    if let Some(start) = word_start {
        words.push(&name[start..]);
    }
    words
}
