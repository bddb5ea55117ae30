//! Naming-convention conversion for style file names.
//!
//! Component identifiers (`MyButton`) rarely match the file names their style
//! sheets are published under (`my-button`). Each library registers the
//! convention its style files follow; [`NameCase::convert`] derives the file
//! name from the identifier.
//!
//! The set of conventions is a closed enum. Conversion is total: an identifier
//! that produces no words (e.g. `"__"`) converts to itself, so a conversion can
//! never abort a build.

/// A naming convention for deriving style file names from identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameCase {
    /// `myButton`
    Camel,
    /// `My Button`
    Capital,
    /// `MY_BUTTON`
    Constant,
    /// `my.button`
    Dot,
    /// `My-Button`
    Header,
    /// `my-button` (the default; `paramCase` in the original configuration)
    #[default]
    Kebab,
    /// `my button`
    No,
    /// `MyButton`
    Pascal,
    /// `my/button`
    Path,
    /// `My button`
    Sentence,
    /// `my_button`
    Snake,
}

impl NameCase {
    /// Convert an identifier to this convention.
    ///
    /// ```
    /// use style_import::NameCase;
    /// assert_eq!(NameCase::Kebab.convert("MyButton"), "my-button");
    /// assert_eq!(NameCase::Snake.convert("MyButton"), "my_button");
    /// ```
    pub fn convert(&self, input: &str) -> String {
        let words = split_words(input);
        if words.is_empty() {
            // Nothing to convert; hand back the identifier unchanged rather
            // than producing an empty file name.
            return input.to_string();
        }
        match self {
            Self::Camel => {
                let mut out = lower(&words[0]);
                for word in &words[1..] {
                    out.push_str(&capitalize(word));
                }
                out
            }
            Self::Capital => join(&words, " ", capitalize),
            Self::Constant => join(&words, "_", upper),
            Self::Dot => join(&words, ".", lower),
            Self::Header => join(&words, "-", capitalize),
            Self::Kebab => join(&words, "-", lower),
            Self::No => join(&words, " ", lower),
            Self::Pascal => join(&words, "", capitalize),
            Self::Path => join(&words, "/", lower),
            Self::Sentence => {
                let mut out = capitalize(&words[0]);
                for word in &words[1..] {
                    out.push(' ');
                    out.push_str(&lower(word));
                }
                out
            }
            Self::Snake => join(&words, "_", lower),
        }
    }
}

/// Split an identifier into words.
///
/// Non-alphanumeric characters separate words. Within a run of alphanumerics,
/// a word ends before a lower-to-upper transition (`myButton`), and before the
/// last capital of a capital run followed by lowercase (`HTTPServer`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let lower_to_upper = c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
            let capital_run_end = c.is_uppercase()
                && prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || capital_run_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join(words: &[String], sep: &str, f: impl Fn(&str) -> String) -> String {
    words.iter().map(|w| f(w)).collect::<Vec<_>>().join(sep)
}

fn lower(word: &str) -> String {
    word.to_lowercase()
}

fn upper(word: &str) -> String {
    word.to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_is_default() {
        assert_eq!(NameCase::default(), NameCase::Kebab);
    }

    #[test]
    fn splits_on_case_boundaries() {
        assert_eq!(split_words("MyButton"), ["My", "Button"]);
        assert_eq!(split_words("myButton"), ["my", "Button"]);
        assert_eq!(split_words("HTTPServer"), ["HTTP", "Server"]);
        assert_eq!(split_words("my_button-2"), ["my", "button", "2"]);
    }

    #[test]
    fn converts_all_conventions() {
        let input = "MyButton";
        assert_eq!(NameCase::Camel.convert(input), "myButton");
        assert_eq!(NameCase::Capital.convert(input), "My Button");
        assert_eq!(NameCase::Constant.convert(input), "MY_BUTTON");
        assert_eq!(NameCase::Dot.convert(input), "my.button");
        assert_eq!(NameCase::Header.convert(input), "My-Button");
        assert_eq!(NameCase::Kebab.convert(input), "my-button");
        assert_eq!(NameCase::No.convert(input), "my button");
        assert_eq!(NameCase::Pascal.convert(input), "MyButton");
        assert_eq!(NameCase::Path.convert(input), "my/button");
        assert_eq!(NameCase::Sentence.convert(input), "My button");
        assert_eq!(NameCase::Snake.convert(input), "my_button");
    }

    #[test]
    fn wordless_input_falls_back_to_itself() {
        assert_eq!(NameCase::Kebab.convert("__"), "__");
        assert_eq!(NameCase::Pascal.convert(""), "");
    }

    #[test]
    fn single_word_stays_single() {
        assert_eq!(NameCase::Kebab.convert("Button"), "button");
        assert_eq!(NameCase::Camel.convert("Button"), "button");
    }
}
