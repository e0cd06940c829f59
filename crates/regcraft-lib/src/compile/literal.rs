/// Characters escaped in general position.
///
/// `<` and `>` stay bare: `\<` and `\>` are word assertions in the target engine.
const GENERAL_SPECIALS: &str = r".*+-!?:#()[]{}^$|\";

/// Characters escaped inside `[...]`. `&` and `~` would otherwise form `&&` / `~~` set operators.
const CLASS_SPECIALS: &str = r"[]-\&~";

/// Escape `text` for use as a literal.
///
/// Outside a class, a result longer than one character is wrapped in `(?:...)`
/// so that a later quantifier binds to the whole literal. A lone two-character
/// escape such as `\.` is already atomic and stays bare.
pub fn escape_literal(text: &str, in_class: bool) -> String {
    let specials = if in_class {
        CLASS_SPECIALS
    } else {
        GENERAL_SPECIALS
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if specials.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    if in_class {
        return escaped;
    }

    let len = escaped.chars().count();
    let single_escape = len == 2 && escaped.starts_with('\\');
    if len > 1 && !single_escape {
        format!("(?:{escaped})")
    } else {
        escaped
    }
}
