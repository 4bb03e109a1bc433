/// Removes `#.comment.#` spans. Comments do not nest and the final
/// comment of a program may be left unterminated.
pub fn strip_comments(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut in_comment = false;
    let mut last: Option<char> = None;
    while let Some(ch) = chars.next() {
        if in_comment {
            if ch == '#' && last == Some('.') {
                in_comment = false;
            }
        } else if ch == '#' && chars.peek() == Some(&'.') {
            chars.next();
            in_comment = true;
            last = Some('.');
            continue;
        } else if ch == '.' && last == Some('#') {
            // A closing `.#` immediately followed by `.` opens another comment.
            in_comment = true;
        } else {
            out.push(ch);
        }
        last = Some(ch);
    }
    out
}

fn is_integ_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !is_integ_whitespace(*c)).collect()
}

/// Comments first, then whitespace, so `# .` never opens a comment.
pub fn prepare(s: &str) -> String {
    strip_whitespace(&strip_comments(s))
}
