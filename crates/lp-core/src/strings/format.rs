/// Substitute positional arguments into a resource template.
///
/// Supported placeholders: `%1$s` / `%2$d` (explicit position), `%s` / `%d`
/// (next implicit position) and `%%` (literal percent). A placeholder whose
/// argument is missing is left untouched.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut implicit = 0usize;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let digits_len = tail.bytes().take_while(u8::is_ascii_digit).count();
        let (index, spec_start) = if digits_len > 0 && tail[digits_len..].starts_with('$') {
            let position: usize = tail[..digits_len].parse().unwrap_or(0);
            (position.checked_sub(1), digits_len + 1)
        } else {
            let index = implicit;
            implicit += 1;
            (Some(index), 0)
        };

        match tail[spec_start..].chars().next() {
            Some(conv @ ('s' | 'd')) => {
                let consumed = spec_start + conv.len_utf8();
                match index.and_then(|i| args.get(i)) {
                    Some(arg) => out.push_str(arg),
                    None => out.push_str(&rest[pos..pos + 1 + consumed]),
                }
                rest = &tail[consumed..];
            }
            _ => {
                out.push('%');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
