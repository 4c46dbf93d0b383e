/// Collapse a JSX text run the way JSX compilers do.
///
/// Text on a single line is kept verbatim, even if it is only whitespace,
/// so `<b>a</b> <i>b</i>` keeps its space. Otherwise every line is trimmed
/// (except the outer edges of the first and last line), empty lines are
/// dropped and the rest are joined with a single space. Returns `None` when
/// nothing is left.
pub(crate) fn clean_jsx_text(raw: &str) -> Option<String> {
    if !raw.contains('\n') {
        return (!raw.is_empty()).then(|| raw.to_string());
    }
    let lines: Vec<String> = raw
        .split('\n')
        .map(|l| l.trim_end_matches('\r').replace('\t', " "))
        .collect();
    let last = lines.len() - 1;
    let last_non_empty = lines.iter().rposition(|l| !l.trim().is_empty())?;

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let mut s = line.as_str();
        if i != 0 {
            s = s.trim_start();
        }
        if i != last {
            s = s.trim_end();
        }
        if s.is_empty() {
            continue;
        }
        out.push_str(s);
        if i != last_non_empty {
            out.push(' ');
        }
    }
    (!out.is_empty()).then_some(out)
}
