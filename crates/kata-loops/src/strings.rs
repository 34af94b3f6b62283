//! String katas.

/// Reverse the characters of `str`.
///
/// ```
/// assert_eq!(kata_loops::reverse_string("abracadabra"), "arbadacarba");
/// assert_eq!(kata_loops::reverse_string("noon"), "noon");
/// ```
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// The first character that occurs exactly once in `s`, or `None` when
/// every character repeats.
///
/// Comparison is case-sensitive and counts every character, whitespace
/// included.
///
/// ```
/// assert_eq!(kata_loops::find_first_single_char("abracadabra"), Some('c'));
/// assert_eq!(kata_loops::find_first_single_char("entente"), None);
/// ```
#[must_use]
pub fn find_first_single_char(s: &str) -> Option<char> {
    s.chars()
        .find(|&candidate| s.chars().filter(|&c| c == candidate).count() == 1)
}

/// The [mathematical interval](https://en.wikipedia.org/wiki/Interval_(mathematics))
/// notation for the endpoints `a` and `b`.
///
/// The smaller endpoint always comes first; the include flags pick square
/// brackets (included) or parentheses (excluded) per side.
///
/// ```
/// assert_eq!(kata_loops::interval_string(0, 1, true, false), "[0, 1)");
/// assert_eq!(kata_loops::interval_string(5, 3, true, true), "[3, 5]");
/// ```
#[must_use]
pub fn interval_string(a: i64, b: i64, start_included: bool, end_included: bool) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{first}, {second}{close}")
}

/// Whether `s` consists entirely of correctly nested pairs of the brackets
/// `[]`, `()`, `{}` and `<>`.
///
/// The empty string is balanced; any non-bracket character makes the
/// string unbalanced.
///
/// ```
/// assert!(kata_loops::is_brackets_balanced("{[(<{[]}>)]}"));
/// assert!(!kata_loops::is_brackets_balanced("]["));
/// ```
#[must_use]
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '[' | '(' | '{' | '<' => stack.push(c),
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            '>' => {
                if stack.pop() != Some('<') {
                    return false;
                }
            }
            _ => return false,
        }
    }
    stack.is_empty()
}

/// The common directory path shared by every full filename in `paths`.
///
/// The result always ends at a `/` boundary; when the paths share no
/// leading directory at all the result is empty.
///
/// ```
/// let paths = ["/web/images/image1.png", "/web/images/image2.png"];
/// assert_eq!(kata_loops::common_directory_path(&paths), "/web/images/");
/// ```
#[must_use]
pub fn common_directory_path(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    // Byte length of the prefix shared by every path.
    let mut prefix_len = first.len();
    for path in rest {
        let common = first
            .char_indices()
            .zip(path.char_indices())
            .take_while(|((_, a), (_, b))| a == b)
            .count();
        let byte_len = first
            .char_indices()
            .nth(common)
            .map_or(first.len().min(path.len()), |(i, _)| i);
        prefix_len = prefix_len.min(byte_len);
    }

    // Cut back to the last directory separator inside the shared prefix.
    let prefix = &first[..prefix_len];
    prefix
        .rfind('/')
        .map_or_else(String::new, |slash| prefix[..=slash].to_owned())
}
