/// Reduce a ROM filename or catalog title to the key used for matching.
///
/// The trailing extension is removed first, then every parenthesised group
/// from the right until none remain, then surrounding whitespace.
///
/// `"Game Title (Rev A) (USA).sfc"` becomes `"Game Title"`.
pub fn clean_title(raw: &str) -> String {
    let mut title = strip_extension(raw).to_string();

    // A group runs to its matching `)`, or to the end of the string when it is
    // unbalanced. Either way nothing from the `(` onwards survives.
    while let Some(open) = title.rfind('(') {
        title.truncate(open);
    }

    title.trim().to_string()
}

fn strip_extension(raw: &str) -> &str {
    let name_start = raw.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let Some(dot) = raw.rfind('.') else {
        return raw;
    };
    if dot <= name_start {
        return raw;
    }

    let ext = &raw[dot + 1..];
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return raw;
    }

    &raw[..dot]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_file_extension() {
        assert_eq!(clean_title("Game Title.sfc"), "Game Title");
        assert_eq!(clean_title("Another Game.bin"), "Another Game");
        assert_eq!(clean_title("Mario Bros.nes"), "Mario Bros");
        assert_eq!(clean_title("Sonic.32x"), "Sonic");
    }

    #[test]
    fn removes_trailing_groups() {
        assert_eq!(clean_title("Game Title (USA)"), "Game Title");
        assert_eq!(clean_title("Game (Rev A) (USA)"), "Game");
        assert_eq!(clean_title("Complex (V1.1) (Rev B) (USA) (En)"), "Complex");
        assert_eq!(clean_title("Game Title (USA).sfc"), "Game Title");
        assert_eq!(clean_title("Test (Rev A) (Europe).bin"), "Test");
    }

    #[test]
    fn consumes_nested_groups() {
        assert_eq!(clean_title("Game (Rev (Final)) (USA)"), "Game");
        assert_eq!(clean_title("Test ((Beta)) (Europe)"), "Test");
    }

    #[test]
    fn unbalanced_group_truncates_to_open_paren() {
        assert_eq!(clean_title("Game (USA"), "Game");
        assert_eq!(clean_title("Game (Rev (A) (USA)"), "Game");
    }

    #[test]
    fn trims_whitespace_and_handles_empty_input() {
        assert_eq!(clean_title("  Game Title  "), "Game Title");
        assert_eq!(clean_title("  Test (Europe)"), "Test");
        assert_eq!(clean_title(""), "");
        assert_eq!(clean_title("   "), "");
        assert_eq!(clean_title("()"), "");
        assert_eq!(clean_title("Game()"), "Game");
        assert_eq!(clean_title("().nes"), "");
    }

    #[test]
    fn leaves_dotted_titles_alone() {
        assert_eq!(clean_title("Game"), "Game");
        assert_eq!(clean_title("Super Mario Bros. 3 (USA)"), "Super Mario Bros. 3");
        assert_eq!(clean_title("Dr. Mario (World)"), "Dr. Mario");
        assert_eq!(clean_title(".hidden"), ".hidden");
        assert_eq!(clean_title("dir.v2/Game"), "dir.v2/Game");
    }

    #[test]
    fn is_idempotent_on_its_output() {
        for raw in [
            "Game Title (USA).sfc",
            "Game (Rev (Final)) (USA)",
            "Super Mario Bros. 3 (USA).nes",
            "  Spaced Out  (Japan) ",
            "()",
        ] {
            let once = clean_title(raw);
            assert_eq!(clean_title(&once), once, "input {raw:?}");
        }
    }
}
