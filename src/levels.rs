//! Built-in level pack. Each level is a character map plus a JSON metadata
//! sidecar; [`crate::level::Level::load`] turns one into a playable level.

/// Raw level data: a character map and its JSON metadata (`name`, optional
/// `moves` budget). Borrowed so callers can load levels read at runtime as
/// well as the embedded pack.
pub struct LevelSource<'a> {
    pub number: u32,
    pub map: &'a str,
    pub metadata: &'a str,
}

const LEVEL_1_MAP: &str = r"
##############################
#::::::::::::::::::::::::*:::#
#:@:::::::O::::::::::::::::::#
#::::::::::::::::::/:::::::::#
#::::*:::::::::::::::::::::::#
#::::::::::::C:::::::::::=:::#
#:::::<::::::::::::::::::=:::#
#:*:::::::::::::::::T::::::::#
#::::::::::::::::::::::::A::X#
##############################
";

const LEVEL_2_MAP: &str = r"
########################
#@::::::::::::::::::::*#
#:::O::::::::::::::*:::#
#:::::::#########::::::#
#:::*:::#       #::::::#
#:::::::# S M S #::::::#
#::::::!#       #:::::*#
#:::::::#### ####::::::#
#::::::::::::+:::::::::#
#:*::::::::::::::::::C:#
#:::::::::::::::::::::X#
########################
";

const LEVEL_3_MAP: &str = r"
##########################
#:::::::::::::::::::::::*#
#:@::O:::::::::^:::::::::#
#::::::::>:::::::::::::::#
#:::::\::::::::::::::::::#
#::::::::::::::::::::::::#
#:*::::::::::::<:::::::::#
#::::::::::::::::::::::/:#
#:::::::::::::::::::::::X#
##########################
";

pub const LEVELS: &[LevelSource<'static>] = &[
    LevelSource {
        number: 1,
        map: LEVEL_1_MAP,
        metadata: r#"{"name": "First Steps"}"#,
    },
    LevelSource {
        number: 2,
        map: LEVEL_2_MAP,
        metadata: r#"{"name": "Night of the Hunters", "moves": 300}"#,
    },
    LevelSource {
        number: 3,
        map: LEVEL_3_MAP,
        metadata: r#"{"name": "Under Fire", "moves": 150}"#,
    },
];

pub fn get(number: u32) -> Option<&'static LevelSource<'static>> {
    LEVELS.iter().find(|level| level.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn every_builtin_level_loads() {
        for source in LEVELS {
            let level = Level::load(source)
                .unwrap_or_else(|e| panic!("level {} failed to load: {e}", source.number));
            assert!(level.width() > 2);
            assert!(level.height() > 2);
        }
    }

    #[test]
    fn builtin_maps_are_rectangular_and_walled() {
        for source in LEVELS {
            let map = source.map.trim_matches('\n');
            let rows: Vec<&str> = map.lines().collect();
            let width = rows[0].len();
            for row in &rows {
                assert_eq!(row.len(), width, "ragged row in level {}", source.number);
                assert!(row.starts_with('#') && row.ends_with('#'));
            }
            assert!(rows.first().unwrap().chars().all(|c| c == '#'));
            assert!(rows.last().unwrap().chars().all(|c| c == '#'));
        }
    }
}
