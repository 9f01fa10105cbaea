//! Setup files: the starting board (`Size:`, `White:`, `Black:`, `Color:`)
//! and search parameters (`MaxDepth:`, `MaxBoards:`).
//!
//! Each line is `Key: value`. Unknown keys are ignored and missing keys keep
//! their defaults.

use derive_more::Error;
use disc_othello::{Geometry, GeometryError, Layout, ParsePlayerError, Player, Square};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Syntax { line: usize, key: String },
    Label { line: usize, label: String },
    NoLayout { rows: usize, cols: usize },
    Geometry(GeometryError),
    Player(ParsePlayerError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            ConfigError::Syntax { line, key } => write!(f, "line {}: invalid value for {}", line, key),
            ConfigError::Label { line, label } => write!(f, "line {}: invalid square label {:?}", line, label),
            ConfigError::NoLayout { rows, cols } => {
                write!(f, "no standard opening for a {}x{} board; list White and Black", rows, cols)
            }
            ConfigError::Geometry(err) => fmt::Display::fmt(err, f),
            ConfigError::Player(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(err: GeometryError) -> Self {
        ConfigError::Geometry(err)
    }
}

impl From<ParsePlayerError> for ConfigError {
    fn from(err: ParsePlayerError) -> Self {
        ConfigError::Player(err)
    }
}

/// The starting position and the colour the engine plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSetup {
    pub layout: Layout,
    pub color: Player,
}

impl Default for BoardSetup {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            color: Player::White,
        }
    }
}

/// Search limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalParams {
    pub max_depth: u32,
    pub max_boards: Option<u64>,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            max_boards: None,
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_board_setup(path: &Path) -> Result<BoardSetup, ConfigError> {
    read(path)?.parse()
}

pub fn load_eval_params(path: &Path) -> Result<EvalParams, ConfigError> {
    read(path)?.parse()
}

/// Yields `(line number, key, value)` for every `Key: value` line.
fn entries(text: &str) -> impl Iterator<Item = (usize, &str, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let (key, value) = line.trim().split_once(':')?;
        Some((index + 1, key.trim(), value.trim()))
    })
}

/// Parse `{ d5,e4 }` into its labels.
fn parse_labels(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('{')?.strip_suffix('}')?;
    Some(
        inner
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Resolve the labels given on `line` against the final geometry.
fn resolve(geometry: Geometry, line: usize, labels: &[String]) -> Result<Vec<Square>, ConfigError> {
    labels
        .iter()
        .map(|label| {
            geometry.label_to_index(label).map_err(|_| ConfigError::Label {
                line,
                label: label.clone(),
            })
        })
        .collect()
}

fn syntax(line: usize, key: &str) -> ConfigError {
    ConfigError::Syntax {
        line,
        key: key.to_string(),
    }
}

impl std::str::FromStr for BoardSetup {
    type Err = ConfigError;

    /// Discs missing from the file come from the default layout on the default
    /// geometry, and from the standard opening on any other size.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut geometry = Geometry::default();
        let mut white: Option<(usize, Vec<String>)> = None;
        let mut black: Option<(usize, Vec<String>)> = None;
        let mut color = Player::White;

        for (line, key, value) in entries(text) {
            match key {
                "Size" => {
                    let (rows, cols) = value.split_once(',').ok_or_else(|| syntax(line, key))?;
                    let rows = rows.trim().parse().map_err(|_| syntax(line, key))?;
                    let cols = cols.trim().parse().map_err(|_| syntax(line, key))?;
                    geometry = Geometry::new(rows, cols)?;
                }
                "White" => white = Some((line, parse_labels(value).ok_or_else(|| syntax(line, key))?)),
                "Black" => black = Some((line, parse_labels(value).ok_or_else(|| syntax(line, key))?)),
                "Color" => color = value.parse()?,
                _ => {}
            }
        }

        let fallback = if white.is_some() && black.is_some() {
            None
        } else if geometry == Geometry::default() {
            Some(Layout::default())
        } else {
            Some(Layout::standard(geometry).ok_or(ConfigError::NoLayout {
                rows: geometry.rows(),
                cols: geometry.cols(),
            })?)
        };

        let white = match (white, &fallback) {
            (Some((line, labels)), _) => resolve(geometry, line, &labels)?,
            (None, Some(layout)) => layout.white.clone(),
            (None, None) => Vec::new(),
        };
        let black = match (black, &fallback) {
            (Some((line, labels)), _) => resolve(geometry, line, &labels)?,
            (None, Some(layout)) => layout.black.clone(),
            (None, None) => Vec::new(),
        };

        Ok(Self {
            layout: Layout {
                geometry,
                white,
                black,
            },
            color,
        })
    }
}

impl std::str::FromStr for EvalParams {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut params = EvalParams::default();

        for (line, key, value) in entries(text) {
            match key {
                "MaxDepth" => {
                    params.max_depth = match value.parse::<u32>() {
                        Ok(depth) if depth > 0 => depth,
                        _ => return Err(syntax(line, key)),
                    };
                }
                "MaxBoards" => {
                    params.max_boards = Some(value.parse().map_err(|_| syntax(line, key))?);
                }
                _ => {}
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disc_othello::{Board, Cell};
    use std::io::Write;

    #[test]
    fn board_setup_full() {
        let text = "Size: 8,8\nWhite: { d5,e4 }\nBlack: { d4,e5 }\nColor: Black\nTimeout: 60\n";
        let setup: BoardSetup = text.parse().unwrap();
        assert_eq!(setup.color, Player::Black);

        let geometry = Geometry::default();
        let board = Board::from_layout(&setup.layout);
        assert_eq!(board[geometry.label_to_index("d5").unwrap()], Cell::White);
        assert_eq!(board[geometry.label_to_index("d4").unwrap()], Cell::Black);
        assert_eq!(board.count_discs(), 4);
    }

    #[test]
    fn board_setup_defaults() {
        let setup: BoardSetup = "".parse().unwrap();
        assert_eq!(setup, BoardSetup::default());
    }

    #[test]
    fn board_setup_small_board() {
        let text = "Size: 4,6\nWhite: { c2,d3 }\nBlack: { d2,c3 }\n";
        let setup: BoardSetup = text.parse().unwrap();
        assert_eq!(setup.layout.geometry, Geometry::new(4, 6).unwrap());
        assert_eq!(setup.color, Player::White);
    }

    #[test]
    fn board_setup_errors() {
        assert!(matches!(
            "Size: 8\n".parse::<BoardSetup>(),
            Err(ConfigError::Syntax { line: 1, .. })
        ));
        assert!(matches!(
            "Size: 0,8\n".parse::<BoardSetup>(),
            Err(ConfigError::Geometry(_))
        ));
        let err = "Size: 4,4\nWhite: { b2 }\nBlack: { h8 }\n"
            .parse::<BoardSetup>()
            .unwrap_err();
        assert!(matches!(&err, ConfigError::Label { line: 3, label } if label == "h8"));
        assert_eq!(err.to_string(), "line 3: invalid square label \"h8\"");
        assert!(matches!(
            "Size: 5,5\n".parse::<BoardSetup>(),
            Err(ConfigError::NoLayout { rows: 5, cols: 5 })
        ));
        assert!(matches!(
            "\nWhite: d5,e4\n".parse::<BoardSetup>(),
            Err(ConfigError::Syntax { line: 2, .. })
        ));
        assert!(matches!(
            "Color: green\n".parse::<BoardSetup>(),
            Err(ConfigError::Player(_))
        ));
    }

    #[test]
    fn resized_board_gets_standard_opening() {
        let setup: BoardSetup = "Size: 6,6\nColor: Black\n".parse().unwrap();
        let geometry = Geometry::new(6, 6).unwrap();
        assert_eq!(setup.layout, Layout::standard(geometry).unwrap());
        assert_eq!(Board::from_layout(&setup.layout).count_discs(), 4);

        // One side given: the other still comes from the standard opening.
        let setup: BoardSetup = "Size: 6,6\nWhite: { a1 }\n".parse().unwrap();
        assert_eq!(setup.layout.white, vec![geometry.label_to_index("a1").unwrap()]);
        assert_eq!(setup.layout.black, Layout::standard(geometry).unwrap().black);
    }

    #[test]
    fn eval_params() {
        let params: EvalParams = "MaxDepth: 3\nMaxBoards: 1000\n".parse().unwrap();
        assert_eq!(
            params,
            EvalParams {
                max_depth: 3,
                max_boards: Some(1000)
            }
        );
        assert_eq!("".parse::<EvalParams>().unwrap(), EvalParams::default());
        assert!("MaxDepth: deep\n".parse::<EvalParams>().is_err());
        assert!(matches!(
            "\nMaxDepth: 0\n".parse::<EvalParams>(),
            Err(ConfigError::Syntax { line: 2, .. })
        ));
        assert_eq!(
            "MaxBoards: 0\n".parse::<EvalParams>().unwrap().max_boards,
            Some(0)
        );
    }

    #[test]
    fn load_from_files() {
        let mut board_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(board_file, "Color: Black").unwrap();
        let setup = load_board_setup(board_file.path()).unwrap();
        assert_eq!(setup.color, Player::Black);

        let mut params_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(params_file, "MaxDepth: 2").unwrap();
        assert_eq!(load_eval_params(params_file.path()).unwrap().max_depth, 2);
    }

    #[test]
    fn missing_file() {
        let err = load_eval_params(Path::new("/nonexistent/evalparams.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/evalparams.txt"));
    }
}
