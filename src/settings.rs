//! Settings that control maze generation

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::error::MazeError;
use crate::generator::generate_maze;
use crate::grid::Grid;
use anyhow::{anyhow, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings that control maze generation
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MazeSettings {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Seed for the random source; a fresh random source is used if `None`
    pub seed: Option<u64>,
    /// Column of the entrance in the top row; random if `None`
    pub entrance_column: Option<usize>,
    /// Column of the exit in the bottom row; random if `None`
    pub exit_column: Option<usize>,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
            entrance_column: None,
            exit_column: None,
        }
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, Error> {
    let value = value.ok_or(anyhow!("{flag} expects a value"))?;
    value
        .parse()
        .map_err(|_| anyhow!("Invalid value {value:?} for {flag}"))
}

impl MazeSettings {
    /// Reads settings from command line flags, starting from the defaults
    ///
    /// Recognized flags are `--rows`, `--columns`, `--seed`, `--entrance` and `--exit`, each
    /// followed by a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::settings::MazeSettings;
    ///
    /// let args = ["--rows", "4", "--seed", "9"].map(String::from);
    /// let settings = MazeSettings::from_args(args).unwrap();
    /// assert_eq!(settings.rows, 4);
    /// assert_eq!(settings.seed, Some(9));
    /// ```
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, Error> {
        let mut settings = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--rows" => settings.rows = parse_value(&flag, args.next())?,
                "--columns" => settings.columns = parse_value(&flag, args.next())?,
                "--seed" => settings.seed = Some(parse_value(&flag, args.next())?),
                "--entrance" => settings.entrance_column = Some(parse_value(&flag, args.next())?),
                "--exit" => settings.exit_column = Some(parse_value(&flag, args.next())?),
                _ => return Err(anyhow!("Unknown argument {flag:?}")),
            }
        }
        Ok(settings)
    }

    /// The random source these settings call for
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generates a maze with these settings
    pub fn generate(&self) -> Result<Grid, MazeError> {
        generate_maze(
            self.rows,
            self.columns,
            &mut self.rng(),
            self.entrance_column,
            self.exit_column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::find_start_column;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let settings = MazeSettings::from_args(args(&[])).unwrap();
        assert_eq!(settings, MazeSettings::default());
        assert_eq!((settings.rows, settings.columns), (10, 20));
    }

    #[test]
    fn all_flags() {
        let settings = MazeSettings::from_args(args(&[
            "--rows", "3", "--columns", "8", "--seed", "12", "--entrance", "2", "--exit", "7",
        ]))
        .unwrap();
        assert_eq!(
            settings,
            MazeSettings {
                rows: 3,
                columns: 8,
                seed: Some(12),
                entrance_column: Some(2),
                exit_column: Some(7),
            }
        );
    }

    #[test]
    fn bad_flags() {
        assert_eq!(
            MazeSettings::from_args(args(&["--rows"]))
                .unwrap_err()
                .to_string(),
            "--rows expects a value"
        );
        assert_eq!(
            MazeSettings::from_args(args(&["--rows", "-2"]))
                .unwrap_err()
                .to_string(),
            "Invalid value \"-2\" for --rows"
        );
        assert!(MazeSettings::from_args(args(&["--size", "2"])).is_err());
    }

    #[test]
    fn seeded_generation_repeats() {
        let settings = MazeSettings {
            seed: Some(5),
            entrance_column: Some(4),
            ..Default::default()
        };
        let grid = settings.generate().unwrap();
        assert_eq!(grid, settings.generate().unwrap());
        assert_eq!(find_start_column(&grid), Ok(4));
    }

    #[test]
    fn zero_rows_rejected() {
        let settings = MazeSettings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.generate(),
            Err(MazeError::InvalidDimension { .. })
        ));
    }
}
