//! Start-up configuration read from `DOTS_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::types::{
    BoardSize, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FPS, MAX_CELL_HEIGHT, MAX_CELL_WIDTH,
    MIN_CELL_HEIGHT, MIN_CELL_WIDTH,
};

const DEFAULT_CELL_WIDTH: u16 = 6;
const DEFAULT_CELL_HEIGHT: u16 = 3;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) is text.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// No file, no subscriber.
    pub path: Option<PathBuf>,
    pub format: LogFormat,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: LogFormat::Text,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board: BoardSize,
    pub cell_width: u16,
    pub cell_height: u16,
    pub fps: u32,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardSize::default(),
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            fps: FPS,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup.
    ///
    /// Unparsable numbers fall back to their defaults, and cell sizes are
    /// clamped to the range the view can lay out. A board size outside the
    /// supported range is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let width = number(&lookup, "DOTS_BOARD_WIDTH").unwrap_or(DEFAULT_BOARD_WIDTH);
        let height = number(&lookup, "DOTS_BOARD_HEIGHT").unwrap_or(DEFAULT_BOARD_HEIGHT);
        let board = BoardSize::new(width, height)
            .context("invalid DOTS_BOARD_WIDTH/DOTS_BOARD_HEIGHT")?;

        let fps = number::<u32>(&lookup, "DOTS_FPS")
            .filter(|&n| n > 0)
            .unwrap_or(FPS);

        let path = lookup("DOTS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let format = lookup("DOTS_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        let level = lookup("DOTS_LOG_LEVEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            board,
            cell_width: number(&lookup, "DOTS_CELL_WIDTH")
                .unwrap_or(DEFAULT_CELL_WIDTH)
                .clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH),
            cell_height: number(&lookup, "DOTS_CELL_HEIGHT")
                .unwrap_or(DEFAULT_CELL_HEIGHT)
                .clamp(MIN_CELL_HEIGHT, MAX_CELL_HEIGHT),
            fps,
            log: LogConfig {
                path,
                format,
                level,
            },
        })
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }
}

fn number<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
