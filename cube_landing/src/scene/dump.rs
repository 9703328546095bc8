//! Writes the computed cube layout to a JSON file for inspection.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Serialize;

use crate::glyph::word_layout;
use crate::scene::{SceneSettings, WordSpec};

#[derive(Debug, thiserror::Error)]
pub enum LayoutDumpError {
    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write layout to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct WordRecord {
    pub text: String,
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub cubes: Vec<CubeRecord>,
}

/// One cube in its word's local frame.
#[derive(Debug, Serialize)]
pub struct CubeRecord {
    pub letter: char,
    pub row: usize,
    pub col: usize,
    pub position: [f32; 3],
}

pub fn layout_records(words: &[WordSpec]) -> Vec<WordRecord> {
    words
        .iter()
        .map(|word| WordRecord {
            text: word.text.clone(),
            position: word.position.to_array(),
            rotation: word.rotation.to_array(),
            cubes: word_layout(&word.text, Vec3::ZERO)
                .into_iter()
                .map(|cube| CubeRecord {
                    letter: cube.letter,
                    row: cube.row,
                    col: cube.col,
                    position: cube.position.to_array(),
                })
                .collect(),
        })
        .collect()
}

/// Serialize every word's cubes to `path` as pretty JSON.
pub fn write_layout_dump(path: &Path, words: &[WordSpec]) -> Result<usize, LayoutDumpError> {
    let records = layout_records(words);
    let json = serde_json::to_string_pretty(&records)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LayoutDumpError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| LayoutDumpError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records.iter().map(|r| r.cubes.len()).sum())
}

/// Target file for the startup layout dump.
#[derive(Resource, Clone, Debug)]
pub struct LayoutDumpPath(pub PathBuf);

pub fn layout_dump_system(path: Res<LayoutDumpPath>, settings: Res<SceneSettings>) {
    match write_layout_dump(&path.0, &settings.words) {
        Ok(count) => info!("wrote {count} cubes to {}", path.0.display()),
        Err(err) => error!("layout dump failed: {err}"),
    }
}
