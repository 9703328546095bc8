mod dump;
pub(crate) mod materials;
mod screenshot;
mod words;

pub use dump::{
    layout_dump_system, layout_records, write_layout_dump, CubeRecord, LayoutDumpError,
    LayoutDumpPath, WordRecord,
};
pub use screenshot::{screenshot_plugin, ScreenshotMode};
pub use words::{
    setup_scene, CubeOutline, GlyphLetter, LetterCube, LightSettings, SceneSettings, WordRow,
    WordSpec,
};
