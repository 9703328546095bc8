mod shell;

pub use shell::{shell_plugin, SceneReadiness, ShellContent, SocialLink};
